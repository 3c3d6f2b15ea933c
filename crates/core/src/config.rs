/// Rules constants shared across the engine.
///
/// These mirror the tabletop rules the engine implements; they are compile
/// time constants rather than runtime configuration because changing them
/// changes the game, not the deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig;

impl EngineConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum narrative fragments a single evaluation can emit.
    pub const MAX_NARRATIVE_LINES: usize = 4;

    // ===== rules constants =====
    /// Sides on the die used for checks and saving throws.
    pub const D20_SIDES: u32 = 20;
    /// Base DC of the stabilisation check; current hp is subtracted from it,
    /// so a creature at -3 hp faces DC 13.
    pub const STABILISE_BASE_DC: i32 = 10;
    /// A creature at or below a third of maximum hit points is heavily
    /// wounded; at or below two thirds, moderately wounded. Widened so the
    /// band arithmetic cannot overflow `i32` at extreme hit-point totals.
    pub const WOUND_BAND_DIVISOR: i64 = 3;
}

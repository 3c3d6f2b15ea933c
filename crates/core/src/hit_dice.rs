//! Hit-dice expressions for setting hit points.
//!
//! Creatures carry a hit-dice formula like `3d8+6`; the set-hitpoints
//! command turns it into a number by policy (`low`, `average`, `high`,
//! `max`) or by actually rolling.

use core::str::FromStr;

use crate::dice::DiceOracle;
use crate::error::{EngineError, ErrorSeverity};

/// How to turn a hit-dice formula into a hit-point total without rolling.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HitPointPolicy {
    /// Every die at its minimum.
    Low,
    /// Expected value, rounded down.
    #[default]
    Average,
    /// Midway between average and maximum, rounded up.
    High,
    /// Every die at its maximum.
    Max,
}

/// A hit-dice formula: `<count>d<sides>[+|-<bonus>]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitDice {
    pub count: u32,
    pub sides: u32,
    pub bonus: i32,
}

impl HitDice {
    pub const fn new(count: u32, sides: u32, bonus: i32) -> Self {
        Self {
            count,
            sides,
            bonus,
        }
    }

    /// Every die at 1.
    ///
    /// Totals are computed wide and clamped to `i32`, so a formula like
    /// `400000000d20` yields `i32::MAX` rather than wrapping.
    pub const fn minimum(&self) -> i32 {
        clamped(self.count as i64 + self.bonus as i64)
    }

    /// Expected value, rounded down.
    pub const fn average(&self) -> i32 {
        clamped((self.count as i64).saturating_mul(self.sides as i64 + 1) / 2 + self.bonus as i64)
    }

    /// Midway between average and maximum, rounded up.
    pub const fn high(&self) -> i32 {
        let average = self.average() as i64;
        let maximum = self.maximum() as i64;
        clamped(average + (maximum - average + 1) / 2)
    }

    /// Every die at its maximum.
    pub const fn maximum(&self) -> i32 {
        clamped((self.count as i64).saturating_mul(self.sides as i64) + self.bonus as i64)
    }

    /// The total for a policy.
    pub const fn points(&self, policy: HitPointPolicy) -> i32 {
        match policy {
            HitPointPolicy::Low => self.minimum(),
            HitPointPolicy::Average => self.average(),
            HitPointPolicy::High => self.high(),
            HitPointPolicy::Max => self.maximum(),
        }
    }

    /// Rolls the formula for real, one die per context so the dice are
    /// independent.
    pub fn roll(&self, dice: &(impl DiceOracle + ?Sized), seed: u64) -> i32 {
        let mut total = self.bonus as i64;
        for die in 0..self.count {
            let die_seed = crate::dice::compute_seed(seed, die as u64, 0, die);
            total = total.saturating_add(dice.roll_die(die_seed, self.sides) as i64);
        }
        clamped(total)
    }
}

const fn clamped(total: i64) -> i32 {
    if total > i32::MAX as i64 {
        i32::MAX
    } else if total < i32::MIN as i64 {
        i32::MIN
    } else {
        total as i32
    }
}

impl FromStr for HitDice {
    type Err = HitDiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || HitDiceParseError::Malformed {
            input: s.to_owned(),
        };

        let trimmed = s.trim();
        let (count_part, rest) = trimmed
            .split_once(['d', 'D'])
            .ok_or_else(malformed)?;

        let (sides_part, bonus) = if let Some((sides, bonus)) = rest.split_once('+') {
            (sides, bonus.trim().parse::<i32>().map_err(|_| malformed())?)
        } else if let Some((sides, penalty)) = rest.split_once('-') {
            (
                sides,
                -penalty.trim().parse::<i32>().map_err(|_| malformed())?,
            )
        } else {
            (rest, 0)
        };

        let count = count_part.trim().parse::<u32>().map_err(|_| malformed())?;
        let sides = sides_part.trim().parse::<u32>().map_err(|_| malformed())?;
        if count == 0 || sides == 0 {
            return Err(HitDiceParseError::ZeroDice {
                input: trimmed.to_owned(),
            });
        }

        Ok(Self::new(count, sides, bonus))
    }
}

/// Errors parsing a hit-dice formula.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitDiceParseError {
    /// Not of the form `<count>d<sides>[+|-<bonus>]`.
    #[error("malformed hit-dice expression '{input}'")]
    Malformed { input: String },

    /// Zero dice or zero-sided dice.
    #[error("hit-dice expression '{input}' must roll at least one die with at least one side")]
    ZeroDice { input: String },
}

impl EngineError for HitDiceParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "malformed_hit_dice",
            Self::ZeroDice { .. } => "zero_hit_dice",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::PcgDice;

    #[test]
    fn parses_the_usual_forms() {
        assert_eq!("3d8+6".parse::<HitDice>().unwrap(), HitDice::new(3, 8, 6));
        assert_eq!("1d10".parse::<HitDice>().unwrap(), HitDice::new(1, 10, 0));
        assert_eq!("2d6-1".parse::<HitDice>().unwrap(), HitDice::new(2, 6, -1));
        assert_eq!("4D12+3".parse::<HitDice>().unwrap(), HitDice::new(4, 12, 3));
    }

    #[test]
    fn rejects_nonsense() {
        assert!("d8".parse::<HitDice>().is_err());
        assert!("3d".parse::<HitDice>().is_err());
        assert!("eight".parse::<HitDice>().is_err());
        assert!(matches!(
            "0d8".parse::<HitDice>(),
            Err(HitDiceParseError::ZeroDice { .. })
        ));
    }

    #[test]
    fn policies_span_the_formula() {
        let hd = HitDice::new(3, 8, 6);
        assert_eq!(hd.points(HitPointPolicy::Low), 9);
        assert_eq!(hd.points(HitPointPolicy::Average), 19); // 13.5 floored + 6
        assert_eq!(hd.points(HitPointPolicy::Max), 30);
        assert_eq!(hd.points(HitPointPolicy::High), 25); // midway 19..30, rounded up
        assert!(hd.minimum() <= hd.average());
        assert!(hd.average() <= hd.high());
        assert!(hd.high() <= hd.maximum());
    }

    #[test]
    fn extreme_formulas_clamp_instead_of_wrapping() {
        let hd: HitDice = "400000000d20".parse().unwrap();
        assert_eq!(hd.points(HitPointPolicy::Low), 400_000_000);
        assert_eq!(hd.points(HitPointPolicy::Average), i32::MAX);
        assert_eq!(hd.points(HitPointPolicy::High), i32::MAX);
        assert_eq!(hd.points(HitPointPolicy::Max), i32::MAX);

        let hd = HitDice::new(u32::MAX, u32::MAX, i32::MAX);
        assert_eq!(hd.points(HitPointPolicy::Max), i32::MAX);
        assert!(hd.points(HitPointPolicy::Low) <= hd.points(HitPointPolicy::Average));
    }

    #[test]
    fn rolls_stay_within_bounds() {
        let hd = HitDice::new(4, 6, 2);
        let dice = PcgDice;
        for seed in 0..200 {
            let rolled = hd.roll(&dice, seed);
            assert!(rolled >= hd.minimum() && rolled <= hd.maximum());
        }
        // Deterministic for a given seed.
        assert_eq!(hd.roll(&dice, 7), hd.roll(&dice, 7));
    }
}

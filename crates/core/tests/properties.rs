//! Property tests over randomly generated vitals.

use proptest::prelude::*;

use deathwatch_core::{
    CreatureCategory, CreatureMeta, D20Roll, Evaluation, MarkerSet, SaveKind, SaveRequest,
    VitalsSnapshot, evaluate, resolve_save,
};

fn any_category() -> impl Strategy<Value = CreatureCategory> {
    prop_oneof![
        Just(CreatureCategory::Living),
        Just(CreatureCategory::Undead),
        Just(CreatureCategory::Construct),
        Just(CreatureCategory::Inevitable),
        Just(CreatureCategory::Swarm),
    ]
}

fn any_vitals() -> impl Strategy<Value = VitalsSnapshot> {
    (-60i32..=60, 1i32..=50, 0i32..=80, any::<bool>())
        .prop_map(|(hp, hp_max, nonlethal, stable)| {
            VitalsSnapshot::new(hp, hp_max, nonlethal, stable)
        })
}

proptest! {
    /// Evaluation always produces exactly one canonical state, and its
    /// marker set never carries more than one wound marker.
    #[test]
    fn exactly_one_state_and_marker(
        prev in proptest::option::of(any_vitals()),
        current in any_vitals(),
        con in -5i32..=10,
        category in any_category(),
    ) {
        let meta = CreatureMeta::new(con, category);
        if let Evaluation::Updated(result) =
            evaluate(prev.as_ref(), &current, Some(&meta))
        {
            prop_assert_eq!(result.markers, result.state.markers());
            prop_assert!(result.markers.bits().count_ones() <= 1);
            prop_assert!(MarkerSet::WOUND_FAMILY.contains(result.markers));
        }
    }

    /// Non-living creatures end every evaluation with zero nonlethal and
    /// never-negative hp.
    #[test]
    fn non_living_normalize_nonlethal_away(
        prev in proptest::option::of(any_vitals()),
        current in any_vitals(),
        category in any_category(),
    ) {
        prop_assume!(!category.is_living());
        let meta = CreatureMeta::new(0, category);
        if let Evaluation::Updated(result) =
            evaluate(prev.as_ref(), &current, Some(&meta))
        {
            prop_assert_eq!(result.vitals.nonlethal, 0);
            prop_assert!(result.vitals.hp >= 0);
        }
    }

    /// Living normalization keeps nonlethal within the maximum.
    #[test]
    fn nonlethal_never_exceeds_max_after_evaluation(
        current in any_vitals(),
        con in -5i32..=10,
    ) {
        let meta = CreatureMeta::living(con);
        if let Evaluation::Updated(result) = evaluate(None, &current, Some(&meta)) {
            prop_assert!(result.vitals.nonlethal <= result.vitals.hp_max);
            // Lethal plus nonlethal damage is conserved by the conversion.
            prop_assert_eq!(
                result.vitals.hp - result.vitals.nonlethal,
                current.hp - current.nonlethal
            );
        }
    }

    /// Evaluating a snapshot against itself is always a no-op.
    #[test]
    fn identical_snapshots_are_a_no_op(
        snapshot in any_vitals(),
        con in -5i32..=10,
        category in any_category(),
    ) {
        let meta = CreatureMeta::new(con, category);
        let evaluation = evaluate(Some(&snapshot), &snapshot, Some(&meta));
        prop_assert_eq!(evaluation, Evaluation::Unchanged);
    }

    /// A second evaluation of the normalized vitals reaches the same state
    /// with nothing further to say.
    #[test]
    fn evaluation_is_idempotent_after_normalization(
        current in any_vitals(),
        con in -5i32..=10,
        category in any_category(),
    ) {
        let meta = CreatureMeta::new(con, category);
        if let Evaluation::Updated(result) = evaluate(None, &current, Some(&meta)) {
            let again = evaluate(Some(&result.vitals), &result.vitals, Some(&meta));
            prop_assert_eq!(again, Evaluation::Unchanged);
        }
    }

    /// Natural 1 fails and natural 20 succeeds no matter the numbers.
    #[test]
    fn natural_rolls_override_the_comparison(
        dc in -10i32..=50,
        bonus in -10i32..=30,
        kind in prop_oneof![
            Just(SaveKind::Fortitude),
            Just(SaveKind::Reflex),
            Just(SaveKind::Will),
        ],
    ) {
        let request = SaveRequest::new(kind, dc);
        prop_assert!(!resolve_save(&request, D20Roll::new(1, bonus)).success);
        prop_assert!(resolve_save(&request, D20Roll::new(20, bonus)).success);
    }

    /// Between the naturals, the comparison is exactly total >= dc.
    #[test]
    fn ordinary_rolls_compare_totals(
        dc in -10i32..=50,
        bonus in -10i32..=30,
        die in 2u32..=19,
    ) {
        let request = SaveRequest::new(SaveKind::Will, dc);
        let outcome = resolve_save(&request, D20Roll::new(die, bonus));
        prop_assert_eq!(outcome.success, die as i32 + bonus >= dc);
    }
}

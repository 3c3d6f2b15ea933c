//! End-to-end scenarios for the health state machine, written as a table
//! runs at it: capture vitals, apply a change, evaluate, check the state
//! and the narration.

use deathwatch_core::{
    CreatureCategory, CreatureMeta, DiceOracle, Evaluation, HealthState, Narrative,
    StabiliseVerdict, VitalsSnapshot, evaluate, stabilise,
};

fn damaged(prev: &VitalsSnapshot, damage: i32) -> VitalsSnapshot {
    VitalsSnapshot::new(prev.hp - damage, prev.hp_max, prev.nonlethal, prev.stable)
}

fn nonlethal_hit(prev: &VitalsSnapshot, damage: i32) -> VitalsSnapshot {
    VitalsSnapshot::new(prev.hp, prev.hp_max, prev.nonlethal + damage, prev.stable)
}

fn healed(prev: &VitalsSnapshot, amount: i32) -> VitalsSnapshot {
    let hp = (prev.hp + amount).min(prev.hp_max);
    let nonlethal = (prev.nonlethal - amount).max(0);
    VitalsSnapshot::new(hp, prev.hp_max, nonlethal, prev.stable)
}

fn expect_updated(evaluation: Evaluation) -> deathwatch_core::StatusResult {
    match evaluation {
        Evaluation::Updated(result) => result,
        other => panic!("expected an updated result, got {other:?}"),
    }
}

#[test]
fn massive_damage_past_the_death_threshold_kills_outright() {
    // hp 20/20, Con modifier 2: 25 damage lands at -5, at or below -2.
    let meta = CreatureMeta::living(2);
    let prev = VitalsSnapshot::full(20);
    let current = damaged(&prev, 25);

    let result = expect_updated(evaluate(Some(&prev), &current, Some(&meta)));
    assert_eq!(result.state, HealthState::Dead);
    let lines: Vec<_> = result.narrative.iter().copied().collect();
    assert_eq!(lines, vec![Narrative::Dead]);
}

#[test]
fn crossing_into_the_moderate_band_narrates_once() {
    // 8 damage on 20 hp: 12 effective, at or below two thirds (13.33).
    let meta = CreatureMeta::living(2);
    let prev = VitalsSnapshot::full(20);
    let current = damaged(&prev, 8);

    let result = expect_updated(evaluate(Some(&prev), &current, Some(&meta)));
    assert_eq!(result.state, HealthState::ModeratelyWounded);
    let lines: Vec<_> = result.narrative.iter().copied().collect();
    assert_eq!(lines, vec![Narrative::ModeratelyWounded]);

    // One more point of damage stays inside the band: no new narration.
    let next = damaged(&current, 1);
    let result = expect_updated(evaluate(Some(&current), &next, Some(&meta)));
    assert_eq!(result.state, HealthState::ModeratelyWounded);
    assert!(result.narrative.is_empty());
}

#[test]
fn undead_convert_nonlethal_to_lethal() {
    // 10 nonlethal on a 15-hp undead becomes 10 real damage: 5 hp left,
    // exactly a third of maximum, heavily wounded.
    let meta = CreatureMeta::new(0, CreatureCategory::Undead);
    let prev = VitalsSnapshot::full(15);
    let current = nonlethal_hit(&prev, 10);

    let result = expect_updated(evaluate(Some(&prev), &current, Some(&meta)));
    assert_eq!(result.vitals.hp, 5);
    assert_eq!(result.vitals.nonlethal, 0);
    assert_eq!(result.state, HealthState::HeavilyWounded);
}

#[test]
fn non_living_have_no_dying_state() {
    let meta = CreatureMeta::new(0, CreatureCategory::Construct);
    let prev = VitalsSnapshot::full(10);
    let current = damaged(&prev, 14);

    let result = expect_updated(evaluate(Some(&prev), &current, Some(&meta)));
    assert_eq!(result.vitals.hp, 0);
    assert_eq!(result.state, HealthState::Dead);
}

#[test]
fn swarms_are_destroyed_rather_than_killed() {
    let meta = CreatureMeta::new(0, CreatureCategory::Swarm);
    let prev = VitalsSnapshot::full(12);
    let current = damaged(&prev, 12);

    let result = expect_updated(evaluate(Some(&prev), &current, Some(&meta)));
    assert_eq!(result.state, HealthState::Destroyed);
    let lines: Vec<_> = result.narrative.iter().copied().collect();
    assert_eq!(lines, vec![Narrative::Destroyed]);
}

#[test]
fn nonlethal_alone_staggers_then_knocks_out() {
    let meta = CreatureMeta::living(1);
    let prev = VitalsSnapshot::full(10);

    // Nonlethal equal to hp: effective 0, staggered (not disabled: hp > 0).
    let staggered = nonlethal_hit(&prev, 10);
    let result = expect_updated(evaluate(Some(&prev), &staggered, Some(&meta)));
    assert_eq!(result.state, HealthState::Staggered);
    let lines: Vec<_> = result.narrative.iter().copied().collect();
    assert_eq!(lines, vec![Narrative::Staggered]);

    // One more point of nonlethal: effective -1 with hp still 10: out cold.
    let out = nonlethal_hit(&staggered, 1);
    let result = expect_updated(evaluate(Some(&staggered), &out, Some(&meta)));
    assert_eq!(result.state, HealthState::Unconscious);
    let lines: Vec<_> = result.narrative.iter().copied().collect();
    assert_eq!(lines, vec![Narrative::Unconscious]);
}

#[test]
fn lethal_damage_to_exactly_zero_reads_as_disabled() {
    let meta = CreatureMeta::living(1);
    let prev = VitalsSnapshot::full(10);
    let current = damaged(&prev, 10);

    let result = expect_updated(evaluate(Some(&prev), &current, Some(&meta)));
    assert_eq!(result.state, HealthState::Staggered);
    let lines: Vec<_> = result.narrative.iter().copied().collect();
    assert_eq!(lines, vec![Narrative::Disabled]);
}

#[test]
fn dying_narration_tracks_the_rising_dc() {
    let meta = CreatureMeta::living(3);
    let prev = VitalsSnapshot::full(10);

    let current = damaged(&prev, 11); // -1 hp
    let result = expect_updated(evaluate(Some(&prev), &current, Some(&meta)));
    assert_eq!(result.state, HealthState::DyingUnstable);
    let lines: Vec<_> = result.narrative.iter().copied().collect();
    assert_eq!(lines, vec![Narrative::Dying { dc: 11 }]);

    let worse = damaged(&current, 1); // -2 hp
    let result = expect_updated(evaluate(Some(&current), &worse, Some(&meta)));
    let lines: Vec<_> = result.narrative.iter().copied().collect();
    assert_eq!(lines, vec![Narrative::Dying { dc: 12 }]);
}

#[test]
fn healing_narrates_each_upward_threshold() {
    let meta = CreatureMeta::living(2);
    let max = 30;

    // Unconscious to conscious.
    let prev = VitalsSnapshot::new(-1, max, 0, false);
    let current = healed(&prev, 4);
    let result = expect_updated(evaluate(Some(&prev), &current, Some(&meta)));
    let lines: Vec<_> = result.narrative.iter().copied().collect();
    assert_eq!(lines, vec![Narrative::RegainsConsciousness]);

    // Heavy band up into moderate.
    let prev = VitalsSnapshot::new(8, max, 0, false);
    let current = healed(&prev, 4); // 12 of 30: above a third
    let result = expect_updated(evaluate(Some(&prev), &current, Some(&meta)));
    let lines: Vec<_> = result.narrative.iter().copied().collect();
    assert_eq!(lines, vec![Narrative::HealedToModerate]);

    // Moderate up into light.
    let prev = VitalsSnapshot::new(18, max, 0, false);
    let current = healed(&prev, 5); // 23 of 30: above two thirds
    let result = expect_updated(evaluate(Some(&prev), &current, Some(&meta)));
    let lines: Vec<_> = result.narrative.iter().copied().collect();
    assert_eq!(lines, vec![Narrative::HealedToLight]);

    // All the way up.
    let prev = VitalsSnapshot::new(23, max, 0, false);
    let current = healed(&prev, 10);
    let result = expect_updated(evaluate(Some(&prev), &current, Some(&meta)));
    let lines: Vec<_> = result.narrative.iter().copied().collect();
    assert_eq!(lines, vec![Narrative::HealedToFull]);

    // Healing within a band says nothing.
    let prev = VitalsSnapshot::new(14, max, 0, false);
    let current = healed(&prev, 2);
    let result = expect_updated(evaluate(Some(&prev), &current, Some(&meta)));
    assert!(result.narrative.is_empty());
}

#[test]
fn stabilise_then_take_damage_starts_the_bleeding_again() {
    let meta = CreatureMeta::living(2);
    let dying = VitalsSnapshot::new(-1, 20, 0, false);

    // Force a success with a die that cannot miss DC 11.
    struct Loaded;
    impl DiceOracle for Loaded {
        fn next_u32(&self, _seed: u64) -> u32 {
            19 // a natural 20
        }
    }
    let outcome = stabilise(&dying, &meta, &Loaded, 0);
    assert!(matches!(outcome.verdict, StabiliseVerdict::Stabilised { .. }));

    // The stabilised creature is hit again: unstable once more.
    let prev = outcome.vitals;
    let current = damaged(&prev, 1);
    let result = expect_updated(evaluate(Some(&prev), &current, Some(&meta)));
    assert_eq!(result.state, HealthState::DyingUnstable);
    assert!(!result.vitals.stable);
}

#[test]
fn markers_follow_the_state() {
    use deathwatch_core::MarkerSet;

    let meta = CreatureMeta::living(2);
    let prev = VitalsSnapshot::full(20);

    let current = damaged(&prev, 14); // 6 of 20: heavy band
    let result = expect_updated(evaluate(Some(&prev), &current, Some(&meta)));
    assert_eq!(result.markers, MarkerSet::RED);

    let corpse = damaged(&prev, 30);
    let result = expect_updated(evaluate(Some(&prev), &corpse, Some(&meta)));
    assert_eq!(result.markers, MarkerSet::DEAD);
}

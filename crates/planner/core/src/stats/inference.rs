//! Boon/bane inference from observed stats.

use crate::env::PlannerEnv;
use crate::loadout::SkillSet;

use super::breakdown::{breakdown_with, compute_stats};
use super::core::{Stat, Stats};
use super::modifiers::{BoonBane, Modifiers};

/// Every boon/bane selection a unit can have, neutral first.
fn candidates() -> impl Iterator<Item = BoonBane> {
    let pairs = Stat::ALL.into_iter().flat_map(|boon| {
        Stat::ALL
            .into_iter()
            .filter(move |&bane| bane != boon)
            .map(move |bane| BoonBane::new(Some(boon), Some(bane)))
    });
    core::iter::once(BoonBane::NEUTRAL).chain(pairs)
}

/// Infers the boon/bane that produced `observed`.
///
/// The `boon_bane` field of `modifiers` is ignored. A selection that
/// reproduces `observed` exactly wins. Otherwise every non-boon/bane term
/// (merge without the neutral bonus) is subtracted and the remaining
/// per-stat residue is sorted: a spread above 1 names the top stat as boon
/// and the bottom stat as bane.
pub fn calc_boon_bane(
    env: &PlannerEnv<'_>,
    unit: &str,
    skills: &SkillSet,
    modifiers: &Modifiers,
    observed: Stats,
) -> BoonBane {
    if let Some(exact) = candidates().find(|&candidate| {
        compute_stats(env, unit, skills, &modifiers.with_boon_bane(candidate)) == observed
    }) {
        return exact;
    }

    let neutral = modifiers.with_boon_bane(BoonBane::NEUTRAL);
    let expected = breakdown_with(env, unit, skills, &neutral, false);
    let residue = observed - (expected.baseline + expected.delta());
    infer_from_residue(residue)
}

fn infer_from_residue(residue: Stats) -> BoonBane {
    let mut ranked = Stat::ALL.map(|stat| (stat, residue.get(stat)));
    ranked.sort_by_key(|&(_, value)| core::cmp::Reverse(value));

    let (top, top_value) = ranked[0];
    let (bottom, bottom_value) = ranked[4];
    if top_value - bottom_value <= 1 {
        return BoonBane::NEUTRAL;
    }
    BoonBane::new(
        Some(top).filter(|_| top_value > 0),
        Some(bottom).filter(|_| bottom_value < 0),
    )
}

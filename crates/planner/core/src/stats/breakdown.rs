//! Stat aggregator.
//!
//! ```text
//! final = clamp0(baseline + boon/bane + leveling + merge
//!                + weapon + passive A + seal + support)
//! ```
//!
//! Every contribution is kept separately in [`StatBreakdown`] so callers can
//! display or subtract individual terms.

use crate::effect::{EffectDelta, named_skill_delta};
use crate::env::{PlannerEnv, SkillCategory, UnitDefinition};
use crate::loadout::SkillSet;

use super::core::Stats;
use super::growth::{BaselineSource, leveling_delta, level_one_stats};
use super::merge::merge_bonus;
use super::modifiers::{Level, Modifiers, Rarity};
use super::weapon::weapon_delta;

/// Generic level-40 boon/bane amount for units without growth rates.
const FLAT_BOON_BANE: i32 = 3;

/// Growth-rate nudge of a boon/bane stat, in percent.
const GROWTH_NUDGE: i32 = 5;

/// Every contribution to a unit's final stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBreakdown {
    /// Tabulated stats before leveling (level-1 or explicit level-40).
    pub baseline: Stats,
    pub boon_bane: Stats,
    /// Growth-based level 1 to 40 gain, boon/bane nudges included.
    pub leveling: Stats,
    pub merge: Stats,
    pub weapon: Stats,
    pub passive_a: Stats,
    pub seal: Stats,
    pub support: Stats,
}

impl StatBreakdown {
    /// Sum of every contribution except the baseline.
    pub fn delta(&self) -> Stats {
        self.boon_bane
            + self.leveling
            + self.merge
            + self.weapon
            + self.passive_a
            + self.seal
            + self.support
    }

    /// Final stats, each clamped at zero.
    pub fn total(&self) -> Stats {
        (self.baseline + self.delta()).clamp_non_negative()
    }
}

/// Final stats of a unit under a loadout and modifiers.
pub fn compute_stats(
    env: &PlannerEnv<'_>,
    unit: &str,
    skills: &SkillSet,
    modifiers: &Modifiers,
) -> Stats {
    stat_breakdown(env, unit, skills, modifiers).total()
}

/// Every contribution to [`compute_stats`].
pub fn stat_breakdown(
    env: &PlannerEnv<'_>,
    unit: &str,
    skills: &SkillSet,
    modifiers: &Modifiers,
) -> StatBreakdown {
    breakdown_with(env, unit, skills, modifiers, true)
}

/// Neutral rarity/level baseline: what [`compute_stats`] returns with no
/// skills, neutral boon/bane, no merges and no support.
///
/// `None` when the unit or its stat tables are missing.
pub fn baseline_stats(
    env: &PlannerEnv<'_>,
    unit: &str,
    rarity: Rarity,
    level: Level,
) -> Option<Stats> {
    let unit = env.unit(unit)?;
    match BaselineSource::resolve(unit, rarity, level, env.config()) {
        BaselineSource::Missing => None,
        source => Some(source.neutral_stats(rarity)),
    }
}

/// Aggregation core. `neutral_bonus` enables the merge bonus for an
/// explicitly neutral boon/bane; inference turns it off.
pub(crate) fn breakdown_with(
    env: &PlannerEnv<'_>,
    unit_name: &str,
    skills: &SkillSet,
    modifiers: &Modifiers,
    neutral_bonus: bool,
) -> StatBreakdown {
    let mut breakdown = StatBreakdown::default();

    match env.unit(unit_name) {
        Some(unit) => apply_unit_terms(env, unit, modifiers, neutral_bonus, &mut breakdown),
        None => {
            tracing::warn!(unit = unit_name, "unknown unit; stats come from skills alone");
        }
    }

    if let Some(weapon) = skills.weapon.as_deref() {
        breakdown.weapon = weapon_delta(env, unit_name, weapon, skills.refine);
    }
    if let Some(passive) = skills.passive_a.as_deref() {
        breakdown.passive_a = skill_delta(env, SkillCategory::PassiveA, passive);
    }
    if let Some(seal) = skills.seal.as_deref() {
        breakdown.seal = skill_delta(env, SkillCategory::Seal, seal);
    }
    breakdown.support = modifiers.support.bonus();

    tracing::debug!(unit = unit_name, total = ?breakdown.total(), "computed stats");
    breakdown
}

/// Baseline, boon/bane, leveling and merge terms.
fn apply_unit_terms(
    env: &PlannerEnv<'_>,
    unit: &UnitDefinition,
    modifiers: &Modifiers,
    neutral_bonus: bool,
    breakdown: &mut StatBreakdown,
) {
    let config = env.config();
    let rarity = modifiers.rarity;
    let source = BaselineSource::resolve(unit, rarity, modifiers.level, config);
    breakdown.baseline = source.table_stats();

    // a merged unit loses its bane; only the merge ranking still sees it
    let mut growth_nudge = Stats::ZERO;
    for (stat, sign) in modifiers.boon_bane.signed() {
        if sign < 0 && modifiers.merge > 0 {
            continue;
        }
        let amount = match modifiers.level {
            Level::One => 1,
            Level::Forty if source.levels_with_growths() => {
                growth_nudge.add_stat(stat, sign * GROWTH_NUDGE);
                1
            }
            Level::Forty => {
                let table = if sign > 0 {
                    &unit.boon_table
                } else {
                    &unit.bane_table
                };
                match rarity {
                    Rarity::Five => table.get(&stat).copied().unwrap_or(FLAT_BOON_BANE),
                    _ => FLAT_BOON_BANE,
                }
            }
        };
        breakdown.boon_bane.add_stat(stat, sign * amount);
    }

    if let BaselineSource::LevelOne {
        growths: Some(growths),
        ..
    } = source
    {
        breakdown.leveling = leveling_delta(growths + growth_nudge, rarity);
    }

    let neutral = neutral_bonus && modifiers.boon_bane.is_neutral();
    breakdown.merge = merge_bonus(
        level_one_stats(unit, rarity, config),
        modifiers.merge,
        modifiers.boon_bane.unit_delta(),
        neutral,
    );
}

/// Stat delta of a passive A or seal, logging why it is zero.
fn skill_delta(env: &PlannerEnv<'_>, category: SkillCategory, name: &str) -> Stats {
    let effect = env
        .skill(category, name)
        .map(|definition| definition.effect.as_str());
    let delta = named_skill_delta(name, effect);
    match delta {
        EffectDelta::MissingData => {
            tracing::error!(skill = name, %category, "missing skill data");
        }
        EffectDelta::NoClause => {
            tracing::debug!(skill = name, %category, "effect carries no stat clause");
        }
        _ => {}
    }
    delta.stats()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalcConfig;
    use crate::env::WeaponRefine;
    use crate::stats::{BoonBane, Stat, SupportRank, growth_value};
    use crate::testing::sample_data;

    fn five_forty() -> Modifiers {
        Modifiers::new(Rarity::Five, Level::Forty)
    }

    #[test]
    fn empty_build_equals_the_baseline() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);

        for unit in ["Chrom", "Abel", "Lilina", "Priscilla", "Ayra"] {
            for level in [Level::One, Level::Forty] {
                let modifiers = Modifiers::new(Rarity::Five, level);
                let stats = compute_stats(&env, unit, &SkillSet::new(), &modifiers);
                let baseline = baseline_stats(&env, unit, Rarity::Five, level).unwrap_or_default();
                assert_eq!(stats, baseline, "{unit} at level {level}");
            }
        }
    }

    #[test]
    fn level_forty_adds_growth_values() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);

        let stats = compute_stats(&env, "Chrom", &SkillSet::new(), &five_forty());
        // Chrom 5★ lv1 (19, 9, 5, 8, 4), growths (60, 55, 40, 50, 25)
        let expected = Stats::new(
            19 + growth_value(60, Rarity::Five),
            9 + growth_value(55, Rarity::Five),
            5 + growth_value(40, Rarity::Five),
            8 + growth_value(50, Rarity::Five),
            4 + growth_value(25, Rarity::Five),
        );
        assert_eq!(stats, expected);
    }

    #[test]
    fn boon_bane_at_level_one_is_one_point() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);

        let modifiers = Modifiers::new(Rarity::Five, Level::One)
            .with_boon_bane(BoonBane::new(Some(Stat::Atk), Some(Stat::Res)));
        let stats = compute_stats(&env, "Chrom", &SkillSet::new(), &modifiers);
        assert_eq!(stats, Stats::new(19, 10, 5, 8, 3));
    }

    #[test]
    fn boon_at_level_forty_nudges_growths() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);

        let modifiers = five_forty().with_boon_bane(BoonBane::new(Some(Stat::Spd), None));
        let breakdown = stat_breakdown(&env, "Chrom", &SkillSet::new(), &modifiers);
        assert_eq!(breakdown.boon_bane, Stats::single(Stat::Spd, 1));
        assert_eq!(breakdown.leveling.spd, growth_value(45, Rarity::Five));
    }

    #[test]
    fn units_without_growths_use_table_or_flat_amounts() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);

        // Ayra's table gives Spd 4; Atk falls back to 3
        let modifiers = five_forty().with_boon_bane(BoonBane::new(Some(Stat::Spd), Some(Stat::Atk)));
        let breakdown = stat_breakdown(&env, "Ayra", &SkillSet::new(), &modifiers);
        assert_eq!(breakdown.boon_bane, Stats::new(0, -3, 4, 0, 0));
        assert_eq!(breakdown.baseline, Stats::new(41, 33, 37, 24, 21));
        assert_eq!(breakdown.leveling, Stats::ZERO);
    }

    #[test]
    fn merge_ranks_use_level_one_stats() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);

        // Chrom lv1 (19, 9, 5, 8, 4): ranks HP, Atk, Def, Spd, Res
        let modifiers = Modifiers::new(Rarity::Five, Level::One)
            .with_boon_bane(BoonBane::new(Some(Stat::Def), Some(Stat::Spd)))
            .with_merge(1);
        let breakdown = stat_breakdown(&env, "Chrom", &SkillSet::new(), &modifiers);
        assert_eq!(breakdown.merge, Stats::new(1, 1, 0, 0, 0));
    }

    #[test]
    fn merging_cancels_the_bane() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);
        let boon_bane = BoonBane::new(Some(Stat::Atk), Some(Stat::Res));

        let level_one = Modifiers::new(Rarity::Five, Level::One)
            .with_boon_bane(boon_bane)
            .with_merge(1);
        let breakdown = stat_breakdown(&env, "Chrom", &SkillSet::new(), &level_one);
        assert_eq!(breakdown.boon_bane, Stats::single(Stat::Atk, 1));

        // Res keeps its unmodified growth at level 40
        let merged = five_forty().with_boon_bane(boon_bane).with_merge(1);
        let breakdown = stat_breakdown(&env, "Chrom", &SkillSet::new(), &merged);
        assert_eq!(breakdown.boon_bane, Stats::single(Stat::Atk, 1));
        assert_eq!(breakdown.leveling.res, growth_value(25, Rarity::Five));

        let unmerged = five_forty().with_boon_bane(boon_bane);
        let breakdown = stat_breakdown(&env, "Chrom", &SkillSet::new(), &unmerged);
        assert_eq!(breakdown.boon_bane, Stats::new(0, 1, 0, 0, -1));
        assert_eq!(breakdown.leveling.res, growth_value(20, Rarity::Five));
    }

    #[test]
    fn neutral_merged_unit_gets_the_extra_top_three_bonus() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);

        let modifiers = Modifiers::new(Rarity::Five, Level::One).with_merge(1);
        let breakdown = stat_breakdown(&env, "Chrom", &SkillSet::new(), &modifiers);
        // merge {HP, Atk} plus neutral {HP, Atk, Def}
        assert_eq!(breakdown.merge, Stats::new(2, 2, 0, 1, 0));
    }

    #[test]
    fn skills_and_support_add_up() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);

        let skills = SkillSet::new()
            .with(SkillCategory::Weapon, "Silver Sword")
            .with(SkillCategory::PassiveA, "HP +5")
            .with(SkillCategory::Seal, "Attack +1");
        let modifiers = Modifiers::new(Rarity::Five, Level::One).with_support(SupportRank::C);
        let breakdown = stat_breakdown(&env, "Chrom", &skills, &modifiers);

        assert_eq!(breakdown.weapon, Stats::single(Stat::Atk, 11));
        assert_eq!(breakdown.passive_a, Stats::single(Stat::Hp, 5));
        assert_eq!(breakdown.seal, Stats::single(Stat::Atk, 1));
        assert_eq!(breakdown.support, Stats::new(3, 0, 0, 0, 2));
        assert_eq!(breakdown.total(), Stats::new(19 + 8, 9 + 12, 5, 8, 4 + 2));
    }

    #[test]
    fn refine_flows_through_the_weapon_term() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);

        let skills = SkillSet::new()
            .with(SkillCategory::Weapon, "Falchion")
            .with_refine(WeaponRefine::Special);
        let breakdown = stat_breakdown(&env, "Chrom", &skills, &five_forty());
        assert_eq!(breakdown.weapon, Stats::new(3, 17, 2, 0, 0));
    }

    #[test]
    fn unknown_unit_is_synthesized_from_deltas_and_clamped() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);

        let skills = SkillSet::new().with(SkillCategory::PassiveA, "Life and Death 3");
        let stats = compute_stats(&env, "Nobody", &skills, &five_forty());
        assert_eq!(stats, Stats::new(0, 5, 5, 0, 0));
    }

    #[test]
    fn unparseable_passive_contributes_nothing() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);

        let skills = SkillSet::new().with(SkillCategory::PassiveA, "Death Blow 1");
        let breakdown = stat_breakdown(&env, "Chrom", &skills, &five_forty());
        assert_eq!(breakdown.passive_a, Stats::ZERO);

        let skills = SkillSet::new().with(SkillCategory::PassiveA, "Not A Skill");
        let breakdown = stat_breakdown(&env, "Chrom", &skills, &five_forty());
        assert_eq!(breakdown.passive_a, Stats::ZERO);
    }
}

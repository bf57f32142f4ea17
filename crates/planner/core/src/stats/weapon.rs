//! Weapon contribution: might, effect text and refines.

use crate::effect::extract_stat_delta;
use crate::env::{
    PlannerEnv, RefineClass, SkillCategory, SkillDefinition, WeaponData, WeaponRefine, WeaponType,
};

use super::core::{Stat, Stats};

/// Refine stats of a special refine on a melee weapon without its own table.
const DEFAULT_MELEE_SPECIAL: Stats = Stats::new(3, 0, 0, 0, 0);

/// Effect text of a weapon under a refine.
///
/// A shared `common` effect replaces the base text. Special refines append
/// the unit's variant effect (or the weapon's refine effect); staff refines
/// append the Wrathful/Dazzling text.
pub fn refined_effect(
    env: &PlannerEnv<'_>,
    weapon: &SkillDefinition,
    refine: WeaponRefine,
    unit: &str,
) -> String {
    let special = env.upgrades().special_refine(&weapon.name);
    let base = special
        .and_then(|special| special.common_effect.as_deref())
        .unwrap_or(&weapon.effect);

    let appended = match refine {
        WeaponRefine::Special => special.and_then(|special| {
            special
                .variant_for(unit)
                .map(|variant| variant.effect.as_str())
                .or(special.effect.as_deref())
        }),
        WeaponRefine::Wrathful | WeaponRefine::Dazzling if is_staff(weapon) => {
            env.upgrades().staff_refine_effect(refine)
        }
        _ => None,
    };

    match appended {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_owned(),
    }
}

/// Stat delta granted by the refine itself (not its effect text).
pub fn refine_stats(
    env: &PlannerEnv<'_>,
    weapon: &SkillDefinition,
    data: &WeaponData,
    refine: WeaponRefine,
    unit: &str,
) -> Stats {
    let mut stats = match refine {
        WeaponRefine::Special => {
            let special = env.upgrades().special_refine(&weapon.name);
            special
                .and_then(|special| special.variant_for(unit).and_then(|variant| variant.stats))
                .or_else(|| special.and_then(|special| special.stats))
                .unwrap_or(if data.weapon_type.is_melee() {
                    DEFAULT_MELEE_SPECIAL
                } else {
                    Stats::ZERO
                })
        }
        WeaponRefine::Attack
        | WeaponRefine::Speed
        | WeaponRefine::Defense
        | WeaponRefine::Resistance => refine
            .stat()
            .zip(refine_class(data.weapon_type))
            .and_then(|(stat, class)| env.upgrades().stat_refine(class, stat))
            .unwrap_or(Stats::ZERO),
        WeaponRefine::Wrathful | WeaponRefine::Dazzling => Stats::ZERO,
    };

    if let Some(flags) = &data.upgrade {
        stats.add_stat(Stat::Atk, flags.might_bonus);
    }
    stats
}

/// Table a weapon's stat refines come from. Staves have none.
fn refine_class(weapon_type: WeaponType) -> Option<RefineClass> {
    if weapon_type.is_melee() {
        Some(RefineClass::Melee)
    } else if weapon_type.uses_ranged_refines() {
        Some(RefineClass::Ranged)
    } else {
        None
    }
}

fn is_staff(weapon: &SkillDefinition) -> bool {
    weapon
        .weapon
        .as_ref()
        .is_some_and(|data| data.weapon_type == WeaponType::Staff)
}

/// Full weapon contribution: might, effect-text delta and refine delta.
///
/// Unknown weapons contribute nothing. A refine on a weapon that cannot be
/// refined is ignored.
pub fn weapon_delta(
    env: &PlannerEnv<'_>,
    unit: &str,
    weapon: &str,
    refine: Option<WeaponRefine>,
) -> Stats {
    let Some(definition) = env.skill(SkillCategory::Weapon, weapon) else {
        tracing::error!(weapon, "missing weapon data");
        return Stats::ZERO;
    };
    let Some(data) = &definition.weapon else {
        tracing::error!(weapon, "weapon entry has no weapon data");
        return Stats::ZERO;
    };

    let refine = refine.filter(|_| {
        let refinable = data.is_refinable();
        if !refinable {
            tracing::debug!(weapon, "ignoring refine on a weapon that cannot be refined");
        }
        refinable
    });

    let mut delta = Stats::single(Stat::Atk, data.might);
    let text = match refine {
        Some(refine) => refined_effect(env, definition, refine, unit),
        None => definition.effect.clone(),
    };
    match extract_stat_delta(&text) {
        Some(effect) => delta += effect,
        None => tracing::debug!(weapon, "weapon effect carries no stat clause"),
    }
    if let Some(refine) = refine {
        delta += refine_stats(env, definition, data, refine, unit);
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalcConfig;
    use crate::testing::sample_data;

    #[test]
    fn might_and_effect_text_both_count() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);
        // might 10, "Inflicts Spd-5."
        assert_eq!(
            weapon_delta(&env, "Abel", "Brave Lance+", None),
            Stats::new(0, 10, -5, 0, 0)
        );
    }

    #[test]
    fn stat_refine_uses_melee_table_and_might_flag() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);
        // might 16, melee Atk refine HP+5 Atk+2, Mt:1
        assert_eq!(
            weapon_delta(&env, "Chrom", "Falchion", Some(WeaponRefine::Attack)),
            Stats::new(5, 16 + 2 + 1, 0, 0, 0)
        );
    }

    #[test]
    fn special_refine_prefers_the_unit_variant() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);
        // might 16, Mt:1, Chrom variant stats HP+3 and effect "Grants Spd+2."
        assert_eq!(
            weapon_delta(&env, "Chrom", "Falchion", Some(WeaponRefine::Special)),
            Stats::new(3, 17, 2, 0, 0)
        );
    }

    #[test]
    fn special_refine_on_melee_defaults_to_three_hp() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);
        let weapon = data_weapon(&env, "Brave Lance+");
        let stats = refine_stats(
            &env,
            weapon,
            weapon.weapon.as_ref().expect("weapon data"),
            WeaponRefine::Special,
            "Abel",
        );
        assert_eq!(stats, Stats::new(3, 0, 0, 0, 0));
    }

    #[test]
    fn staff_refine_appends_staff_effect() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);
        let weapon = data_weapon(&env, "Gravity+");
        let text = refined_effect(&env, weapon, WeaponRefine::Wrathful, "Priscilla");
        assert!(text.ends_with("Damage from staff calculated like other weapons."));
    }

    #[test]
    fn refine_on_unrefinable_weapon_is_ignored() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);
        assert_eq!(
            weapon_delta(&env, "Chrom", "Silver Sword", Some(WeaponRefine::Attack)),
            weapon_delta(&env, "Chrom", "Silver Sword", None),
        );
    }

    #[test]
    fn unknown_weapon_is_zero() {
        let data = sample_data();
        let config = CalcConfig::default();
        let env = data.env(&config);
        assert_eq!(weapon_delta(&env, "Chrom", "Nope", None), Stats::ZERO);
    }

    fn data_weapon<'a>(env: &PlannerEnv<'a>, name: &str) -> &'a SkillDefinition {
        env.skill(SkillCategory::Weapon, name).expect("weapon")
    }
}

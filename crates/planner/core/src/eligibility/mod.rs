//! Inheritance eligibility: which skills a unit may equip.
//!
//! Every list produced here starts with the empty "none" option. Passive and
//! seal lists hold base names; [`passive_levels`] expands one back into its
//! levels.
mod restriction;

pub use restriction::{Clause, ColorFlags, Pattern, Restriction, WeaponFlags};

use std::collections::{BTreeMap, HashSet};

use crate::env::{
    Color, PlannerEnv, SkillCategory, SkillDefinition, UnitDefinition, WeaponType, base_name,
};
use crate::stats::Rarity;

/// Options per slot, each list led by `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PossibleSkills {
    pub weapons: Vec<String>,
    pub assists: Vec<String>,
    pub specials: Vec<String>,
    pub passives_a: Vec<String>,
    pub passives_b: Vec<String>,
    pub passives_c: Vec<String>,
    pub seals: Vec<String>,
}

impl PossibleSkills {
    pub fn get(&self, slot: SkillCategory) -> &[String] {
        match slot {
            SkillCategory::Weapon => &self.weapons,
            SkillCategory::Assist => &self.assists,
            SkillCategory::Special => &self.specials,
            SkillCategory::PassiveA => &self.passives_a,
            SkillCategory::PassiveB => &self.passives_b,
            SkillCategory::PassiveC => &self.passives_c,
            SkillCategory::Seal => &self.seals,
        }
    }

    /// Whether `skill` is offered in `slot`. Levelled slots compare base names.
    pub fn offers(&self, slot: SkillCategory, skill: &str) -> bool {
        let wanted = if slot.is_levelled() {
            base_name(skill)
        } else {
            skill
        };
        self.get(slot).iter().any(|option| option == wanted)
    }
}

/// The weapon a unit's signature weapon evolves into, if any.
pub fn evolve_target<'a>(env: &PlannerEnv<'a>, unit: &UnitDefinition) -> Option<&'a str> {
    let signature = unit.signature_weapon()?;
    env.upgrades()
        .evolutions()
        .iter()
        .find(|evolution| evolution.base == signature && evolution.applies_to(&unit.name))
        .map(|evolution| evolution.target.as_str())
}

/// Whether `unit` may inherit `skill`.
///
/// `limit_staff` hides skills from staff users unless their restriction
/// mentions `Staff`. Weapons also have to match their color list.
pub fn is_eligible(
    env: &PlannerEnv<'_>,
    unit: &UnitDefinition,
    skill: &SkillDefinition,
    limit_staff: bool,
) -> bool {
    let raw = skill.restriction.as_deref().unwrap_or_default();

    if let Some(data) = &skill.weapon
        && !data.colors.is_empty()
        && !data.colors.contains(&unit.color)
    {
        return false;
    }
    if limit_staff && unit.is_staff_user() && !raw.contains("Staff") {
        return false;
    }

    let type_clause: Option<&str> = skill.weapon.as_ref().map(|data| data.weapon_type.as_ref());
    let mut restriction = Restriction::parse(raw);
    if let Some(type_clause) = type_clause {
        restriction = restriction.with_leading(type_clause);
    }

    let exclusive = restriction
        .clauses()
        .any(|clause| matches!(clause, Clause::Exclusive))
        && (unit.owns(&skill.name) || evolve_target(env, unit) == Some(skill.name.as_str()));
    restriction.admits(unit, exclusive)
}

fn eligible_names<'a>(
    env: &PlannerEnv<'a>,
    unit: &UnitDefinition,
    category: SkillCategory,
    limit_staff: bool,
) -> impl Iterator<Item = &'a str> {
    env.skills()
        .catalog(category)
        .iter()
        .filter(move |skill| is_eligible(env, unit, skill, limit_staff))
        .map(|skill| skill.name.as_str())
}

/// Leads with `""` and keeps the first occurrence of each name.
fn option_list<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    std::iter::once("")
        .chain(names)
        .filter(|name| seen.insert(*name))
        .map(str::to_owned)
        .collect()
}

/// Every skill `unit` may equip, per slot.
pub fn possible_skills(env: &PlannerEnv<'_>, unit: &UnitDefinition) -> PossibleSkills {
    let mut weapons: Vec<&str> = eligible_names(env, unit, SkillCategory::Weapon, false).collect();
    weapons.sort_unstable();

    let levelled = |category: SkillCategory| {
        option_list(eligible_names(env, unit, category, category == SkillCategory::Seal).map(base_name))
    };

    let skills = PossibleSkills {
        weapons: option_list(weapons.into_iter()),
        assists: option_list(eligible_names(env, unit, SkillCategory::Assist, true)),
        specials: option_list(eligible_names(env, unit, SkillCategory::Special, true)),
        passives_a: levelled(SkillCategory::PassiveA),
        passives_b: levelled(SkillCategory::PassiveB),
        passives_c: levelled(SkillCategory::PassiveC),
        seals: levelled(SkillCategory::Seal),
    };
    tracing::debug!(
        unit = %unit.name,
        weapons = skills.weapons.len(),
        passives_a = skills.passives_a.len(),
        "computed inheritable skills"
    );
    skills
}

/// Levelled variants of a passive or seal base name, in catalog order.
///
/// Empty when the skill has no level suffix.
pub fn passive_levels<'a>(env: &PlannerEnv<'a>, slot: SkillCategory, base: &str) -> Vec<&'a str> {
    env.skills()
        .catalog(slot)
        .iter()
        .map(|skill| skill.name.as_str())
        .filter(|name| base_name(name) == base && *name != base)
        .collect()
}

/// Units that learn `skill` in `slot`, keyed by the rarity they learn it at.
///
/// The rarity is the later of the unit's lowest rarity and the unlock
/// rarity; entries without an unlock count as 5★.
pub fn units_with_skill(
    env: &PlannerEnv<'_>,
    skill: &str,
    slot: SkillCategory,
) -> BTreeMap<Rarity, Vec<String>> {
    let mut listing: BTreeMap<Rarity, Vec<String>> = BTreeMap::new();
    for unit in env.units().units() {
        for learned in unit.learnset(slot).iter().filter(|learned| learned.name == skill) {
            let rarity = learned
                .unlock
                .map(|unlock| unlock.max(unit.lowest_rarity.value()))
                .and_then(Rarity::from_value)
                .unwrap_or(Rarity::Five);
            listing.entry(rarity).or_default().push(unit.name.clone());
        }
    }
    listing
}

/// Icon key for a color/weapon pair, e.g. `"red/Sword"`.
///
/// Combinations without artwork yield `None`.
pub fn weapon_icon(color: Color, weapon_type: WeaponType) -> Option<String> {
    use WeaponType::*;
    let available: &[WeaponType] = match color {
        Color::Red => &[Sword, Breath, Tome, Bow, Dagger],
        Color::Blue => &[Lance, Breath, Tome, Bow, Dagger],
        Color::Green => &[Axe, Breath, Tome, Bow, Dagger],
        Color::Neutral => &[Bow, Dagger, Breath, Staff],
    };
    available.contains(&weapon_type).then(|| {
        format!("{}/{weapon_type}", color.to_string().to_ascii_lowercase())
    })
}

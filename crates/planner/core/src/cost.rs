//! SP cost of inheriting skills.
//!
//! A skill's cost is its own SP times the inheritance multiplier plus the
//! cost of whatever has to be learned first:
//!
//! - `+` weapons need their base weapon (or the weapon that evolves into
//!   them); owning the base makes only the `+` weapon count
//! - an explicit `require` names the prerequisite; `A|B` takes the cheaper
//! - otherwise a trailing level digit 2-9 requires the previous level
//!
//! Skills the unit learns by default cost nothing. A refine adds a flat
//! surcharge on top.

use std::collections::HashSet;

use crate::config::CalcConfig;
use crate::env::{PlannerEnv, SkillCategory, SkillDefinition, UnitDefinition, WeaponRefine};
use crate::loadout::SkillSet;

/// Resolved cost of each costed slot. Seals are never costed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotCosts {
    /// Includes the refine surcharge.
    pub weapon: u32,
    pub assist: u32,
    pub special: u32,
    pub passive_a: u32,
    pub passive_b: u32,
    pub passive_c: u32,
}

impl SlotCosts {
    pub fn get(&self, slot: SkillCategory) -> u32 {
        match slot {
            SkillCategory::Weapon => self.weapon,
            SkillCategory::Assist => self.assist,
            SkillCategory::Special => self.special,
            SkillCategory::PassiveA => self.passive_a,
            SkillCategory::PassiveB => self.passive_b,
            SkillCategory::PassiveC => self.passive_c,
            SkillCategory::Seal => 0,
        }
    }

    pub fn total(&self) -> u32 {
        SkillCategory::LEARNABLE
            .into_iter()
            .map(|slot| self.get(slot))
            .sum()
    }
}

/// Looks a name up in every learnable catalog, weapons first.
fn find_skill<'a>(env: &PlannerEnv<'a>, name: &str) -> Option<&'a SkillDefinition> {
    SkillCategory::LEARNABLE
        .into_iter()
        .find_map(|category| env.skill(category, name))
}

/// The previous level of a levelled name: `"Armored Blow 3"` -> `"Armored Blow 2"`.
fn previous_level(name: &str) -> Option<String> {
    let last = name.chars().next_back()?;
    let digit = last.to_digit(10).filter(|digit| (2..=9).contains(digit))?;
    let stem = &name[..name.len() - last.len_utf8()];
    Some(format!("{stem}{}", digit - 1))
}

struct CostResolver<'e, 'a> {
    env: &'e PlannerEnv<'a>,
    unit_name: &'e str,
    unit: Option<&'a UnitDefinition>,
    path: HashSet<String>,
}

impl<'e, 'a> CostResolver<'e, 'a> {
    fn new(env: &'e PlannerEnv<'a>, unit_name: &'e str) -> Self {
        let unit = env.unit(unit_name);
        if unit.is_none() {
            tracing::warn!(unit = unit_name, "costing skills for an unknown unit");
        }
        Self {
            env,
            unit_name,
            unit,
            path: HashSet::new(),
        }
    }

    fn owns(&self, skill: &str) -> bool {
        self.unit.is_some_and(|unit| unit.owns(skill))
    }

    fn resolve(&mut self, skill: &str) -> u32 {
        if skill.is_empty() {
            return 0;
        }
        let Some(definition) = find_skill(self.env, skill) else {
            return 0;
        };
        if self.owns(skill) {
            return 0;
        }
        if self.path.contains(skill) {
            tracing::warn!(skill, "prerequisite cycle in skill data");
            return 0;
        }
        if self.path.len() >= CalcConfig::MAX_PREREQUISITE_DEPTH {
            tracing::warn!(skill, depth = self.path.len(), "prerequisite chain too deep");
            return 0;
        }

        self.path.insert(skill.to_owned());
        let own = self.env.config().inherit_cost(definition.cost);
        let prerequisite = self.prerequisite_cost(skill, definition);
        self.path.remove(skill);

        own + prerequisite
    }

    fn prerequisite_cost(&mut self, skill: &str, definition: &SkillDefinition) -> u32 {
        if let Some((base, _)) = skill.split_once('+')
            && skill.ends_with('+')
        {
            if self.owns(base) {
                return 0;
            }
            let evolved_from = self
                .env
                .upgrades()
                .evolutions()
                .iter()
                .find(|evolution| evolution.target == skill && evolution.applies_to(self.unit_name))
                .map(|evolution| evolution.base.as_str());
            return self.resolve(evolved_from.unwrap_or(base));
        }

        if let Some(require) = definition.require.as_deref() {
            return match require.split_once('|') {
                Some((left, right)) => self.resolve(left).min(self.resolve(right)),
                None => self.resolve(require),
            };
        }

        match previous_level(skill) {
            Some(previous) if find_skill(self.env, &previous).is_some() => {
                self.resolve(&previous)
            }
            _ => 0,
        }
    }
}

/// Refine surcharge for a weapon, zero for weapons that cannot be refined.
fn refine_surcharge(env: &PlannerEnv<'_>, weapon: &str) -> u32 {
    let Some(data) = env
        .skill(SkillCategory::Weapon, weapon)
        .and_then(|definition| definition.weapon.as_ref())
    else {
        return 0;
    };
    if !data.is_refinable() {
        return 0;
    }
    let config = env.config();
    match &data.upgrade {
        Some(flags) if flags.legendary => config.legendary_refine_cost,
        _ => config.refine_cost,
    }
}

/// SP needed for `unit` to inherit `skill`, including prerequisites.
///
/// Unknown and empty skills cost 0, as do skills the unit already learns.
/// A refine adds its surcharge even on an owned weapon.
pub fn calc_cost(
    env: &PlannerEnv<'_>,
    unit: &str,
    skill: &str,
    refine: Option<WeaponRefine>,
) -> u32 {
    if skill.is_empty() || find_skill(env, skill).is_none() {
        return 0;
    }
    let mut cost = CostResolver::new(env, unit).resolve(skill);
    if refine.is_some() {
        cost += refine_surcharge(env, skill);
    }
    tracing::debug!(unit, skill, cost, "resolved inheritance cost");
    cost
}

/// Per-slot costs of a loadout.
pub fn slot_costs(env: &PlannerEnv<'_>, unit: &str, skills: &SkillSet) -> SlotCosts {
    let cost = |slot: SkillCategory| {
        let refine = if slot == SkillCategory::Weapon {
            skills.refine
        } else {
            None
        };
        skills
            .get(slot)
            .map_or(0, |skill| calc_cost(env, unit, skill, refine))
    };
    SlotCosts {
        weapon: cost(SkillCategory::Weapon),
        assist: cost(SkillCategory::Assist),
        special: cost(SkillCategory::Special),
        passive_a: cost(SkillCategory::PassiveA),
        passive_b: cost(SkillCategory::PassiveB),
        passive_c: cost(SkillCategory::PassiveC),
    }
}

/// Total SP of a loadout: the sum of its independently resolved slots.
pub fn calc_total_cost(env: &PlannerEnv<'_>, unit: &str, skills: &SkillSet) -> u32 {
    slot_costs(env, unit, skills).total()
}

//! Build state and the edits that move it.
//!
//! A [`Build`] is a plain value. [`apply_edit`] returns the next build
//! without touching the previous one, and [`evaluate`] recomputes the whole
//! derived projection from scratch. There is no hidden session state.
mod error;
mod record;

pub use error::BuildError;
pub use record::BuildRecord;

use crate::cost::{SlotCosts, slot_costs};
use crate::effect::{render_effect, special_value};
use crate::env::{OracleError, PlannerEnv, SkillCategory, WeaponRefine, base_name};
use crate::loadout::SkillSet;
use crate::stats::{
    BoonBane, Level, Modifiers, Rarity, Stat, StatBreakdown, Stats, SupportRank, compute_stats,
    stat_breakdown,
};

/// One unit's loadout and modifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Build {
    pub unit: String,
    pub skills: SkillSet,
    pub modifiers: Modifiers,
}

impl Build {
    /// The unit's default loadout at 5★ level 40, neutral, unmerged.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::UnitNotFound` (wrapped) for an unknown unit.
    pub fn new(env: &PlannerEnv<'_>, unit: &str) -> Result<Self, BuildError> {
        let definition = env.require_unit(unit)?;
        Ok(Self {
            unit: definition.name.clone(),
            skills: SkillSet::default_for(definition),
            modifiers: Modifiers::default(),
        })
    }

    pub fn boon_bane(&self) -> BoonBane {
        self.modifiers.boon_bane
    }

    /// The persisted form of this build.
    pub fn record(&self) -> BuildRecord {
        BuildRecord::new(&self.skills, self.modifiers.boon_bane)
    }
}

/// A single user edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildEdit {
    /// Switch unit: default loadout, neutral boon/bane. Other modifiers stay.
    SelectUnit(String),
    /// Set one slot. An empty name clears it.
    SetSkill { slot: SkillCategory, skill: String },
    SetRefine(Option<WeaponRefine>),
    /// Swap the equipped passive or seal for another level of itself.
    SetPassiveLevel { slot: SkillCategory, level: u8 },
    SetBoon(Option<Stat>),
    SetBane(Option<Stat>),
    SetMerge(u8),
    SetRarity(Rarity),
    SetLevel(Level),
    SetSupport(SupportRank),
    /// Restore the unit's default loadout. Modifiers stay.
    Reset,
    /// Replace boon/bane and loadout with a saved record.
    LoadRecord(BuildRecord),
}

/// Applies `edit` and returns the resulting build.
///
/// # Errors
///
/// Returns a [`BuildError`] when the edit names missing reference data or
/// cannot apply to the current loadout. `build` is unaffected either way.
pub fn apply_edit(
    env: &PlannerEnv<'_>,
    build: &Build,
    edit: BuildEdit,
) -> Result<Build, BuildError> {
    tracing::debug!(unit = %build.unit, ?edit, "applying build edit");
    let mut next = build.clone();

    match edit {
        BuildEdit::SelectUnit(unit) => {
            next = Build::new(env, &unit)?;
            next.modifiers = build.modifiers.with_boon_bane(BoonBane::NEUTRAL);
        }
        BuildEdit::SetSkill { slot, skill } => {
            if !skill.is_empty() && env.skill(slot, &skill).is_none() {
                return Err(OracleError::SkillNotFound {
                    category: slot,
                    name: skill,
                }
                .into());
            }
            if slot == SkillCategory::Weapon && next.skills.weapon.as_deref() != Some(skill.as_str())
            {
                next.skills.refine = None;
            }
            next.skills.set(slot, Some(skill));
        }
        BuildEdit::SetRefine(None) => next.skills.refine = None,
        BuildEdit::SetRefine(Some(refine)) => {
            let weapon = next.skills.weapon.clone().unwrap_or_default();
            let refinable = env
                .skill(SkillCategory::Weapon, &weapon)
                .and_then(|definition| definition.weapon.as_ref())
                .is_some_and(|data| data.is_refinable());
            if !refinable {
                return Err(BuildError::NotRefinable(weapon));
            }
            next.skills.refine = Some(refine);
        }
        BuildEdit::SetPassiveLevel { slot, level } => {
            let current = next.skills.get(slot).ok_or(BuildError::EmptySlot(slot))?;
            let stem = match current.find(|c: char| ('1'..='9').contains(&c)) {
                Some(index) => &current[..index],
                None => current,
            };
            let levelled = format!("{stem}{level}");
            if env.skill(slot, &levelled).is_none() {
                return Err(OracleError::LevelNotFound {
                    slot,
                    base: base_name(current).to_owned(),
                    level,
                }
                .into());
            }
            next.skills.set(slot, Some(levelled));
        }
        BuildEdit::SetBoon(boon) => {
            next.modifiers.boon_bane = next.modifiers.boon_bane.with_boon(boon);
        }
        BuildEdit::SetBane(bane) => {
            next.modifiers.boon_bane = next.modifiers.boon_bane.with_bane(bane);
        }
        BuildEdit::SetMerge(merge) => next.modifiers = next.modifiers.with_merge(merge),
        BuildEdit::SetRarity(rarity) => next.modifiers.rarity = rarity,
        BuildEdit::SetLevel(level) => next.modifiers.level = level,
        BuildEdit::SetSupport(support) => next.modifiers.support = support,
        BuildEdit::Reset => {
            let unit = env.require_unit(&build.unit)?;
            next.skills = SkillSet::default_for(unit);
        }
        BuildEdit::LoadRecord(record) => {
            let staff = env.require_unit(&build.unit)?.is_staff_user();
            next.skills = record.skills(staff)?;
            next.modifiers.boon_bane = record.boon_bane()?;
        }
    }

    Ok(next)
}

/// Derived view of a build.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildSummary {
    pub stats: Stats,
    /// Stats with an empty loadout, same modifiers.
    pub raw_stats: Stats,
    pub breakdown: StatBreakdown,
    pub slot_costs: SlotCosts,
    pub total_cost: u32,
    /// Effect text of the equipped special, its `{value}` computed from
    /// the final stats.
    pub special_effect: Option<String>,
}

fn special_effect(env: &PlannerEnv<'_>, skills: &SkillSet, stats: &Stats) -> Option<String> {
    let definition = env.skill(SkillCategory::Special, skills.special.as_deref()?)?;
    let value = definition
        .value
        .as_deref()
        .and_then(|spec| special_value(spec, stats));
    Some(render_effect(&definition.effect, value)).filter(|text| !text.is_empty())
}

/// Recomputes stats and costs of `build`.
pub fn evaluate(env: &PlannerEnv<'_>, build: &Build) -> BuildSummary {
    let breakdown = stat_breakdown(env, &build.unit, &build.skills, &build.modifiers);
    let raw_stats = compute_stats(env, &build.unit, &SkillSet::new(), &build.modifiers);
    let slot_costs = slot_costs(env, &build.unit, &build.skills);
    let stats = breakdown.total();
    BuildSummary {
        special_effect: special_effect(env, &build.skills, &stats),
        stats,
        raw_stats,
        breakdown,
        total_cost: slot_costs.total(),
        slot_costs,
    }
}

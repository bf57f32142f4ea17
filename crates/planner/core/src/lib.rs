//! Deterministic stat and SP-cost engine for unit build planning.
//!
//! `planner-core` owns the calculation rules: inheritance eligibility, the
//! effect-text parser, merge and growth math, stat aggregation, the
//! prerequisite-aware cost resolver and the build state machine. Reference
//! data reaches it only through the oracle traits in [`env`]; loading and
//! persistence live in other crates.
pub mod build;
pub mod config;
pub mod cost;
pub mod effect;
pub mod eligibility;
pub mod env;
pub mod error;
pub mod loadout;
pub mod stats;

#[cfg(test)]
mod testing;

pub use build::{Build, BuildEdit, BuildError, BuildRecord, BuildSummary, apply_edit, evaluate};
pub use config::CalcConfig;
pub use cost::{SlotCosts, calc_cost, calc_total_cost, slot_costs};
pub use effect::{extract_stat_delta, special_value};
pub use eligibility::{
    PossibleSkills, passive_levels, possible_skills, units_with_skill, weapon_icon,
};
pub use env::{
    Color, Env, Evolution, LearnableSkill, MoveType, OracleError, PlannerEnv, ReferenceData,
    RefineClass, RefineVariant, SkillCategory, SkillDefinition, SkillOracle, SpecialRefine,
    UnitDefinition, UnitOracle, UpgradeFlags, UpgradeOracle, UpgradeTables, WeaponData,
    WeaponRefine, WeaponType,
};
pub use error::{ErrorSeverity, PlannerError};
pub use loadout::SkillSet;
pub use stats::{
    BoonBane, Level, Modifiers, Rarity, Stat, StatBreakdown, Stats, SupportRank, baseline_stats,
    calc_boon_bane, compute_stats, merge_bonus, stat_breakdown,
};

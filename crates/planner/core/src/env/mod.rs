//! Traits describing read-only reference data.
//!
//! Oracles expose unit definitions, skill catalogs and upgrade tables. The
//! [`Env`] aggregate bundles them with the [`CalcConfig`] so every calculation
//! can reach what it needs without coupling to a concrete dataset.
mod dataset;
mod error;
mod skills;
mod units;
mod upgrades;

pub use dataset::ReferenceData;
pub use error::OracleError;
pub use skills::{
    SkillCategory, SkillDefinition, SkillOracle, UpgradeFlags, WeaponData, base_name,
};
pub use units::{Color, LearnableSkill, MoveType, UnitDefinition, UnitOracle, WeaponType};
pub use upgrades::{
    Evolution, RefineClass, RefineVariant, SpecialRefine, UpgradeOracle, UpgradeTables,
    WeaponRefine,
};

use crate::config::CalcConfig;

/// Aggregates the read-only oracles and the calculation config.
pub struct Env<'a, U, S, G>
where
    U: UnitOracle + ?Sized,
    S: SkillOracle + ?Sized,
    G: UpgradeOracle + ?Sized,
{
    units: &'a U,
    skills: &'a S,
    upgrades: &'a G,
    config: &'a CalcConfig,
}

pub type PlannerEnv<'a> =
    Env<'a, dyn UnitOracle + 'a, dyn SkillOracle + 'a, dyn UpgradeOracle + 'a>;

impl<U, S, G> Clone for Env<'_, U, S, G>
where
    U: UnitOracle + ?Sized,
    S: SkillOracle + ?Sized,
    G: UpgradeOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<U, S, G> Copy for Env<'_, U, S, G>
where
    U: UnitOracle + ?Sized,
    S: SkillOracle + ?Sized,
    G: UpgradeOracle + ?Sized,
{
}

impl<'a, U, S, G> Env<'a, U, S, G>
where
    U: UnitOracle + ?Sized,
    S: SkillOracle + ?Sized,
    G: UpgradeOracle + ?Sized,
{
    pub fn new(units: &'a U, skills: &'a S, upgrades: &'a G, config: &'a CalcConfig) -> Self {
        Self {
            units,
            skills,
            upgrades,
            config,
        }
    }

    pub fn units(&self) -> &'a U {
        self.units
    }

    pub fn skills(&self) -> &'a S {
        self.skills
    }

    pub fn upgrades(&self) -> &'a G {
        self.upgrades
    }

    pub fn config(&self) -> &'a CalcConfig {
        self.config
    }

    pub fn unit(&self, name: &str) -> Option<&'a UnitDefinition> {
        self.units.unit(name)
    }

    /// Returns the unit definition, or an error naming the missing unit.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::UnitNotFound` if the dataset has no such unit.
    pub fn require_unit(&self, name: &str) -> Result<&'a UnitDefinition, OracleError> {
        self.units
            .unit(name)
            .ok_or_else(|| OracleError::UnitNotFound(name.to_owned()))
    }

    pub fn skill(&self, category: SkillCategory, name: &str) -> Option<&'a SkillDefinition> {
        self.skills.skill(category, name)
    }
}

impl<'a, U, S, G> Env<'a, U, S, G>
where
    U: UnitOracle + 'a,
    S: SkillOracle + 'a,
    G: UpgradeOracle + 'a,
{
    /// Converts this environment into a trait-object based `PlannerEnv`.
    pub fn into_planner_env(self) -> PlannerEnv<'a> {
        let units: &'a dyn UnitOracle = self.units;
        let skills: &'a dyn SkillOracle = self.skills;
        let upgrades: &'a dyn UpgradeOracle = self.upgrades;
        Env::new(units, skills, upgrades, self.config)
    }
}

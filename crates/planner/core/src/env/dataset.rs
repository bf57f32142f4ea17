//! In-memory reference dataset implementing every oracle.
//!
//! `planner-content` fills one of these from the JSON data directory; tests
//! build them directly in code.

use std::collections::{BTreeMap, HashMap};

use crate::config::CalcConfig;

use super::skills::{SkillCategory, SkillDefinition, SkillOracle};
use super::units::{UnitDefinition, UnitOracle};
use super::upgrades::{
    Evolution, RefineClass, SpecialRefine, UpgradeOracle, UpgradeTables, WeaponRefine,
};
use super::{Env, PlannerEnv};
use crate::stats::{Stat, Stats};

/// Complete reference dataset: units, skill catalogs and upgrade tables.
#[derive(Clone, Debug, Default)]
pub struct ReferenceData {
    units: Vec<UnitDefinition>,
    unit_index: HashMap<String, usize>,
    catalogs: BTreeMap<SkillCategory, Vec<SkillDefinition>>,
    skill_index: HashMap<(SkillCategory, String), usize>,
    upgrades: UpgradeTables,
}

impl ReferenceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a unit. Replacement keeps the original position.
    pub fn insert_unit(&mut self, unit: UnitDefinition) {
        match self.unit_index.get(&unit.name) {
            Some(&index) => self.units[index] = unit,
            None => {
                self.unit_index.insert(unit.name.clone(), self.units.len());
                self.units.push(unit);
            }
        }
    }

    /// Adds or replaces a skill in its category catalog.
    pub fn insert_skill(&mut self, skill: SkillDefinition) {
        let key = (skill.category, skill.name.clone());
        let catalog = self.catalogs.entry(skill.category).or_default();
        match self.skill_index.get(&key) {
            Some(&index) => catalog[index] = skill,
            None => {
                self.skill_index.insert(key, catalog.len());
                catalog.push(skill);
            }
        }
    }

    pub fn set_upgrades(&mut self, upgrades: UpgradeTables) {
        self.upgrades = upgrades;
    }

    pub fn with_unit(mut self, unit: UnitDefinition) -> Self {
        self.insert_unit(unit);
        self
    }

    pub fn with_skill(mut self, skill: SkillDefinition) -> Self {
        self.insert_skill(skill);
        self
    }

    pub fn with_upgrades(mut self, upgrades: UpgradeTables) -> Self {
        self.set_upgrades(upgrades);
        self
    }

    pub fn upgrades(&self) -> &UpgradeTables {
        &self.upgrades
    }

    pub fn skill_count(&self) -> usize {
        self.catalogs.values().map(Vec::len).sum()
    }

    /// Bundles this dataset with a config into a calculation environment.
    pub fn env<'a>(&'a self, config: &'a CalcConfig) -> PlannerEnv<'a> {
        Env::new(self, self, self, config).into_planner_env()
    }
}

impl UnitOracle for ReferenceData {
    fn unit(&self, name: &str) -> Option<&UnitDefinition> {
        self.unit_index.get(name).map(|&index| &self.units[index])
    }

    fn units(&self) -> &[UnitDefinition] {
        &self.units
    }
}

impl SkillOracle for ReferenceData {
    fn catalog(&self, category: SkillCategory) -> &[SkillDefinition] {
        self.catalogs
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn skill(&self, category: SkillCategory, name: &str) -> Option<&SkillDefinition> {
        let index = *self.skill_index.get(&(category, name.to_owned()))?;
        self.catalogs.get(&category)?.get(index)
    }
}

impl UpgradeOracle for ReferenceData {
    fn stat_refine(&self, class: RefineClass, stat: Stat) -> Option<Stats> {
        self.upgrades.stat_refine(class, stat)
    }

    fn staff_refine_effect(&self, refine: WeaponRefine) -> Option<&str> {
        self.upgrades.staff_refine_effect(refine)
    }

    fn special_refine(&self, weapon: &str) -> Option<&SpecialRefine> {
        self.upgrades.special_refine(weapon)
    }

    fn evolutions(&self) -> &[Evolution] {
        self.upgrades.evolutions()
    }
}

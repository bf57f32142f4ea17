//! Selected skills of a build, one optional name per slot.

use crate::env::{SkillCategory, UnitDefinition, WeaponRefine};

/// Per-slot skill selection plus the weapon refine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSet {
    pub weapon: Option<String>,
    pub refine: Option<WeaponRefine>,
    pub assist: Option<String>,
    pub special: Option<String>,
    pub passive_a: Option<String>,
    pub passive_b: Option<String>,
    pub passive_c: Option<String>,
    pub seal: Option<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The unit's default loadout: the last-listed skill of each slot.
    pub fn default_for(unit: &UnitDefinition) -> Self {
        let mut skills = Self::new();
        for slot in SkillCategory::LEARNABLE {
            let last = unit.learnset(slot).last().map(|learned| learned.name.clone());
            skills.set(slot, last);
        }
        skills
    }

    pub fn get(&self, slot: SkillCategory) -> Option<&str> {
        self.slot(slot).as_deref()
    }

    fn slot(&self, slot: SkillCategory) -> &Option<String> {
        match slot {
            SkillCategory::Weapon => &self.weapon,
            SkillCategory::Assist => &self.assist,
            SkillCategory::Special => &self.special,
            SkillCategory::PassiveA => &self.passive_a,
            SkillCategory::PassiveB => &self.passive_b,
            SkillCategory::PassiveC => &self.passive_c,
            SkillCategory::Seal => &self.seal,
        }
    }

    fn slot_mut(&mut self, slot: SkillCategory) -> &mut Option<String> {
        match slot {
            SkillCategory::Weapon => &mut self.weapon,
            SkillCategory::Assist => &mut self.assist,
            SkillCategory::Special => &mut self.special,
            SkillCategory::PassiveA => &mut self.passive_a,
            SkillCategory::PassiveB => &mut self.passive_b,
            SkillCategory::PassiveC => &mut self.passive_c,
            SkillCategory::Seal => &mut self.seal,
        }
    }

    /// Sets a slot. Empty names clear it.
    pub fn set(&mut self, slot: SkillCategory, skill: Option<String>) {
        *self.slot_mut(slot) = skill.filter(|name| !name.is_empty());
    }

    pub fn with(mut self, slot: SkillCategory, skill: &str) -> Self {
        self.set(slot, Some(skill.to_owned()));
        self
    }

    pub fn with_refine(mut self, refine: WeaponRefine) -> Self {
        self.refine = Some(refine);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

//! Skill catalog definitions and the oracle that serves them.

use super::units::{Color, WeaponType};

/// Read-only access to the skill catalogs.
pub trait SkillOracle: Send + Sync {
    /// Catalog for one category, in dataset order.
    fn catalog(&self, category: SkillCategory) -> &[SkillDefinition];

    fn skill(&self, category: SkillCategory, name: &str) -> Option<&SkillDefinition> {
        self.catalog(category)
            .iter()
            .find(|skill| skill.name == name)
    }
}

/// Skill slot / catalog category.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum SkillCategory {
    Weapon,
    Assist,
    Special,
    PassiveA,
    PassiveB,
    PassiveC,
    Seal,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Weapon,
        SkillCategory::Assist,
        SkillCategory::Special,
        SkillCategory::PassiveA,
        SkillCategory::PassiveB,
        SkillCategory::PassiveC,
        SkillCategory::Seal,
    ];

    /// Slots a unit learns skills in. Seals are equipped, never learned.
    pub const LEARNABLE: [SkillCategory; 6] = [
        SkillCategory::Weapon,
        SkillCategory::Assist,
        SkillCategory::Special,
        SkillCategory::PassiveA,
        SkillCategory::PassiveB,
        SkillCategory::PassiveC,
    ];

    pub const fn is_passive(self) -> bool {
        matches!(
            self,
            SkillCategory::PassiveA | SkillCategory::PassiveB | SkillCategory::PassiveC
        )
    }

    /// Categories whose names carry a level suffix (`"Swordbreaker 3"`).
    pub const fn is_levelled(self) -> bool {
        self.is_passive() || matches!(self, SkillCategory::Seal)
    }
}

/// Refine capability flags of a weapon, parsed from strings like
/// `"Legendary, Mt:1"`. Any flags at all make the weapon refinable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeFlags {
    pub legendary: bool,
    /// Extra might granted by any refine.
    pub might_bonus: i32,
}

impl UpgradeFlags {
    pub fn parse(raw: &str) -> Self {
        let mut flags = Self::default();
        for token in raw.split(',').map(str::trim) {
            if token == "Legendary" {
                flags.legendary = true;
            } else if let Some(value) = token.strip_prefix("Mt:") {
                flags.might_bonus = value.trim().parse().unwrap_or(0);
            }
        }
        flags
    }
}

/// Weapon-only catalog fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub might: i32,
    pub weapon_type: WeaponType,
    /// Colors allowed to wield the weapon. Empty means any.
    pub colors: Vec<Color>,
    /// `None` when the weapon cannot be refined.
    pub upgrade: Option<UpgradeFlags>,
}

impl WeaponData {
    pub fn new(might: i32, weapon_type: WeaponType) -> Self {
        Self {
            might,
            weapon_type,
            colors: Vec::new(),
            upgrade: None,
        }
    }

    pub fn is_refinable(&self) -> bool {
        self.upgrade.is_some() || self.weapon_type == WeaponType::Staff
    }
}

/// Immutable skill reference data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub name: String,
    pub category: SkillCategory,
    pub cost: u32,
    pub effect: String,
    pub restriction: Option<String>,
    /// Prerequisite skill name, `"A|B"` for either-or.
    pub require: Option<String>,
    /// Dynamic value spec for specials, e.g. `"Res:0.5"`.
    pub value: Option<String>,
    pub weapon: Option<WeaponData>,
}

impl SkillDefinition {
    pub fn new(category: SkillCategory, name: impl Into<String>, cost: u32) -> Self {
        Self {
            name: name.into(),
            category,
            cost,
            effect: String::new(),
            restriction: None,
            require: None,
            value: None,
            weapon: None,
        }
    }

    pub fn weapon(name: impl Into<String>, cost: u32, data: WeaponData) -> Self {
        let mut skill = Self::new(SkillCategory::Weapon, name, cost);
        skill.weapon = Some(data);
        skill
    }

    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = effect.into();
        self
    }

    pub fn with_restriction(mut self, restriction: impl Into<String>) -> Self {
        self.restriction = Some(restriction.into());
        self
    }

    pub fn with_require(mut self, require: impl Into<String>) -> Self {
        self.require = Some(require.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Base name of a levelled skill: the text before the first digit 1-9, trimmed.
///
/// `"Swordbreaker 3"` becomes `"Swordbreaker"`; names without a level digit
/// are returned trimmed.
pub fn base_name(name: &str) -> &str {
    match name.find(|c: char| ('1'..='9').contains(&c)) {
        Some(index) => name[..index].trim(),
        None => name.trim(),
    }
}

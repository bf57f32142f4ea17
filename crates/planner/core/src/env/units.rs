//! Unit definitions and the oracle that serves them.
//!
//! A unit is immutable reference data: identity, color, weapon and movement
//! classes, per-rarity stat tables and its learnset.

use std::collections::BTreeMap;

use crate::stats::{Rarity, Stat, Stats};

use super::skills::SkillCategory;

/// Read-only access to unit definitions.
pub trait UnitOracle: Send + Sync {
    fn unit(&self, name: &str) -> Option<&UnitDefinition>;

    /// All units in dataset order.
    fn units(&self) -> &[UnitDefinition];
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Red,
    Blue,
    Green,
    Neutral,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponType {
    Sword,
    Lance,
    Axe,
    Bow,
    Dagger,
    Tome,
    Staff,
    Breath,
    Beast,
}

impl WeaponType {
    pub const fn is_melee(self) -> bool {
        matches!(
            self,
            WeaponType::Sword
                | WeaponType::Lance
                | WeaponType::Axe
                | WeaponType::Breath
                | WeaponType::Beast
        )
    }

    pub const fn is_ranged(self) -> bool {
        !self.is_melee()
    }

    pub const fn is_physical(self) -> bool {
        matches!(
            self,
            WeaponType::Sword
                | WeaponType::Lance
                | WeaponType::Axe
                | WeaponType::Beast
                | WeaponType::Bow
                | WeaponType::Dagger
        )
    }

    pub const fn is_magic(self) -> bool {
        !self.is_physical()
    }

    /// Weapons that take stat refines from the ranged table.
    pub const fn uses_ranged_refines(self) -> bool {
        matches!(self, WeaponType::Bow | WeaponType::Dagger | WeaponType::Tome)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveType {
    Infantry,
    Armored,
    Cavalry,
    Flying,
}

/// One entry of a unit's learnset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LearnableSkill {
    pub name: String,
    /// Rarity at which the unit learns the skill. Absent for 5★-only entries.
    pub unlock: Option<u8>,
}

impl LearnableSkill {
    pub fn new(name: impl Into<String>, unlock: Option<u8>) -> Self {
        Self {
            name: name.into(),
            unlock,
        }
    }
}

/// Immutable unit reference data.
///
/// # Stat tables
///
/// - `base_stats`: level-1 stats per rarity
/// - `max_stats`: explicit level-40 stats, only for units without known growths
/// - `growths`: growth rates in percent
/// - `boon_table` / `bane_table`: level-40 boon/bane amounts at 5★ when
///   growths are unknown
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitDefinition {
    pub name: String,
    pub color: Color,
    pub weapon_type: WeaponType,
    pub move_type: MoveType,
    pub lowest_rarity: Rarity,
    pub base_stats: BTreeMap<Rarity, Stats>,
    pub max_stats: BTreeMap<Rarity, Stats>,
    pub growths: Option<Stats>,
    pub boon_table: BTreeMap<Stat, i32>,
    pub bane_table: BTreeMap<Stat, i32>,
    pub skills: BTreeMap<SkillCategory, Vec<LearnableSkill>>,
}

impl UnitDefinition {
    /// A 5★ unit with no stat tables and an empty learnset.
    pub fn new(
        name: impl Into<String>,
        color: Color,
        weapon_type: WeaponType,
        move_type: MoveType,
    ) -> Self {
        Self {
            name: name.into(),
            color,
            weapon_type,
            move_type,
            lowest_rarity: Rarity::Five,
            base_stats: BTreeMap::new(),
            max_stats: BTreeMap::new(),
            growths: None,
            boon_table: BTreeMap::new(),
            bane_table: BTreeMap::new(),
            skills: BTreeMap::new(),
        }
    }

    pub fn with_base_stats(mut self, rarity: Rarity, stats: Stats) -> Self {
        self.base_stats.insert(rarity, stats);
        self
    }

    pub fn with_max_stats(mut self, rarity: Rarity, stats: Stats) -> Self {
        self.max_stats.insert(rarity, stats);
        self
    }

    pub fn with_growths(mut self, growths: Stats) -> Self {
        self.growths = Some(growths);
        self
    }

    pub fn with_lowest_rarity(mut self, rarity: Rarity) -> Self {
        self.lowest_rarity = rarity;
        self
    }

    pub fn with_skill(mut self, slot: SkillCategory, name: &str, unlock: Option<u8>) -> Self {
        self.skills
            .entry(slot)
            .or_default()
            .push(LearnableSkill::new(name, unlock));
        self
    }

    pub fn is_staff_user(&self) -> bool {
        self.weapon_type == WeaponType::Staff
    }

    /// `"<color> <weapon> <move>"`, the string literal restrictions match against.
    pub fn class_tag(&self) -> String {
        format!("{} {} {}", self.color, self.weapon_type, self.move_type)
    }

    /// Learnset entries for one slot, in dataset order.
    pub fn learnset(&self, slot: SkillCategory) -> &[LearnableSkill] {
        self.skills.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the unit learns `skill` in any slot.
    pub fn owns(&self, skill: &str) -> bool {
        self.skills
            .values()
            .flatten()
            .any(|learned| learned.name == skill)
    }

    /// The strongest weapon the unit learns (last listed).
    pub fn signature_weapon(&self) -> Option<&str> {
        self.learnset(SkillCategory::Weapon)
            .last()
            .map(|learned| learned.name.as_str())
    }
}

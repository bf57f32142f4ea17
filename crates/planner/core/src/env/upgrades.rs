//! Weapon refine and evolution tables.

use std::collections::BTreeMap;

use crate::stats::{Stat, Stats};

/// Read-only access to refine tables and the evolution map.
pub trait UpgradeOracle: Send + Sync {
    /// Stat delta of a stat refine for a weapon class.
    fn stat_refine(&self, class: RefineClass, stat: Stat) -> Option<Stats>;

    /// Effect text appended by a staff refine (`Wrathful`, `Dazzling`).
    fn staff_refine_effect(&self, refine: WeaponRefine) -> Option<&str>;

    /// Per-weapon special refine, if the weapon has one.
    fn special_refine(&self, weapon: &str) -> Option<&SpecialRefine>;

    /// Every evolution entry, in dataset order.
    fn evolutions(&self) -> &[Evolution];
}

/// Which stat-refine table a weapon draws from.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefineClass {
    Melee,
    Ranged,
}

/// Refine applied to the equipped weapon.
///
/// Persisted as a single-letter code: `X A S D R W`, with `D` meaning
/// `Dazzling` on staff users and `Defense` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponRefine {
    /// Weapon-specific effect refine.
    Special,
    Attack,
    Speed,
    Defense,
    Resistance,
    Wrathful,
    Dazzling,
}

impl WeaponRefine {
    pub const fn code(self) -> char {
        match self {
            WeaponRefine::Special => 'X',
            WeaponRefine::Attack => 'A',
            WeaponRefine::Speed => 'S',
            WeaponRefine::Defense | WeaponRefine::Dazzling => 'D',
            WeaponRefine::Resistance => 'R',
            WeaponRefine::Wrathful => 'W',
        }
    }

    /// Decodes a persisted refine letter. `staff` disambiguates `D`.
    pub fn from_code(code: &str, staff: bool) -> Option<Self> {
        match code.trim() {
            "X" => Some(WeaponRefine::Special),
            "A" => Some(WeaponRefine::Attack),
            "S" => Some(WeaponRefine::Speed),
            "D" if staff => Some(WeaponRefine::Dazzling),
            "D" => Some(WeaponRefine::Defense),
            "R" => Some(WeaponRefine::Resistance),
            "W" => Some(WeaponRefine::Wrathful),
            _ => None,
        }
    }

    /// The stat a stat refine boosts.
    pub const fn stat(self) -> Option<Stat> {
        match self {
            WeaponRefine::Attack => Some(Stat::Atk),
            WeaponRefine::Speed => Some(Stat::Spd),
            WeaponRefine::Defense => Some(Stat::Def),
            WeaponRefine::Resistance => Some(Stat::Res),
            _ => None,
        }
    }

    pub const fn is_staff_refine(self) -> bool {
        matches!(self, WeaponRefine::Wrathful | WeaponRefine::Dazzling)
    }
}

/// Unit-specific variant of a special refine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefineVariant {
    pub units: Vec<String>,
    pub effect: String,
    pub stats: Option<Stats>,
}

/// Special refine of one weapon.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialRefine {
    pub effect: Option<String>,
    pub stats: Option<Stats>,
    /// Effect shared by every refine of the weapon; replaces the base effect.
    pub common_effect: Option<String>,
    pub variants: Vec<RefineVariant>,
}

impl SpecialRefine {
    pub fn variant_for(&self, unit: &str) -> Option<&RefineVariant> {
        self.variants
            .iter()
            .find(|variant| variant.units.iter().any(|name| name == unit))
    }
}

/// `base` evolves into `target`, optionally only for the listed units.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evolution {
    pub base: String,
    pub target: String,
    pub units: Vec<String>,
}

impl Evolution {
    pub fn new(base: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            target: target.into(),
            units: Vec::new(),
        }
    }

    pub fn applies_to(&self, unit: &str) -> bool {
        self.units.is_empty() || self.units.iter().any(|name| name == unit)
    }
}

/// Complete upgrade dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeTables {
    pub melee: BTreeMap<Stat, Stats>,
    pub ranged: BTreeMap<Stat, Stats>,
    pub wrathful: Option<String>,
    pub dazzling: Option<String>,
    pub special: BTreeMap<String, SpecialRefine>,
    pub evolutions: Vec<Evolution>,
}

impl UpgradeTables {
    pub fn table(&self, class: RefineClass) -> &BTreeMap<Stat, Stats> {
        match class {
            RefineClass::Melee => &self.melee,
            RefineClass::Ranged => &self.ranged,
        }
    }
}

impl UpgradeOracle for UpgradeTables {
    fn stat_refine(&self, class: RefineClass, stat: Stat) -> Option<Stats> {
        self.table(class).get(&stat).copied()
    }

    fn staff_refine_effect(&self, refine: WeaponRefine) -> Option<&str> {
        match refine {
            WeaponRefine::Wrathful => self.wrathful.as_deref(),
            WeaponRefine::Dazzling => self.dazzling.as_deref(),
            _ => None,
        }
    }

    fn special_refine(&self, weapon: &str) -> Option<&SpecialRefine> {
        self.special.get(weapon)
    }

    fn evolutions(&self) -> &[Evolution] {
        &self.evolutions
    }
}

//! Build modifiers - the non-skill inputs of the stat pipeline.
//!
//! Rarity, level, boon/bane, merge count and summoner support rank. Together
//! they form [`Modifiers`], which every stat query takes alongside the skill
//! loadout.

use super::core::{Stat, Stats};
use crate::config::CalcConfig;

/// Star rarity of a unit. Only 3★ to 5★ carry stat tables.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum Rarity {
    #[strum(serialize = "3")]
    Three,
    #[strum(serialize = "4")]
    Four,
    #[default]
    #[strum(serialize = "5")]
    Five,
}

impl Rarity {
    pub const ALL: [Rarity; 3] = [Rarity::Three, Rarity::Four, Rarity::Five];

    pub const fn value(self) -> u8 {
        match self {
            Rarity::Three => 3,
            Rarity::Four => 4,
            Rarity::Five => 5,
        }
    }

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            3 => Some(Rarity::Three),
            4 => Some(Rarity::Four),
            5 => Some(Rarity::Five),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Rarity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rarity::from_value(value).ok_or_else(|| format!("rarity must be 3, 4 or 5, got {value}"))
    }
}

impl From<Rarity> for u8 {
    fn from(rarity: Rarity) -> u8 {
        rarity.value()
    }
}

/// Unit level. Stats are only tabulated at the two ends of the range.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    #[strum(serialize = "1")]
    One,
    #[default]
    #[strum(serialize = "40")]
    Forty,
}

/// Summoner support rank; bonuses accumulate over every rank up to the selected one.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum SupportRank {
    #[default]
    #[strum(serialize = "none", serialize = "-")]
    None,
    C,
    B,
    A,
    S,
}

/// Per-rank support bonuses, lowest threshold first.
pub const SUPPORT_BONUSES: [(SupportRank, Stats); 4] = [
    (SupportRank::C, Stats::new(3, 0, 0, 0, 2)),
    (SupportRank::B, Stats::new(1, 0, 0, 2, 0)),
    (SupportRank::A, Stats::new(0, 0, 2, 0, 0)),
    (SupportRank::S, Stats::new(1, 2, 0, 0, 0)),
];

impl SupportRank {
    /// Sum of every threshold bonus at or below this rank.
    pub fn bonus(self) -> Stats {
        SUPPORT_BONUSES
            .iter()
            .filter(|(rank, _)| *rank <= self)
            .map(|(_, bonus)| *bonus)
            .sum()
    }
}

/// Boon and bane selection. Neutral when both are unset.
///
/// The two never name the same stat: [`BoonBane::with_boon`] and
/// [`BoonBane::with_bane`] clear the opposite side on collision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawBoonBane"))]
pub struct BoonBane {
    boon: Option<Stat>,
    bane: Option<Stat>,
}

/// Unchecked wire form, normalized through [`BoonBane::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBoonBane {
    #[serde(default)]
    boon: Option<Stat>,
    #[serde(default)]
    bane: Option<Stat>,
}

#[cfg(feature = "serde")]
impl From<RawBoonBane> for BoonBane {
    fn from(raw: RawBoonBane) -> Self {
        BoonBane::new(raw.boon, raw.bane)
    }
}

impl BoonBane {
    pub const NEUTRAL: BoonBane = BoonBane {
        boon: None,
        bane: None,
    };

    /// Builds a pair; a bane equal to the boon is dropped.
    pub fn new(boon: Option<Stat>, bane: Option<Stat>) -> Self {
        Self::NEUTRAL.with_boon(boon).with_bane_if_distinct(bane)
    }

    pub fn boon(&self) -> Option<Stat> {
        self.boon
    }

    pub fn bane(&self) -> Option<Stat> {
        self.bane
    }

    pub fn is_neutral(&self) -> bool {
        self.boon.is_none() && self.bane.is_none()
    }

    /// Sets the boon, clearing the bane if it named the same stat.
    pub fn with_boon(mut self, boon: Option<Stat>) -> Self {
        if boon.is_some() && boon == self.bane {
            self.bane = None;
        }
        self.boon = boon;
        self
    }

    /// Sets the bane, clearing the boon if it named the same stat.
    pub fn with_bane(mut self, bane: Option<Stat>) -> Self {
        if bane.is_some() && bane == self.boon {
            self.boon = None;
        }
        self.bane = bane;
        self
    }

    fn with_bane_if_distinct(self, bane: Option<Stat>) -> Self {
        if bane.is_some() && bane == self.boon {
            self
        } else {
            self.with_bane(bane)
        }
    }

    /// `(stat, sign)` for each side that is set, boon first.
    pub fn signed(&self) -> impl Iterator<Item = (Stat, i32)> {
        self.boon
            .map(|stat| (stat, 1))
            .into_iter()
            .chain(self.bane.map(|stat| (stat, -1)))
    }

    /// ±1 on the boon/bane stats, the level-1 adjustment.
    pub fn unit_delta(&self) -> Stats {
        let mut delta = Stats::ZERO;
        for (stat, sign) in self.signed() {
            delta.add_stat(stat, sign);
        }
        delta
    }
}

/// Every non-skill input to a stat query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifiers {
    pub rarity: Rarity,
    pub level: Level,
    pub boon_bane: BoonBane,
    pub merge: u8,
    pub support: SupportRank,
}

impl Modifiers {
    pub fn new(rarity: Rarity, level: Level) -> Self {
        Self {
            rarity,
            level,
            ..Self::default()
        }
    }

    pub fn with_boon_bane(mut self, boon_bane: BoonBane) -> Self {
        self.boon_bane = boon_bane;
        self
    }

    /// Sets the merge count, clamped to the game maximum.
    pub fn with_merge(mut self, merge: u8) -> Self {
        self.merge = merge.min(CalcConfig::MAX_MERGE);
        self
    }

    pub fn with_support(mut self, support: SupportRank) -> Self {
        self.support = support;
        self
    }
}

//! Stat quintuple - the value type every pipeline stage produces.
//!
//! A unit has exactly five stats, always listed in canonical order
//! `HP, Atk, Spd, Def, Res`. Every ordering rule (merge ranking, tie-breaks,
//! boon/bane inference) falls back to this order.

use core::ops::{Add, AddAssign, Neg, Sub};

/// One of the five unit stats.
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
#[strum(ascii_case_insensitive)]
pub enum Stat {
    #[strum(serialize = "HP")]
    #[cfg_attr(feature = "serde", serde(rename = "HP"))]
    Hp,
    Atk,
    Spd,
    Def,
    Res,
}

impl Stat {
    /// Canonical order, highest tie-break priority first.
    pub const ALL: [Stat; 5] = [Stat::Hp, Stat::Atk, Stat::Spd, Stat::Def, Stat::Res];

    pub const fn index(self) -> usize {
        match self {
            Stat::Hp => 0,
            Stat::Atk => 1,
            Stat::Spd => 2,
            Stat::Def => 3,
            Stat::Res => 4,
        }
    }

    /// Recognizes a stat keyword embedded in effect text or skill names.
    ///
    /// Matching is case-sensitive containment, so `"Atk"`, `"Attack"` and
    /// `"Atk_bonus"` all name Atk. HP is checked first.
    pub fn from_keyword(word: &str) -> Option<Stat> {
        if word.contains("HP") {
            Some(Stat::Hp)
        } else if word.contains("Atk") || word.contains("Attack") {
            Some(Stat::Atk)
        } else if word.contains("Spd") || word.contains("Speed") {
            Some(Stat::Spd)
        } else if word.contains("Def") {
            Some(Stat::Def)
        } else if word.contains("Res") {
            Some(Stat::Res)
        } else {
            None
        }
    }
}

/// Stat quintuple of signed integers.
///
/// Used both for absolute stats and for deltas; the aggregator only clamps
/// the final sum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    #[cfg_attr(feature = "serde", serde(rename = "HP", default))]
    pub hp: i32,
    #[cfg_attr(feature = "serde", serde(rename = "Atk", default))]
    pub atk: i32,
    #[cfg_attr(feature = "serde", serde(rename = "Spd", default))]
    pub spd: i32,
    #[cfg_attr(feature = "serde", serde(rename = "Def", default))]
    pub def: i32,
    #[cfg_attr(feature = "serde", serde(rename = "Res", default))]
    pub res: i32,
}

impl Stats {
    pub const ZERO: Stats = Stats::new(0, 0, 0, 0, 0);

    pub const fn new(hp: i32, atk: i32, spd: i32, def: i32, res: i32) -> Self {
        Self {
            hp,
            atk,
            spd,
            def,
            res,
        }
    }

    /// Builds a quintuple from a canonical-order array.
    pub const fn from_array(values: [i32; 5]) -> Self {
        Self::new(values[0], values[1], values[2], values[3], values[4])
    }

    pub const fn to_array(self) -> [i32; 5] {
        [self.hp, self.atk, self.spd, self.def, self.res]
    }

    /// A delta that touches a single stat.
    pub fn single(stat: Stat, amount: i32) -> Self {
        let mut stats = Self::ZERO;
        stats.add_stat(stat, amount);
        stats
    }

    /// The same amount on every listed stat.
    pub fn uniform(stats: &[Stat], amount: i32) -> Self {
        let mut delta = Self::ZERO;
        for &stat in stats {
            delta.add_stat(stat, amount);
        }
        delta
    }

    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Spd => self.spd,
            Stat::Def => self.def,
            Stat::Res => self.res,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Hp => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Spd => &mut self.spd,
            Stat::Def => &mut self.def,
            Stat::Res => &mut self.res,
        }
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        *self.get_mut(stat) = value;
    }

    pub fn add_stat(&mut self, stat: Stat, amount: i32) {
        *self.get_mut(stat) += amount;
    }

    /// Iterates `(stat, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Floors every stat at zero.
    pub fn clamp_non_negative(self) -> Self {
        Self::from_array(self.to_array().map(|value| value.max(0)))
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(self, rhs: Stats) -> Stats {
        Stats::new(
            self.hp + rhs.hp,
            self.atk + rhs.atk,
            self.spd + rhs.spd,
            self.def + rhs.def,
            self.res + rhs.res,
        )
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Stats) {
        *self = *self + rhs;
    }
}

impl Sub for Stats {
    type Output = Stats;

    fn sub(self, rhs: Stats) -> Stats {
        self + (-rhs)
    }
}

impl Neg for Stats {
    type Output = Stats;

    fn neg(self) -> Stats {
        Stats::from_array(self.to_array().map(|value| -value))
    }
}

impl core::iter::Sum for Stats {
    fn sum<I: Iterator<Item = Stats>>(iter: I) -> Stats {
        iter.fold(Stats::ZERO, |acc, stats| acc + stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn keyword_recognition_accepts_long_forms() {
        assert_eq!(Stat::from_keyword("Attack"), Some(Stat::Atk));
        assert_eq!(Stat::from_keyword("Speed"), Some(Stat::Spd));
        assert_eq!(Stat::from_keyword("Defense"), Some(Stat::Def));
        assert_eq!(Stat::from_keyword("Resistance"), Some(Stat::Res));
        assert_eq!(Stat::from_keyword("HP"), Some(Stat::Hp));
        assert_eq!(Stat::from_keyword("atk"), None);
        assert_eq!(Stat::from_keyword("damage"), None);
    }

    #[test]
    fn stat_parses_case_insensitively() {
        assert_eq!(Stat::from_str("ATK").ok(), Some(Stat::Atk));
        assert_eq!(Stat::from_str("hp").ok(), Some(Stat::Hp));
        assert_eq!(Stat::Hp.to_string(), "HP");
        assert_eq!(Stat::Res.as_ref(), "Res");
    }

    #[test]
    fn clamp_only_floors_negative_values() {
        let stats = Stats::new(-3, 5, 0, -1, 2).clamp_non_negative();
        assert_eq!(stats, Stats::new(0, 5, 0, 0, 2));
    }

    #[test]
    fn arithmetic_is_per_stat() {
        let a = Stats::new(1, 2, 3, 4, 5);
        let b = Stats::single(Stat::Spd, 10);
        assert_eq!(a + b, Stats::new(1, 2, 13, 4, 5));
        assert_eq!(a - a, Stats::ZERO);
        assert_eq!([a, b].into_iter().sum::<Stats>().get(Stat::Spd), 13);
    }
}

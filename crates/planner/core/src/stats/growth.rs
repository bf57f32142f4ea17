//! Leveling and rarity baselines.
//!
//! Level-40 stats are level-1 stats plus a growth-derived delta:
//!
//! ```text
//! leveled = floor(0.39 * floor(rate * (0.79 + 0.07 * rarity)))
//! ```
//!
//! evaluated here in integer arithmetic (`rate * (79 + 7r) / 100`, then
//! `* 39 / 100`) so no float rounding can move a result across an integer.

use crate::config::CalcConfig;
use crate::env::UnitDefinition;

use super::core::{Stat, Stats};
use super::modifiers::{Level, Rarity};

/// Level 1 to 40 gain of a single stat.
pub fn growth_value(rate: i32, rarity: Rarity) -> i32 {
    let rarity = i32::from(rarity.value());
    let scaled = (rate * (79 + 7 * rarity)).div_euclid(100);
    (39 * scaled).div_euclid(100)
}

/// Level 1 to 40 gain of every stat.
pub fn leveling_delta(growths: Stats, rarity: Rarity) -> Stats {
    Stats::from_array(growths.to_array().map(|rate| growth_value(rate, rarity)))
}

/// Derives lower-rarity level-1 stats from the 5★ entry.
///
/// HP always counts as a low-ranked stat; the other four are ranked by how
/// many of their peers they beat (ties favour the earlier stat). The two
/// lowest ranks lose one extra point per two rarities.
pub fn derive_rarity(five_star: Stats, rarity: Rarity) -> Stats {
    let values = five_star.to_array();
    let mut order = [0usize; 5];
    for i in 1..5 {
        order[i] = (1..5)
            .filter(|&j| (i < j && values[i] >= values[j]) || (i > j && values[i] > values[j]))
            .count();
    }

    let steps = 5 - i32::from(rarity.value());
    let mut derived = five_star;
    for stat in Stat::ALL {
        let low = i32::from(order[stat.index()] < 2);
        derived.add_stat(stat, -((steps + low) / 2));
    }
    derived
}

/// Level-1 stats at a rarity, derived from 5★ when allowed and missing.
pub fn level_one_stats(unit: &UnitDefinition, rarity: Rarity, config: &CalcConfig) -> Option<Stats> {
    if let Some(stats) = unit.base_stats.get(&rarity) {
        return Some(*stats);
    }
    if config.derive_missing_rarities {
        return unit
            .base_stats
            .get(&Rarity::Five)
            .map(|five_star| derive_rarity(*five_star, rarity));
    }
    None
}

/// Where a unit's baseline comes from at a rarity/level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaselineSource {
    /// Level-1 table, leveled with growths when at level 40.
    LevelOne { stats: Stats, growths: Option<Stats> },
    /// Explicit level-40 table for units without known growths.
    Explicit(Stats),
    /// Nothing tabulated; stats are synthesized from the deltas alone.
    Missing,
}

impl BaselineSource {
    pub fn resolve(
        unit: &UnitDefinition,
        rarity: Rarity,
        level: Level,
        config: &CalcConfig,
    ) -> Self {
        if let Some(stats) = level_one_stats(unit, rarity, config) {
            let growths = match level {
                Level::Forty => unit.growths,
                Level::One => None,
            };
            return BaselineSource::LevelOne { stats, growths };
        }
        if level == Level::Forty
            && let Some(stats) = unit.max_stats.get(&rarity)
        {
            return BaselineSource::Explicit(*stats);
        }
        BaselineSource::Missing
    }

    /// Whether level-40 boon/bane runs through the growth rates.
    pub fn levels_with_growths(&self) -> bool {
        matches!(
            self,
            BaselineSource::LevelOne {
                growths: Some(_),
                ..
            }
        )
    }

    /// Table stats before leveling.
    pub fn table_stats(&self) -> Stats {
        match self {
            BaselineSource::LevelOne { stats, .. } | BaselineSource::Explicit(stats) => *stats,
            BaselineSource::Missing => Stats::ZERO,
        }
    }

    /// Neutral rarity/level baseline: table stats plus unmodified leveling.
    pub fn neutral_stats(&self, rarity: Rarity) -> Stats {
        match self {
            BaselineSource::LevelOne {
                stats,
                growths: Some(growths),
            } => *stats + leveling_delta(*growths, rarity),
            other => other.table_stats(),
        }
    }
}

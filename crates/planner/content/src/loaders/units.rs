//! Unit loader: `units.json` plus the per-rarity stat files.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::Context;
use planner_core::{
    Color, LearnableSkill, MoveType, Rarity, SkillCategory, Stat, Stats, UnitDefinition,
    WeaponType,
};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_json, read_optional_json};

/// One `units.json` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnitEntry {
    color: Color,
    wpn_type: WeaponType,
    mov_type: MoveType,
    /// Lowest summonable rarity.
    #[serde(default)]
    rarity: Option<Rarity>,
    #[serde(default)]
    boon: BTreeMap<Stat, i32>,
    #[serde(default)]
    bane: BTreeMap<Stat, i32>,
    #[serde(default)]
    skills: BTreeMap<SkillCategory, Vec<LearnableEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
struct LearnableEntry {
    name: String,
    #[serde(default)]
    unlock: Option<u8>,
}

type StatTable = HashMap<String, Stats>;

/// Stat files found under `stats/`.
#[derive(Debug, Default)]
struct StatFiles {
    level_one: BTreeMap<Rarity, StatTable>,
    level_forty: BTreeMap<Rarity, StatTable>,
    growths: StatTable,
}

impl StatFiles {
    fn load(stats_dir: &Path) -> LoadResult<Self> {
        let mut files = Self::default();
        for rarity in Rarity::ALL {
            let one = stats_dir.join(format!("{}_1.json", rarity.value()));
            if let Some(table) = read_optional_json(&one)? {
                files.level_one.insert(rarity, table);
            }
            let forty = stats_dir.join(format!("{}_40.json", rarity.value()));
            if let Some(table) = read_optional_json(&forty)? {
                files.level_forty.insert(rarity, table);
            }
        }
        files.growths = read_optional_json(&stats_dir.join("growths.json"))?.unwrap_or_default();
        Ok(files)
    }

    fn per_rarity(tables: &BTreeMap<Rarity, StatTable>, unit: &str) -> BTreeMap<Rarity, Stats> {
        tables
            .iter()
            .filter_map(|(rarity, table)| table.get(unit).map(|stats| (*rarity, *stats)))
            .collect()
    }
}

/// Loader for unit definitions.
pub struct UnitLoader;

impl UnitLoader {
    /// Load units from `units.json`, joining stat tables from `stats_dir`.
    ///
    /// # Arguments
    ///
    /// * `units_path` - Path to `units.json`
    /// * `stats_dir` - Directory holding `N_1.json`, `N_40.json` and `growths.json`
    ///
    /// # Returns
    ///
    /// Units in file order.
    pub fn load(units_path: &Path, stats_dir: &Path) -> LoadResult<Vec<UnitDefinition>> {
        let entries: serde_json::Map<String, serde_json::Value> = read_json(units_path)?;
        let stats = StatFiles::load(stats_dir)?;

        let mut units = Vec::with_capacity(entries.len());
        for (name, value) in entries {
            let entry: UnitEntry = serde_json::from_value(value)
                .with_context(|| format!("Invalid unit entry '{name}' in {}", units_path.display()))?;
            units.push(Self::build(name, entry, &stats));
        }

        tracing::info!(count = units.len(), "loaded units");
        Ok(units)
    }

    fn build(name: String, entry: UnitEntry, stats: &StatFiles) -> UnitDefinition {
        let base_stats = StatFiles::per_rarity(&stats.level_one, &name);
        let max_stats = StatFiles::per_rarity(&stats.level_forty, &name);
        let growths = stats.growths.get(&name).copied();
        if base_stats.is_empty() && max_stats.is_empty() {
            tracing::warn!(unit = %name, "unit has no stat tables");
        }

        let skills = entry
            .skills
            .into_iter()
            .map(|(slot, learnset)| {
                let learnset = learnset
                    .into_iter()
                    .filter(|learned| !learned.name.is_empty())
                    .map(|learned| LearnableSkill::new(learned.name, learned.unlock))
                    .collect();
                (slot, learnset)
            })
            .collect();

        UnitDefinition {
            name,
            color: entry.color,
            weapon_type: entry.wpn_type,
            move_type: entry.mov_type,
            lowest_rarity: entry.rarity.unwrap_or(Rarity::Five),
            base_stats,
            max_stats,
            growths,
            boon_table: entry.boon,
            bane_table: entry.bane,
            skills,
        }
    }
}

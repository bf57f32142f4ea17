//! Upgrade table loader: refine stats, staff refines, special refines and
//! the evolution map, all from `upgrades.json`.
//!
//! ```text
//! {
//!   "Melee":  { "Attack": [HP, Atk, Spd, Def, Res], ... },
//!   "Ranged": { ... },
//!   "Staff":  { "Wrathful": { "effect": ... }, "Dazzling": { "effect": ... } },
//!   "Evolve": { "<base>": "<target>" | { "weapon": "<target>", "unit": [...] } },
//!   "<weapon>": { "effect"?, "stats"?, "common"?: { "effect" }, "units"?: [...] }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use planner_core::{Evolution, RefineVariant, SpecialRefine, Stat, Stats, UpgradeTables};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_json};

#[derive(Debug, Clone, Deserialize)]
struct EffectEntry {
    effect: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StaffEntry {
    #[serde(rename = "Wrathful")]
    wrathful: Option<EffectEntry>,
    #[serde(rename = "Dazzling")]
    dazzling: Option<EffectEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum EvolveEntry {
    Target(String),
    Restricted {
        weapon: String,
        #[serde(default)]
        unit: Vec<String>,
    },
}

#[derive(Debug, Clone, Deserialize)]
struct VariantEntry {
    /// Comma-separated unit names.
    name: String,
    effect: String,
    #[serde(default)]
    stats: Option<[i32; 5]>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SpecialEntry {
    effect: Option<String>,
    stats: Option<[i32; 5]>,
    common: Option<EffectEntry>,
    units: Vec<VariantEntry>,
}

/// Loader for upgrade tables.
pub struct UpgradeLoader;

impl UpgradeLoader {
    /// Load upgrade tables from a JSON file.
    pub fn load(path: &Path) -> LoadResult<UpgradeTables> {
        let entries: serde_json::Map<String, serde_json::Value> = read_json(path)?;
        Self::parse(entries).with_context(|| format!("Invalid upgrades file {}", path.display()))
    }

    fn parse(entries: serde_json::Map<String, serde_json::Value>) -> LoadResult<UpgradeTables> {
        let mut tables = UpgradeTables::default();
        for (key, value) in entries {
            match key.as_str() {
                "Melee" => tables.melee = Self::stat_table(&key, value)?,
                "Ranged" => tables.ranged = Self::stat_table(&key, value)?,
                "Staff" => {
                    let staff: StaffEntry =
                        serde_json::from_value(value).context("Invalid 'Staff' table")?;
                    tables.wrathful = staff.wrathful.map(|entry| entry.effect);
                    tables.dazzling = staff.dazzling.map(|entry| entry.effect);
                }
                "Evolve" => tables.evolutions = Self::evolutions(value)?,
                weapon => {
                    let entry: SpecialEntry = serde_json::from_value(value)
                        .with_context(|| format!("Invalid special refine for '{weapon}'"))?;
                    tables.special.insert(weapon.to_owned(), Self::special(entry));
                }
            }
        }
        tracing::info!(
            special_refines = tables.special.len(),
            evolutions = tables.evolutions.len(),
            "loaded upgrade tables"
        );
        Ok(tables)
    }

    fn stat_table(key: &str, value: serde_json::Value) -> LoadResult<BTreeMap<Stat, Stats>> {
        let raw: BTreeMap<String, [i32; 5]> = serde_json::from_value(value)
            .with_context(|| format!("Invalid '{key}' refine table"))?;
        let mut table = BTreeMap::new();
        for (refine, values) in raw {
            match Stat::from_keyword(&refine) {
                Some(stat) => {
                    table.insert(stat, Stats::from_array(values));
                }
                None => tracing::warn!(table = key, refine, "unknown refine in stat table"),
            }
        }
        Ok(table)
    }

    fn evolutions(value: serde_json::Value) -> LoadResult<Vec<Evolution>> {
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::from_value(value).context("Invalid 'Evolve' table")?;
        raw.into_iter()
            .map(|(base, value)| {
                let entry: EvolveEntry = serde_json::from_value(value)
                    .with_context(|| format!("Invalid evolution of '{base}'"))?;
                Ok(match entry {
                    EvolveEntry::Target(target) => Evolution::new(base, target),
                    EvolveEntry::Restricted { weapon, unit } => Evolution {
                        base,
                        target: weapon,
                        units: unit,
                    },
                })
            })
            .collect()
    }

    fn special(entry: SpecialEntry) -> SpecialRefine {
        SpecialRefine {
            effect: entry.effect,
            stats: entry.stats.map(Stats::from_array),
            common_effect: entry.common.map(|common| common.effect),
            variants: entry
                .units
                .into_iter()
                .map(|variant| RefineVariant {
                    units: variant
                        .name
                        .split(',')
                        .map(|unit| unit.trim().to_owned())
                        .filter(|unit| !unit.is_empty())
                        .collect(),
                    effect: variant.effect,
                    stats: variant.stats.map(Stats::from_array),
                })
                .collect(),
        }
    }
}

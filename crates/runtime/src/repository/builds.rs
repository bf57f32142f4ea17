//! Saved user builds, grouped by unit.
//!
//! Every saved build lives in one JSON document under a single store key:
//!
//! ```text
//! { "<unit>": { "<build name>": { "Boon": "Atk", "Weapon": "...", ... } } }
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use planner_core::BuildRecord;

use super::error::Result;
use super::traits::KeyValueStore;

/// Store key holding every saved build.
pub const USER_BUILDS_KEY: &str = "inheritance-tool.userBuilds";

/// Builds saved for one unit, keyed by build name.
pub type UnitBuilds = BTreeMap<String, BuildRecord>;

type AllBuilds = BTreeMap<String, UnitBuilds>;

/// Repository of user builds on top of a [`KeyValueStore`].
#[derive(Clone)]
pub struct BuildRepository {
    store: Arc<dyn KeyValueStore>,
}

impl BuildRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Reads the whole document. Absent or unreadable data is empty.
    fn read_all(&self) -> AllBuilds {
        let raw = match self.store.get(USER_BUILDS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return AllBuilds::new(),
            Err(err) => {
                tracing::warn!(%err, "saved builds unavailable");
                return AllBuilds::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(%err, "saved builds are corrupt; starting empty");
            AllBuilds::new()
        })
    }

    fn write_all(&self, builds: &AllBuilds) -> Result<()> {
        let raw = serde_json::to_string(builds)?;
        self.store.set(USER_BUILDS_KEY, &raw)
    }

    /// Saved builds of `unit`, by name.
    pub fn list(&self, unit: &str) -> UnitBuilds {
        self.read_all().remove(unit).unwrap_or_default()
    }

    /// Units that have at least one saved build.
    pub fn units(&self) -> Vec<String> {
        self.read_all().into_keys().collect()
    }

    pub fn load(&self, unit: &str, name: &str) -> Option<BuildRecord> {
        self.list(unit).remove(name)
    }

    /// Inserts or replaces a build.
    pub fn save(&self, unit: &str, name: &str, record: BuildRecord) -> Result<()> {
        let mut builds = self.read_all();
        builds
            .entry(unit.to_owned())
            .or_default()
            .insert(name.to_owned(), record);
        self.write_all(&builds)?;
        tracing::info!(unit, build = name, "saved build");
        Ok(())
    }

    /// Removes a build. Returns whether it existed.
    pub fn delete(&self, unit: &str, name: &str) -> Result<bool> {
        let mut builds = self.read_all();
        let Some(unit_builds) = builds.get_mut(unit) else {
            return Ok(false);
        };
        if unit_builds.remove(name).is_none() {
            return Ok(false);
        }
        if unit_builds.is_empty() {
            builds.remove(unit);
        }
        self.write_all(&builds)?;
        tracing::info!(unit, build = name, "deleted build");
        Ok(true)
    }
}

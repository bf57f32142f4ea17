//! Content factory for building the reference dataset from data files.

use std::path::{Path, PathBuf};

use planner_core::{CalcConfig, ReferenceData, SkillCategory, SkillDefinition, UpgradeTables};

use crate::loaders::{ConfigLoader, LoadResult, SkillLoader, UnitLoader, UpgradeLoader};

/// Content factory that loads the whole dataset from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml        (optional)
/// ├── units.json
/// ├── weapons.json
/// ├── assists.json
/// ├── specials.json
/// ├── passives.json
/// ├── seals.json         (optional)
/// ├── upgrades.json      (optional)
/// └── stats/
///     ├── 3_1.json  4_1.json  5_1.json
///     ├── 5_40.json      (optional, units without growths)
///     └── growths.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load `config.toml`, or the defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<CalcConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!("no config.toml, using default calculation config");
            return Ok(CalcConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load units from `units.json` and `stats/`.
    pub fn load_units(&self) -> LoadResult<Vec<planner_core::UnitDefinition>> {
        UnitLoader::load(&self.data_dir.join("units.json"), &self.data_dir.join("stats"))
    }

    /// Load every skill catalog. Weapons come first, seals last.
    pub fn load_skills(&self) -> LoadResult<Vec<SkillDefinition>> {
        let mut skills = Vec::new();
        for (file, category) in [
            ("weapons.json", SkillCategory::Weapon),
            ("assists.json", SkillCategory::Assist),
            ("specials.json", SkillCategory::Special),
        ] {
            skills.extend(SkillLoader::load_catalog(&self.data_dir.join(file), category)?);
        }
        skills.extend(SkillLoader::load_passives(&self.data_dir.join("passives.json"))?);

        let seals = self.data_dir.join("seals.json");
        if seals.exists() {
            skills.extend(SkillLoader::load_catalog(&seals, SkillCategory::Seal)?);
        }
        Ok(skills)
    }

    /// Load `upgrades.json`, or empty tables when the file is absent.
    pub fn load_upgrades(&self) -> LoadResult<UpgradeTables> {
        let path = self.data_dir.join("upgrades.json");
        if !path.exists() {
            tracing::warn!(path = %path.display(), "no upgrade tables; refines add no stats");
            return Ok(UpgradeTables::default());
        }
        UpgradeLoader::load(&path)
    }

    /// Load the complete dataset.
    pub fn load_reference_data(&self) -> LoadResult<ReferenceData> {
        let mut data = ReferenceData::new().with_upgrades(self.load_upgrades()?);
        for unit in self.load_units()? {
            data.insert_unit(unit);
        }
        for skill in self.load_skills()? {
            data.insert_skill(skill);
        }
        tracing::info!(
            data_dir = %self.data_dir.display(),
            skills = data.skill_count(),
            "reference data loaded"
        );
        Ok(data)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().expect("config"), CalcConfig::default());
        assert_eq!(
            factory.load_upgrades().expect("upgrades"),
            UpgradeTables::default()
        );
    }

    #[test]
    fn missing_units_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = ContentFactory::new(dir.path()).load_units().unwrap_err();
        assert!(err.to_string().contains("units.json"));
    }
}

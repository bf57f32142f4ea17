//! Planning session: the build being edited, its derived summary, and the
//! saved builds of its unit.

use planner_content::{ImportedBuild, parse_wiki_builds};
use planner_core::{Build, BuildEdit, BuildSummary, apply_edit, evaluate};

use crate::api::{Result, RuntimeError};
use crate::oracle::OracleManager;
use crate::repository::{BuildRepository, UnitBuilds};

/// One user's editing session.
///
/// Every successful edit recomputes the summary. A failed edit leaves the
/// build and summary as they were.
pub struct Session {
    oracles: OracleManager,
    builds: BuildRepository,
    build: Build,
    summary: BuildSummary,
}

impl Session {
    /// Starts a session on `unit` with its default loadout.
    pub fn start(oracles: OracleManager, builds: BuildRepository, unit: &str) -> Result<Self> {
        let (build, summary) = {
            let env = oracles.env();
            let build = Build::new(&env, unit)?;
            let summary = evaluate(&env, &build);
            (build, summary)
        };
        tracing::info!(unit, "session started");
        Ok(Self {
            oracles,
            builds,
            build,
            summary,
        })
    }

    pub fn build(&self) -> &Build {
        &self.build
    }

    pub fn summary(&self) -> &BuildSummary {
        &self.summary
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Applies one edit and returns the new summary.
    pub fn apply(&mut self, edit: BuildEdit) -> Result<&BuildSummary> {
        let env = self.oracles.env();
        let next = apply_edit(&env, &self.build, edit).inspect_err(|err| {
            tracing::warn!(unit = %self.build.unit, %err, "edit rejected");
        })?;
        self.summary = evaluate(&env, &next);
        self.build = next;
        Ok(&self.summary)
    }

    /// Saved builds of the current unit.
    pub fn saved_builds(&self) -> UnitBuilds {
        self.builds.list(&self.build.unit)
    }

    /// Saves the current build under `name`, replacing any build of that name.
    pub fn save_as(&self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RuntimeError::EmptyBuildName);
        }
        self.builds
            .save(&self.build.unit, name, self.build.record())?;
        Ok(())
    }

    /// Replaces the loadout and boon/bane with a saved build.
    pub fn load_saved(&mut self, name: &str) -> Result<&BuildSummary> {
        let record =
            self.builds
                .load(&self.build.unit, name)
                .ok_or_else(|| RuntimeError::BuildNotFound {
                    unit: self.build.unit.clone(),
                    name: name.to_owned(),
                })?;
        self.apply(BuildEdit::LoadRecord(record))
    }

    /// Deletes a saved build of the current unit. Returns whether it existed.
    pub fn delete_saved(&self, name: &str) -> Result<bool> {
        Ok(self.builds.delete(&self.build.unit, name)?)
    }

    /// Reads community builds for the current unit from wiki markup.
    pub fn import_wiki(&self, text: &str) -> Result<Vec<ImportedBuild>> {
        let env = self.oracles.env();
        let unit = env.require_unit(&self.build.unit).map_err(planner_core::BuildError::from)?;
        Ok(parse_wiki_builds(unit, text))
    }
}

//! Persisted form of a build.

use core::str::FromStr;

use crate::env::WeaponRefine;
use crate::loadout::SkillSet;
use crate::stats::{BoonBane, Stat};

use super::error::BuildError;

/// Flat string record of a build, as stored per unit and build name.
///
/// Field names are PascalCase on the wire; an empty string means "none".
/// Only the boon/bane and the loadout are persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase", default))]
pub struct BuildRecord {
    pub boon: String,
    pub bane: String,
    pub weapon: String,
    /// Refine code (`X A S D R W`).
    pub upgrade: String,
    pub assist: String,
    pub special: String,
    pub passive_a: String,
    pub passive_b: String,
    pub passive_c: String,
    pub seal: String,
}

fn field(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn parse_stat(field: &'static str, value: &str) -> Result<Option<Stat>, BuildError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    Stat::from_str(value)
        .map(Some)
        .map_err(|_| BuildError::InvalidRecord {
            field,
            value: value.to_owned(),
        })
}

impl BuildRecord {
    pub fn new(skills: &SkillSet, boon_bane: BoonBane) -> Self {
        Self {
            boon: boon_bane.boon().map(|stat| stat.to_string()).unwrap_or_default(),
            bane: boon_bane.bane().map(|stat| stat.to_string()).unwrap_or_default(),
            weapon: field(&skills.weapon),
            upgrade: skills
                .refine
                .map(|refine| refine.code().to_string())
                .unwrap_or_default(),
            assist: field(&skills.assist),
            special: field(&skills.special),
            passive_a: field(&skills.passive_a),
            passive_b: field(&skills.passive_b),
            passive_c: field(&skills.passive_c),
            seal: field(&skills.seal),
        }
    }

    /// Loadout of the record. `staff` decides whether `D` means Dazzling.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::InvalidRecord` for an unknown refine code.
    pub fn skills(&self, staff: bool) -> Result<SkillSet, BuildError> {
        let refine = match self.upgrade.trim() {
            "" => None,
            code => Some(WeaponRefine::from_code(code, staff).ok_or_else(|| {
                BuildError::InvalidRecord {
                    field: "Upgrade",
                    value: code.to_owned(),
                }
            })?),
        };

        let text = |value: &String| Some(value.clone()).filter(|value| !value.is_empty());
        Ok(SkillSet {
            weapon: text(&self.weapon),
            refine,
            assist: text(&self.assist),
            special: text(&self.special),
            passive_a: text(&self.passive_a),
            passive_b: text(&self.passive_b),
            passive_c: text(&self.passive_c),
            seal: text(&self.seal),
        })
    }

    /// Boon/bane of the record. Stat names are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::InvalidRecord` for an unknown stat name.
    pub fn boon_bane(&self) -> Result<BoonBane, BuildError> {
        let boon = parse_stat("Boon", &self.boon)?;
        let bane = parse_stat("Bane", &self.bane)?;
        Ok(BoonBane::new(boon, bane))
    }
}

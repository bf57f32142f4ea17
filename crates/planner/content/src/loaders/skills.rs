//! Skill catalog loader.
//!
//! Weapons, assists, specials and seals live in one file each; passives share
//! `passives.json` keyed by slot (`A`, `B`, `C`).

use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use planner_core::{Color, SkillCategory, SkillDefinition, UpgradeFlags, WeaponData, WeaponType};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_json};

type Catalog = serde_json::Map<String, serde_json::Value>;

/// One catalog entry. Weapon-only fields are absent elsewhere.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SkillEntry {
    cost: u32,
    effect: String,
    restriction: Option<String>,
    require: Option<String>,
    value: Option<String>,
    might: i32,
    #[serde(rename = "type")]
    weapon_type: Option<WeaponType>,
    /// `", "`-separated list of colors allowed to wield the weapon.
    color: Option<String>,
    upgrade: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_colors(raw: &str, skill: &str) -> Vec<Color> {
    raw.split(',')
        .map(str::trim)
        .filter(|color| !color.is_empty())
        .filter_map(|color| match Color::from_str(color) {
            Ok(color) => Some(color),
            Err(_) => {
                tracing::warn!(skill, color, "unknown weapon color");
                None
            }
        })
        .collect()
}

/// Loader for skill catalogs.
pub struct SkillLoader;

impl SkillLoader {
    /// Load one catalog file. Skills keep file order.
    pub fn load_catalog(path: &Path, category: SkillCategory) -> LoadResult<Vec<SkillDefinition>> {
        let catalog: Catalog = read_json(path)?;
        let skills = Self::parse_catalog(catalog, category)
            .with_context(|| format!("Invalid {category} catalog {}", path.display()))?;
        tracing::info!(%category, count = skills.len(), "loaded skill catalog");
        Ok(skills)
    }

    /// Load `passives.json`, returning A, B and C skills in that order.
    pub fn load_passives(path: &Path) -> LoadResult<Vec<SkillDefinition>> {
        let mut slots: serde_json::Map<String, serde_json::Value> = read_json(path)?;
        let mut skills = Vec::new();
        for (key, category) in [
            ("A", SkillCategory::PassiveA),
            ("B", SkillCategory::PassiveB),
            ("C", SkillCategory::PassiveC),
        ] {
            let Some(value) = slots.remove(key) else {
                tracing::warn!(slot = key, "passives file has no such slot");
                continue;
            };
            let catalog: Catalog = serde_json::from_value(value)
                .with_context(|| format!("Invalid passive slot '{key}' in {}", path.display()))?;
            let parsed = Self::parse_catalog(catalog, category)
                .with_context(|| format!("Invalid passive slot '{key}' in {}", path.display()))?;
            tracing::info!(%category, count = parsed.len(), "loaded skill catalog");
            skills.extend(parsed);
        }
        Ok(skills)
    }

    fn parse_catalog(catalog: Catalog, category: SkillCategory) -> LoadResult<Vec<SkillDefinition>> {
        catalog
            .into_iter()
            .map(|(name, value)| {
                let entry: SkillEntry = serde_json::from_value(value)
                    .with_context(|| format!("Invalid skill entry '{name}'"))?;
                Self::build(name, entry, category)
            })
            .collect()
    }

    fn build(name: String, entry: SkillEntry, category: SkillCategory) -> LoadResult<SkillDefinition> {
        let mut skill = SkillDefinition::new(category, name, entry.cost).with_effect(entry.effect);
        skill.restriction = non_empty(entry.restriction);
        skill.require = non_empty(entry.require);
        skill.value = non_empty(entry.value);

        if category == SkillCategory::Weapon {
            let weapon_type = entry
                .weapon_type
                .with_context(|| format!("Weapon '{}' has no type", skill.name))?;
            let mut data = WeaponData::new(entry.might, weapon_type);
            if let Some(colors) = entry.color.as_deref() {
                data.colors = parse_colors(colors, &skill.name);
            }
            data.upgrade = non_empty(entry.upgrade).map(|flags| UpgradeFlags::parse(&flags));
            skill.weapon = Some(data);
        }
        Ok(skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(json: &str) -> Catalog {
        serde_json::from_str(json).expect("catalog json")
    }

    #[test]
    fn weapons_carry_type_colors_and_flags() {
        let skills = SkillLoader::parse_catalog(
            catalog(
                r#"{
                    "Thoron": { "cost": 200, "might": 11, "type": "Tome", "color": "Blue" },
                    "Falchion": { "cost": 400, "might": 16, "type": "Sword",
                                  "restriction": "Exclusive", "upgrade": "Legendary, Mt:1" }
                }"#,
            ),
            SkillCategory::Weapon,
        )
        .expect("weapons");

        assert_eq!(skills[0].name, "Thoron");
        let thoron = skills[0].weapon.as_ref().expect("weapon data");
        assert_eq!(thoron.colors, vec![Color::Blue]);
        assert!(!thoron.is_refinable());

        let falchion = skills[1].weapon.as_ref().expect("weapon data");
        let flags = falchion.upgrade.as_ref().expect("flags");
        assert!(flags.legendary);
        assert_eq!(flags.might_bonus, 1);
    }

    #[test]
    fn weapon_without_type_is_an_error() {
        let result = SkillLoader::parse_catalog(
            catalog(r#"{ "Mystery": { "cost": 100, "might": 5 } }"#),
            SkillCategory::Weapon,
        );
        assert!(result.is_err());
    }

    #[test]
    fn catalog_keeps_file_order_and_drops_empty_fields() {
        let skills = SkillLoader::parse_catalog(
            catalog(
                r#"{
                    "Vantage 3": { "cost": 200, "restriction": "" },
                    "Swift Sparrow 1": { "cost": 120, "require": "Death Blow 1|Darting Blow 1" },
                    "Attack +1": { "cost": 30, "effect": "Grants Atk+1." }
                }"#,
            ),
            SkillCategory::PassiveA,
        )
        .expect("passives");

        let names: Vec<_> = skills.iter().map(|skill| skill.name.as_str()).collect();
        assert_eq!(names, ["Vantage 3", "Swift Sparrow 1", "Attack +1"]);
        assert_eq!(skills[0].restriction, None);
        assert_eq!(skills[1].require.as_deref(), Some("Death Blow 1|Darting Blow 1"));
    }
}

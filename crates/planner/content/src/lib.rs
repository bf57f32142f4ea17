//! Reference data loading and wiki build import.
//!
//! This crate turns the on-disk dataset into `planner-core` types:
//! - unit definitions with per-rarity stat tables and growths (JSON)
//! - skill catalogs in file order (JSON)
//! - refine tables, special refines and the evolution map (JSON)
//! - calculation config overrides (TOML)
//!
//! It also parses community build pages into build records. Nothing here
//! performs network access.

pub mod wiki;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use wiki::{ImportedBuild, parse_wiki_builds};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, SkillLoader, UnitLoader, UpgradeLoader};

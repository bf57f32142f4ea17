//! Repository layer for user data.
//!
//! Repositories handle data that CHANGES while planning:
//! - Saved builds per unit
//!
//! Static reference data (units, skills, upgrades) is handled by oracles,
//! not repositories.

mod builds;
mod error;
mod traits;

pub mod file;
pub mod memory;

pub use builds::{BuildRepository, USER_BUILDS_KEY, UnitBuilds};
pub use error::{RepositoryError, Result};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use traits::KeyValueStore;

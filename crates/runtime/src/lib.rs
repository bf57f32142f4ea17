//! Session orchestration for the unit build planner.
//!
//! This crate wires the reference data, the calculation engine and saved
//! builds into a session API. Consumers create a [`Session`] to edit a build
//! and read back its stats and SP cost.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the editing session
//! - [`api`] exposes the error types downstream clients interact with
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod oracle;
pub mod repository;
pub mod session;

pub use api::{Result, RuntimeError};
pub use oracle::OracleManager;
pub use repository::{
    BuildRepository, FileStore, InMemoryStore, KeyValueStore, RepositoryError, USER_BUILDS_KEY,
    UnitBuilds,
};
pub use session::Session;

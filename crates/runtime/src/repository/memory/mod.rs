//! In-memory store for tests and throwaway sessions.

mod store;

pub use store::InMemoryStore;

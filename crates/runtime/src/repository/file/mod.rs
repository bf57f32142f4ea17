//! File-based store.

mod store;

pub use store::FileStore;

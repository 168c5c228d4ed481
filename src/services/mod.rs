// Service exports
pub mod cache;
pub mod postgres;
pub mod store;

pub use cache::SnapshotCache;
pub use postgres::PostgresProfileStore;
pub use store::{MemoryProfileStore, ProfileSnapshot, ProfileStore, StoreError};

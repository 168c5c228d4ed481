//! Partner Search - profile matching service behind the partner search form
//!
//! This library provides the matching engine: a filter normalizer that turns
//! the raw form payload into typed criteria, a per-field match predicate, and
//! a lazy search executor over a profile store snapshot.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{collect_results, execute, matches, normalize, search};
pub use error::SearchError;
pub use models::{AgeRange, Profile, SearchCriteria, SearchRequest, SearchResult};
pub use services::{MemoryProfileStore, ProfileStore};

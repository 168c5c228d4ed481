// Core algorithm exports
pub mod executor;
pub mod filters;
pub mod normalizer;

pub use executor::{collect_results, execute, quick_search, search, Matches};
pub use filters::{matches, matches_any_field};
pub use normalizer::{normalize, normalize_age_range};

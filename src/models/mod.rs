// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{fold_case, fold_text, AgeRange, Profile, SearchCriteria, SearchCriteriaBuilder, SearchResult, TokenSet};
pub use requests::{AgeBound, AgeBounds, AgeRangePayload, MultiValue, QuickSearchQuery, SearchRequest};
pub use responses::{ErrorResponse, HealthResponse};

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{collect_results, normalize, quick_search as run_quick_search};
use crate::error::SearchError;
use crate::models::{HealthResponse, QuickSearchQuery, SearchRequest};
use crate::services::ProfileStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProfileStore>,
}

impl AppState {
    pub fn new(store: ProfileStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::resource("/search")
            .route(web::post().to(search))
            .route(web::get().to(quick_search)),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let profile_count = match state.store.snapshot().await {
        Ok(profiles) => Some(profiles.len()),
        Err(e) => {
            tracing::warn!("Health check could not read the profile store: {}", e);
            None
        }
    };

    let status = if profile_count.is_some() { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        profile_count,
        timestamp: chrono::Utc::now(),
    })
}

/// Filtered search endpoint
///
/// POST /search
///
/// Request body:
/// ```json
/// {
///   "job_query": "engineer",
///   "hobby_query": "chess, reading",
///   "age_range": { "min": 25, "max": 35 },
///   "location_query": "berlin",
///   "qualities_query": ["kind"],
///   "gender_query": "f"
/// }
/// ```
async fn search(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> Result<HttpResponse, SearchError> {
    let search_id = uuid::Uuid::new_v4();

    // Reject bad filters before the store is touched
    let criteria = normalize(&req).map_err(|e| {
        tracing::warn!("Search {} rejected: {}", search_id, e);
        e
    })?;

    let profiles = state.store.snapshot().await.map_err(|e| {
        tracing::error!("Search {} could not read the profile store: {}", search_id, e);
        SearchError::from(e)
    })?;

    let result = collect_results(&criteria, profiles.iter());

    tracing::info!(
        "Search {} on {:?} matched {} of {} profiles",
        search_id,
        criteria.constrained_fields(),
        result.len(),
        profiles.len()
    );

    Ok(HttpResponse::Ok().json(result))
}

/// Single-term search across every profile field
///
/// GET /search?query={term}
async fn quick_search(
    state: web::Data<AppState>,
    query: web::Query<QuickSearchQuery>,
) -> Result<HttpResponse, SearchError> {
    let term = query.query.as_deref().unwrap_or_default();
    if term.trim().is_empty() {
        return Err(SearchError::MalformedPayload("No query parameter provided".to_string()));
    }

    let profiles = state.store.snapshot().await?;
    let result = run_quick_search(term, profiles.iter())?;

    tracing::info!("Quick search matched {} of {} profiles", result.len(), profiles.len());

    Ok(HttpResponse::Ok().json(result))
}

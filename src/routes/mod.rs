// Route exports
pub mod search;

use actix_web::web;

pub use search::AppState;

/// The search form posts to `/search` at the root, so routes are not scoped
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(search::configure);
}

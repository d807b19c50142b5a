//! songlib-server library - song library HTTP service
//!
//! Stores songs (group, title, release date, lyrics, link), enriches new
//! songs from an external info service and serves lyrics one page of verses
//! at a time.

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod error;
pub mod logging;
pub mod merge;
pub mod query;
pub mod services;
pub mod verses;

pub use error::{ApiError, ApiResult};

use services::SongInfoProvider;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Enrichment source for newly added songs
    pub lyrics: Arc<dyn SongInfoProvider>,
    /// Mount the canned `/info` endpoint
    pub serve_info_stub: bool,
}

impl AppState {
    pub fn new(db: SqlitePool, lyrics: Arc<dyn SongInfoProvider>, serve_info_stub: bool) -> Self {
        Self {
            db,
            lyrics,
            serve_info_stub,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, patch};

    let mut router = Router::new()
        .route("/library", get(api::list_library))
        .route(
            "/song",
            get(api::get_song)
                .post(api::add_song)
                .patch(api::update_song)
                .put(api::update_song)
                .delete(api::delete_song),
        )
        .route("/renamegroup", patch(api::rename_group))
        .merge(api::health_routes());

    if state.serve_info_stub {
        router = router.route("/info", get(api::song_info));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

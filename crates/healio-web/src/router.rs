//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    compatibility::{api_compatibility, api_predict, compatibility_page, compatibility_submit},
    home::{home_page, pharmai_page},
    molecules::{
        api_molecule_analyze, api_molecule_detail, api_molecule_export, api_molecules,
        visualization_page,
    },
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(home_page))
        .route("/pharmai", get(pharmai_page))
        .route("/compatibility", get(compatibility_page).post(compatibility_submit))
        .route("/molecular-visualization", get(visualization_page))
        // API endpoints
        .route("/api/compatibility", get(api_compatibility))
        .route("/api/predict", post(api_predict))
        .route("/api/molecules", get(api_molecules))
        .route("/api/molecules/analyze", post(api_molecule_analyze))
        .route("/api/molecules/{id}", get(api_molecule_detail))
        .route("/api/molecules/{id}/export", get(api_molecule_export))
        // Static files
        .nest_service("/static", ServeDir::new(static_dir))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

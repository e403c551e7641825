// FICHIER : src/server/mod.rs

//! Surface HTTP du service : routage axum, état partagé, CORS.
//! Les handlers sont des habillages fins au-dessus de `spectra_db`.

pub mod handlers;

use crate::config::ServerConfig;
use crate::spectra_db::SpectraDbConfig;
use crate::utils::error::Result;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub db: SpectraDbConfig,
}

pub fn build_router(db: SpectraDbConfig) -> Router {
    Router::new()
        .route("/api/dyes", get(handlers::list_dyes))
        .route("/api/dyes/{id}", get(handlers::get_dye))
        .route("/api/dyes/{id}/brightness", post(handlers::set_brightness))
        .route("/api/filters", get(handlers::list_filters))
        .route("/api/filters/{id}", get(handlers::get_filter))
        .route("/api/cameras", get(handlers::list_cameras))
        .route("/api/cameras/{id}", get(handlers::get_camera))
        .route(
            "/api/instrument_configs",
            get(handlers::list_instrument_configs).post(handlers::save_instrument_config),
        )
        .route(
            "/api/settings",
            get(handlers::get_settings).post(handlers::save_settings),
        )
        .layer(TraceLayer::new_for_http())
        // Le client de visualisation est servi depuis une autre origine
        .layer(CorsLayer::permissive())
        .with_state(AppState { db })
}

pub async fn run(config: ServerConfig) -> Result<()> {
    let db = SpectraDbConfig::new(config.data_root.clone());
    let app = build_router(db);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 lumispec à l'écoute sur http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

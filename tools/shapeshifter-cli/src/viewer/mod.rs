//! Web viewer for a decoded dump
//!
//! Serves a bank index, a page per bank with every wave drawn and playable,
//! and the PNG/WAV endpoints those pages embed.
//!
//! The decoded config is loaded once, wrapped in [`ViewerState`] and handed
//! to each handler through axum's `State` extractor. Handlers only read it.

mod error;
mod handlers;
mod html;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use shapeshifter::Config;
use tower_http::trace::TraceLayer;

use crate::config::ViewerSettings;

/// Shared, read-only state behind every request
#[derive(Clone)]
pub struct ViewerState {
    pub config: Arc<Config>,
    pub settings: Arc<ViewerSettings>,
}

impl ViewerState {
    pub fn new(config: Config, settings: ViewerSettings) -> Self {
        Self {
            config: Arc::new(config),
            settings: Arc::new(settings),
        }
    }
}

/// Build the viewer's routes
pub fn router(state: ViewerState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/bank/:index", get(handlers::bank))
        .route("/draw", get(handlers::draw))
        .route("/play", get(handlers::play))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

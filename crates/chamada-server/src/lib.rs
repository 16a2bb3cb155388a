#![forbid(unsafe_code)]
//! HTTP surface of the attendance tracker: one submission form, one POST
//! write path and two read views over the record store.

use axum::routing::get;
use axum::Router;
use chamada_model::Roster;
use chamada_store::LocalFsStore;
use std::sync::Arc;

pub mod config;
pub mod detail;
mod http;
pub mod index;
pub mod submission;

pub use config::AppConfig;

pub const CRATE_NAME: &str = "chamada-server";

/// Shared request state. The roster is immutable after startup and the
/// store holds nothing but its root path, so cloning is cheap and handlers
/// never coordinate.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<Roster>,
    pub store: Arc<LocalFsStore>,
}

impl AppState {
    #[must_use]
    pub fn new(roster: Roster, store: LocalFsStore) -> Self {
        Self {
            roster: Arc::new(roster),
            store: Arc::new(store),
        }
    }
}

#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(http::handlers::form_handler).post(http::handlers::submit_handler),
        )
        .route("/atividades", get(http::handlers::activities_handler))
        .route(
            "/atividade/:ficheiro",
            get(http::handlers::activity_detail_handler),
        )
        .with_state(state)
}

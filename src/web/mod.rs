pub mod health;
pub mod items;

use crate::db::Repository;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>) -> Self {
        Self { repo }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(items::list))
        .route("/add", get(items::add_form).post(items::add))
        .route("/edit/:id", get(items::edit_form).post(items::edit))
        .route("/delete/:id", post(items::delete))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub mod client;
pub mod db;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod options;
pub mod rejections;
pub mod services;
pub mod validation;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::quiz::QuizService;

#[derive(Clone)]
pub struct AppState {
    pub quizzes: QuizService,
}

impl AppState {
    pub fn new(db: db::Db) -> Self {
        Self {
            quizzes: QuizService::new(db),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::quiz::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

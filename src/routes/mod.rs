use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use mealboard_plan::PlannerSession;
use tokio::sync::RwLock;

use crate::template::{NotFoundTemplate, Template};

mod assets;
mod board;
mod health;
mod plan;
mod suggestions;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub session: Arc<RwLock<PlannerSession>>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(board::page))
        .route("/plan/{day}/add", get(plan::open))
        .route("/plan/assign", post(plan::assign))
        .route("/plan/cancel", post(plan::cancel))
        .route("/plan/{day}/toggle", post(plan::toggle))
        .route("/plan/{day}/remove", post(plan::remove))
        .route("/suggestions/draw", post(suggestions::draw))
        .route("/suggestions/consume", post(suggestions::consume))
        .fallback(fallback)
        .nest_service("/static", assets::AssetsService::new())
        .with_state(app_state)
}

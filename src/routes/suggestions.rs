use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};

use crate::routes::AppState;

pub async fn draw(State(app): State<AppState>) -> impl IntoResponse {
    let pick = app.session.write().await.draw_suggestion();
    tracing::debug!(suggestion = pick, "suggestion drawn");

    Redirect::to("/")
}

/// Copies the pending suggestion into the open editor's name field.
/// A no-op when no editor is open or nothing has been drawn.
pub async fn consume(State(app): State<AppState>) -> impl IntoResponse {
    app.session.write().await.consume_suggestion();

    Redirect::to("/")
}

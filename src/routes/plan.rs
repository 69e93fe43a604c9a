use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use mealboard_plan::{Error, Weekday};
use serde::Deserialize;

use crate::{routes::AppState, template::Template};

/// GET /plan/{day}/add - open the meal editor for an empty day.
/// Opening an occupied day changes nothing; either way the client
/// lands back on the board.
pub async fn open(State(app): State<AppState>, Path(day): Path<Weekday>) -> impl IntoResponse {
    let mut session = app.session.write().await;
    session.open_editor(day);

    Redirect::to("/")
}

#[derive(Deserialize)]
pub struct AssignInput {
    pub name: String,
    #[serde(default)]
    pub note: String,
}

#[tracing::instrument(skip_all)]
pub async fn assign(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<AssignInput>,
) -> Response {
    let mut session = app.session.write().await;

    match session.submit(&input.name, &input.note) {
        Ok(id) => {
            tracing::info!(meal = id, "meal assigned");

            Redirect::to("/").into_response()
        }
        Err(Error::Validate(_)) => template
            .render(super::board::view(
                &session,
                Some("error_name_required".to_owned()),
            ))
            .into_response(),
        Err(Error::Server(err)) => {
            tracing::error!("{err}");

            template
                .render(super::board::view(&session, Some("error_server".to_owned())))
                .into_response()
        }
    }
}

pub async fn cancel(State(app): State<AppState>) -> impl IntoResponse {
    app.session.write().await.cancel_editor();

    Redirect::to("/")
}

pub async fn toggle(State(app): State<AppState>, Path(day): Path<Weekday>) -> impl IntoResponse {
    app.session.write().await.plan.toggle_completed(day);

    Redirect::to("/")
}

pub async fn remove(State(app): State<AppState>, Path(day): Path<Weekday>) -> impl IntoResponse {
    if let Some(meal) = app.session.write().await.plan.remove(day) {
        tracing::info!(day = %day, meal = meal.id, "meal removed");
    }

    Redirect::to("/")
}

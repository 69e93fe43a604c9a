use axum::{extract::State, response::IntoResponse};
use mealboard_plan::{EditSession, Meal, PlannerSession, Weekday};
use strum::VariantArray;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

pub struct DayCard {
    pub day: Weekday,
    pub meal: Option<Meal>,
}

pub struct EditorView {
    pub day: Weekday,
    pub draft_name: String,
    pub draft_note: String,
}

#[derive(askama::Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub days: Vec<DayCard>,
    pub suggestion: Option<String>,
    pub editor: Option<EditorView>,
    pub error_message: Option<String>,
}

/// Snapshot of the planner session, ready for rendering.
pub(super) fn view(session: &PlannerSession, error_message: Option<String>) -> BoardTemplate {
    let days = Weekday::VARIANTS
        .iter()
        .map(|day| DayCard {
            day: *day,
            meal: session.plan.meal(*day).cloned(),
        })
        .collect();

    let editor = match session.edit() {
        EditSession::Open {
            day,
            draft_name,
            draft_note,
        } => Some(EditorView {
            day: *day,
            draft_name: draft_name.to_owned(),
            draft_note: draft_note.to_owned(),
        }),
        EditSession::Closed => None,
    };

    BoardTemplate {
        days,
        suggestion: session.suggestion().map(str::to_owned),
        editor,
        error_message,
    }
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let session = app.session.read().await;

    template.render(view(&session, None))
}

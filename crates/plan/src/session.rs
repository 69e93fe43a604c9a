use rand::Rng;

use crate::{AssignMealInput, Error, Result, SUGGESTIONS, Weekday, WeeklyPlan};

/// Modal editor state. At most one editor is open at a time, and only
/// for a day whose slot is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditSession {
    #[default]
    Closed,
    Open {
        day: Weekday,
        draft_name: String,
        draft_note: String,
    },
}

impl EditSession {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlannerSession {
    pub plan: WeeklyPlan,
    edit: EditSession,
    suggestion: Option<String>,
}

impl PlannerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(&self) -> &EditSession {
        &self.edit
    }

    /// Last drawn suggestion still waiting to be used.
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Opens the editor for `day` with empty drafts. Refused when the
    /// day already holds a meal.
    pub fn open_editor(&mut self, day: Weekday) -> bool {
        if self.plan.meal(day).is_some() {
            return false;
        }

        self.edit = EditSession::Open {
            day,
            draft_name: String::new(),
            draft_note: String::new(),
        };

        true
    }

    pub fn cancel_editor(&mut self) {
        self.edit = EditSession::Closed;
    }

    /// Assigns the submitted meal to the open editor's day. On success the
    /// editor closes; on validation failure it stays open with the submitted
    /// drafts so nothing typed is lost.
    pub fn submit(&mut self, name: &str, note: &str) -> Result<String> {
        let EditSession::Open { day, .. } = &self.edit else {
            return Err(Error::Server("no meal editor open".to_owned()));
        };
        let day = *day;

        let assigned = self.plan.assign(
            day,
            AssignMealInput {
                name: name.to_owned(),
                note: note.to_owned(),
            },
        );

        match assigned {
            Ok(id) => {
                self.edit = EditSession::Closed;
                Ok(id)
            }
            Err(err) => {
                self.edit = EditSession::Open {
                    day,
                    draft_name: name.to_owned(),
                    draft_note: note.to_owned(),
                };
                Err(err)
            }
        }
    }

    /// Draws a random catalog entry and keeps it until consumed or replaced
    /// by a later draw.
    pub fn draw_suggestion(&mut self) -> &'static str {
        let pick = SUGGESTIONS[rand::rng().random_range(0..SUGGESTIONS.len())];
        self.suggestion = Some(pick.to_owned());
        pick
    }

    /// Moves the pending suggestion into the open editor's name draft.
    /// Spends the suggestion; a no-op without an open editor or without
    /// a pending suggestion.
    pub fn consume_suggestion(&mut self) -> bool {
        if !self.edit.is_open() {
            return false;
        }

        let Some(suggestion) = self.suggestion.take() else {
            return false;
        };

        if let EditSession::Open { draft_name, .. } = &mut self.edit {
            *draft_name = suggestion;
        }

        true
    }
}

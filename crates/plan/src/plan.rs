use ulid::Ulid;
use validator::Validate;

use crate::{Meal, Result, Weekday};

#[derive(Debug, Validate)]
pub struct AssignMealInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(max = 500))]
    pub note: String,
}

/// One slot per weekday, Monday first. A day holds at most one meal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyPlan {
    slots: [Option<Meal>; 7],
}

impl WeeklyPlan {
    pub fn meal(&self, day: Weekday) -> Option<&Meal> {
        self.slots[day as usize].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Installs a fresh meal on `day`, replacing whatever occupied the slot.
    /// Name and note are trimmed before validation.
    pub fn assign(&mut self, day: Weekday, input: AssignMealInput) -> Result<String> {
        let input = AssignMealInput {
            name: input.name.trim().to_owned(),
            note: input.note.trim().to_owned(),
        };
        input.validate()?;

        let id = Ulid::new().to_string();
        self.slots[day as usize] = Some(Meal {
            id: id.clone(),
            name: input.name,
            note: input.note,
            completed: false,
        });

        Ok(id)
    }

    pub fn toggle_completed(&mut self, day: Weekday) -> bool {
        match &mut self.slots[day as usize] {
            Some(meal) => {
                meal.completed = !meal.completed;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, day: Weekday) -> Option<Meal> {
        self.slots[day as usize].take()
    }
}

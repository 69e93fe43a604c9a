use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// A planned meal occupying one weekday slot. Never edited in place:
/// removal and re-assignment is the only path to change name or note.
#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub note: String,
    pub completed: bool,
}

use thiserror::Error;

use crate::domain::GoalField;

pub type InputResult<T> = Result<T, InputError>;

/// Rejections raised at the input boundary. The goal state is never touched when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field}: '{raw}' is not a number")]
    NotANumber { field: GoalField, raw: String },

    #[error("{field}: value must be finite, got {value}")]
    NonFinite { field: GoalField, value: f64 },

    #[error("no control provides a value for '{0}'")]
    MissingControl(&'static str),

    #[error("unknown control id '{0}'")]
    UnknownControl(String),

    #[error("'{0}' is computed by the projection and cannot be set")]
    DerivedOutput(&'static str),
}

/// Fatal conditions hit while bringing the application up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("could not find element with id '{0}'")]
    MissingElement(&'static str),

    #[error("element '{0}' is not a drawable canvas")]
    NotACanvas(&'static str),

    #[error("initial goal state is invalid: {0}")]
    InvalidInitialState(#[from] InputError),
}

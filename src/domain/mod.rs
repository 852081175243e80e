mod field;
mod params;
mod parse;

pub use field::{GoalField, TIME_TO_SAVE_ID};
pub use params::{GoalOutputs, GoalParams, MONTHS_PER_YEAR};
pub use parse::{ensure_finite, parse_field};

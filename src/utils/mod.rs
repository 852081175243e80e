mod maths_utils;
mod perf;
mod time_utils;

pub use maths_utils::nice_step;
pub use time_utils::{AppInstant, MONTHS_IN_YEAR, format_months};

// Top Level Constants

/// Id of the canvas the web build draws into.
pub const CANVAS_ID: &str = "savingsChart";

pub mod projection {
    /// Longest run the engine simulates before declaring the goal unreachable (100 years).
    pub const DEFAULT_MAX_MONTHS: usize = 1_200;
    /// Hard ceiling for `--max-months`, keeps a single frame's work bounded.
    pub const MAX_MONTHS_LIMIT: usize = 12_000;
}

//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every projection run (months reached / reason for giving up).
    pub log_projection: bool,

    /// Log every accepted slider or text edit.
    pub log_input: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    /// Dump the startup goal state as JSON.
    pub log_startup_state: bool,
}

pub const DF: LogFlags = LogFlags {
    log_startup_state: true,

    log_projection: false,
    log_input: false,
    log_performance: false,
};

// src/app/state.rs

#[derive(Clone, Default)]
pub(crate) struct RunningState;

/// Startup could not build a valid goal; shown until restart.
#[derive(Clone)]
pub(crate) struct FailedState {
    pub(crate) message: String,
}

pub(crate) enum AppState {
    Running(RunningState),
    Failed(FailedState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Running(RunningState)
    }
}

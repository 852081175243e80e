mod phases;
mod root;
mod state;

pub(crate) use state::{AppState, FailedState, RunningState};

pub use root::App;

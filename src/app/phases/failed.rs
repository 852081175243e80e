use eframe::egui::Context;

use crate::app::{
    App,
    phases::phase_view::PhaseView,
    state::{AppState, FailedState},
};
use crate::ui::render_failed;

impl PhaseView for FailedState {
    fn tick(&mut self, _app: &mut App, ctx: &Context) -> AppState {
        render_failed(ctx, self);

        AppState::Failed(self.clone())
    }
}

use {
    crate::{app::FailedState, config::PLOT_CONFIG, ui::UI_TEXT},
    eframe::egui::{CentralPanel, Context, RichText},
};

/// Startup failed; nothing else is drawn until the app is restarted.
pub(crate) fn render_failed(ctx: &Context, state: &FailedState) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(
                RichText::new(&UI_TEXT.error_startup_title)
                    .size(24.0)
                    .strong()
                    .color(PLOT_CONFIG.color_error),
            );
            ui.add_space(20.0);
            ui.label(
                RichText::new(&state.message)
                    .monospace()
                    .color(PLOT_CONFIG.color_text_neutral),
            );
            ui.add_space(10.0);
            ui.label(
                RichText::new(&UI_TEXT.error_startup_body)
                    .italics()
                    .color(PLOT_CONFIG.color_text_subdued),
            );
        });
    });
}

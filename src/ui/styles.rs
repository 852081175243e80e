use {
    crate::{config::PLOT_CONFIG, ui::UI_CONFIG},
    eframe::egui::{Color32, RichText, Ui},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.palette.field_heading)
}

pub fn get_outcome_color(reached: bool) -> Color32 {
    if reached {
        PLOT_CONFIG.color_profit
    } else {
        PLOT_CONFIG.color_warning
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_error(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text.into())
                .small()
                .color(PLOT_CONFIG.color_text_subdued),
        );
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text.into()).small().color(PLOT_CONFIG.color_error));
    }

    /// "Label: value" pair, value tinted.
    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.label(RichText::new(format!("{}:", label)).color(PLOT_CONFIG.color_text_subdued));
        self.label(RichText::new(value).strong().color(color));
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text).strong());
    }
}

use eframe::egui::{Color32, Frame, Margin};

pub use crate::ui::ui_text::UI_TEXT;

/// The four areas of the planner window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelArea {
    Toolbar,
    Inputs,
    Status,
    Chart,
}

#[derive(Clone, Copy)]
pub struct UiPalette {
    pub text: Color32,
    pub title: Color32,
    pub field_heading: Color32,
    pub chart_background: Color32,
    pub panel_background: Color32,
}

#[derive(Clone, Copy)]
pub struct UiConfig {
    pub palette: UiPalette,
    /// Wide enough for a slider plus a "$1,000,000.00" edit box.
    pub inputs_width: f32,
    pub value_box_width: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    palette: UiPalette {
        text: Color32::from_gray(170),
        title: Color32::from_rgb(75, 192, 192),
        field_heading: Color32::from_rgb(230, 170, 80),
        chart_background: Color32::from_rgb(20, 24, 28),
        panel_background: Color32::from_rgb(28, 30, 33),
    },
    inputs_width: 300.0,
    value_box_width: 110.0,
};

impl UiConfig {
    pub fn frame(&self, area: PanelArea) -> Frame {
        let (fill, inner_margin) = match area {
            PanelArea::Toolbar | PanelArea::Inputs => {
                (self.palette.panel_background, Margin::same(8))
            }
            PanelArea::Status => (self.palette.panel_background, Margin::symmetric(8, 4)),
            // Extra right margin so the last month label is not clipped
            PanelArea::Chart => (
                self.palette.chart_background,
                Margin {
                    left: 4,
                    right: 12,
                    top: 4,
                    bottom: 0,
                },
            ),
        };
        Frame::new().fill(fill).inner_margin(inner_margin)
    }
}

//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// The savings trajectory ("Savings Over Time")
    pub savings_line_color: Color32,
    pub savings_line_width: f32,
    /// Deposits-only reference line (no interest)
    pub principal_line_color: Color32,
    pub principal_line_width: f32,
    /// Dashed horizontal line at the goal amount
    pub goal_line_color: Color32,
    pub goal_line_width: f32,
    pub goal_dash_length: f32,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    /// Target number of x axis labels
    pub x_axis_target_marks: f64,

    // --- SEMANTIC COLORS ---
    pub color_profit: Color32,
    pub color_warning: Color32,
    pub color_error: Color32,
    pub color_info: Color32,

    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    // rgba(75, 192, 192, 1) teal
    savings_line_color: Color32::from_rgb(75, 192, 192),
    savings_line_width: 2.0,

    principal_line_color: Color32::from_gray(140),
    principal_line_width: 1.0,

    goal_line_color: Color32::from_rgb(255, 215, 0), // Gold
    goal_line_width: 1.5,
    goal_dash_length: 10.0,

    plot_y_padding_pct: 0.05,
    x_axis_target_marks: 8.0,

    color_profit: Color32::from_rgb(100, 255, 100),
    color_warning: Color32::from_rgb(255, 215, 0),
    color_error: Color32::from_rgb(255, 80, 80),
    color_info: Color32::from_rgb(173, 216, 230), // Light Blue

    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
};

mod plot_layers;
mod screens;
mod styles;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_render;
mod ui_text;
pub mod utils;

pub(crate) use screens::render_failed;

pub(crate) use styles::{UiStyleExt, get_outcome_color};

pub(crate) use ui_config::{PanelArea, UI_CONFIG, UI_TEXT};
pub(crate) use ui_panels::{
    GoalInputEvent, GoalInputPanel, InputBuffers, Panel, PlannerEvent, PlannerPanel,
};
pub(crate) use ui_plot_view::{PlotView, PlotVisibility};

use egui_plot::{HLine, Line, LineStyle, PlotPoints, PlotUi};

use crate::config::PLOT_CONFIG;
use crate::models::ChartSeries;
use crate::ui::UI_TEXT;

/// Everything a layer needs to draw itself for one frame.
pub struct LayerContext<'a> {
    pub series: &'a ChartSeries,
    pub goal_amount: f64,
}

pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

/// The projected balance, month by month.
pub struct SavingsLineLayer;

impl PlotLayer for SavingsLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.series.is_empty() {
            return;
        }
        plot_ui.line(
            Line::new(
                UI_TEXT.plot_title.as_str(),
                PlotPoints::new(ctx.series.balance_points()),
            )
            .color(PLOT_CONFIG.savings_line_color)
            .width(PLOT_CONFIG.savings_line_width),
        );
    }
}

/// What the balance would be with deposits alone. The gap to the savings line is interest.
pub struct PrincipalLineLayer;

impl PlotLayer for PrincipalLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.series.is_empty() {
            return;
        }
        plot_ui.line(
            Line::new(
                UI_TEXT.plot_legend_principal.as_str(),
                PlotPoints::new(ctx.series.principal_points()),
            )
            .color(PLOT_CONFIG.principal_line_color)
            .width(PLOT_CONFIG.principal_line_width)
            .style(LineStyle::Dotted { spacing: 6.0 }),
        );
    }
}

pub struct GoalLineLayer;

impl PlotLayer for GoalLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        plot_ui.hline(
            HLine::new(UI_TEXT.plot_legend_goal.as_str(), ctx.goal_amount)
                .color(PLOT_CONFIG.goal_line_color)
                .width(PLOT_CONFIG.goal_line_width)
                .style(LineStyle::Dashed {
                    length: PLOT_CONFIG.goal_dash_length,
                }),
        );
    }
}

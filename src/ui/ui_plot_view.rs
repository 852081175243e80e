use eframe::egui::Ui;
use egui_plot::{GridMark, Legend, Plot};

use crate::config::PLOT_CONFIG;
use crate::models::GoalSession;
use crate::ui::UI_TEXT;
use crate::ui::plot_layers::{
    GoalLineLayer, LayerContext, PlotLayer, PrincipalLineLayer, SavingsLineLayer,
};
use crate::ui::utils::format_money_compact;
use crate::utils::nice_step;

#[derive(Debug, Clone, Copy)]
pub(crate) struct PlotVisibility {
    pub savings: bool,
    pub principal: bool,
    pub goal_line: bool,
}

impl Default for PlotVisibility {
    fn default() -> Self {
        Self {
            savings: true,
            principal: false,
            goal_line: true,
        }
    }
}

/// Axis extents for one projection result.
#[derive(Clone, Debug)]
pub struct PlotCache {
    pub revision: u64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

#[derive(Default)]
pub struct PlotView {
    cache: Option<PlotCache>,
}

impl PlotView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    fn bounds(&mut self, session: &GoalSession) -> PlotCache {
        if let Some(cache) = &self.cache {
            if cache.revision == session.revision() {
                return cache.clone();
            }
        }

        let series = session.series();
        let params = session.params();
        let top = series
            .max_value()
            .unwrap_or(0.0)
            .max(params.goal_amount())
            .max(params.initial_amount());
        let bottom = params.initial_amount().min(0.0);
        let pad = (top - bottom).abs() * PLOT_CONFIG.plot_y_padding_pct;

        let cache = PlotCache {
            revision: session.revision(),
            x_max: series.len().max(1) as f64,
            y_min: bottom - pad,
            y_max: top + pad,
        };
        self.cache = Some(cache.clone());
        cache
    }

    pub(crate) fn show(&mut self, ui: &mut Ui, session: &GoalSession, visibility: PlotVisibility) {
        let bounds = self.bounds(session);

        let mut layers: Vec<Box<dyn PlotLayer>> = Vec::new();
        if visibility.goal_line {
            layers.push(Box::new(GoalLineLayer));
        }
        if visibility.principal {
            layers.push(Box::new(PrincipalLineLayer));
        }
        if visibility.savings {
            layers.push(Box::new(SavingsLineLayer));
        }

        let ctx = LayerContext {
            series: session.series(),
            goal_amount: session.params().goal_amount(),
        };

        Plot::new("savings_plot")
            .legend(Legend::default())
            .x_axis_label(UI_TEXT.plot_x_axis.as_str())
            .y_axis_label(UI_TEXT.plot_y_axis.as_str())
            .y_axis_formatter(|mark, _range| format_money_compact(mark.value))
            .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
            .x_grid_spacer(|input| {
                // Whole months only
                let (min, max) = input.bounds;
                let step = nice_step(max - min, PLOT_CONFIG.x_axis_target_marks, 1.0);
                let start = (min / step).ceil() as i64;
                let end = (max / step).floor() as i64;
                (start..=end)
                    .map(|i| GridMark {
                        value: i as f64 * step,
                        step_size: step,
                    })
                    .collect()
            })
            .include_x(0.0)
            .include_x(bounds.x_max)
            .include_y(bounds.y_min)
            .include_y(bounds.y_max)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .label_formatter(|name, value| {
                if name.is_empty() {
                    String::new()
                } else {
                    format!(
                        "{}\nMonth {:.0}: {}",
                        name,
                        value.x,
                        format_money_compact(value.y)
                    )
                }
            })
            .show(ui, |plot_ui| {
                for layer in &layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }
}

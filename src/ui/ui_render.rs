use eframe::egui::{CentralPanel, Context, RichText, ScrollArea, SidePanel, TopBottomPanel, Ui};

use crate::app::App;
use crate::config::PLOT_CONFIG;
use crate::models::ProjectionOutcome;
use crate::ui::utils::format_money;
use crate::ui::{
    GoalInputPanel, Panel, PanelArea, PlannerPanel, UI_CONFIG, UI_TEXT, UiStyleExt,
    get_outcome_color,
};
use crate::utils::format_months;

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.frame(PanelArea::Toolbar);

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(&UI_TEXT.app_title)
                            .strong()
                            .color(UI_CONFIG.palette.title),
                    );

                    ui.separator();

                    // LAYER VISIBILITY
                    ui.checkbox(&mut self.plot_visibility.savings, UI_TEXT.tb_savings.as_str());
                    ui.checkbox(
                        &mut self.plot_visibility.principal,
                        UI_TEXT.tb_principal.as_str(),
                    );
                    ui.checkbox(
                        &mut self.plot_visibility.goal_line,
                        UI_TEXT.tb_goal_line.as_str(),
                    );

                    ui.separator();
                    ui.label_subdued(UI_TEXT.tb_shortcuts.as_str());
                });
            });
    }

    pub(crate) fn render_left_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.frame(PanelArea::Inputs);

        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.inputs_width)
            .resizable(false)
            .frame(frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().id_salt("inputs_scroll").show(ui, |ui| {
                    let goal_events = GoalInputPanel::new(
                        self.session.state(),
                        &mut self.buffers,
                        self.session.outputs().time_to_save,
                        self.session.engine().max_months(),
                    )
                    .render(ui);

                    ui.add_space(16.0);

                    let planner_events = PlannerPanel::new(
                        self.target_months,
                        self.session.required_deposit(self.target_months),
                    )
                    .render(ui);

                    let changed = !goal_events.is_empty() || !planner_events.is_empty();
                    for event in goal_events {
                        self.handle_goal_input(event);
                    }
                    for event in planner_events {
                        self.handle_planner_event(event);
                    }
                    if changed {
                        ctx.request_repaint();
                    }
                });
            });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.frame(PanelArea::Status);

        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    self.render_status_outcome(ui);
                    ui.separator();
                    self.render_status_summary(ui);
                });
            });
    }

    fn render_status_outcome(&self, ui: &mut Ui) {
        let outcome = self.session.outcome();
        let color = get_outcome_color(outcome.is_reached());
        match outcome {
            ProjectionOutcome::Reached(p) if p.is_empty() => {
                ui.label(RichText::new(&UI_TEXT.sp_already_met).strong().color(color));
            }
            ProjectionOutcome::Reached(p) => {
                ui.label(
                    RichText::new(&UI_TEXT.sp_reached_in).color(PLOT_CONFIG.color_text_neutral),
                );
                ui.label(RichText::new(format_months(p.months())).strong().color(color));
            }
            ProjectionOutcome::Unreachable { reason, .. } => {
                ui.label(RichText::new(&UI_TEXT.sp_unreachable).strong().color(color));
                ui.label(RichText::new(reason.to_string()).color(color));
            }
        }
    }

    fn render_status_summary(&self, ui: &mut Ui) {
        let summary = self.session.outcome().projection().summary();
        ui.metric(
            &UI_TEXT.sp_deposited,
            &format_money(summary.total_deposited),
            PLOT_CONFIG.color_text_neutral,
        );
        ui.metric(
            &UI_TEXT.sp_interest,
            &format_money(summary.interest_earned),
            PLOT_CONFIG.color_info,
        );
        ui.metric(
            &UI_TEXT.sp_final,
            &format_money(summary.final_balance),
            PLOT_CONFIG.color_profit,
        );
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = UI_CONFIG.frame(PanelArea::Chart);

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.label_subheader(UI_TEXT.plot_title.as_str());
                self.plot_view
                    .show(ui, &self.session, self.plot_visibility);
            });
    }
}

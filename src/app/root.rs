use {
    eframe::{
        Frame,
        egui::{Context, Key},
    },
    std::mem,
};

use crate::{
    Cli,
    app::{AppState, FailedState, RunningState, phases::PhaseView},
    config::{DEFAULT_PARAMS, SLIDERS},
    models::{GoalSession, GoalState},
    ui::{
        GoalInputEvent, InputBuffers, PlannerEvent, PlotView, PlotVisibility,
        utils::setup_custom_visuals,
    },
};

pub struct App {
    pub(crate) session: GoalSession,
    pub(crate) buffers: InputBuffers,
    /// Horizon for the required-deposit solver. A real input, unlike `time_to_save`.
    pub(crate) target_months: usize,
    pub(crate) plot_view: PlotView,
    pub(crate) plot_visibility: PlotVisibility,
    state: AppState,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let (session, state) = match args.goal.session() {
            Ok(session) => (session, AppState::Running(RunningState)),
            Err(e) => {
                log::error!("Startup failed: {}", e);
                let fallback = GoalSession::new(GoalState::new(DEFAULT_PARAMS), args.goal.engine());
                (
                    fallback,
                    AppState::Failed(FailedState {
                        message: e.to_string(),
                    }),
                )
            }
        };

        #[cfg(debug_assertions)]
        if crate::config::DF.log_startup_state {
            match serde_json::to_string_pretty(&session.params()) {
                Ok(json) => log::info!("Startup goal state:\n{}", json),
                Err(e) => log::warn!("Could not serialize startup state: {}", e),
            }
        }

        let mut app = Self {
            session,
            buffers: InputBuffers::default(),
            target_months: SLIDERS.target_months.default as usize,
            plot_view: PlotView::new(),
            plot_visibility: PlotVisibility::default(),
            state,
        };
        app.buffers.refresh_all(&app.session);
        app
    }

    pub(crate) fn handle_goal_input(&mut self, event: GoalInputEvent) {
        self.buffers.apply(&mut self.session, event);
    }

    pub(crate) fn handle_planner_event(&mut self, event: PlannerEvent) {
        match event {
            PlannerEvent::TargetMonths(months) => {
                self.target_months = SLIDERS.target_months.clamp(months as f64) as usize;
            }
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // If the user is typing in a text box, don't trigger global hotkeys.
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(Key::Num1) {
                self.plot_visibility.savings = !self.plot_visibility.savings;
            }
            if i.key_pressed(Key::Num2) {
                self.plot_visibility.principal = !self.plot_visibility.principal;
            }
            if i.key_pressed(Key::Num3) {
                self.plot_visibility.goal_line = !self.plot_visibility.goal_line;
            }
        });
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        self.handle_global_shortcuts(ctx);
        self.render_top_panel(ctx);
        self.render_left_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Running(mut s) => s.tick(self, ctx),
            AppState::Failed(mut s) => s.tick(self, ctx),
        };
    }
}

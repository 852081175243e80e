use std::collections::BTreeMap;

use eframe::egui::{Grid, RichText, Slider, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::config::{PLOT_CONFIG, SLIDERS};
use crate::domain::{GoalField, MONTHS_PER_YEAR, TIME_TO_SAVE_ID};
use crate::models::{GoalSession, GoalState};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{format_field_value, format_money};
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::format_months;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Text shown in each control's edit box, plus the last rejection for that control.
#[derive(Debug, Clone, Default)]
pub struct InputBuffers {
    texts: BTreeMap<GoalField, String>,
    errors: BTreeMap<GoalField, String>,
}

impl InputBuffers {
    pub fn text_mut(&mut self, field: GoalField) -> &mut String {
        self.texts.entry(field).or_default()
    }

    pub fn set_text(&mut self, field: GoalField, text: String) {
        self.texts.insert(field, text);
    }

    pub fn error(&self, field: GoalField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn set_error(&mut self, field: GoalField, message: String) {
        self.errors.insert(field, message);
    }

    pub fn clear_error(&mut self, field: GoalField) {
        self.errors.remove(&field);
    }

    /// Shows the session's current value for `field` and drops any stale error.
    pub fn refresh(&mut self, session: &GoalSession, field: GoalField) {
        let value = session.state().get(field);
        self.set_text(field, format_field_value(field, value));
        self.clear_error(field);
    }

    pub fn refresh_all(&mut self, session: &GoalSession) {
        for field in GoalField::iter() {
            self.refresh(session, field);
        }
    }

    /// Feeds one input event into the session. Accepted values are echoed back in
    /// canonical form; rejected ones keep the typed text and show the error.
    pub fn apply(&mut self, session: &mut GoalSession, event: GoalInputEvent) {
        let (field, result) = match event {
            GoalInputEvent::SliderMoved(field, value) => {
                (field, session.set_value(field, SLIDERS.for_field(field).clamp(value)))
            }
            GoalInputEvent::TextCommitted(field, raw) => {
                // Focus left the box without an edit
                if raw == format_field_value(field, session.state().get(field)) {
                    self.clear_error(field);
                    return;
                }
                // Typed values may go past the slider range; only sliders clamp.
                (field, session.set_field(field, &raw))
            }
        };
        match result {
            Ok(_) => self.refresh(session, field),
            Err(e) => self.set_error(field, e.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GoalInputEvent {
    SliderMoved(GoalField, f64),
    TextCommitted(GoalField, String),
}

/// Sliders and edit boxes for the four goal inputs, plus the read-only time to save.
pub struct GoalInputPanel<'a> {
    state: &'a GoalState,
    buffers: &'a mut InputBuffers,
    time_to_save: Option<usize>,
    max_months: usize,
}

impl<'a> GoalInputPanel<'a> {
    pub fn new(
        state: &'a GoalState,
        buffers: &'a mut InputBuffers,
        time_to_save: Option<usize>,
        max_months: usize,
    ) -> Self {
        Self {
            state,
            buffers,
            time_to_save,
            max_months,
        }
    }

    fn render_field(&mut self, ui: &mut Ui, field: GoalField, events: &mut Vec<GoalInputEvent>) {
        let config = SLIDERS.for_field(field);

        ui.label_subheader(UI_TEXT.field_label(field));
        ui.horizontal(|ui| {
            let mut value = self.state.get(field);
            let slider = Slider::new(&mut value, config.min..=config.max)
                .logarithmic(config.logarithmic)
                .step_by(config.step)
                .show_value(false);
            if ui.add(slider).changed() {
                events.push(GoalInputEvent::SliderMoved(field, value));
            }

            let text = self.buffers.text_mut(field);
            let response = ui.add(
                TextEdit::singleline(text)
                    .id_salt(field.value_id())
                    .desired_width(UI_CONFIG.value_box_width),
            );
            // Single-line edits drop focus on Enter as well as on click-away
            if response.lost_focus() {
                events.push(GoalInputEvent::TextCommitted(field, text.clone()));
            }
        });

        if field == GoalField::ContributionAmount {
            ui.label_subdued(format!(
                "{} ({}/mo)",
                UI_TEXT.hint_contribution,
                format_money(self.state.params().monthly_deposit())
            ));
        }
        if let Some(err) = self.buffers.error(field) {
            ui.label_error(err.to_string());
        }
        ui.add_space(6.0);
    }

    fn render_time_to_save(&self, ui: &mut Ui) {
        ui.label_subheader(UI_TEXT.label_time_to_save.as_str());
        ui.horizontal(|ui| {
            let mut months = self.time_to_save.unwrap_or(self.max_months) as f64;
            ui.add_enabled(
                false,
                Slider::new(&mut months, 0.0..=self.max_months as f64).show_value(false),
            )
            .on_disabled_hover_text(UI_TEXT.hint_time_to_save.as_str());

            let text = match self.time_to_save {
                Some(m) => RichText::new(format_months(m)).color(PLOT_CONFIG.color_profit),
                None => RichText::new("--").color(PLOT_CONFIG.color_warning),
            };
            ui.label(text.strong()).on_hover_text(TIME_TO_SAVE_ID);
        });
    }
}

impl Panel for GoalInputPanel<'_> {
    type Event = GoalInputEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.heading(UI_TEXT.inputs_heading.as_str());
        ui.separator();

        for field in GoalField::iter() {
            self.render_field(ui, field, &mut events);
        }

        ui.separator();
        self.render_time_to_save(ui);

        events
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlannerEvent {
    TargetMonths(usize),
}

/// "How much per month to finish by N months?"
pub struct PlannerPanel {
    target_months: usize,
    required_deposit: Option<f64>,
}

impl PlannerPanel {
    pub fn new(target_months: usize, required_deposit: Option<f64>) -> Self {
        Self {
            target_months,
            required_deposit,
        }
    }
}

impl Panel for PlannerPanel {
    type Event = PlannerEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        let config = SLIDERS.target_months;

        ui.heading(UI_TEXT.planner_heading.as_str());
        ui.separator();

        ui.label_subheader(UI_TEXT.label_target_months.as_str());
        let mut months = self.target_months as f64;
        let slider = Slider::new(&mut months, config.min..=config.max)
            .step_by(config.step)
            .integer();
        if ui.add(slider).changed() {
            events.push(PlannerEvent::TargetMonths(months.round().max(1.0) as usize));
        }
        ui.label_subdued(format_months(self.target_months));

        Grid::new("planner_grid").num_columns(2).show(ui, |ui| {
            match self.required_deposit {
                Some(d) if d <= 0.0 => {
                    ui.metric(
                        &UI_TEXT.label_required_deposit,
                        &UI_TEXT.label_required_already_met,
                        PLOT_CONFIG.color_profit,
                    );
                }
                Some(d) => {
                    ui.metric(
                        &UI_TEXT.label_required_deposit,
                        &format!("{} ({}/yr)", format_money(d), format_money(d * MONTHS_PER_YEAR)),
                        PLOT_CONFIG.color_info,
                    );
                }
                None => {
                    ui.metric(
                        &UI_TEXT.label_required_deposit,
                        &UI_TEXT.label_required_none,
                        PLOT_CONFIG.color_warning,
                    );
                }
            }
            ui.end_row();
        });

        events
    }
}

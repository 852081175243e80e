use crate::domain::{GoalField, GoalOutputs, GoalParams};
use crate::error::InputResult;
use crate::models::{
    ChartSeries, ControlSource, GoalState, ProjectionEngine, ProjectionOutcome,
    required_monthly_deposit,
};

/// Goal state plus everything derived from it. Every accepted edit re-runs the
/// (bounded) projection, so the outputs never lag the inputs.
#[derive(Debug, Clone)]
pub struct GoalSession {
    state: GoalState,
    engine: ProjectionEngine,
    outcome: ProjectionOutcome,
    outputs: GoalOutputs,
    series: ChartSeries,
    /// Bumped on every recompute; lets views cache per result.
    revision: u64,
}

impl GoalSession {
    pub fn new(state: GoalState, engine: ProjectionEngine) -> Self {
        let outcome = engine.project(&state.params());
        let mut session = Self {
            state,
            engine,
            outputs: GoalOutputs::default(),
            series: ChartSeries::default(),
            outcome,
            revision: 0,
        };
        session.publish();
        session
    }

    pub fn state(&self) -> &GoalState {
        &self.state
    }

    pub fn params(&self) -> GoalParams {
        self.state.params()
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    pub fn outcome(&self) -> &ProjectionOutcome {
        &self.outcome
    }

    pub fn outputs(&self) -> GoalOutputs {
        self.outputs
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_field(&mut self, field: GoalField, raw: &str) -> InputResult<f64> {
        let value = self.state.set_field(field, raw)?;
        self.recompute();
        Ok(value)
    }

    pub fn set_field_by_id(&mut self, id: &str, raw: &str) -> InputResult<(GoalField, f64)> {
        let changed = self.state.set_field_by_id(id, raw)?;
        self.recompute();
        Ok(changed)
    }

    pub fn set_value(&mut self, field: GoalField, value: f64) -> InputResult<f64> {
        let value = self.state.set_value(field, value)?;
        self.recompute();
        Ok(value)
    }

    pub fn synchronize<C: ControlSource + ?Sized>(&mut self, controls: &C) -> InputResult<()> {
        self.state.synchronize(controls)?;
        self.recompute();
        Ok(())
    }

    /// Monthly deposit that would hit the goal in exactly `months` months.
    pub fn required_deposit(&self, months: usize) -> Option<f64> {
        required_monthly_deposit(&self.state.params(), months)
    }

    fn recompute(&mut self) {
        let params = self.state.params();
        self.outcome = crate::trace_time!("Projection", 2_000, { self.engine.project(&params) });
        self.publish();
    }

    fn publish(&mut self) {
        self.outputs.time_to_save = self.outcome.months_to_goal();
        self.series = ChartSeries::from_projection(self.outcome.projection());
        self.revision += 1;
    }
}

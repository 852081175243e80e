use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::domain::{GoalField, GoalParams, TIME_TO_SAVE_ID, parse_field};
use crate::error::{InputError, InputResult};

/// Anything that can hand out the raw text of a control by its logical id.
pub trait ControlSource {
    fn raw_value(&self, id: &str) -> Option<&str>;
}

impl ControlSource for BTreeMap<String, String> {
    fn raw_value(&self, id: &str) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

impl ControlSource for [(&str, &str)] {
    fn raw_value(&self, id: &str) -> Option<&str> {
        self.iter().find(|(key, _)| *key == id).map(|(_, raw)| *raw)
    }
}

/// Holds the live goal parameters and keeps them in sync with the controls.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalState {
    params: GoalParams,
}

impl GoalState {
    pub fn new(params: GoalParams) -> Self {
        Self { params }
    }

    pub fn from_controls<C: ControlSource + ?Sized>(
        fallback: GoalParams,
        controls: &C,
    ) -> InputResult<Self> {
        let mut state = Self::new(fallback);
        state.synchronize(controls)?;
        Ok(state)
    }

    /// Snapshot handed to the projection engine.
    #[inline]
    pub fn params(&self) -> GoalParams {
        self.params
    }

    pub fn get(&self, field: GoalField) -> f64 {
        self.params.get(field)
    }

    /// Re-reads every control. All-or-nothing: on the first missing or malformed
    /// control the state is left as it was.
    pub fn synchronize<C: ControlSource + ?Sized>(&mut self, controls: &C) -> InputResult<()> {
        let mut next = self.params;
        for field in GoalField::iter() {
            let raw = controls
                .raw_value(field.id())
                .ok_or(InputError::MissingControl(field.id()))?;
            next.set_checked(field, parse_field(field, raw)?)?;
        }

        #[cfg(debug_assertions)]
        if crate::config::DF.log_input {
            log::info!("Synchronized goal state from controls: {:?}", next);
        }

        self.params = next;
        Ok(())
    }

    /// Updates one field from the raw text of its control.
    pub fn set_field(&mut self, field: GoalField, raw: &str) -> InputResult<f64> {
        let value = parse_field(field, raw).inspect_err(|e| {
            log::warn!("Rejected input: {}", e);
        })?;
        self.set_value(field, value)
    }

    /// Same as `set_field`, addressed by control id.
    pub fn set_field_by_id(&mut self, id: &str, raw: &str) -> InputResult<(GoalField, f64)> {
        if id == TIME_TO_SAVE_ID {
            return Err(InputError::DerivedOutput(TIME_TO_SAVE_ID));
        }
        let field = GoalField::from_id(id)
            .ok_or_else(|| InputError::UnknownControl(id.to_string()))?;
        let value = self.set_field(field, raw)?;
        Ok((field, value))
    }

    /// Direct numeric update, as produced by a slider drag.
    pub fn set_value(&mut self, field: GoalField, value: f64) -> InputResult<f64> {
        self.params.set_checked(field, value)?;

        #[cfg(debug_assertions)]
        if crate::config::DF.log_input {
            log::info!("{} <- {}", field, value);
        }

        Ok(value)
    }
}

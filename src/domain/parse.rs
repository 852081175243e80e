use crate::domain::GoalField;
use crate::error::{InputError, InputResult};

/// Parses the raw text of a control into a finite number.
///
/// Accepts surrounding whitespace, a `$` (after an optional minus) on money fields,
/// a trailing `%` on the rate and `,` thousands separators. Anything else (including
/// `NaN` and `inf`) is rejected instead of leaking a non-finite value into the goal state.
pub fn parse_field(field: GoalField, raw: &str) -> InputResult<f64> {
    let trimmed = raw.trim();
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let unit_stripped = if field.is_money() {
        unsigned.strip_prefix('$').unwrap_or(unsigned)
    } else {
        unsigned.strip_suffix('%').unwrap_or(unsigned)
    };
    let cleaned: String = sign
        .chars()
        .chain(unit_stripped.chars().filter(|c| *c != ',' && *c != '_'))
        .collect();

    let not_a_number = || InputError::NotANumber {
        field,
        raw: raw.to_string(),
    };

    // f64::from_str happily takes "inf" and "NaN"; only plain decimals get through here.
    if cleaned.is_empty()
        || !cleaned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return Err(not_a_number());
    }

    let value: f64 = cleaned.parse().map_err(|_| not_a_number())?;
    ensure_finite(field, value)
}

pub fn ensure_finite(field: GoalField, value: f64) -> InputResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NonFinite { field, value })
    }
}

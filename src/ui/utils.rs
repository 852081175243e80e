use eframe::egui::{Context, Visuals};

use crate::domain::GoalField;
use crate::ui::UI_CONFIG;

/// "$1,234.56" / "-$12.00".
pub fn format_money(amount: f64) -> String {
    if !amount.is_finite() {
        return "--".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = format!("{:.2}", amount.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    format!("{}${}.{}", sign, group_thousands(whole), frac)
}

/// Axis labels: "$950", "$12.5k", "$1.2M".
pub fn format_money_compact(amount: f64) -> String {
    let abs = amount.abs();
    let sign = if amount < 0.0 { "-" } else { "" };
    if abs >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs / 1_000_000.0)
    } else if abs >= 10_000.0 {
        format!("{}${:.0}k", sign, abs / 1_000.0)
    } else if abs >= 1_000.0 {
        format!("{}${:.1}k", sign, abs / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs)
    }
}

pub fn format_rate(rate_pct: f64) -> String {
    format!("{:.2}%", rate_pct)
}

/// Text shown inside a control's edit box. Parses back to the same value.
pub fn format_field_value(field: GoalField, value: f64) -> String {
    if field.is_money() {
        format_money(value)
    } else {
        format_rate(value)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    let palette = UI_CONFIG.palette;
    visuals.window_fill = palette.chart_background;
    visuals.panel_fill = palette.panel_background;

    // Readable idle text, accent color while a slider is grabbed
    visuals.widgets.noninteractive.fg_stroke.color = palette.text;
    visuals.widgets.inactive.fg_stroke.color = palette.text;
    visuals.widgets.hovered.fg_stroke.color = palette.title;
    visuals.widgets.active.fg_stroke.color = palette.title;

    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_field;

    #[test]
    fn money_gets_separators_and_cents() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(999.999), "$1,000.00");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(-12.0), "-$12.00");
        assert_eq!(format_money(f64::NAN), "--");
    }

    #[test]
    fn compact_money_for_axes() {
        assert_eq!(format_money_compact(950.0), "$950");
        assert_eq!(format_money_compact(1_500.0), "$1.5k");
        assert_eq!(format_money_compact(12_600.0), "$13k");
        assert_eq!(format_money_compact(2_400_000.0), "$2.4M");
    }

    #[test]
    fn edit_box_text_parses_back() {
        for (field, value) in [
            (GoalField::GoalAmount, 1_234_567.5),
            (GoalField::InitialAmount, 0.0),
            (GoalField::ContributionAmount, -12.0),
            (GoalField::InterestRate, 4.25),
        ] {
            let text = format_field_value(field, value);
            assert_eq!(parse_field(field, &text), Ok(value), "{text}");
        }
    }
}

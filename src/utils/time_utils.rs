/// `std::time::Instant` panics on wasm32; web-time falls back to `performance.now()` there.
pub type AppInstant = web_time::Instant;

pub const MONTHS_IN_YEAR: usize = 12;

/// "5Y 3M", "11 Months", "2 Years".
pub fn format_months(months: usize) -> String {
    let years = months / MONTHS_IN_YEAR;
    let rest = months % MONTHS_IN_YEAR;
    match (years, rest) {
        (0, 1) => "1 Month".to_string(),
        (0, m) => format!("{} Months", m),
        (1, 0) => "1 Year".to_string(),
        (y, 0) => format!("{} Years", y),
        (y, m) => format!("{}Y {}M", y, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_are_grouped_into_years() {
        assert_eq!(format_months(0), "0 Months");
        assert_eq!(format_months(1), "1 Month");
        assert_eq!(format_months(11), "11 Months");
        assert_eq!(format_months(12), "1 Year");
        assert_eq!(format_months(24), "2 Years");
        assert_eq!(format_months(63), "5Y 3M");
    }
}

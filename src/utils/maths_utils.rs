/// Human-friendly step size (1, 2, 5, 10, 20, 50...) that splits `range` into roughly
/// `target_count` parts. Never smaller than `min_step`.
pub fn nice_step(range: f64, target_count: f64, min_step: f64) -> f64 {
    if !(range.is_finite() && range > 0.0) {
        return min_step;
    }
    let raw_step = range / target_count.max(1.0);
    // Find magnitude (power of 10)
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag; // Scale to 1.0 .. 10.0

    // Snap to "Nice" integers
    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    (nice * mag).max(min_step)
}

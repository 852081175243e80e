use crate::domain::GoalParams;

/// Rates closer to zero than this use the linear formula.
const ZERO_RATE_EPSILON: f64 = 1e-12;

/// Monthly deposit needed to land exactly on the goal after `months` months, using
/// the same deposit-then-interest order as the simulation:
///
/// `b_n = P(1+r)^n + d(1+r)((1+r)^n - 1)/r`, or `P + n*d` when `r = 0`.
///
/// Returns `Some(0.0)` when interest on the initial amount alone gets there, and
/// `None` for a zero horizon or when the rate makes the formula meaningless.
pub fn required_monthly_deposit(params: &GoalParams, months: usize) -> Option<f64> {
    if months == 0 {
        return None;
    }

    let r = params.monthly_rate();
    let n = months as f64;
    let initial = params.initial_amount();

    let (grown_initial, deposit_factor) = if r.abs() < ZERO_RATE_EPSILON {
        (initial, n)
    } else {
        let growth = (1.0 + r).powf(n);
        (initial * growth, (1.0 + r) * (growth - 1.0) / r)
    };

    let shortfall = params.goal_amount() - grown_initial;
    if shortfall <= 0.0 {
        return Some(0.0);
    }
    if !(deposit_factor.is_finite() && deposit_factor > 0.0) {
        return None;
    }

    let deposit = shortfall / deposit_factor;
    deposit.is_finite().then_some(deposit)
}

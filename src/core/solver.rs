use super::engine::{ANNUAL_GROWTH, ANNUAL_INFLATION, PAYOUT_AGE};

/// Effective monthly rate implied by the annual net growth assumption.
pub(crate) fn monthly_rate() -> f64 {
    ANNUAL_GROWTH.powf(1.0 / 12.0) - 1.0
}

/// Restates the target in payout-age money. Starting at or past the payout
/// age leaves the target untouched.
pub(crate) fn effective_target(
    start_age: u32,
    target_amount: f64,
    include_inflation: bool,
) -> f64 {
    if !include_inflation || start_age >= PAYOUT_AGE {
        return target_amount;
    }
    let years = PAYOUT_AGE - start_age;
    target_amount * ANNUAL_INFLATION.powi(years as i32)
}

/// Future value of one unit deposited at the start of each of `months`
/// months, compounded at `rate` per month.
fn annuity_due_factor(rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    if rate.abs() < 1e-12 {
        // zero-rate limit: deposits accumulate without growth
        return months as f64;
    }
    ((1.0 + rate).powi(months as i32) - 1.0) / rate * (1.0 + rate)
}

/// Constant start-of-month deposit that compounds to `target` after `months`
/// months. Zero months means there is nothing to solve; the contribution is 0.
pub fn required_monthly_contribution(target: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    target / annuity_due_factor(monthly_rate(), months)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    #[test]
    fn monthly_rate_matches_sixth_percent_annual() {
        assert_approx(monthly_rate(), 0.004867550565343048, 1e-12);
        // twelve months of the monthly rate reproduce the annual rate
        assert_approx((1.0 + monthly_rate()).powi(12), ANNUAL_GROWTH, 1e-12);
    }

    #[test]
    fn effective_target_inflates_over_the_accumulation_years() {
        assert_approx(effective_target(0, 10_000.0, true), 14_282.462475762734, 1e-6);
        assert_approx(effective_target(17, 10_000.0, true), 10_200.0, 1e-9);
    }

    #[test]
    fn effective_target_unchanged_without_inflation_or_years() {
        assert_approx(effective_target(5, 10_000.0, false), 10_000.0, 0.0);
        assert_approx(effective_target(18, 10_000.0, true), 10_000.0, 0.0);
    }

    #[test]
    fn annuity_due_factor_handles_degenerate_rates() {
        assert_approx(annuity_due_factor(0.05, 0), 0.0, 0.0);
        assert_approx(annuity_due_factor(0.0, 24), 24.0, 0.0);
        // one month at 5%: a single start-of-month unit grows once
        assert_approx(annuity_due_factor(0.05, 1), 1.05, 1e-12);
    }

    #[test]
    fn required_contribution_for_the_reference_plan() {
        // 18 years of monthly deposits toward 10 000 at 6% p.a.
        assert_approx(required_monthly_contribution(10_000.0, 216), 26.122364281087435, 1e-6);
    }

    #[test]
    fn required_contribution_zero_when_no_months_remain() {
        assert_approx(required_monthly_contribution(10_000.0, 0), 0.0, 0.0);
    }

    #[test]
    fn required_contribution_scales_linearly_with_target() {
        let base = required_monthly_contribution(10_000.0, 216);
        assert_approx(required_monthly_contribution(20_000.0, 216), base * 2.0, 1e-9);
    }
}

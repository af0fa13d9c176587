use super::solver::{effective_target, required_monthly_contribution};
use super::types::{Inputs, Milestones, Projection, SeriesPoint};

/// Annual net growth applied to invested wealth.
pub(crate) const ANNUAL_GROWTH: f64 = 1.06;
/// Annual inflation used to restate the target in payout-age money.
pub(crate) const ANNUAL_INFLATION: f64 = 1.02;
/// Age at which the plan pays out and the contribution target is due.
pub(crate) const PAYOUT_AGE: u32 = 18;
/// Last age covered by the projection.
pub(crate) const HORIZON_AGE: u32 = 67;
/// Fraction of wealth that stays invested after the payout.
pub(crate) const PAYOUT_RETAINED: f64 = 0.2;

/// Solves the required monthly contribution and replays the plan month by
/// month from the start age through the horizon.
///
/// The replay is the authoritative source of the series and milestones: it
/// does not reuse the closed-form factor, so intermediate years, rounding and
/// the payout are represented exactly as they unfold. Deposits land at the
/// start of each month, then one month of growth applies; this matches the
/// annuity-due convention of the solve, so wealth meets the effective target
/// at the payout age.
pub fn run_projection(inputs: &Inputs) -> Projection {
    let months = accumulation_months(inputs.start_age);
    let target = effective_target(
        inputs.start_age,
        inputs.target_amount,
        inputs.include_inflation,
    );
    let contribution = required_monthly_contribution(target, months);

    let monthly_growth = ANNUAL_GROWTH.powf(1.0 / 12.0);
    let mut wealth = 0.0_f64;
    let mut milestones = Milestones {
        at_18: 0.0,
        at_25: 0.0,
        at_40: 0.0,
        at_67: 0.0,
    };

    let mut series =
        Vec::with_capacity(HORIZON_AGE.saturating_sub(inputs.start_age) as usize + 2);
    series.push(SeriesPoint {
        age: inputs.start_age,
        wealth: 0,
    });

    for age in inputs.start_age..HORIZON_AGE {
        for _ in 0..12 {
            wealth = (wealth + contribution) * monthly_growth;
        }
        let display_age = age + 1;

        if display_age == PAYOUT_AGE {
            // One point per side of the payout so the drop renders as a
            // vertical edge rather than a slope.
            series.push(rounded_point(display_age, wealth));
            wealth *= PAYOUT_RETAINED;
            series.push(rounded_point(display_age, wealth));
        } else {
            series.push(rounded_point(display_age, wealth));
        }

        // Milestones hold unrounded wealth; at the payout age this is the
        // post-payout value.
        match display_age {
            18 => milestones.at_18 = wealth,
            25 => milestones.at_25 = wealth,
            40 => milestones.at_40 = wealth,
            67 => milestones.at_67 = wealth,
            _ => {}
        }
    }

    Projection {
        monthly_contribution: contribution,
        series,
        milestones,
    }
}

fn accumulation_months(start_age: u32) -> u32 {
    PAYOUT_AGE.saturating_sub(start_age) * 12
}

fn rounded_point(age: u32, wealth: f64) -> SeriesPoint {
    SeriesPoint {
        age,
        wealth: wealth.round() as i64,
    }
}

use serde::Serialize;

/// Savings plan parameters. Growth, inflation, payout age and horizon are
/// fixed plan configuration, not inputs; see the constants in `engine`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub start_age: u32,
    pub target_amount: f64,
    pub include_inflation: bool,
}

/// One year boundary of the projection. Wealth is rounded to the nearest
/// currency unit; the payout age appears twice, once per side of the payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub age: u32,
    pub wealth: i64,
}

/// Wealth at the fixed reporting ages, sampled after any payout at or before
/// that age. Unrounded; formatting is a consumer concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestones {
    pub at_18: f64,
    pub at_25: f64,
    pub at_40: f64,
    pub at_67: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub monthly_contribution: f64,
    pub series: Vec<SeriesPoint>,
    pub milestones: Milestones,
}

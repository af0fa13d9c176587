mod engine;
mod solver;
mod types;

pub use engine::run_projection;
pub use solver::required_monthly_contribution;
pub use types::{Inputs, Milestones, Projection, SeriesPoint};

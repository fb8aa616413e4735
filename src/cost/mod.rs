mod cost_calculator;
mod domain;

pub use cost_calculator::*;
pub use domain::*;

mod cost_row;

pub use cost_row::*;

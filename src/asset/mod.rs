mod domain;
pub mod fee_unit_model;

pub use domain::*;

mod domain;
mod refresh_scheduler;

pub use domain::*;
pub use refresh_scheduler::*;

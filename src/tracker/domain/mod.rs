mod aggregate_state;
mod cycle_outcome;
mod scheduler_command;

pub use aggregate_state::*;
pub use cycle_outcome::*;
pub use scheduler_command::*;

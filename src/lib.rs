pub mod asset;
pub mod configuration;
pub mod cost;
pub mod error;
pub mod error_fmt;
pub mod fees;
pub mod network;
pub mod price;
pub mod startup;
pub mod telemetry;
pub mod tracker;
pub mod upstream;

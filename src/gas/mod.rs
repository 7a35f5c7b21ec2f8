pub mod cost_calculator;
pub mod price_config;

pub use cost_calculator::*;
pub use price_config::*;

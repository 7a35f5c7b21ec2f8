pub mod scenario;
pub mod scenario_runner;

pub use scenario::*;
pub use scenario_runner::*;

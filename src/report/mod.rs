pub mod console;
pub mod format;
pub mod reporter;
pub mod tracing_reporter;

pub use console::*;
pub use format::*;
pub use reporter::*;
pub use tracing_reporter::*;

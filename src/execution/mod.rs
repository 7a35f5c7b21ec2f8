pub mod receipt;
pub mod transfer_executor;

pub use receipt::*;
pub use transfer_executor::*;

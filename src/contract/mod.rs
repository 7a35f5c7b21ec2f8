pub mod alloy_token;
pub mod artifact;
pub mod signers;
pub mod token;

pub use alloy_token::*;
pub use artifact::*;
pub use signers::*;
pub use token::*;

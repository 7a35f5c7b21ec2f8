use alloy::primitives::{Address, U256};
use std::fmt;

// A signing identity taking part in the scenarios. Whether it is exempt
// is contract state and is never tracked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub label: String,
    pub address: Address,
}

impl Actor {
    pub fn new(label: impl Into<String>, address: Address) -> Self {
        Self {
            label: label.into(),
            address,
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferStep {
    pub from: Actor,
    pub to: Actor,
    pub amount: U256, // base units, 10^18 per whole token
}

impl TransferStep {
    pub fn new(from: &Actor, to: &Actor, amount: U256) -> Self {
        Self {
            from: from.clone(),
            to: to.clone(),
            amount,
        }
    }
}

use alloy::primitives::{B256, U256};

// how a submitted transfer ended up once included
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InclusionStatus {
    Succeeded,
    Reverted { reason: String },
}

// what the contract reports back for an included transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionReceipt {
    pub transaction_hash: B256,
    pub gas_used: U256,
    pub status: InclusionStatus,
}

impl InclusionReceipt {
    pub fn succeeded(transaction_hash: B256, gas_used: U256) -> Self {
        Self {
            transaction_hash,
            gas_used,
            status: InclusionStatus::Succeeded,
        }
    }

    pub fn reverted(transaction_hash: B256, gas_used: U256, reason: impl Into<String>) -> Self {
        Self {
            transaction_hash,
            gas_used,
            status: InclusionStatus::Reverted { reason: reason.into() },
        }
    }
}

// a confirmed, successful transfer as seen by the profiler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub transaction_hash: B256,
    pub gas_used: U256,
    pub sender_balance: U256, // read before submission, informational only
}

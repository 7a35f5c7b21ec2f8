use alloy::primitives::U256;
use tracing::debug;

use super::{InclusionReceipt, InclusionStatus, TransferReceipt};
use crate::common::{Actor, ProfilerError};
use crate::contract::{PendingTransfer, TokenContract};

// Submits single transfers and waits for them. One attempt per transfer,
// a revert ends the run.
pub struct TransferExecutor<'a, C: TokenContract> {
    contract: &'a C,
}

impl<'a, C: TokenContract> TransferExecutor<'a, C> {
    pub fn new(contract: &'a C) -> Self {
        Self { contract }
    }

    pub async fn execute(
        &self,
        from: &Actor,
        to: &Actor,
        amount: U256,
    ) -> Result<TransferReceipt, ProfilerError> {
        self.execute_observed(from, to, amount, |_| {}).await
    }

    /// Same as [`execute`](Self::execute), handing the sender balance to
    /// `on_balance` after it is read and before the transfer is submitted.
    pub async fn execute_observed<F>(
        &self,
        from: &Actor,
        to: &Actor,
        amount: U256,
        on_balance: F,
    ) -> Result<TransferReceipt, ProfilerError>
    where
        F: FnOnce(U256),
    {
        let sender_balance = self.contract.balance_of(from.address).await?;
        on_balance(sender_balance);

        debug!(
            from = %from.address,
            to = %to.address,
            %amount,
            %sender_balance,
            "submitting transfer"
        );

        let pending = self.contract.transfer(from.address, to.address, amount).await?;
        let receipt = pending.wait().await?;

        Self::check_receipt(&receipt, from, to)?;

        debug!(
            tx_hash = %receipt.transaction_hash,
            gas_used = %receipt.gas_used,
            "transfer confirmed"
        );

        Ok(TransferReceipt {
            transaction_hash: receipt.transaction_hash,
            gas_used: receipt.gas_used,
            sender_balance,
        })
    }

    // a reverted or gas-free receipt cannot be costed
    fn check_receipt(receipt: &InclusionReceipt, from: &Actor, to: &Actor) -> Result<(), ProfilerError> {
        if let InclusionStatus::Reverted { reason } = &receipt.status {
            return Err(ProfilerError::TransactionFailure(format!(
                "transfer {} from {} to {} reverted: {}",
                receipt.transaction_hash, from, to, reason
            )));
        }

        if receipt.gas_used.is_zero() {
            return Err(ProfilerError::ArithmeticAnomaly(format!(
                "transfer {} confirmed with zero gas used",
                receipt.transaction_hash
            )));
        }

        Ok(())
    }
}

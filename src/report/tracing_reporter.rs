use alloy::primitives::{Address, U256};
use tracing::info;

use super::{Reporter, round_cents};
use crate::common::{Actor, TransferStep};
use crate::execution::TransferReceipt;
use crate::gas::{CostBreakdown, PriceConfig};
use crate::scenario::ScenarioGroup;

// Emits the same report as structured tracing events, for log pipelines.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TracingReporter {
    fn deployed(&mut self, contract: Address, deployer: &Actor) {
        info!(%contract, deployer = %deployer.address, "token deployed");
    }

    fn price_banner(&mut self, price: &PriceConfig) {
        info!(
            gas_price_wei = %price.gas_price_wei(),
            native_to_fiat_rate = %price.native_to_fiat_rate(),
            "price inputs"
        );
    }

    fn group_started(&mut self, group: &ScenarioGroup) {
        info!(group = ?group.kind, steps = group.steps.len(), "{}", group.kind.narration());
    }

    fn step_started(&mut self, step: &TransferStep) {
        info!(
            from = %step.from.address,
            to = %step.to.address,
            amount = %step.amount,
            "transfer started"
        );
    }

    fn sender_balance(&mut self, step: &TransferStep, balance: U256) {
        info!(from = %step.from.address, %balance, "sender balance");
    }

    fn step_completed(&mut self, step: &TransferStep, receipt: &TransferReceipt, breakdown: &CostBreakdown) {
        info!(
            tx_hash = %receipt.transaction_hash,
            amount = %step.amount,
            gas_used = %breakdown.gas_used,
            gas_cost_wei = %breakdown.gas_cost_native,
            gas_cost_fiat = %round_cents(breakdown.gas_cost_fiat),
            whole_tokens = %breakdown.whole_tokens,
            gas_per_token = ?breakdown.effective_gas_per_token,
            cost_per_token_wei = ?breakdown.effective_cost_per_token_native,
            cost_per_token_fiat = ?breakdown.effective_cost_per_token_fiat.map(round_cents),
            "transfer costed"
        );
    }
}

use alloy::primitives::{Address, U256};

use crate::common::{Actor, TransferStep};
use crate::execution::TransferReceipt;
use crate::gas::{CostBreakdown, PriceConfig};
use crate::scenario::ScenarioGroup;

/// Sink for everything the operator gets to see. Implementations only
/// render; nothing they do feeds back into the run.
pub trait Reporter {
    fn deployed(&mut self, contract: Address, deployer: &Actor);

    fn price_banner(&mut self, price: &PriceConfig);

    fn group_started(&mut self, group: &ScenarioGroup);

    fn step_started(&mut self, step: &TransferStep);

    /// Called once the sender balance is read, before the transfer is
    /// submitted, so it is shown even when the step then fails.
    fn sender_balance(&mut self, step: &TransferStep, balance: U256);

    fn step_completed(&mut self, step: &TransferStep, receipt: &TransferReceipt, breakdown: &CostBreakdown);
}

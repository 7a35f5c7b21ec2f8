use std::fmt;
use std::io::{self, Stdout, Write};

use alloy::primitives::{Address, U256};

use super::{Reporter, format_fiat, format_gwei, format_native, group_digits};
use crate::common::{Actor, TransferStep};
use crate::execution::TransferReceipt;
use crate::gas::{CostBreakdown, PriceConfig};
use crate::scenario::ScenarioGroup;

const RULE: &str = "###########################################";
const LINE_BREAK: &str = "====================================";

// plain text narration for the operator, stdout unless told otherwise
#[derive(Debug)]
pub struct ConsoleReporter<W: Write = Stdout> {
    out: W,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    // write errors are ignored
    fn line(&mut self, args: fmt::Arguments<'_>) {
        let _ = writeln!(self.out, "{args}");
    }

    fn message(&mut self, msg: &str) {
        self.line(format_args!("\n## {msg} ##\n"));
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn deployed(&mut self, contract: Address, deployer: &Actor) {
        self.line(format_args!(
            "🚀 Deployed token at {contract} with the account: {}",
            deployer.address
        ));
    }

    fn price_banner(&mut self, price: &PriceConfig) {
        self.line(format_args!("{RULE}"));
        self.line(format_args!(
            "## Using gas price of {} gwei",
            format_gwei(price.gas_price_wei())
        ));
        self.line(format_args!(
            "## Using ether price of {} USD per ETH",
            format_fiat(price.native_to_fiat_rate())
        ));
        self.line(format_args!("{RULE}"));
    }

    fn group_started(&mut self, group: &ScenarioGroup) {
        self.message(&format!("{}:", group.kind.narration()));
    }

    fn step_started(&mut self, step: &TransferStep) {
        self.line(format_args!("{LINE_BREAK}"));
        self.line(format_args!(
            "Transferring {} tokens as ERC-20 from {} to {}",
            format_native(step.amount),
            step.from.address,
            step.to.address
        ));
    }

    fn sender_balance(&mut self, _step: &TransferStep, balance: U256) {
        self.line(format_args!("Balance of from: {} tokens", format_native(balance)));
    }

    fn step_completed(&mut self, _step: &TransferStep, _receipt: &TransferReceipt, breakdown: &CostBreakdown) {
        self.line(format_args!("Gas used: {} gas", group_digits(breakdown.gas_used)));
        self.line(format_args!(
            "Gas cost: {} ETH ({} USD)",
            format_native(breakdown.gas_cost_native),
            format_fiat(breakdown.gas_cost_fiat)
        ));

        if let Some(gas_per_token) = breakdown.effective_gas_per_token {
            self.line(format_args!(
                "Effective gas used per token: {}",
                group_digits(gas_per_token)
            ));
        }

        if let (Some(native), Some(fiat)) = (
            breakdown.effective_cost_per_token_native,
            breakdown.effective_cost_per_token_fiat,
        ) {
            self.line(format_args!(
                "Effective gas cost per token: {} ETH ({} USD)",
                format_native(native),
                format_fiat(fiat)
            ));
        }
    }
}

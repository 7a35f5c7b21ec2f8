use tracing::info;

use super::scenario_plan;
use crate::common::{Actor, ProfilerError, TransferStep};
use crate::contract::TokenContract;
use crate::execution::TransferExecutor;
use crate::gas::{CostBreakdown, CostCalculator, PriceConfig};
use crate::report::Reporter;

// Runs every scenario group in order, one awaited transfer at a time.
// The first failure ends the run; breakdowns already reported stay valid.
pub struct ScenarioRunner<'a, C: TokenContract> {
    executor: TransferExecutor<'a, C>,
    price: &'a PriceConfig,
    reporter: &'a mut dyn Reporter,
}

impl<'a, C: TokenContract> ScenarioRunner<'a, C> {
    pub fn new(contract: &'a C, price: &'a PriceConfig, reporter: &'a mut dyn Reporter) -> Self {
        Self {
            executor: TransferExecutor::new(contract),
            price,
            reporter,
        }
    }

    pub async fn run(&mut self, actors: &[Actor; 3]) -> Result<Vec<CostBreakdown>, ProfilerError> {
        self.reporter.price_banner(self.price);

        let plan = scenario_plan(actors);
        let mut breakdowns = Vec::with_capacity(plan.iter().map(|group| group.steps.len()).sum());

        for group in &plan {
            self.reporter.group_started(group);

            for step in &group.steps {
                breakdowns.push(self.run_step(step).await?);
            }

            info!(group = ?group.kind, transfers = group.steps.len(), "scenario group confirmed");
        }

        Ok(breakdowns)
    }

    async fn run_step(&mut self, step: &TransferStep) -> Result<CostBreakdown, ProfilerError> {
        self.reporter.step_started(step);

        let reporter = &mut *self.reporter;
        let receipt = self
            .executor
            .execute_observed(&step.from, &step.to, step.amount, |balance| {
                reporter.sender_balance(step, balance)
            })
            .await?;
        let breakdown = CostCalculator::compute_cost(receipt.gas_used, step.amount, self.price)?;

        self.reporter.step_completed(step, &receipt, &breakdown);

        Ok(breakdown)
    }
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, B256, U256};
use token_gas_profiler::{
    Actor, CostBreakdown, InclusionReceipt, PendingTransfer, PriceConfig, ProfilerError, Reporter,
    ScenarioGroup, ScenarioKind, ScenarioRunner, TokenContract, TracingReporter, TransferReceipt,
    TransferStep,
};
use token_gas_profiler::gas::CostCalculator;
use token_gas_profiler::scenario::transfer_amounts;

// Helper functions for realistic amounts
fn tokens(whole: u64) -> U256 {
    U256::from(whole) * U256::from(10_u64.pow(18))
}

fn create_actors() -> [Actor; 3] {
    [
        Actor::new("owner", Address::repeat_byte(0x01)),
        Actor::new("actor_b", Address::repeat_byte(0x0b)),
        Actor::new("actor_c", Address::repeat_byte(0x0c)),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    BalanceRead(Address),
    Submitted { index: usize, from: Address, to: Address, amount: U256 },
    Confirmed { index: usize },
}

#[derive(Debug, Default)]
struct LedgerState {
    balances: HashMap<Address, U256>,
    events: Vec<Event>,
    submitted: usize,
    in_flight: Option<usize>,
    overlapping_submissions: usize,
}

// In-memory stand-in for the token contract that records every call
#[derive(Clone)]
struct RecordingToken {
    state: Arc<Mutex<LedgerState>>,
    revert_at: Option<usize>,
    zero_gas_at: Option<usize>,
}

impl RecordingToken {
    fn new(owner: Address, supply: U256) -> Self {
        let mut state = LedgerState::default();
        state.balances.insert(owner, supply);

        Self {
            state: Arc::new(Mutex::new(state)),
            revert_at: None,
            zero_gas_at: None,
        }
    }

    fn reverting_at(mut self, index: usize) -> Self {
        self.revert_at = Some(index);
        self
    }

    fn zero_gas_at(mut self, index: usize) -> Self {
        self.zero_gas_at = Some(index);
        self
    }

    // deterministic, grows with the step index
    fn gas_for(index: usize) -> U256 {
        U256::from(50_000 + 1_000 * index as u64)
    }

    fn events(&self) -> Vec<Event> {
        self.state.lock().unwrap().events.clone()
    }

    fn submissions(&self) -> Vec<(usize, Address, Address, U256)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Submitted { index, from, to, amount } => Some((index, from, to, amount)),
                _ => None,
            })
            .collect()
    }

    fn balance(&self, owner: Address) -> U256 {
        self.state.lock().unwrap().balances.get(&owner).copied().unwrap_or_default()
    }
}

struct RecordingPending {
    state: Arc<Mutex<LedgerState>>,
    index: usize,
    from: Address,
    to: Address,
    amount: U256,
    revert: bool,
    gas_used: U256,
}

impl PendingTransfer for RecordingPending {
    async fn wait(self) -> Result<InclusionReceipt, ProfilerError> {
        let mut state = self.state.lock().unwrap();
        state.in_flight = None;
        state.events.push(Event::Confirmed { index: self.index });

        let hash = B256::with_last_byte(self.index as u8 + 1);
        if self.revert {
            return Ok(InclusionReceipt::reverted(hash, self.gas_used, "execution reverted"));
        }

        let sender = state.balances.get(&self.from).copied().unwrap_or_default();
        let recipient = state.balances.get(&self.to).copied().unwrap_or_default();
        state.balances.insert(self.from, sender - self.amount);
        state.balances.insert(self.to, recipient + self.amount);

        Ok(InclusionReceipt::succeeded(hash, self.gas_used))
    }
}

impl TokenContract for RecordingToken {
    type Pending = RecordingPending;

    fn address(&self) -> Address {
        Address::repeat_byte(0xee)
    }

    async fn balance_of(&self, owner: Address) -> Result<U256, ProfilerError> {
        let mut state = self.state.lock().unwrap();
        state.events.push(Event::BalanceRead(owner));
        Ok(state.balances.get(&owner).copied().unwrap_or_default())
    }

    async fn transfer(&self, from: Address, to: Address, amount: U256) -> Result<RecordingPending, ProfilerError> {
        let mut state = self.state.lock().unwrap();

        // same check a node does while estimating gas
        let balance = state.balances.get(&from).copied().unwrap_or_default();
        if balance < amount {
            return Err(ProfilerError::TransactionFailure(format!(
                "insufficient balance: has {balance}, needs {amount}"
            )));
        }

        if state.in_flight.is_some() {
            state.overlapping_submissions += 1;
        }

        let index = state.submitted;
        state.submitted += 1;
        state.in_flight = Some(index);
        state.events.push(Event::Submitted { index, from, to, amount });

        let gas_used = if self.zero_gas_at == Some(index) {
            U256::ZERO
        } else {
            Self::gas_for(index)
        };

        Ok(RecordingPending {
            state: self.state.clone(),
            index,
            from,
            to,
            amount,
            revert: self.revert_at == Some(index),
            gas_used,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Note {
    Started,
    Balance,
    Completed,
}

#[derive(Debug, Default)]
struct RecordingReporter {
    banners: usize,
    groups: Vec<ScenarioKind>,
    started: Vec<TransferStep>,
    balances: Vec<U256>,
    completed: Vec<(TransferReceipt, CostBreakdown)>,
    notes: Vec<Note>,
}

impl Reporter for RecordingReporter {
    fn deployed(&mut self, _contract: Address, _deployer: &Actor) {}

    fn price_banner(&mut self, _price: &PriceConfig) {
        self.banners += 1;
    }

    fn group_started(&mut self, group: &ScenarioGroup) {
        self.groups.push(group.kind);
    }

    fn step_started(&mut self, step: &TransferStep) {
        self.started.push(step.clone());
        self.notes.push(Note::Started);
    }

    fn sender_balance(&mut self, _step: &TransferStep, balance: U256) {
        self.balances.push(balance);
        self.notes.push(Note::Balance);
    }

    fn step_completed(&mut self, _step: &TransferStep, receipt: &TransferReceipt, breakdown: &CostBreakdown) {
        self.completed.push((receipt.clone(), breakdown.clone()));
        self.notes.push(Note::Completed);
    }
}

#[tokio::test]
async fn test_full_run_costs_every_transfer() -> anyhow::Result<()> {
    let actors = create_actors();
    let token = RecordingToken::new(actors[0].address, tokens(1_000));
    let price = PriceConfig::default();
    let mut reporter = RecordingReporter::default();

    let breakdowns = ScenarioRunner::new(&token, &price, &mut reporter)
        .run(&actors)
        .await?;

    assert_eq!(breakdowns.len(), 12);
    assert_eq!(reporter.banners, 1);
    assert_eq!(
        reporter.groups,
        vec![ScenarioKind::Issuance, ScenarioKind::PeerTransfer, ScenarioKind::Redemption]
    );
    assert_eq!(reporter.completed.len(), 12);

    for (index, breakdown) in breakdowns.iter().enumerate() {
        let gas_used = RecordingToken::gas_for(index);

        assert_eq!(breakdown.gas_used, gas_used);
        assert_eq!(breakdown.gas_cost_native, gas_used * price.gas_price_wei());

        // every group starts with the half token transfer
        assert_eq!(breakdown.has_per_token_cost(), index % 4 != 0);
    }

    // 0.5, 1, 10 and 100 tokens make a round trip back to the owner
    assert_eq!(token.balance(actors[0].address), tokens(1_000));
    assert_eq!(token.balance(actors[1].address), U256::ZERO);
    assert_eq!(token.balance(actors[2].address), U256::ZERO);
    Ok(())
}

#[tokio::test]
async fn test_groups_run_in_order_one_transfer_at_a_time() -> anyhow::Result<()> {
    let actors = create_actors();
    let token = RecordingToken::new(actors[0].address, tokens(1_000));
    let price = PriceConfig::default();
    let mut reporter = TracingReporter::new();

    ScenarioRunner::new(&token, &price, &mut reporter).run(&actors).await?;

    let amounts = transfer_amounts();
    let routes = [(0, 1), (1, 2), (2, 0)];
    let expected: Vec<(usize, Address, Address, U256)> = routes
        .iter()
        .flat_map(|(from, to)| amounts.iter().map(move |amount| (*from, *to, *amount)))
        .enumerate()
        .map(|(index, (from, to, amount))| (index, actors[from].address, actors[to].address, amount))
        .collect();
    assert_eq!(token.submissions(), expected);

    // balance read, submit, confirm, and only then the next transfer
    let events = token.events();
    assert_eq!(events.len(), 36);
    for (index, chunk) in events.chunks(3).enumerate() {
        let (_, from, _, _) = expected[index];
        assert_eq!(chunk[0], Event::BalanceRead(from));
        assert!(matches!(chunk[1], Event::Submitted { index: i, .. } if i == index));
        assert_eq!(chunk[2], Event::Confirmed { index });
    }

    assert_eq!(token.state.lock().unwrap().overlapping_submissions, 0);
    Ok(())
}

#[tokio::test]
async fn test_sender_balance_is_reported_before_each_transfer() -> anyhow::Result<()> {
    let actors = create_actors();
    let token = RecordingToken::new(actors[0].address, tokens(1_000));
    let price = PriceConfig::default();
    let mut reporter = RecordingReporter::default();

    ScenarioRunner::new(&token, &price, &mut reporter).run(&actors).await?;

    let balances: Vec<U256> = reporter
        .completed
        .iter()
        .map(|(receipt, _)| receipt.sender_balance)
        .collect();

    let half = tokens(1) / U256::from(2);
    assert_eq!(balances[0], tokens(1_000));
    assert_eq!(balances[1], tokens(1_000) - half);
    // actor_b holds everything it received once group two starts
    assert_eq!(balances[4], tokens(111) + half);
    assert_eq!(balances[8], tokens(111) + half);
    Ok(())
}

#[tokio::test]
async fn test_breakdowns_match_the_calculator() -> anyhow::Result<()> {
    let actors = create_actors();
    let token = RecordingToken::new(actors[0].address, tokens(1_000));
    let price = PriceConfig::default();
    let mut reporter = RecordingReporter::default();

    let breakdowns = ScenarioRunner::new(&token, &price, &mut reporter).run(&actors).await?;

    for (step, breakdown) in reporter.started.iter().zip(&breakdowns) {
        let expected = CostCalculator::compute_cost(breakdown.gas_used, step.amount, &price)?;
        assert_eq!(breakdown, &expected);
    }

    // 100 tokens in the first group, step index 3
    let hundred = &breakdowns[3];
    assert_eq!(hundred.whole_tokens, U256::from(100));
    assert_eq!(hundred.effective_gas_per_token, Some(RecordingToken::gas_for(3) / U256::from(100)));
    Ok(())
}

#[tokio::test]
async fn test_revert_stops_the_run_inside_the_first_group() {
    let actors = create_actors();
    let token = RecordingToken::new(actors[0].address, tokens(1_000)).reverting_at(2);
    let price = PriceConfig::default();
    let mut reporter = RecordingReporter::default();

    let result = ScenarioRunner::new(&token, &price, &mut reporter).run(&actors).await;

    assert!(matches!(result, Err(ProfilerError::TransactionFailure(_))));

    // nothing from actor_b or actor_c was ever issued
    let submissions = token.submissions();
    assert_eq!(submissions.len(), 3);
    assert!(submissions.iter().all(|(_, from, _, _)| *from == actors[0].address));

    // the two transfers before the revert were still reported
    assert_eq!(reporter.completed.len(), 2);
    assert_eq!(reporter.groups, vec![ScenarioKind::Issuance]);
}

#[tokio::test]
async fn test_revert_in_second_group_never_reaches_the_third() {
    let actors = create_actors();
    let token = RecordingToken::new(actors[0].address, tokens(1_000)).reverting_at(4);
    let price = PriceConfig::default();
    let mut reporter = RecordingReporter::default();

    let result = ScenarioRunner::new(&token, &price, &mut reporter).run(&actors).await;

    assert!(matches!(result, Err(ProfilerError::TransactionFailure(_))));
    assert_eq!(token.submissions().len(), 5);
    assert!(
        token
            .submissions()
            .iter()
            .all(|(_, from, _, _)| *from != actors[2].address)
    );
    assert_eq!(reporter.completed.len(), 4);
}

#[tokio::test]
async fn test_rejected_submission_is_fatal() {
    let actors = create_actors();
    // owner can cover the first three transfers but not the 100 token one
    let token = RecordingToken::new(actors[0].address, tokens(50));
    let price = PriceConfig::default();
    let mut reporter = RecordingReporter::default();

    let result = ScenarioRunner::new(&token, &price, &mut reporter).run(&actors).await;

    match result {
        Err(ProfilerError::TransactionFailure(msg)) => assert!(msg.contains("insufficient balance")),
        other => panic!("expected transaction failure, got {other:?}"),
    }
    assert_eq!(token.submissions().len(), 3);
    assert_eq!(reporter.completed.len(), 3);
}

#[tokio::test]
async fn test_zero_gas_receipt_is_an_anomaly() {
    let actors = create_actors();
    let token = RecordingToken::new(actors[0].address, tokens(1_000)).zero_gas_at(0);
    let price = PriceConfig::default();
    let mut reporter = RecordingReporter::default();

    let result = ScenarioRunner::new(&token, &price, &mut reporter).run(&actors).await;

    assert!(matches!(result, Err(ProfilerError::ArithmeticAnomaly(_))));
    assert_eq!(token.submissions().len(), 1);
    assert!(reporter.completed.is_empty());
}

#[tokio::test]
async fn test_sender_balance_is_shown_between_start_and_completion() -> anyhow::Result<()> {
    let actors = create_actors();
    let token = RecordingToken::new(actors[0].address, tokens(1_000));
    let price = PriceConfig::default();
    let mut reporter = RecordingReporter::default();

    ScenarioRunner::new(&token, &price, &mut reporter).run(&actors).await?;

    assert_eq!(reporter.notes.len(), 36);
    for chunk in reporter.notes.chunks(3) {
        assert_eq!(chunk, [Note::Started, Note::Balance, Note::Completed]);
    }

    // the hook and the receipt agree on what was read
    let from_receipts: Vec<U256> = reporter.completed.iter().map(|(receipt, _)| receipt.sender_balance).collect();
    assert_eq!(reporter.balances, from_receipts);
    Ok(())
}

#[tokio::test]
async fn test_reverted_step_still_shows_sender_balance() {
    let actors = create_actors();
    let token = RecordingToken::new(actors[0].address, tokens(1_000)).reverting_at(2);
    let price = PriceConfig::default();
    let mut reporter = RecordingReporter::default();

    let result = ScenarioRunner::new(&token, &price, &mut reporter).run(&actors).await;

    match result {
        Err(ProfilerError::TransactionFailure(msg)) => assert!(msg.contains("execution reverted")),
        other => panic!("expected transaction failure, got {other:?}"),
    }

    // the failing step's balance read made it out before the revert
    let spent = tokens(1) + tokens(1) / U256::from(2);
    assert_eq!(reporter.balances.len(), 3);
    assert_eq!(reporter.balances[2], tokens(1_000) - spent);
    assert_eq!(reporter.completed.len(), 2);
    assert_eq!(reporter.notes.last(), Some(&Note::Balance));
}

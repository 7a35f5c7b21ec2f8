use alloy::primitives::U256;

use crate::common::{Actor, BASE_UNITS_PER_TOKEN, TransferStep};

// The three fixed transfer routes, in the order they must run. Later
// groups spend balances built up by earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    Issuance,     // owner -> actor_b
    PeerTransfer, // actor_b -> actor_c
    Redemption,   // actor_c -> owner
}

pub const SCENARIO_ORDER: [ScenarioKind; 3] = [
    ScenarioKind::Issuance,
    ScenarioKind::PeerTransfer,
    ScenarioKind::Redemption,
];

impl ScenarioKind {
    // (from, to) indexes into the actor list
    pub fn route(&self) -> (usize, usize) {
        match self {
            ScenarioKind::Issuance => (0, 1),
            ScenarioKind::PeerTransfer => (1, 2),
            ScenarioKind::Redemption => (2, 0),
        }
    }

    pub fn narration(&self) -> &'static str {
        match self {
            ScenarioKind::Issuance => {
                "The initial owner is exempt so these are being minted for the first time during these transfers"
            }
            ScenarioKind::PeerTransfer => {
                "Subsequent transfers from a non-exempt address to another non-exempt address"
            }
            ScenarioKind::Redemption => {
                "Transferring back to the original owner who is exempt will burn the NFTs"
            }
        }
    }
}

// 0.5, 1, 10 and 100 whole tokens
pub fn transfer_amounts() -> [U256; 4] {
    [
        BASE_UNITS_PER_TOKEN / U256::from(2),
        BASE_UNITS_PER_TOKEN,
        BASE_UNITS_PER_TOKEN * U256::from(10),
        BASE_UNITS_PER_TOKEN * U256::from(100),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioGroup {
    pub kind: ScenarioKind,
    pub steps: Vec<TransferStep>,
}

impl ScenarioGroup {
    pub fn build(kind: ScenarioKind, actors: &[Actor; 3]) -> Self {
        let (from, to) = kind.route();
        let steps = transfer_amounts()
            .into_iter()
            .map(|amount| TransferStep::new(&actors[from], &actors[to], amount))
            .collect();

        Self { kind, steps }
    }
}

pub fn scenario_plan(actors: &[Actor; 3]) -> Vec<ScenarioGroup> {
    SCENARIO_ORDER
        .iter()
        .map(|kind| ScenarioGroup::build(*kind, actors))
        .collect()
}

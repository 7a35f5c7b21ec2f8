use std::future::Future;

use alloy::primitives::{Address, U256};

use crate::common::{NFT_SUPPLY, ProfilerError, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};
use crate::execution::InclusionReceipt;

/// A submitted transfer that has not been included yet.
pub trait PendingTransfer {
    /// Blocks until the transfer is included and returns its receipt.
    fn wait(self) -> impl Future<Output = Result<InclusionReceipt, ProfilerError>> + Send;
}

/// What the profiler needs from the hybrid token contract.
///
/// `transfer` is signed by `from`; implementations decide how that signer is
/// reached (unlocked node account, local wallet, test double).
pub trait TokenContract {
    type Pending: PendingTransfer + Send;

    fn address(&self) -> Address;

    fn balance_of(&self, owner: Address) -> impl Future<Output = Result<U256, ProfilerError>> + Send;

    fn transfer(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> impl Future<Output = Result<Self::Pending, ProfilerError>> + Send;
}

// constructor arguments of the hybrid token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployParams {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub nft_supply: U256,
    pub owner: Address,
    pub exempt: Address,
    pub extra: Address, // account registry address
}

impl DeployParams {
    // owner, exempt and extra address all point at the deployer
    pub fn for_owner(owner: Address) -> Self {
        Self {
            name: TOKEN_NAME.to_string(),
            symbol: TOKEN_SYMBOL.to_string(),
            decimals: TOKEN_DECIMALS,
            nft_supply: U256::from(NFT_SUPPLY),
            owner,
            exempt: owner,
            extra: owner,
        }
    }
}

use alloy::{
    network::{Ethereum, ReceiptResponse, TransactionBuilder},
    primitives::{Address, Bytes, U256},
    providers::{DynProvider, PendingTransactionBuilder, Provider},
    rpc::types::TransactionRequest,
    sol,
    sol_types::SolConstructor,
};
use tracing::{debug, info};

use super::{DeployParams, PendingTransfer, TokenContract};
use crate::common::ProfilerError;
use crate::execution::InclusionReceipt;

sol! {
    #[sol(rpc)]
    contract HybridToken {
        constructor(
            string name,
            string symbol,
            uint8 decimals,
            uint256 nftSupply,
            address owner,
            address exempt,
            address extra
        );

        function balanceOf(address owner) external view returns (uint256);
        function transfer(address to, uint256 value) external returns (bool);
    }
}

// hybrid token reached through an alloy provider
pub struct AlloyToken {
    instance: HybridToken::HybridTokenInstance<DynProvider>,
}

impl AlloyToken {
    pub fn attach(address: Address, provider: DynProvider) -> Self {
        info!(%address, "using deployed token");

        Self {
            instance: HybridToken::new(address, provider),
        }
    }

    // deploy a fresh token from its creation code and wait for the receipt
    pub async fn deploy(
        provider: DynProvider,
        bytecode: Bytes,
        params: &DeployParams,
    ) -> Result<Self, ProfilerError> {
        let constructor_args = HybridToken::constructorCall {
            name: params.name.clone(),
            symbol: params.symbol.clone(),
            decimals: params.decimals,
            nftSupply: params.nft_supply,
            owner: params.owner,
            exempt: params.exempt,
            extra: params.extra,
        }
        .abi_encode();

        let deploy_code: Vec<u8> = [bytecode.as_ref(), constructor_args.as_slice()].concat();
        let tx = TransactionRequest::default()
            .with_from(params.owner)
            .with_deploy_code(deploy_code);

        let pending = provider
            .send_transaction(tx)
            .await
            .map_err(|e| ProfilerError::DeploymentFailure(e.to_string()))?;

        debug!(tx_hash = %pending.tx_hash(), "deployment submitted");

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| ProfilerError::DeploymentFailure(e.to_string()))?;

        if !receipt.status() {
            return Err(ProfilerError::DeploymentFailure(format!(
                "deployment {} reverted",
                receipt.transaction_hash()
            )));
        }

        let address = receipt.contract_address().ok_or_else(|| {
            ProfilerError::DeploymentFailure(format!(
                "receipt of {} carries no contract address",
                receipt.transaction_hash()
            ))
        })?;

        info!(%address, gas_used = receipt.gas_used(), "token deployed");

        Ok(Self::attach(address, provider))
    }
}

impl TokenContract for AlloyToken {
    type Pending = AlloyPendingTransfer;

    fn address(&self) -> Address {
        *self.instance.address()
    }

    async fn balance_of(&self, owner: Address) -> Result<U256, ProfilerError> {
        self.instance
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| ProfilerError::Rpc(format!("balanceOf({owner}): {e}")))
    }

    async fn transfer(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<AlloyPendingTransfer, ProfilerError> {
        // gas estimation already rejects a transfer that would revert
        let pending = self
            .instance
            .transfer(to, amount)
            .from(from)
            .send()
            .await
            .map_err(|e| ProfilerError::TransactionFailure(e.to_string()))?;

        debug!(tx_hash = %pending.tx_hash(), "transfer submitted");

        Ok(AlloyPendingTransfer { inner: pending })
    }
}

pub struct AlloyPendingTransfer {
    inner: PendingTransactionBuilder<Ethereum>,
}

impl PendingTransfer for AlloyPendingTransfer {
    async fn wait(self) -> Result<InclusionReceipt, ProfilerError> {
        let receipt = self
            .inner
            .get_receipt()
            .await
            .map_err(|e| ProfilerError::TransactionFailure(e.to_string()))?;

        let hash = receipt.transaction_hash();
        let gas_used = U256::from(receipt.gas_used());

        if receipt.status() {
            Ok(InclusionReceipt::succeeded(hash, gas_used))
        } else {
            Ok(InclusionReceipt::reverted(hash, gas_used, "execution reverted"))
        }
    }
}

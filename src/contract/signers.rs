use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use tracing::info;

use crate::common::{Actor, MIN_ACTORS, ProfilerError};

// Connect to the node. With local keys every key is registered in one
// wallet, so the signer is picked by the `from` of each transaction.
pub fn connect_provider(rpc_url: &str, keys: &[PrivateKeySigner]) -> Result<DynProvider, ProfilerError> {
    let url: Url = rpc_url
        .parse()
        .map_err(|e| ProfilerError::InvalidConfig(format!("rpc url {rpc_url}: {e}")))?;

    info!(%url, local_signers = keys.len(), "connecting to node");

    let Some((first, rest)) = keys.split_first() else {
        return Ok(ProviderBuilder::new().connect_http(url).erased());
    };

    let mut wallet = EthereumWallet::new(first.clone());
    for key in rest {
        wallet.register_signer(key.clone());
    }

    Ok(ProviderBuilder::new().wallet(wallet).connect_http(url).erased())
}

// the ordered signing identities: local keys if given, the node's accounts otherwise
pub async fn load_actors(
    provider: &DynProvider,
    keys: &[PrivateKeySigner],
) -> Result<[Actor; 3], ProfilerError> {
    let addresses = if keys.is_empty() {
        provider
            .get_accounts()
            .await
            .map_err(|e| ProfilerError::Rpc(format!("eth_accounts: {e}")))?
    } else {
        keys.iter().map(|key| key.address()).collect()
    };

    actors_from_addresses(&addresses)
}

pub fn actors_from_addresses(addresses: &[Address]) -> Result<[Actor; 3], ProfilerError> {
    match addresses {
        [owner, actor_b, actor_c, ..] => Ok([
            Actor::new("owner", *owner),
            Actor::new("actor_b", *actor_b),
            Actor::new("actor_c", *actor_c),
        ]),
        _ => Err(ProfilerError::InsufficientSigners {
            required: MIN_ACTORS,
            available: addresses.len(),
        }),
    }
}

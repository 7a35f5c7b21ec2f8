use std::path::PathBuf;
use std::str::FromStr;

use alloy::primitives::Address;
use alloy_signer_local::PrivateKeySigner;

use super::{DEFAULT_LOG_FILTER, DEFAULT_RPC_URL, ProfilerError};

pub const RPC_URL_VAR: &str = "PROFILER_RPC_URL";
pub const TOKEN_ARTIFACT_VAR: &str = "PROFILER_TOKEN_ARTIFACT";
pub const TOKEN_ADDRESS_VAR: &str = "PROFILER_TOKEN_ADDRESS";
pub const PRIVATE_KEYS_VAR: &str = "PROFILER_PRIVATE_KEYS";
pub const REPORTER_VAR: &str = "PROFILER_REPORTER";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

// where the token under test comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    Deploy { artifact: PathBuf },
    Attach { address: Address },
}

// which sink renders the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReporterKind {
    #[default]
    Console,
    Tracing,
}

impl FromStr for ReporterKind {
    type Err = ProfilerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(ReporterKind::Console),
            "tracing" => Ok(ReporterKind::Tracing),
            other => Err(ProfilerError::InvalidConfig(format!(
                "{REPORTER_VAR}: expected console or tracing, got {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfilerConfig {
    pub rpc_url: String,
    pub token_source: TokenSource,
    // empty means the node's unlocked accounts sign
    pub private_keys: Vec<PrivateKeySigner>,
    pub reporter: ReporterKind,
    pub log_filter: String,
}

impl ProfilerConfig {
    pub fn from_env() -> Result<Self, ProfilerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // build the config from any key -> value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProfilerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let rpc_url = read(RPC_URL_VAR).unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        let log_filter = read(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let token_source = match (read(TOKEN_ARTIFACT_VAR), read(TOKEN_ADDRESS_VAR)) {
            (Some(artifact), None) => TokenSource::Deploy {
                artifact: PathBuf::from(artifact),
            },
            (None, Some(address)) => {
                let address = Address::from_str(&address).map_err(|e| {
                    ProfilerError::InvalidConfig(format!("{TOKEN_ADDRESS_VAR}: {e}"))
                })?;
                TokenSource::Attach { address }
            }
            (Some(_), Some(_)) => {
                return Err(ProfilerError::InvalidConfig(format!(
                    "set only one of {TOKEN_ARTIFACT_VAR} and {TOKEN_ADDRESS_VAR}"
                )));
            }
            (None, None) => {
                return Err(ProfilerError::InvalidConfig(format!(
                    "set {TOKEN_ARTIFACT_VAR} to deploy a token or {TOKEN_ADDRESS_VAR} to use a deployed one"
                )));
            }
        };

        let reporter = match read(REPORTER_VAR) {
            Some(kind) => kind.parse()?,
            None => ReporterKind::default(),
        };

        let private_keys = match read(PRIVATE_KEYS_VAR) {
            Some(keys) => parse_private_keys(&keys)?,
            None => Vec::new(),
        };

        Ok(Self {
            rpc_url,
            token_source,
            private_keys,
            reporter,
            log_filter,
        })
    }
}

fn parse_private_keys(raw: &str) -> Result<Vec<PrivateKeySigner>, ProfilerError> {
    raw.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .enumerate()
        .map(|(idx, key)| {
            PrivateKeySigner::from_str(key).map_err(|_| {
                // never echo the key itself
                ProfilerError::InvalidConfig(format!("{PRIVATE_KEYS_VAR}: key #{} is invalid", idx + 1))
            })
        })
        .collect()
}

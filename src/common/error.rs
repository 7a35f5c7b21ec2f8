#[derive(Debug, thiserror::Error)]
pub enum ProfilerError {
    #[error("Deployment failed: {0}")]
    DeploymentFailure(String),
    #[error("Transaction failed: {0}")]
    TransactionFailure(String),
    #[error("Arithmetic anomaly: {0}")]
    ArithmeticAnomaly(String),
    #[error("Signer provider returned {available} accounts, at least {required} are needed")]
    InsufficientSigners { required: usize, available: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("RPC error: {0}")]
    Rpc(String),
    #[error("Artifact error: {0}")]
    Artifact(String),
    #[error("Artifact decode error: {0}")]
    ArtifactDecode(#[from] serde_json::Error),
}

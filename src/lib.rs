pub mod common;
pub mod contract;
pub mod execution;
pub mod gas;
pub mod report;
pub mod scenario;

// Re-export commonly used types for convenience
pub use common::{Actor, ProfilerConfig, ProfilerError, ReporterKind, TokenSource, TransferStep};
pub use contract::{AlloyToken, DeployParams, PendingTransfer, TokenContract};
pub use execution::{InclusionReceipt, InclusionStatus, TransferExecutor, TransferReceipt};
pub use gas::{CostBreakdown, CostCalculator, PriceConfig};
pub use report::{ConsoleReporter, Reporter, TracingReporter};
pub use scenario::{ScenarioGroup, ScenarioKind, ScenarioRunner};

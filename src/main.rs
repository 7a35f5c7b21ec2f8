use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use token_gas_profiler::contract::{connect_provider, load_actors, load_bytecode};
use token_gas_profiler::{
    AlloyToken, ConsoleReporter, DeployParams, PriceConfig, ProfilerConfig, Reporter, ReporterKind,
    ScenarioRunner, TokenContract, TokenSource, TracingReporter,
};

fn print_banner() {
    println!(
        "
╔═══════════════════════════════════════════════════════════╗
║                                                           ║
║               ⛽ TOKEN GAS PROFILER ⛽                    ║
║                                                           ║
║        Transfer costs of a hybrid token, in gas,          ║
║                  ETH and USD                              ║
║                                                           ║
╚═══════════════════════════════════════════════════════════╝
"
    );
}

fn init_logging(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenv::dotenv();

    let config = ProfilerConfig::from_env().context("loading profiler configuration")?;
    init_logging(&config.log_filter);
    print_banner();

    // fixed for the whole run
    let price = PriceConfig::default();

    let mut reporter: Box<dyn Reporter> = match config.reporter {
        ReporterKind::Console => Box::new(ConsoleReporter::new()),
        ReporterKind::Tracing => Box::new(TracingReporter::new()),
    };

    let provider = connect_provider(&config.rpc_url, &config.private_keys)?;
    let actors = load_actors(&provider, &config.private_keys).await?;

    let token = match &config.token_source {
        TokenSource::Deploy { artifact } => {
            let bytecode = load_bytecode(artifact)?;
            let params = DeployParams::for_owner(actors[0].address);
            let token = AlloyToken::deploy(provider.clone(), bytecode, &params).await?;

            reporter.deployed(token.address(), &actors[0]);
            token
        }
        TokenSource::Attach { address } => AlloyToken::attach(*address, provider.clone()),
    };

    let breakdowns = ScenarioRunner::new(&token, &price, reporter.as_mut())
        .run(&actors)
        .await?;

    info!(transfers = breakdowns.len(), "gas profile complete");

    Ok(())
}

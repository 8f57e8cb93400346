//! Resolve and print the system contracts and bridge adapters of an L1/L2 pair.

use clap::Parser;
use config::Overrides;
use inspect::{find_missing_code, report::Report, resolve, ChainMessenger, Registries};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "inspect")]
#[command(about = "Resolve L1/L2 contract addresses and bridge adapters for a network")]
struct Cli {
    /// L1 chain id
    #[arg(long, env = "L1_CHAIN_ID")]
    chain_id: u64,

    /// L2 chain id
    #[arg(long, env = "L2_CHAIN_ID")]
    l2_chain_id: u64,

    /// TOML file with contract and bridge overrides
    #[arg(short, long)]
    overrides: Option<PathBuf>,

    /// L1 RPC endpoint url
    #[arg(long, env = "L1_RPC_URL")]
    l1_rpc_url: Option<String>,

    /// L2 RPC endpoint url
    #[arg(long, env = "L2_RPC_URL")]
    l2_rpc_url: Option<String>,

    /// Private key to sign with on both layers (hex string, with or without 0x prefix)
    #[arg(short = 'k', long, env = "PRIVATE_KEY")]
    private_key: Option<String>,

    /// Check that every contract with a transport has code deployed
    #[arg(long)]
    verify_code: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let overrides = match &cli.overrides {
        Some(path) => {
            info!("Loading overrides: {}", path.display());
            Overrides::from_file(path)?
        }
        None => Overrides::default(),
    };

    let private_key = cli.private_key.as_deref();
    let l1_transport = cli
        .l1_rpc_url
        .as_deref()
        .map(|url| client::connect(url, private_key))
        .transpose()?;
    let l2_transport = cli
        .l2_rpc_url
        .as_deref()
        .map(|url| client::connect(url, private_key))
        .transpose()?;

    let registries = Registries::builtin();
    let messenger = ChainMessenger {
        l1_chain_id: cli.chain_id,
        l2_chain_id: cli.l2_chain_id,
    };
    let resolved = resolve(
        &registries,
        messenger,
        &overrides,
        l1_transport,
        l2_transport,
    )?;

    let report = Report::new(&resolved, cli.chain_id, cli.l2_chain_id);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    if cli.verify_code {
        let missing = find_missing_code(&resolved.contracts).await?;
        if !missing.is_empty() {
            eyre::bail!("{} contract(s) have no code deployed", missing.len());
        }
        info!("All connected contracts have code deployed");
    }

    Ok(())
}

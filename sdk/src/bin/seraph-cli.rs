//! Seraph CLI
//!
//! Command-line interface for administering a Seraph stake pool.

use anchor_lang::prelude::Pubkey;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use seraph_sdk::{config::ProviderConfig, SeraphClient};
use solana_sdk::commitment_config::CommitmentConfig;
use tracing_subscriber::EnvFilter;

// Flags override the `ANCHOR_*` environment, which overrides the defaults
#[derive(Parser)]
#[command(name = "seraph-cli")]
#[command(about = "Administer a Seraph stake pool")]
#[command(version)]
struct Cli {
    /// RPC endpoint URL [default: $ANCHOR_PROVIDER_URL or http://127.0.0.1:8899]
    #[arg(long)]
    url: Option<String>,

    /// Websocket endpoint URL [default: $ANCHOR_WS_URL or derived from the RPC url]
    #[arg(long)]
    ws_url: Option<String>,

    /// Path to the admin keypair [default: $ANCHOR_WALLET or ~/.config/solana/id.json]
    #[arg(long)]
    wallet: Option<String>,

    /// Commitment level [default: $ANCHOR_COMMITMENT or confirmed]
    #[arg(long, value_enum)]
    commitment: Option<Commitment>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(commitment: Commitment) -> Self {
        match commitment {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create the pool and validator list for the wallet
    Initialize,
    /// Score a validator from its vote account
    Score {
        vote_account: Pubkey,
    },
    /// Delegate a stake account to an eligible validator
    Delegate {
        stake_account: Pubkey,
        vote_account: Pubkey,
    },
    /// Move a deactivated stake account to another validator
    Redelegate {
        stake_account: Pubkey,
        old_vote_account: Pubkey,
        new_vote_account: Pubkey,
    },
    /// Deactivate a stake account
    Deactivate {
        stake_account: Pubkey,
    },
    /// Print the pool and the scored validators
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .compact()
        .init();

    let provider = provider_config(&cli)?;
    let client = SeraphClient::new(&provider).context("failed to create seraph client")?;

    match cli.command {
        Commands::Initialize => {
            let tx = client.initialize()?;
            println!("Your transaction signature {tx}");
        }
        Commands::Score { vote_account } => {
            let tx = client.calculate_score(vote_account)?;
            println!("{tx}");
        }
        Commands::Delegate {
            stake_account,
            vote_account,
        } => {
            let tx = client.delegate_stake(stake_account, vote_account)?;
            println!("{tx}");
        }
        Commands::Redelegate {
            stake_account,
            old_vote_account,
            new_vote_account,
        } => {
            let tx = client.redelegate_stake(stake_account, old_vote_account, new_vote_account)?;
            println!("{tx}");
        }
        Commands::Deactivate { stake_account } => {
            let tx = client.deactivate_stake(stake_account)?;
            println!("{tx}");
        }
        Commands::Show => show(&client)?,
    }

    Ok(())
}

fn provider_config(cli: &Cli) -> Result<ProviderConfig> {
    let mut provider = ProviderConfig::from_env().context("invalid ANCHOR_* environment")?;
    if let Some(url) = &cli.url {
        provider = provider.with_url(url);
    }
    if let Some(ws_url) = &cli.ws_url {
        provider = provider.with_ws_url(ws_url);
    }
    if let Some(wallet) = &cli.wallet {
        provider = provider.with_wallet(wallet);
    }
    if let Some(commitment) = cli.commitment {
        provider = provider.with_commitment(commitment.into());
    }
    Ok(provider)
}

fn show(client: &SeraphClient) -> Result<()> {
    let pool = client.pool()?;
    let v_list = client.v_list()?;

    println!("Pool:        {}", client.pool_address());
    println!("Admin:       {}", pool.admin);
    println!("Start epoch: {} (slot {})", pool.start_epoch, pool.start_slot);
    println!("Scoring from epoch {}", pool.scoring_epoch());
    println!();
    println!("Validators ({} scored, top {} eligible):", v_list.len(), v_list.eligible_count());
    for (rank, entry) in v_list.validators.iter().enumerate() {
        let marker = if rank < v_list.eligible_count() { "*" } else { " " };
        println!(
            "{marker} {:>3}. {}  score {:>8}  epoch {}",
            rank + 1,
            entry.validator,
            entry.score,
            entry.last_scored_epoch
        );
    }
    Ok(())
}

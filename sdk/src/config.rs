//! Provider configuration
//!
//! Mirrors how Anchor's `AnchorProvider.env()` finds its cluster and wallet,
//! so the same environment drives this SDK, `anchor test` and the TS client.

use std::{path::PathBuf, str::FromStr};

use anchor_client::Cluster;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    signature::{read_keypair_file, Keypair},
};

use crate::{Result, SdkError};

pub const PROVIDER_URL_ENV: &str = "ANCHOR_PROVIDER_URL";
pub const WS_URL_ENV: &str = "ANCHOR_WS_URL";
pub const WALLET_ENV: &str = "ANCHOR_WALLET";
pub const COMMITMENT_ENV: &str = "ANCHOR_COMMITMENT";

pub const DEFAULT_PROVIDER_URL: &str = "http://127.0.0.1:8899";
pub const DEFAULT_WALLET: &str = "~/.config/solana/id.json";

#[derive(Clone, Debug)]
pub struct ProviderConfig {
    /// RPC endpoint to connect to
    pub url: String,

    /// Websocket endpoint, derived from `url` when unset
    pub ws_url: Option<String>,

    /// Keypair file of the wallet that pays and signs
    pub wallet: PathBuf,

    pub commitment: CommitmentConfig,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PROVIDER_URL.to_string(),
            ws_url: None,
            wallet: expand_path(DEFAULT_WALLET),
            commitment: CommitmentConfig::confirmed(),
        }
    }
}

impl ProviderConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let commitment = match lookup(COMMITMENT_ENV) {
            Some(level) => parse_commitment(&level)?,
            None => defaults.commitment,
        };

        Ok(Self {
            url: lookup(PROVIDER_URL_ENV).unwrap_or(defaults.url),
            ws_url: lookup(WS_URL_ENV),
            wallet: lookup(WALLET_ENV)
                .map(|path| expand_path(&path))
                .unwrap_or(defaults.wallet),
            commitment,
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_ws_url(mut self, ws_url: impl Into<String>) -> Self {
        self.ws_url = Some(ws_url.into());
        self
    }

    /// Use the keypair at `path`, expanding a leading `~`
    pub fn with_wallet(mut self, path: &str) -> Self {
        self.wallet = expand_path(path);
        self
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn cluster(&self) -> Result<Cluster> {
        match &self.ws_url {
            Some(ws_url) => Ok(Cluster::Custom(self.url.clone(), ws_url.clone())),
            None => Cluster::from_str(&self.url)
                .map_err(|e| SdkError::Config(format!("invalid provider url {}: {e}", self.url))),
        }
    }

    pub fn load_payer(&self) -> Result<Keypair> {
        read_keypair_file(&self.wallet).map_err(|e| SdkError::Keypair {
            path: self.wallet.display().to_string(),
            reason: e.to_string(),
        })
    }
}

pub fn parse_commitment(level: &str) -> Result<CommitmentConfig> {
    match level.trim().to_ascii_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(SdkError::Config(format!("unknown commitment level: {other}"))),
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

use anchor_client::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Anchor client error: {0}")]
    AnchorClient(Box<ClientError>),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read keypair {path}: {reason}")]
    Keypair { path: String, reason: String },

    #[error("Account not found: {0}")]
    AccountNotFound(String),
}

impl From<ClientError> for SdkError {
    fn from(err: ClientError) -> Self {
        Self::AnchorClient(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, SdkError>;

//! Seraph SDK - client side of the Seraph stake pool program
//!
//! This SDK provides:
//! - Provider configuration from the standard `ANCHOR_*` environment
//! - A typed program handle that sends the program's instructions
//! - Instruction builders shared with the integration tests

pub mod client;
pub mod config;
pub mod error;
pub mod instructions;
pub mod pda;

// Re-export key types
pub use client::SeraphClient;
pub use config::ProviderConfig;
pub use error::{Result, SdkError};
pub use seraph::{Pool, VList, VListEntry};

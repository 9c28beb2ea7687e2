#![allow(deprecated, unexpected_cfgs)]
//! Seraph - stake pool that scores validators and routes stake to the best of them
//!
//! An admin owns one `Pool` and one `VList` (both PDAs). Validators are scored
//! from the credits their vote accounts earned over the last epochs, and the
//! admin's stake accounts are delegated to the top of the list.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod scoring;
pub mod state;

pub use constants::*;
pub use error::*;
// Anchor expects the generated account modules at the crate root
#[allow(ambiguous_glob_reexports)]
pub use instructions::*;
pub use state::*;

declare_id!("9EK4NR8LwFBzV6jCNYoshQ9yyuM6yDxB8zsqrhTsK5z");

#[program]
pub mod seraph {
    use super::*;

    /// Create the admin's pool and validator list
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Score one validator from its vote account and update the list
    pub fn calculate_score(ctx: Context<CalculateScore>) -> Result<()> {
        instructions::calculate_score::handler(ctx)
    }

    /// Delegate a stake account to an eligible validator
    pub fn delegate_stake(ctx: Context<DelegateStake>) -> Result<()> {
        instructions::delegate_stake::handler(ctx)
    }

    /// Move a deactivated stake account from one validator to another
    pub fn redelegate_stake(ctx: Context<RedelegateStake>) -> Result<()> {
        instructions::redelegate_stake::handler(ctx)
    }

    /// Deactivate a delegated stake account
    pub fn deactivate_stake(ctx: Context<DeactivateStake>) -> Result<()> {
        instructions::deactivate_stake::handler(ctx)
    }
}

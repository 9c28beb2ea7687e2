use anchor_lang::{
    prelude::*,
    solana_program::{
        program::invoke,
        stake::{self, instruction::delegate_stake},
        sysvar::stake_history,
        vote,
    },
};
use anchor_spl::stake::{Stake as StakeProgram, StakeAccount};

use crate::{Pool, SeraphError, VList};

#[derive(Accounts)]
pub struct RedelegateStake<'info> {
    /// Staker authority of `stake_account`
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [Pool::SEED, pool.admin.as_ref()],
        bump = pool.bump,
        has_one = admin
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        seeds = [VList::SEED, admin.key().as_ref(), pool.key().as_ref()],
        bump = v_list.bump,
        has_one = pool
    )]
    pub v_list: Box<Account<'info, VList>>,

    #[account(mut)]
    pub stake_account: Account<'info, StakeAccount>,

    /// CHECK: compared against the current delegation
    pub old_validator_vote: UncheckedAccount<'info>,

    /// CHECK: must be listed as eligible in `v_list`
    #[account(owner = vote::program::ID @ SeraphError::InvalidVoteAccount)]
    pub new_validator_vote: UncheckedAccount<'info>,

    pub clock: Sysvar<'info, Clock>,

    /// CHECK:
    #[account(address = stake_history::ID)]
    pub stake_history: UncheckedAccount<'info>,

    /// CHECK:
    #[account(address = stake::config::ID)]
    pub stake_config: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,

    pub stake_program: Program<'info, StakeProgram>,
}

pub fn handler(ctx: Context<RedelegateStake>) -> Result<()> {
    let RedelegateStake {
        admin,
        v_list,
        stake_account,
        old_validator_vote,
        new_validator_vote,
        clock,
        stake_history,
        stake_config,
        stake_program,
        ..
    } = ctx.accounts;

    let delegation = stake_account
        .delegation()
        .ok_or(SeraphError::NotDelegated)?;

    require_keys_eq!(
        delegation.voter_pubkey,
        old_validator_vote.key(),
        SeraphError::DelegationMismatch
    );
    require_keys_neq!(
        old_validator_vote.key(),
        new_validator_vote.key(),
        SeraphError::SameValidator
    );
    require!(
        delegation.deactivation_epoch != u64::MAX,
        SeraphError::StakeStillActive
    );
    require!(
        v_list.is_eligible(new_validator_vote.key),
        SeraphError::ValidatorNotEligible
    );

    msg!(
        "Redelegating stake {} from {} to {}",
        stake_account.key(),
        old_validator_vote.key(),
        new_validator_vote.key()
    );

    // a deactivated stake account can be delegated again to any vote account
    invoke(
        &delegate_stake(&stake_account.key(), admin.key, new_validator_vote.key),
        &[
            stake_program.to_account_info(),
            stake_account.to_account_info(),
            new_validator_vote.to_account_info(),
            clock.to_account_info(),
            stake_history.to_account_info(),
            stake_config.to_account_info(),
            admin.to_account_info(),
        ],
    )?;

    Ok(())
}

use anchor_lang::{
    prelude::*,
    solana_program::{
        program::invoke,
        stake::{self, instruction::delegate_stake},
        sysvar::stake_history,
        vote,
    },
};
use anchor_spl::stake::Stake as StakeProgram;

use crate::{Pool, SeraphError, VList};

#[derive(Accounts)]
pub struct DelegateStake<'info> {
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

    /// CHECK: must be listed as eligible in `v_list`
    #[account(owner = vote::program::ID @ SeraphError::InvalidVoteAccount)]
    pub validator_vote: UncheckedAccount<'info>,

    /// CHECK: validated by the stake program
    #[account(mut, owner = stake::program::ID)]
    pub stake_account: UncheckedAccount<'info>,

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

pub fn handler(ctx: Context<DelegateStake>) -> Result<()> {
    let DelegateStake {
        admin,
        v_list,
        validator_vote,
        stake_account,
        clock,
        stake_history,
        stake_config,
        stake_program,
        ..
    } = ctx.accounts;

    require!(
        v_list.is_eligible(validator_vote.key),
        SeraphError::ValidatorNotEligible
    );

    msg!(
        "Delegating stake {} to {}",
        stake_account.key(),
        validator_vote.key()
    );

    invoke(
        &delegate_stake(stake_account.key, admin.key, validator_vote.key),
        &[
            stake_program.to_account_info(),
            stake_account.to_account_info(),
            validator_vote.to_account_info(),
            clock.to_account_info(),
            stake_history.to_account_info(),
            stake_config.to_account_info(),
            admin.to_account_info(),
        ],
    )?;

    Ok(())
}

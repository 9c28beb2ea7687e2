use anchor_lang::{prelude::*, solana_program::stake};
use anchor_spl::stake::{
    deactivate_stake, DeactivateStake as DeactivateStakeAccounts, Stake as StakeProgram,
};

use crate::Pool;

#[derive(Accounts)]
pub struct DeactivateStake<'info> {
    /// Staker authority of `stake_account`
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [Pool::SEED, pool.admin.as_ref()],
        bump = pool.bump,
        has_one = admin
    )]
    pub pool: Account<'info, Pool>,

    /// CHECK: validated by the stake program
    #[account(mut, owner = stake::program::ID)]
    pub stake_account: UncheckedAccount<'info>,

    pub clock: Sysvar<'info, Clock>,

    pub system_program: Program<'info, System>,

    pub stake_program: Program<'info, StakeProgram>,
}

pub fn handler(ctx: Context<DeactivateStake>) -> Result<()> {
    let DeactivateStake {
        admin,
        stake_account,
        clock,
        stake_program,
        ..
    } = ctx.accounts;

    msg!("Deactivating stake {}", stake_account.key());

    deactivate_stake(CpiContext::new(
        stake_program.to_account_info(),
        DeactivateStakeAccounts {
            stake: stake_account.to_account_info(),
            staker: admin.to_account_info(),
            clock: clock.to_account_info(),
        },
    ))
}

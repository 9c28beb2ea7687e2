use anchor_lang::prelude::*;

use crate::{Pool, VList};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = Pool::SIZE,
        seeds = [Pool::SEED, admin.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        init,
        payer = admin,
        space = VList::SIZE,
        seeds = [VList::SEED, admin.key().as_ref(), pool.key().as_ref()],
        bump
    )]
    pub v_list: Box<Account<'info, VList>>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let clock = Clock::get()?;
    let admin = ctx.accounts.admin.key();
    let pool_key = ctx.accounts.pool.key();

    ctx.accounts
        .pool
        .init(&admin, clock.slot, clock.epoch, ctx.bumps.pool);
    ctx.accounts
        .v_list
        .init(&admin, pool_key, ctx.bumps.v_list);

    msg!(
        "Seraph pool {} initialized by {} at epoch {}",
        pool_key,
        admin,
        clock.epoch
    );
    Ok(())
}

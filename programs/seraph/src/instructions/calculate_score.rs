use anchor_lang::{
    prelude::*,
    solana_program::vote::{self, state::VoteState},
};

use crate::{scoring, Pool, SeraphError, VList};

#[derive(Accounts)]
pub struct CalculateScore<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: decoded as vote state in the handler, owner is checked here
    #[account(owner = vote::program::ID @ SeraphError::InvalidVoteAccount)]
    pub vote_account: UncheckedAccount<'info>,

    #[account(
        seeds = [Pool::SEED, pool.admin.as_ref()],
        bump = pool.bump,
        has_one = admin
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [VList::SEED, admin.key().as_ref(), pool.key().as_ref()],
        bump = v_list.bump,
        has_one = pool
    )]
    pub v_list: Box<Account<'info, VList>>,
}

pub fn handler(ctx: Context<CalculateScore>) -> Result<()> {
    let CalculateScore {
        vote_account,
        pool,
        v_list,
        ..
    } = ctx.accounts;

    let current_epoch = Clock::get()?.epoch;
    require!(
        current_epoch >= pool.scoring_epoch(),
        SeraphError::NotEnoughEpochs
    );

    let vote_state = {
        let data = vote_account.try_borrow_data()?;
        VoteState::deserialize(&data).map_err(|_| error!(SeraphError::InvalidVoteAccount))?
    };

    let score = scoring::average_score(
        &vote_state.epoch_credits,
        vote_state.commission,
        current_epoch,
    )
    .ok_or(SeraphError::NoEpochCredits)?;

    let updated = v_list.insert_or_update(vote_account.key(), score, current_epoch);

    msg!(
        "Validator {} scored {} at epoch {} (listed: {})",
        vote_account.key(),
        score,
        current_epoch,
        updated
    );
    Ok(())
}

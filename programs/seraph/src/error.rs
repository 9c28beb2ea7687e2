//! Seraph errors

use anchor_lang::prelude::*;

#[error_code]
pub enum SeraphError {
    #[msg("Validator cannot be scored yet: less than 5 epochs have passed")]
    NotEnoughEpochs,

    #[msg("Vote account has no credits inside the scoring window")]
    NoEpochCredits,

    #[msg("Vote account data could not be decoded")]
    InvalidVoteAccount,

    #[msg("Validator is not in the top of the validator list")]
    ValidatorNotEligible,

    #[msg("Stake account is not delegated")]
    NotDelegated,

    #[msg("Stake account is delegated to a different validator")]
    DelegationMismatch,

    #[msg("Stake account must be deactivated before it can be redelegated")]
    StakeStillActive,

    #[msg("New validator is the same as the current one")]
    SameValidator,
}

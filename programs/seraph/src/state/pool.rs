use anchor_lang::prelude::*;

/// Root account of an admin's stake pool
#[account]
#[derive(Default, Debug)]
pub struct Pool {
    pub admin: Pubkey,
    pub start_slot: u64,
    pub start_epoch: u64,
    pub bump: u8,
}

impl Pool {
    pub const SEED: &'static [u8] = b"pool";

    pub const SIZE: usize = 8 + // discriminator
        32 + // admin
        8 + // start_slot
        8 + // start_epoch
        1; // bump

    pub fn pubkey(admin: Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[Self::SEED, admin.as_ref()], &crate::ID).0
    }

    pub fn init(&mut self, admin: &Pubkey, start_slot: u64, start_epoch: u64, bump: u8) {
        self.admin = *admin;
        self.start_slot = start_slot;
        self.start_epoch = start_epoch;
        self.bump = bump;
    }

    /// Epoch from which validators can be scored
    pub fn scoring_epoch(&self) -> u64 {
        self.start_epoch.saturating_add(crate::SCORING_WINDOW_EPOCHS)
    }
}

use anchor_lang::prelude::*;

use crate::{ELIGIBLE_FRACTION, MAX_VALIDATORS_IN_LIST};

/// Scored validators, kept sorted by score (highest first)
#[account]
#[derive(Default, Debug)]
pub struct VList {
    pub admin: Pubkey,
    pub pool: Pubkey,
    pub bump: u8,
    pub validators: Vec<VListEntry>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VListEntry {
    pub validator: Pubkey,
    pub last_scored_epoch: u64,
    pub score: u32,
}

impl VListEntry {
    pub const SIZE: usize = 32 + 8 + 4;
}

impl VList {
    pub const SEED: &'static [u8] = b"v_list";

    pub const SIZE: usize = 8 + // discriminator
        32 + // admin
        32 + // pool
        1 + // bump
        4 + MAX_VALIDATORS_IN_LIST * VListEntry::SIZE; // validators

    pub fn pubkey(admin: Pubkey, pool: Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[Self::SEED, admin.as_ref(), pool.as_ref()], &crate::ID).0
    }

    pub fn init(&mut self, admin: &Pubkey, pool: Pubkey, bump: u8) {
        self.admin = *admin;
        self.pool = pool;
        self.bump = bump;
        self.validators = Vec::with_capacity(MAX_VALIDATORS_IN_LIST);
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn get(&self, validator: &Pubkey) -> Option<&VListEntry> {
        self.validators.iter().find(|e| e.validator == *validator)
    }

    /// Record a validator's score.
    ///
    /// A known validator is updated in place. A new one is appended while
    /// there is room; once the list is full it only displaces the lowest
    /// entry if it scores strictly higher. Returns whether the list changed.
    pub fn insert_or_update(&mut self, validator: Pubkey, score: u32, epoch: u64) -> bool {
        let entry = VListEntry {
            validator,
            last_scored_epoch: epoch,
            score,
        };

        if let Some(existing) = self.validators.iter_mut().find(|e| e.validator == validator) {
            *existing = entry;
        } else if self.validators.len() < MAX_VALIDATORS_IN_LIST {
            self.validators.push(entry);
        } else {
            match self.validators.last_mut() {
                Some(lowest) if lowest.score < score => *lowest = entry,
                _ => return false,
            }
        }

        // stable, so equal scores keep their relative order
        self.validators.sort_by(|a, b| b.score.cmp(&a.score));
        true
    }

    /// Size of the delegation set: the top tenth, at least one
    pub fn eligible_count(&self) -> usize {
        if self.validators.is_empty() {
            return 0;
        }
        self.validators.len().div_ceil(ELIGIBLE_FRACTION)
    }

    pub fn eligible(&self) -> &[VListEntry] {
        &self.validators[..self.eligible_count()]
    }

    pub fn is_eligible(&self, validator: &Pubkey) -> bool {
        self.eligible().iter().any(|e| e.validator == *validator)
    }
}

impl TryFrom<Vec<u8>> for VList {
    type Error = Error;
    fn try_from(data: Vec<u8>) -> std::result::Result<Self, Self::Error> {
        VList::try_deserialize(&mut data.as_slice())
    }
}

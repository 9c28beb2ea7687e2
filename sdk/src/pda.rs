//! Program derived addresses of an admin's pool

use anchor_lang::prelude::Pubkey;
use seraph::{Pool, VList};

/// Pool and validator list addresses owned by `admin`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolAddresses {
    pub admin: Pubkey,
    pub pool: Pubkey,
    pub v_list: Pubkey,
}

impl PoolAddresses {
    pub fn derive(admin: Pubkey) -> Self {
        let pool = Pool::pubkey(admin);
        Self {
            admin,
            pool,
            v_list: VList::pubkey(admin, pool),
        }
    }
}

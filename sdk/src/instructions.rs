//! Instruction builders for the seraph program

#![allow(deprecated)]

use anchor_lang::{
    solana_program::{
        instruction::Instruction,
        pubkey::Pubkey,
        stake::{self, config},
        system_program,
        sysvar::{clock, stake_history},
    },
    InstructionData, ToAccountMetas,
};

use crate::pda::PoolAddresses;

pub fn initialize(admin: Pubkey) -> Instruction {
    let addrs = PoolAddresses::derive(admin);
    Instruction {
        program_id: seraph::ID,
        accounts: seraph::accounts::Initialize {
            admin,
            pool: addrs.pool,
            v_list: addrs.v_list,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: seraph::instruction::Initialize {}.data(),
    }
}

pub fn calculate_score(admin: Pubkey, vote_account: Pubkey) -> Instruction {
    let addrs = PoolAddresses::derive(admin);
    Instruction {
        program_id: seraph::ID,
        accounts: seraph::accounts::CalculateScore {
            admin,
            vote_account,
            pool: addrs.pool,
            v_list: addrs.v_list,
        }
        .to_account_metas(None),
        data: seraph::instruction::CalculateScore {}.data(),
    }
}

pub fn delegate_stake(admin: Pubkey, stake_account: Pubkey, validator_vote: Pubkey) -> Instruction {
    let addrs = PoolAddresses::derive(admin);
    Instruction {
        program_id: seraph::ID,
        accounts: seraph::accounts::DelegateStake {
            admin,
            pool: addrs.pool,
            v_list: addrs.v_list,
            validator_vote,
            stake_account,
            clock: clock::ID,
            stake_history: stake_history::ID,
            stake_config: config::ID,
            system_program: system_program::ID,
            stake_program: stake::program::ID,
        }
        .to_account_metas(None),
        data: seraph::instruction::DelegateStake {}.data(),
    }
}

pub fn redelegate_stake(
    admin: Pubkey,
    stake_account: Pubkey,
    old_validator_vote: Pubkey,
    new_validator_vote: Pubkey,
) -> Instruction {
    let addrs = PoolAddresses::derive(admin);
    Instruction {
        program_id: seraph::ID,
        accounts: seraph::accounts::RedelegateStake {
            admin,
            pool: addrs.pool,
            v_list: addrs.v_list,
            stake_account,
            old_validator_vote,
            new_validator_vote,
            clock: clock::ID,
            stake_history: stake_history::ID,
            stake_config: config::ID,
            system_program: system_program::ID,
            stake_program: stake::program::ID,
        }
        .to_account_metas(None),
        data: seraph::instruction::RedelegateStake {}.data(),
    }
}

pub fn deactivate_stake(admin: Pubkey, stake_account: Pubkey) -> Instruction {
    let addrs = PoolAddresses::derive(admin);
    Instruction {
        program_id: seraph::ID,
        accounts: seraph::accounts::DeactivateStake {
            admin,
            pool: addrs.pool,
            stake_account,
            clock: clock::ID,
            system_program: system_program::ID,
            stake_program: stake::program::ID,
        }
        .to_account_metas(None),
        data: seraph::instruction::DeactivateStake {}.data(),
    }
}

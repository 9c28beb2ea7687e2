//! RPC client for the seraph program

use std::rc::Rc;

use anchor_client::{Client, ClientError, Cluster, Program};
use anchor_lang::{prelude::Pubkey, AccountDeserialize};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    signature::{Keypair, Signature},
    signer::Signer,
};
use tracing::{debug, info};

use crate::{instructions, pda::PoolAddresses, ProviderConfig, Result, SdkError};
use seraph::{Pool, VList, VListEntry};

/// Program handle for seraph, acting as the pool admin
pub struct SeraphClient {
    pub client: Client<Rc<Keypair>>,
    pub payer: Rc<Keypair>,
    pub program: Program<Rc<Keypair>>,
    addresses: PoolAddresses,
}

impl SeraphClient {
    /// Connect with the cluster, wallet and commitment of `provider`
    pub fn new(provider: &ProviderConfig) -> Result<Self> {
        let payer = Rc::new(provider.load_payer()?);
        Self::with_payer(provider.cluster()?, payer, provider.commitment)
    }

    pub fn with_payer(
        cluster: Cluster,
        payer: Rc<Keypair>,
        commitment: CommitmentConfig,
    ) -> Result<Self> {
        debug!(url = cluster.url(), admin = %payer.pubkey(), "connecting to seraph");

        let client = Client::new_with_options(cluster, payer.clone(), commitment);
        let program = client.program(seraph::ID)?;
        let addresses = PoolAddresses::derive(payer.pubkey());

        Ok(Self {
            client,
            payer,
            program,
            addresses,
        })
    }

    pub fn admin(&self) -> Pubkey {
        self.addresses.admin
    }

    pub fn pool_address(&self) -> Pubkey {
        self.addresses.pool
    }

    pub fn v_list_address(&self) -> Pubkey {
        self.addresses.v_list
    }

    /// Create the admin's pool and validator list
    pub fn initialize(&self) -> Result<Signature> {
        let signature = self.send(instructions::initialize(self.admin()))?;
        info!(signature = %signature, pool = %self.pool_address(), "Your transaction signature");
        Ok(signature)
    }

    pub fn calculate_score(&self, vote_account: Pubkey) -> Result<Signature> {
        let signature = self.send(instructions::calculate_score(self.admin(), vote_account))?;
        info!(signature = %signature, vote_account = %vote_account, "validator scored");
        Ok(signature)
    }

    pub fn delegate_stake(&self, stake_account: Pubkey, validator_vote: Pubkey) -> Result<Signature> {
        let signature = self.send(instructions::delegate_stake(
            self.admin(),
            stake_account,
            validator_vote,
        ))?;
        info!(signature = %signature, stake = %stake_account, validator = %validator_vote, "stake delegated");
        Ok(signature)
    }

    pub fn redelegate_stake(
        &self,
        stake_account: Pubkey,
        old_validator_vote: Pubkey,
        new_validator_vote: Pubkey,
    ) -> Result<Signature> {
        let signature = self.send(instructions::redelegate_stake(
            self.admin(),
            stake_account,
            old_validator_vote,
            new_validator_vote,
        ))?;
        info!(
            signature = %signature,
            stake = %stake_account,
            from = %old_validator_vote,
            to = %new_validator_vote,
            "stake redelegated"
        );
        Ok(signature)
    }

    pub fn deactivate_stake(&self, stake_account: Pubkey) -> Result<Signature> {
        let signature = self.send(instructions::deactivate_stake(self.admin(), stake_account))?;
        info!(signature = %signature, stake = %stake_account, "stake deactivated");
        Ok(signature)
    }

    pub fn pool(&self) -> Result<Pool> {
        self.get_account(&self.pool_address())
    }

    pub fn v_list(&self) -> Result<VList> {
        self.get_account(&self.v_list_address())
    }

    /// Validators currently eligible for delegation
    pub fn eligible_validators(&self) -> Result<Vec<VListEntry>> {
        Ok(self.v_list()?.eligible().to_vec())
    }

    /// Fetch and decode an account. Only a missing account becomes
    /// `AccountNotFound`, RPC and decoding failures come back as is.
    pub fn get_account<T: AccountDeserialize>(&self, address: &Pubkey) -> Result<T> {
        self.program.account(*address).map_err(|e| match e {
            ClientError::AccountNotFound => SdkError::AccountNotFound(address.to_string()),
            other => other.into(),
        })
    }

    // One instruction, one transaction, signed by the payer. No retries.
    fn send(&self, ix: Instruction) -> Result<Signature> {
        debug!(accounts = ix.accounts.len(), "sending seraph instruction");
        let signature = self.program.request().instruction(ix).send()?;
        Ok(signature)
    }
}

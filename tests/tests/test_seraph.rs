use anchor_lang::error::ErrorCode;
use seraph::{Pool, SeraphError, VList, MAX_VALIDATORS_IN_LIST};
use seraph_sdk::instructions;
use seraph_tests::fixtures::{
    assert_anchor_error, assert_custom_error, assert_instruction_error, assert_seraph_error,
    SeraphFixture, TOTAL_VALIDATORS,
};
use solana_sdk::{instruction::InstructionError, signature::Signature, signer::Signer};

// StakeError::AlreadyDeactivated
const STAKE_ALREADY_DEACTIVATED: u32 = 2;

/// Initialized pool, past the scoring window, every validator scored
async fn scored_fixture() -> SeraphFixture {
    let mut fixture = SeraphFixture::new().await;
    fixture.initialize_seraph().await.unwrap();
    fixture.init_stake_accounts().await;

    fixture.advance_num_epochs(6).await;
    fixture.record_vote_credits(5).await;

    for i in 0..TOTAL_VALIDATORS {
        fixture.score_validator(i).await.unwrap();
    }
    fixture
}

#[tokio::test]
async fn test_initialize() {
    let mut fixture = SeraphFixture::new().await;

    let signature = fixture.initialize_seraph().await.unwrap();
    assert_ne!(signature, Signature::default());
    assert!(!signature.to_string().is_empty());

    let clock = fixture.clock().await;
    let pool_address = fixture.pool;
    let pool: Pool = fixture.load_and_deserialize(&pool_address).await;
    assert_eq!(pool.admin, fixture.admin.pubkey());
    assert_eq!(pool.start_epoch, clock.epoch);
    assert!(pool.start_slot <= clock.slot);

    let v_list = fixture.v_list().await;
    assert_eq!(v_list.admin, fixture.admin.pubkey());
    assert_eq!(v_list.pool, fixture.pool);
    assert!(v_list.is_empty());
}

#[tokio::test]
async fn test_initialize_twice_fails() {
    let mut fixture = SeraphFixture::new().await;
    fixture.initialize_seraph().await.unwrap();

    assert!(fixture.initialize_seraph().await.is_err());
}

#[tokio::test]
async fn test_score_before_window_fails() {
    let mut fixture = SeraphFixture::new().await;
    fixture.initialize_seraph().await.unwrap();
    fixture.record_vote_credits(1).await;

    assert_seraph_error(fixture.score_validator(0).await, SeraphError::NotEnoughEpochs);
}

#[tokio::test]
async fn test_score_without_credits_fails() {
    let mut fixture = SeraphFixture::new().await;
    fixture.initialize_seraph().await.unwrap();
    fixture.advance_num_epochs(6).await;

    assert_seraph_error(fixture.score_validator(0).await, SeraphError::NoEpochCredits);
}

#[tokio::test]
async fn test_score_rejects_non_vote_account() {
    let mut fixture = SeraphFixture::new().await;
    fixture.initialize_seraph().await.unwrap();
    fixture.advance_num_epochs(6).await;

    let admin = fixture.admin.pubkey();
    let ix = instructions::calculate_score(admin, fixture.identities[0]);
    assert_seraph_error(fixture.process(&[ix]).await, SeraphError::InvalidVoteAccount);
}

#[tokio::test]
async fn test_scores_are_ranked() {
    let mut fixture = scored_fixture().await;
    let epoch = fixture.clock().await.epoch;

    let v_list: VList = fixture.v_list().await;
    assert_eq!(v_list.len(), TOTAL_VALIDATORS);
    assert!(v_list.len() <= MAX_VALIDATORS_IN_LIST);
    assert!(v_list
        .validators
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));

    // commission is zero and every epoch earns the same credits
    let best = TOTAL_VALIDATORS - 1;
    assert_eq!(v_list.validators[0].validator, fixture.vote_accounts[best]);
    assert_eq!(
        u64::from(v_list.validators[0].score),
        SeraphFixture::credits_per_epoch(best)
    );
    assert_eq!(v_list.validators[0].last_scored_epoch, epoch);

    // top 10% of 20
    assert_eq!(v_list.eligible_count(), 2);
    assert!(v_list.is_eligible(&fixture.vote_accounts[best]));
    assert!(v_list.is_eligible(&fixture.vote_accounts[best - 1]));
    assert!(!v_list.is_eligible(&fixture.vote_accounts[0]));
}

#[tokio::test]
async fn test_rescoring_updates_in_place() {
    let mut fixture = SeraphFixture::new().await;
    fixture.initialize_seraph().await.unwrap();
    fixture.advance_num_epochs(6).await;
    fixture.record_vote_credits(5).await;

    fixture.score_validator(3).await.unwrap();
    fixture.advance_num_epochs(1).await;
    fixture.record_vote_credits(5).await;
    fixture.score_validator(3).await.unwrap();

    let epoch = fixture.clock().await.epoch;
    let v_list = fixture.v_list().await;
    assert_eq!(v_list.len(), 1);
    assert_eq!(v_list.validators[0].last_scored_epoch, epoch);
}

#[tokio::test]
async fn test_delegate_to_eligible_validator() {
    let mut fixture = scored_fixture().await;
    let admin = fixture.admin.pubkey();
    let stake = fixture.stake_accounts[0].pubkey();
    let top = fixture.vote_accounts[TOTAL_VALIDATORS - 1];

    fixture
        .process(&[instructions::delegate_stake(admin, stake, top)])
        .await
        .unwrap();

    let delegation = fixture.stake_state(&stake).await.delegation().unwrap();
    assert_eq!(delegation.voter_pubkey, top);
    assert_eq!(delegation.deactivation_epoch, u64::MAX);
}

#[tokio::test]
async fn test_delegate_to_ineligible_validator_fails() {
    let mut fixture = scored_fixture().await;
    let admin = fixture.admin.pubkey();
    let stake = fixture.stake_accounts[1].pubkey();
    let worst = fixture.vote_accounts[0];

    let result = fixture
        .process(&[instructions::delegate_stake(admin, stake, worst)])
        .await;
    assert_seraph_error(result, SeraphError::ValidatorNotEligible);
}

#[tokio::test]
async fn test_deactivate_and_redelegate() {
    let mut fixture = scored_fixture().await;
    let admin = fixture.admin.pubkey();
    let stake = fixture.stake_accounts[0].pubkey();
    let first = fixture.vote_accounts[TOTAL_VALIDATORS - 1];
    let second = fixture.vote_accounts[TOTAL_VALIDATORS - 2];

    fixture
        .process(&[instructions::delegate_stake(admin, stake, first)])
        .await
        .unwrap();

    // still active
    let result = fixture
        .process(&[instructions::redelegate_stake(admin, stake, first, second)])
        .await;
    assert_seraph_error(result, SeraphError::StakeStillActive);

    fixture
        .process(&[instructions::deactivate_stake(admin, stake)])
        .await
        .unwrap();
    let epoch = fixture.clock().await.epoch;
    let delegation = fixture.stake_state(&stake).await.delegation().unwrap();
    assert_eq!(delegation.deactivation_epoch, epoch);

    // wrong source validator
    let result = fixture
        .process(&[instructions::redelegate_stake(admin, stake, second, first)])
        .await;
    assert_seraph_error(result, SeraphError::DelegationMismatch);

    let result = fixture
        .process(&[instructions::redelegate_stake(admin, stake, first, first)])
        .await;
    assert_seraph_error(result, SeraphError::SameValidator);

    fixture
        .process(&[instructions::redelegate_stake(admin, stake, first, second)])
        .await
        .unwrap();

    let delegation = fixture.stake_state(&stake).await.delegation().unwrap();
    assert_eq!(delegation.voter_pubkey, second);
    assert_eq!(delegation.deactivation_epoch, u64::MAX);
}

#[tokio::test]
async fn test_redelegate_undelegated_stake_fails() {
    let mut fixture = scored_fixture().await;
    let admin = fixture.admin.pubkey();
    let stake = fixture.stake_accounts[2].pubkey();
    let first = fixture.vote_accounts[TOTAL_VALIDATORS - 1];
    let second = fixture.vote_accounts[TOTAL_VALIDATORS - 2];

    let result = fixture
        .process(&[instructions::redelegate_stake(admin, stake, first, second)])
        .await;
    assert_seraph_error(result, SeraphError::NotDelegated);
}

#[tokio::test]
async fn test_deactivate_undelegated_stake_fails() {
    let mut fixture = scored_fixture().await;
    let admin = fixture.admin.pubkey();
    let stake = fixture.stake_accounts[3].pubkey();

    // initialized but never delegated
    let result = fixture
        .process(&[instructions::deactivate_stake(admin, stake)])
        .await;
    assert_instruction_error(result, InstructionError::InvalidAccountData);
}

#[tokio::test]
async fn test_deactivate_twice_fails() {
    let mut fixture = scored_fixture().await;
    let admin = fixture.admin.pubkey();
    let stake = fixture.stake_accounts[0].pubkey();
    let top = fixture.vote_accounts[TOTAL_VALIDATORS - 1];

    fixture
        .process(&[instructions::delegate_stake(admin, stake, top)])
        .await
        .unwrap();
    fixture
        .process(&[instructions::deactivate_stake(admin, stake)])
        .await
        .unwrap();

    let result = fixture
        .process(&[instructions::deactivate_stake(admin, stake)])
        .await;
    assert_custom_error(result, STAKE_ALREADY_DEACTIVATED);
}

#[tokio::test]
async fn test_instructions_reject_another_admins_pool() {
    let mut fixture = scored_fixture().await;
    let other = fixture.initialize_other_pool().await;
    let admin = fixture.admin.pubkey();
    let stake = fixture.stake_accounts[0].pubkey();
    let top = fixture.vote_accounts[TOTAL_VALIDATORS - 1];
    let next = fixture.vote_accounts[TOTAL_VALIDATORS - 2];

    // accounts of the other pool, signed by our admin
    let hijacked = [
        instructions::calculate_score(other.pubkey(), top),
        instructions::delegate_stake(other.pubkey(), stake, top),
        instructions::redelegate_stake(other.pubkey(), stake, top, next),
        instructions::deactivate_stake(other.pubkey(), stake),
    ];
    for mut ix in hijacked {
        assert_eq!(ix.accounts[0].pubkey, other.pubkey());
        ix.accounts[0].pubkey = admin;
        assert_anchor_error(fixture.process(&[ix]).await, ErrorCode::ConstraintHasOne);
    }

    // its owner gets past the account checks, the new pool is just too young
    let ix = instructions::calculate_score(other.pubkey(), top);
    let result = fixture.process_signed(&[ix], &[&other]).await;
    assert_seraph_error(result, SeraphError::NotEnoughEpochs);
}

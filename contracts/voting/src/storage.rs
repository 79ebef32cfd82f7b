use soroban_sdk::{Address, Env, Vec};

use crate::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use crate::errors::VotingError;
use crate::types::{DataKey, Leader, Proposal, Voter, WorkflowStatus};

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    extend_instance(env);
}

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("admin is set at construction")
}

// ── Workflow Status ──────────────────────────────────────────────────────────

pub fn get_status(env: &Env) -> WorkflowStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
    extend_instance(env);
}

// ── Voters ───────────────────────────────────────────────────────────────────

/// Reading a registered voter keeps its record alive.
pub fn get_voter(env: &Env, address: &Address) -> Voter {
    let key = DataKey::Voter(address.clone());
    match env.storage().persistent().get::<DataKey, Voter>(&key) {
        Some(voter) => {
            extend_persistent(env, &key);
            voter
        }
        None => Voter::unregistered(),
    }
}

pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    extend_persistent(env, &key);
}

pub fn get_voter_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::VoterCount)
        .unwrap_or(0u32)
}

/// Appends `address` at the next registration position.
pub fn push_voter(env: &Env, address: &Address) -> Result<u32, VotingError> {
    let position = get_voter_count(env);
    let next = position.checked_add(1).ok_or(VotingError::Overflow)?;

    let key = DataKey::VoterAt(position);
    env.storage().persistent().set(&key, address);
    extend_persistent(env, &key);

    env.storage().instance().set(&DataKey::VoterCount, &next);
    extend_instance(env);
    Ok(position)
}

pub fn get_voter_list(env: &Env) -> Result<Vec<Address>, VotingError> {
    let mut voters = Vec::new(env);
    for position in 0..get_voter_count(env) {
        let key = DataKey::VoterAt(position);
        let address: Address = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(VotingError::InvalidState)?;
        extend_persistent(env, &key);
        voters.push_back(address);
    }
    Ok(voters)
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u32)
}

/// Reading a proposal keeps its record alive.
pub fn get_proposal(env: &Env, proposal_id: u32) -> Option<Proposal> {
    let key = DataKey::Proposal(proposal_id);
    let proposal = env.storage().persistent().get::<DataKey, Proposal>(&key)?;
    extend_persistent(env, &key);
    Some(proposal)
}

pub fn save_proposal(env: &Env, proposal_id: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal_id);
    env.storage().persistent().set(&key, proposal);
    extend_persistent(env, &key);
}

/// Stores `proposal` under the next sequential id and returns that id.
pub fn append_proposal(env: &Env, proposal: &Proposal) -> Result<u32, VotingError> {
    let proposal_id = get_proposal_count(env);
    let next = proposal_id.checked_add(1).ok_or(VotingError::Overflow)?;
    save_proposal(env, proposal_id, proposal);
    env.storage().instance().set(&DataKey::ProposalCount, &next);
    extend_instance(env);
    Ok(proposal_id)
}

/// Every id below the count must resolve; a gap would shift positions.
pub fn get_proposals(env: &Env) -> Result<Vec<Proposal>, VotingError> {
    let mut proposals = Vec::new(env);
    for proposal_id in 0..get_proposal_count(env) {
        let proposal = get_proposal(env, proposal_id).ok_or(VotingError::ProposalNotFound)?;
        proposals.push_back(proposal);
    }
    Ok(proposals)
}

// ── Tally ────────────────────────────────────────────────────────────────────

pub fn get_leader(env: &Env) -> Leader {
    env.storage()
        .instance()
        .get(&DataKey::Leader)
        .unwrap_or_else(Leader::initial)
}

pub fn set_leader(env: &Env, leader: &Leader) {
    env.storage().instance().set(&DataKey::Leader, leader);
    extend_instance(env);
}

pub fn get_winner(env: &Env) -> Option<u32> {
    env.storage().instance().get(&DataKey::Winner)
}

pub fn set_winner(env: &Env, proposal_id: u32) {
    env.storage().instance().set(&DataKey::Winner, &proposal_id);
    extend_instance(env);
}

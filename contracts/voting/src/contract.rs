use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

use crate::{
    access,
    errors::VotingError,
    events, storage,
    types::{Proposal, Voter, WinningProposal, WorkflowStatus},
    validation, workflow,
};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Construction ─────────────────────────────────────────────────────────

    /// Runs atomically with deployment: sets the administrator and opens
    /// voter registration.
    pub fn __constructor(env: Env, admin: Address) {
        storage::set_admin(&env, &admin);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);

        events::initialized(&env, &admin);
    }

    // ── Administration ───────────────────────────────────────────────────────

    /// Hand the administrator role to `new_admin`.
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), VotingError> {
        let admin = access::require_admin(&env, &caller)?;
        if new_admin == admin {
            return Err(VotingError::InvalidInput);
        }

        storage::set_admin(&env, &new_admin);
        events::admin_transferred(&env, &admin, &new_admin);

        Ok(())
    }

    /// Always fails: without an administrator the workflow could never advance.
    pub fn renounce_admin(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        Err(VotingError::RenounceDisabled)
    }

    // ── Voter Registration ───────────────────────────────────────────────────

    /// Whitelist `voter`. Only during `RegisteringVoters`.
    pub fn register_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::require_status(&env, WorkflowStatus::RegisteringVoters)?;

        if storage::get_voter(&env, &voter).is_registered {
            return Err(VotingError::AlreadyRegistered);
        }

        let record = Voter {
            is_registered: true,
            ..Voter::unregistered()
        };
        storage::save_voter(&env, &voter, &record);
        storage::push_voter(&env, &voter)?;

        events::voter_registered(&env, &voter);

        Ok(())
    }

    // ── Proposal Registration ────────────────────────────────────────────────

    pub fn start_proposals_registration(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::advance(&env, WorkflowStatus::RegisteringVoters)?;
        Ok(())
    }

    /// Append a proposal on behalf of a whitelisted voter and return its id.
    ///
    /// Ids are assigned sequentially from 0 in submission order.
    pub fn submit_proposal(env: Env, caller: Address, description: String) -> Result<u32, VotingError> {
        access::require_voter(&env, &caller)?;
        workflow::require_status(&env, WorkflowStatus::ProposalsRegistrationStarted)?;
        validation::validate_description(&description)?;
        validation::validate_proposal_capacity(&env)?;

        let proposal = Proposal {
            description: description.clone(),
            vote_count: 0,
        };
        let proposal_id = storage::append_proposal(&env, &proposal)?;

        events::proposal_registered(&env, proposal_id, &description);

        Ok(proposal_id)
    }

    pub fn end_proposals_registration(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::advance(&env, WorkflowStatus::ProposalsRegistrationStarted)?;
        Ok(())
    }

    // ── Voting Session ───────────────────────────────────────────────────────

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::advance(&env, WorkflowStatus::ProposalsRegistrationEnded)?;
        Ok(())
    }

    /// Cast the caller's single vote for `proposal_id`.
    pub fn vote_for(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        let mut voter = access::require_voter(&env, &caller)?;
        workflow::require_status(&env, WorkflowStatus::VotingSessionStarted)?;

        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }

        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)?;
        proposal.vote_count = proposal
            .vote_count
            .checked_add(1)
            .ok_or(VotingError::Overflow)?;

        voter.has_voted = true;
        voter.voted_proposal_id = Some(proposal_id);

        let leader = storage::get_leader(&env).challenge(proposal_id, proposal.vote_count);

        storage::save_proposal(&env, proposal_id, &proposal);
        storage::save_voter(&env, &caller, &voter);
        storage::set_leader(&env, &leader);

        events::voted(&env, &caller, proposal_id);

        Ok(())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::advance(&env, WorkflowStatus::VotingSessionStarted)?;
        Ok(())
    }

    // ── Tally ────────────────────────────────────────────────────────────────

    /// Record the winning proposal and close the workflow.
    ///
    /// The leader is maintained by `vote_for`, so this does not read the
    /// proposals.
    pub fn tally_votes(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::require_status(&env, WorkflowStatus::VotingSessionEnded)?;

        if storage::get_proposal_count(&env) == 0 {
            log!(&env, "tally found no proposals");
        } else {
            let leader = storage::get_leader(&env);
            storage::set_winner(&env, leader.proposal_id);
            log!(&env, "tally winner (id, votes)", leader.proposal_id, leader.vote_count);
        }

        workflow::advance(&env, WorkflowStatus::VotingSessionEnded)?;
        Ok(())
    }

    /// Winning proposal. Only available once votes are tallied.
    pub fn get_winner(env: Env) -> Result<WinningProposal, VotingError> {
        if storage::get_status(&env) != WorkflowStatus::VotesTallied {
            return Err(VotingError::VotesNotTallied);
        }

        let proposal_id = storage::get_winner(&env).ok_or(VotingError::NoProposals)?;
        let proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)?;

        Ok(WinningProposal {
            proposal_id,
            description: proposal.description,
            vote_count: proposal.vote_count,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn get_admin(env: Env) -> Address {
        storage::get_admin(&env)
    }

    pub fn get_status(env: Env) -> WorkflowStatus {
        storage::get_status(&env)
    }

    /// Registration and ballot record of `address`; unknown addresses
    /// read as unregistered.
    pub fn get_voter(env: Env, address: Address) -> Voter {
        storage::get_voter(&env, &address)
    }

    /// Whitelisted addresses in registration order.
    pub fn get_registered_voters(env: Env) -> Result<Vec<Address>, VotingError> {
        storage::get_voter_list(&env)
    }

    /// All proposals in id order, with their current vote counts.
    pub fn get_proposals(env: Env) -> Result<Vec<Proposal>, VotingError> {
        storage::get_proposals(&env)
    }

    pub fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, VotingError> {
        storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)
    }

    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }
}

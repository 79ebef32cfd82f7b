//! Error codes returned by the voting contract
//!
//! Codes are grouped by range:
//! - 1-19: General/Authorization errors
//! - 20-29: Whitelist errors
//! - 30-39: Workflow errors
//! - 40-49: Ballot errors
//! - 50-59: Result errors

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum VotingError {
    // ===== General/Authorization Errors (1-19) =====
    /// Caller is not the administrator
    Unauthorized = 1,

    /// Invalid input provided
    InvalidInput = 4,

    /// Arithmetic overflow occurred
    Overflow = 5,

    /// The administrator role cannot be given up
    RenounceDisabled = 6,

    /// A stored record the counters point at is missing
    InvalidState = 7,

    // ===== Whitelist Errors (20-29) =====
    /// Caller is not a registered voter
    NotWhitelisted = 20,

    /// Address is already a registered voter
    AlreadyRegistered = 21,

    // ===== Workflow Errors (30-39) =====
    /// Operation is not allowed in the current workflow status
    InvalidWorkflowStatus = 30,

    // ===== Ballot Errors (40-49) =====
    /// Voter has already cast a vote
    AlreadyVoted = 40,

    /// Proposal id does not reference a submitted proposal
    ProposalNotFound = 41,

    // ===== Result Errors (50-59) =====
    /// Winner requested before the votes were tallied
    VotesNotTallied = 50,

    /// Tally ran without any proposal
    NoProposals = 51,
}

impl VotingError {
    /// Get a human-readable description of the error
    pub fn message(&self) -> &'static str {
        match self {
            VotingError::Unauthorized => "Caller is not the administrator",
            VotingError::InvalidInput => "Invalid input provided",
            VotingError::Overflow => "Arithmetic overflow",
            VotingError::RenounceDisabled => "Administrator role cannot be renounced",
            VotingError::InvalidState => "Stored state is inconsistent",
            VotingError::NotWhitelisted => "This address is not whitelisted",
            VotingError::AlreadyRegistered => "This voter is already registered",
            VotingError::InvalidWorkflowStatus => {
                "The current workflow status does not allow this operation"
            }
            VotingError::AlreadyVoted => "This address has already voted",
            VotingError::ProposalNotFound => "This proposal does not exist",
            VotingError::VotesNotTallied => "Votes have not been tallied yet",
            VotingError::NoProposals => "No proposal was submitted",
        }
    }
}

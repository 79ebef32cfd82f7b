use soroban_sdk::{contracttype, Address, String};

/// Phases of the voting workflow, in the only order they can occur.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

/// Whitelist and ballot record of a single address.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Set together with `has_voted`
    pub voted_proposal_id: Option<u32>,
}

impl Voter {
    /// Record returned for addresses that were never whitelisted.
    pub fn unregistered() -> Self {
        Voter {
            is_registered: false,
            has_voted: false,
            voted_proposal_id: None,
        }
    }
}

/// A proposal is identified by its position in the submission sequence.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

/// Outcome of the tally, readable once the workflow reaches `VotesTallied`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinningProposal {
    pub proposal_id: u32,
    pub description: String,
    pub vote_count: u32,
}

/// Proposal currently ahead in the vote, kept up to date by every ballot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Leader {
    pub proposal_id: u32,
    pub vote_count: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Status,
    VoterCount,
    /// Whitelisted address by registration position
    VoterAt(u32),
    Voter(Address),
    ProposalCount,
    Proposal(u32),
    Leader,
    Winner,
}

#![no_std]
//! # Voting Workflow Contract
//!
//! A single-ballot voting contract driven through six phases by one
//! administrator:
//!
//! 1. `RegisteringVoters` - the admin whitelists voter addresses
//! 2. `ProposalsRegistrationStarted` - whitelisted voters submit proposals
//! 3. `ProposalsRegistrationEnded`
//! 4. `VotingSessionStarted` - each whitelisted voter casts one vote
//! 5. `VotingSessionEnded`
//! 6. `VotesTallied` - the winning proposal is readable
//!
//! Every command takes the caller address as its first argument and
//! requires its authorization before any guard runs.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let contract_id = env.register(VotingContract, (&admin,));
//! let client = VotingContractClient::new(&env, &contract_id);
//! client.register_voter(&admin, &voter);
//! client.start_proposals_registration(&admin);
//! let id = client.submit_proposal(&voter, &String::from_str(&env, "Do an airdrop"));
//! ```

mod access;
mod constants;
mod contract;
mod errors;
mod events;
mod storage;
mod tally;
mod types;
mod validation;
mod workflow;

pub use contract::{VotingContract, VotingContractClient};
pub use errors::VotingError;
pub use types::{Proposal, Voter, WinningProposal, WorkflowStatus};

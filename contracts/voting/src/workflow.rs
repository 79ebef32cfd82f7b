use soroban_sdk::{log, Env};

use crate::errors::VotingError;
use crate::events;
use crate::storage;
use crate::types::WorkflowStatus;

impl WorkflowStatus {
    /// The only status reachable from `self`, if any.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => Some(WorkflowStatus::VotingSessionStarted),
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }
}

/// Fails with `InvalidWorkflowStatus` unless the workflow is at `expected`.
pub fn require_status(env: &Env, expected: WorkflowStatus) -> Result<(), VotingError> {
    let current = storage::get_status(env);
    if current != expected {
        log!(
            env,
            "workflow status does not allow this operation (current, expected)",
            current as u32,
            expected as u32
        );
        return Err(VotingError::InvalidWorkflowStatus);
    }
    Ok(())
}

/// Moves the workflow one step forward from `from` and publishes the change.
pub fn advance(env: &Env, from: WorkflowStatus) -> Result<WorkflowStatus, VotingError> {
    require_status(env, from)?;
    let to = from.next().ok_or(VotingError::InvalidWorkflowStatus)?;

    storage::set_status(env, to);
    events::status_changed(env, from, to);
    log!(env, "workflow status advanced (from, to)", from as u32, to as u32);

    Ok(to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_walks_the_chain_once() {
        let mut status = WorkflowStatus::RegisteringVoters;
        let mut steps = 0u32;
        while let Some(next) = status.next() {
            assert_eq!(next as u32, status as u32 + 1);
            status = next;
            steps += 1;
        }
        assert_eq!(steps, 5);
        assert_eq!(status, WorkflowStatus::VotesTallied);
    }

    #[test]
    fn test_statuses_are_ordered() {
        assert!(WorkflowStatus::RegisteringVoters < WorkflowStatus::ProposalsRegistrationStarted);
        assert!(WorkflowStatus::VotingSessionEnded < WorkflowStatus::VotesTallied);
    }
}

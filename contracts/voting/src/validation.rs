use soroban_sdk::{Env, String};

use crate::constants::{MAX_DESCRIPTION_LEN, MAX_PROPOSALS};
use crate::errors::VotingError;
use crate::storage;

/// Description must be non-empty and at most `MAX_DESCRIPTION_LEN` bytes.
pub fn validate_description(description: &String) -> Result<(), VotingError> {
    let len = description.len();
    if len == 0 || len > MAX_DESCRIPTION_LEN {
        return Err(VotingError::InvalidInput);
    }
    Ok(())
}

pub fn validate_proposal_capacity(env: &Env) -> Result<(), VotingError> {
    if storage::get_proposal_count(env) >= MAX_PROPOSALS {
        return Err(VotingError::InvalidInput);
    }
    Ok(())
}

//! Caller checks run before any state change.
//!
//! Both guards first verify the caller's identity through Soroban's
//! built-in auth, then check what that identity is allowed to do.

use soroban_sdk::{log, Address, Env};

use crate::errors::VotingError;
use crate::storage;
use crate::types::Voter;

/// Require that `caller` is the administrator. Returns the admin address.
pub fn require_admin(env: &Env, caller: &Address) -> Result<Address, VotingError> {
    caller.require_auth();

    let admin = storage::get_admin(env);
    if *caller != admin {
        log!(env, "rejected non-admin caller", caller.clone());
        return Err(VotingError::Unauthorized);
    }

    Ok(admin)
}

/// Require that `caller` is a whitelisted voter. Returns its record.
pub fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
    caller.require_auth();

    let voter = storage::get_voter(env, caller);
    if !voter.is_registered {
        log!(env, "rejected non-whitelisted caller", caller.clone());
        return Err(VotingError::NotWhitelisted);
    }

    Ok(voter)
}

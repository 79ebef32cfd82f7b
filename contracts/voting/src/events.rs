use soroban_sdk::{symbol_short, Address, Env, String};

use crate::types::WorkflowStatus;

pub fn initialized(env: &Env, admin: &Address) {
    env.events()
        .publish((symbol_short!("init"),), admin.clone());
}

pub fn voter_registered(env: &Env, voter: &Address) {
    env.events()
        .publish((symbol_short!("voter_reg"), voter.clone()), ());
}

pub fn status_changed(env: &Env, previous: WorkflowStatus, new: WorkflowStatus) {
    env.events()
        .publish((symbol_short!("status"),), (previous, new));
}

pub fn proposal_registered(env: &Env, proposal_id: u32, description: &String) {
    env.events()
        .publish((symbol_short!("proposal"), proposal_id), description.clone());
}

pub fn voted(env: &Env, voter: &Address, proposal_id: u32) {
    env.events()
        .publish((symbol_short!("voted"), voter.clone()), proposal_id);
}

pub fn admin_transferred(env: &Env, previous: &Address, new: &Address) {
    env.events().publish(
        (symbol_short!("adm_xfer"),),
        (previous.clone(), new.clone()),
    );
}

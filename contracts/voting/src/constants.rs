//! Limits and storage lifetimes for the voting contract

// ===== Proposal Limits =====

/// Maximum proposal description length in bytes
pub const MAX_DESCRIPTION_LEN: u32 = 256;

/// Upper bound on submitted proposals; `get_proposals` reads all of them
pub const MAX_PROPOSALS: u32 = 100;

// ===== Ledger TTL =====
// At ~5s per ledger, one day is 17,280 ledgers.

pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Admin, status, counters, leader and winner
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Voter, registration position and proposal records
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

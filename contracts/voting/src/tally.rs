use crate::types::Leader;

impl Leader {
    /// Before any ballot every proposal has zero votes and proposal 0 leads.
    pub fn initial() -> Self {
        Leader {
            proposal_id: 0,
            vote_count: 0,
        }
    }

    /// Leader after `proposal_id` reaches `vote_count` votes.
    ///
    /// The lead changes on a strictly greater count, or on an equal count
    /// from a lower id, so the leader is always the lowest id among the
    /// proposals with the most votes. Counts only grow, which keeps this
    /// equal to a full scan at tally time.
    pub fn challenge(self, proposal_id: u32, vote_count: u32) -> Leader {
        let overtakes = vote_count > self.vote_count
            || (vote_count == self.vote_count && proposal_id < self.proposal_id);
        if overtakes {
            Leader {
                proposal_id,
                vote_count,
            }
        } else {
            self
        }
    }
}

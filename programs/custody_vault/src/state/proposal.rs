use anchor_lang::prelude::*;

use super::Action;

/// A stored, time-boxed batch of approved actions awaiting execution.
///
/// An expired draft stays in `Draft`; expiry is checked where it matters
/// (append, execute) rather than flipped into a stage by a clock.
#[account]
pub struct Proposal {
    pub vault: Pubkey,
    pub stage: ProposalStage,
    pub created_date: i64,
    pub expiry_date: i64,
    pub is_executed: bool,
    pub name: String,
    pub actions: Vec<Action>,
}

impl Proposal {
    // 8 discriminator + 32 vault + 1 stage + 8 created_date + 8 expiry_date
    // + 1 is_executed
    pub const BASE_SPACE: usize = 8 + 32 + 1 + 8 + 8 + 1;

    /// Exact account size for a record holding `name` and `actions`.
    /// Create and append both validate caller-supplied allocations against
    /// this; one formula keeps the two paths from drifting.
    pub fn required_space(name: &str, actions: &[Action]) -> usize {
        Self::BASE_SPACE
            + 4
            + name.len()
            + 4
            + actions.iter().map(Action::serialized_size).sum::<usize>()
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expiry_date
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub enum ProposalStage {
    #[default]
    Draft = 0,
    Completed = 1,
    Cancelled = 2,
    Failed = 3,
}

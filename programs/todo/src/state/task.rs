use anchor_lang::prelude::*;

use crate::constants::MAX_CONTENT_LEN;
use crate::errors::TodoError;

#[account]
#[derive(InitSpace, Debug)]
pub struct Task {
    pub owner: Pubkey,
    pub sequence: u64,
    #[max_len(MAX_CONTENT_LEN)]
    pub content: String,
    pub completed: bool,
    pub bump: u8,
}

impl Task {
    pub fn new(owner: Pubkey, sequence: u64, content: String, bump: u8) -> Self {
        Self {
            owner,
            sequence,
            content,
            completed: false,
            bump,
        }
    }

    /// Completion is one-way; marking twice is an error, not a no-op.
    pub fn mark_completed(&mut self) -> Result<()> {
        require!(!self.completed, TodoError::AlreadyCompleted);
        self.completed = true;
        Ok(())
    }
}

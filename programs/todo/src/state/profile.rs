use anchor_lang::prelude::*;

use crate::constants::MAX_TASKS_PER_PROFILE;
use crate::errors::TodoError;

/// Per-owner bookkeeping for task records.
#[account]
#[derive(InitSpace, Debug)]
pub struct Profile {
    pub owner: Pubkey,
    /// Live tasks currently held by this profile.
    pub task_count: u64,
    /// Sequence handed to the next task. Never rewinds, even after removals.
    pub next_sequence: u64,
    pub bump: u8,
}

impl Profile {
    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            owner,
            task_count: 0,
            next_sequence: 0,
            bump,
        }
    }

    pub fn has_capacity(&self) -> bool {
        self.task_count < MAX_TASKS_PER_PROFILE
    }

    /// Claims `next_sequence` for a new task, bumping both counters together.
    pub fn register_task(&mut self) -> Result<u64> {
        require!(self.has_capacity(), TodoError::CapacityExceeded);

        let sequence = self.next_sequence;
        let next_sequence = sequence.checked_add(1).ok_or(TodoError::Overflow)?;
        let task_count = self.task_count.checked_add(1).ok_or(TodoError::Overflow)?;

        self.next_sequence = next_sequence;
        self.task_count = task_count;

        Ok(sequence)
    }

    pub fn release_task(&mut self) -> Result<()> {
        self.task_count = self.task_count.checked_sub(1).ok_or(TodoError::Underflow)?;
        Ok(())
    }
}

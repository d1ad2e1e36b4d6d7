use anchor_lang::prelude::*;

#[event]
pub struct ProfileInitialized {
    pub owner: Pubkey,
    pub profile: Pubkey,
}

#[event]
pub struct TaskAdded {
    pub owner: Pubkey,
    pub task: Pubkey,
    pub sequence: u64,
    pub task_count: u64,
}

#[event]
pub struct TaskCompleted {
    pub owner: Pubkey,
    pub task: Pubkey,
    pub sequence: u64,
}

#[event]
pub struct TaskRemoved {
    pub owner: Pubkey,
    pub task: Pubkey,
    pub sequence: u64,
    pub task_count: u64,
}

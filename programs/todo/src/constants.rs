use anchor_lang::prelude::*;

#[constant]
pub const PROFILE_SEED: &[u8] = b"profile";

#[constant]
pub const TASK_SEED: &[u8] = b"task";

/// Live tasks a single profile may hold at once.
#[constant]
pub const MAX_TASKS_PER_PROFILE: u64 = 10;

/// Upper bound on task content, in bytes.
#[constant]
pub const MAX_CONTENT_LEN: usize = 280;

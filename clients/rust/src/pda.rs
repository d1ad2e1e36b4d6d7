//! Client-side address derivation. Must stay in lockstep with the program's seeds.

use solana_pubkey::Pubkey;

use crate::programs::TODO_ID;

pub const PROFILE_SEED: &[u8] = b"profile";
pub const TASK_SEED: &[u8] = b"task";

pub fn find_profile_pda(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROFILE_SEED, owner.as_ref()], &TODO_ID)
}

pub fn find_task_pda(owner: &Pubkey, sequence: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[TASK_SEED, owner.as_ref(), &sequence.to_le_bytes()],
        &TODO_ID,
    )
}

/// Every address a task of `owner` may have occupied, in creation order.
///
/// Removed tasks leave gaps, so the range runs to `next_sequence` rather than
/// `task_count`; callers look up each address and skip the empty ones.
pub fn task_addresses(owner: &Pubkey, next_sequence: u64) -> Vec<(u64, Pubkey)> {
    (0..next_sequence)
        .map(|sequence| (sequence, find_task_pda(owner, sequence).0))
        .collect()
}

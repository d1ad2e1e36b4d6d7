//! Program-derived addresses for profile and task records.
//!
//! Every record lives at an address computed from a namespace seed, the
//! owner's key and, for tasks, the creation sequence. The program id salts
//! the derivation, so no other program can produce the same addresses.

use anchor_lang::prelude::*;

use crate::constants::{PROFILE_SEED, TASK_SEED};
use crate::errors::TodoError;

/// Derives the canonical address and bump for `(tag, owner, sequence)`.
pub fn derive_address(tag: &[u8], owner: &Pubkey, sequence: Option<u64>) -> (Pubkey, u8) {
    match sequence {
        Some(sequence) => Pubkey::find_program_address(
            &[tag, owner.as_ref(), &sequence.to_le_bytes()],
            &crate::ID,
        ),
        None => Pubkey::find_program_address(&[tag, owner.as_ref()], &crate::ID),
    }
}

pub fn find_profile_address(owner: &Pubkey) -> (Pubkey, u8) {
    derive_address(PROFILE_SEED, owner, None)
}

pub fn find_task_address(owner: &Pubkey, sequence: u64) -> (Pubkey, u8) {
    derive_address(TASK_SEED, owner, Some(sequence))
}

/// Recomputes a profile address from its stored bump, skipping the bump search.
pub fn profile_address(owner: &Pubkey, bump: u8) -> Result<Pubkey> {
    Pubkey::create_program_address(&[PROFILE_SEED, owner.as_ref(), &[bump]], &crate::ID)
        .map_err(|_| error!(TodoError::AddressMismatch))
}

/// Recomputes a task address from its stored bump, skipping the bump search.
pub fn task_address(owner: &Pubkey, sequence: u64, bump: u8) -> Result<Pubkey> {
    Pubkey::create_program_address(
        &[TASK_SEED, owner.as_ref(), &sequence.to_le_bytes(), &[bump]],
        &crate::ID,
    )
    .map_err(|_| error!(TodoError::AddressMismatch))
}

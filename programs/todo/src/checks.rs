//! Predicates shared by every transition.
//!
//! Handlers call these in a fixed order (signer, profile, ownership, address,
//! then handler-specific checks) so every replica rejects a bad transition
//! with the same error.

use anchor_lang::prelude::*;

use crate::address::{profile_address, task_address};
use crate::constants::MAX_CONTENT_LEN;
use crate::errors::TodoError;
use crate::state::{Profile, Task};
use crate::utils::load_record;

pub fn require_signer(authority: &AccountInfo) -> Result<()> {
    require!(authority.is_signer, TodoError::Unauthorized);
    Ok(())
}

pub fn require_owner(record_owner: &Pubkey, authority: &Pubkey) -> Result<()> {
    require_keys_eq!(*record_owner, *authority, TodoError::Unauthorized);
    Ok(())
}

pub fn require_address(supplied: &Pubkey, expected: &Pubkey) -> Result<()> {
    require_keys_eq!(*supplied, *expected, TodoError::AddressMismatch);
    Ok(())
}

pub fn require_capacity(profile: &Profile) -> Result<()> {
    require!(profile.has_capacity(), TodoError::CapacityExceeded);
    Ok(())
}

pub fn require_content_len(content: &str) -> Result<()> {
    require!(content.len() <= MAX_CONTENT_LEN, TodoError::ContentTooLong);
    Ok(())
}

/// Loads the profile at `profile_info` and confirms `authority` signed for it.
pub fn authorized_profile(authority: &AccountInfo, profile_info: &AccountInfo) -> Result<Profile> {
    require_signer(authority)?;

    let profile: Profile = load_record(profile_info, TodoError::ProfileNotFound)?;
    require_owner(&profile.owner, authority.key)?;
    require_address(profile_info.key, &profile_address(&profile.owner, profile.bump)?)?;

    Ok(profile)
}

/// Loads the task at `task_info` and confirms it belongs to both `authority` and `profile`.
pub fn authorized_task(
    authority: &AccountInfo,
    profile: &Profile,
    task_info: &AccountInfo,
) -> Result<Task> {
    let task: Task = load_record(task_info, TodoError::TaskNotFound)?;
    require_owner(&task.owner, authority.key)?;
    require_owner(&task.owner, &profile.owner)?;
    require_address(
        task_info.key,
        &task_address(&task.owner, task.sequence, task.bump)?,
    )?;

    Ok(task)
}

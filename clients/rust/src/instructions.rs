//! Builders for the four program instructions.
//!
//! Data is the 8-byte Anchor discriminator followed by Borsh arguments.
//! Account order matches the program's `#[derive(Accounts)]` structs.

use borsh::BorshSerialize;
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::errors::ClientError;
use crate::pda::{find_profile_pda, find_task_pda};
use crate::programs::{SYSTEM_PROGRAM_ID, TODO_ID};

pub const INITIALIZE_PROFILE_DISCRIMINATOR: [u8; 8] = [32, 145, 77, 213, 58, 39, 251, 234];
pub const ADD_TASK_DISCRIMINATOR: [u8; 8] = [234, 40, 30, 119, 150, 53, 76, 83];
pub const MARK_TASK_DISCRIMINATOR: [u8; 8] = [69, 34, 192, 173, 250, 226, 213, 108];
pub const REMOVE_TASK_DISCRIMINATOR: [u8; 8] = [129, 98, 0, 238, 73, 182, 74, 3];

#[derive(BorshSerialize)]
struct AddTaskArgs<'a> {
    content: &'a str,
}

fn required<T: Clone>(value: &Option<T>, name: &'static str) -> Result<T, ClientError> {
    value.clone().ok_or(ClientError::MissingField(name))
}

/// Resolves the task address from an explicit key or from `(authority, sequence)`.
fn task_key(
    task: Option<Pubkey>,
    authority: &Pubkey,
    sequence: Option<u64>,
) -> Result<Pubkey, ClientError> {
    match (task, sequence) {
        (Some(task), _) => Ok(task),
        (None, Some(sequence)) => Ok(find_task_pda(authority, sequence).0),
        (None, None) => Err(ClientError::MissingField("task")),
    }
}

/// ### Accounts:
///   0. `[writable, signer]` authority
///   1. `[writable]` profile
///   2. `[]` system_program
#[derive(Clone, Debug, Default)]
pub struct InitializeProfileBuilder {
    authority: Option<Pubkey>,
    profile: Option<Pubkey>,
}

impl InitializeProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authority(&mut self, authority: Pubkey) -> &mut Self {
        self.authority = Some(authority);
        self
    }

    /// Defaults to the authority's derived profile address.
    pub fn profile(&mut self, profile: Pubkey) -> &mut Self {
        self.profile = Some(profile);
        self
    }

    pub fn instruction(&self) -> Result<Instruction, ClientError> {
        let authority = required(&self.authority, "authority")?;
        let profile = self
            .profile
            .unwrap_or_else(|| find_profile_pda(&authority).0);

        Ok(Instruction {
            program_id: TODO_ID,
            accounts: vec![
                AccountMeta::new(authority, true),
                AccountMeta::new(profile, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data: INITIALIZE_PROFILE_DISCRIMINATOR.to_vec(),
        })
    }
}

/// ### Accounts:
///   0. `[writable, signer]` authority
///   1. `[writable]` profile
///   2. `[writable]` task
///   3. `[]` system_program
#[derive(Clone, Debug, Default)]
pub struct AddTaskBuilder {
    authority: Option<Pubkey>,
    profile: Option<Pubkey>,
    task: Option<Pubkey>,
    sequence: Option<u64>,
    content: Option<String>,
}

impl AddTaskBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authority(&mut self, authority: Pubkey) -> &mut Self {
        self.authority = Some(authority);
        self
    }

    pub fn profile(&mut self, profile: Pubkey) -> &mut Self {
        self.profile = Some(profile);
        self
    }

    pub fn task(&mut self, task: Pubkey) -> &mut Self {
        self.task = Some(task);
        self
    }

    /// The profile's current `next_sequence`; used to derive `task` when it is not set.
    pub fn sequence(&mut self, sequence: u64) -> &mut Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = Some(content.into());
        self
    }

    pub fn instruction(&self) -> Result<Instruction, ClientError> {
        let authority = required(&self.authority, "authority")?;
        let content = required(&self.content, "content")?;
        let profile = self
            .profile
            .unwrap_or_else(|| find_profile_pda(&authority).0);
        let task = task_key(self.task, &authority, self.sequence)?;

        let mut data = ADD_TASK_DISCRIMINATOR.to_vec();
        AddTaskArgs { content: &content }.serialize(&mut data)?;

        Ok(Instruction {
            program_id: TODO_ID,
            accounts: vec![
                AccountMeta::new(authority, true),
                AccountMeta::new(profile, false),
                AccountMeta::new(task, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data,
        })
    }
}

/// ### Accounts:
///   0. `[signer]` authority
///   1. `[]` profile
///   2. `[writable]` task
#[derive(Clone, Debug, Default)]
pub struct MarkTaskBuilder {
    authority: Option<Pubkey>,
    profile: Option<Pubkey>,
    task: Option<Pubkey>,
    sequence: Option<u64>,
}

impl MarkTaskBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authority(&mut self, authority: Pubkey) -> &mut Self {
        self.authority = Some(authority);
        self
    }

    pub fn profile(&mut self, profile: Pubkey) -> &mut Self {
        self.profile = Some(profile);
        self
    }

    pub fn task(&mut self, task: Pubkey) -> &mut Self {
        self.task = Some(task);
        self
    }

    pub fn sequence(&mut self, sequence: u64) -> &mut Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn instruction(&self) -> Result<Instruction, ClientError> {
        let authority = required(&self.authority, "authority")?;
        let profile = self
            .profile
            .unwrap_or_else(|| find_profile_pda(&authority).0);
        let task = task_key(self.task, &authority, self.sequence)?;

        Ok(Instruction {
            program_id: TODO_ID,
            accounts: vec![
                AccountMeta::new_readonly(authority, true),
                AccountMeta::new_readonly(profile, false),
                AccountMeta::new(task, false),
            ],
            data: MARK_TASK_DISCRIMINATOR.to_vec(),
        })
    }
}

/// ### Accounts:
///   0. `[writable, signer]` authority
///   1. `[writable]` profile
///   2. `[writable]` task
#[derive(Clone, Debug, Default)]
pub struct RemoveTaskBuilder {
    authority: Option<Pubkey>,
    profile: Option<Pubkey>,
    task: Option<Pubkey>,
    sequence: Option<u64>,
}

impl RemoveTaskBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authority(&mut self, authority: Pubkey) -> &mut Self {
        self.authority = Some(authority);
        self
    }

    pub fn profile(&mut self, profile: Pubkey) -> &mut Self {
        self.profile = Some(profile);
        self
    }

    pub fn task(&mut self, task: Pubkey) -> &mut Self {
        self.task = Some(task);
        self
    }

    pub fn sequence(&mut self, sequence: u64) -> &mut Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn instruction(&self) -> Result<Instruction, ClientError> {
        let authority = required(&self.authority, "authority")?;
        let profile = self
            .profile
            .unwrap_or_else(|| find_profile_pda(&authority).0);
        let task = task_key(self.task, &authority, self.sequence)?;

        Ok(Instruction {
            program_id: TODO_ID,
            accounts: vec![
                AccountMeta::new(authority, true),
                AccountMeta::new(profile, false),
                AccountMeta::new(task, false),
            ],
            data: REMOVE_TASK_DISCRIMINATOR.to_vec(),
        })
    }
}

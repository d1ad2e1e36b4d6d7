//! Decoders for events the program emits with `emit!`.
//!
//! Each event is logged as `Program data: <base64>` where the payload is the
//! 8-byte event discriminator followed by Borsh fields.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

use crate::errors::ClientError;

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProfileInitialized {
    pub owner: Pubkey,
    pub profile: Pubkey,
}

impl ProfileInitialized {
    pub const DISCRIMINATOR: [u8; 8] = [1, 31, 122, 19, 193, 205, 23, 27];
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TaskAdded {
    pub owner: Pubkey,
    pub task: Pubkey,
    pub sequence: u64,
    pub task_count: u64,
}

impl TaskAdded {
    pub const DISCRIMINATOR: [u8; 8] = [32, 254, 197, 178, 66, 33, 112, 27];
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TaskCompleted {
    pub owner: Pubkey,
    pub task: Pubkey,
    pub sequence: u64,
}

impl TaskCompleted {
    pub const DISCRIMINATOR: [u8; 8] = [132, 223, 98, 152, 2, 9, 57, 128];
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TaskRemoved {
    pub owner: Pubkey,
    pub task: Pubkey,
    pub sequence: u64,
    pub task_count: u64,
}

impl TaskRemoved {
    pub const DISCRIMINATOR: [u8; 8] = [133, 26, 198, 134, 139, 207, 130, 240];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoEvent {
    ProfileInitialized(ProfileInitialized),
    TaskAdded(TaskAdded),
    TaskCompleted(TaskCompleted),
    TaskRemoved(TaskRemoved),
}

impl TodoEvent {
    /// Decodes an already base64-decoded `Program data:` payload.
    pub fn decode(data: &[u8]) -> Result<Self, ClientError> {
        let discriminator: [u8; 8] = data
            .get(..8)
            .and_then(|head| head.try_into().ok())
            .ok_or(ClientError::AccountDataTooShort(data.len()))?;

        let mut body = &data[8..];
        let event = match discriminator {
            ProfileInitialized::DISCRIMINATOR => {
                Self::ProfileInitialized(BorshDeserialize::deserialize(&mut body)?)
            }
            TaskAdded::DISCRIMINATOR => Self::TaskAdded(BorshDeserialize::deserialize(&mut body)?),
            TaskCompleted::DISCRIMINATOR => {
                Self::TaskCompleted(BorshDeserialize::deserialize(&mut body)?)
            }
            TaskRemoved::DISCRIMINATOR => {
                Self::TaskRemoved(BorshDeserialize::deserialize(&mut body)?)
            }
            _ => return Err(ClientError::DiscriminatorMismatch),
        };

        Ok(event)
    }
}

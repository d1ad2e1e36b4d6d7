//! Decoders for the program's records.
//!
//! Layout: 8-byte discriminator, then Borsh fields. Task accounts are sized
//! for the longest content, so decoding tolerates trailing zero bytes.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

use crate::errors::ClientError;

fn record_body<'a>(data: &'a [u8], discriminator: &[u8; 8]) -> Result<&'a [u8], ClientError> {
    if data.len() < discriminator.len() {
        return Err(ClientError::AccountDataTooShort(data.len()));
    }
    let (head, body) = data.split_at(discriminator.len());
    if head != discriminator {
        return Err(ClientError::DiscriminatorMismatch);
    }
    Ok(body)
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub owner: Pubkey,
    pub task_count: u64,
    pub next_sequence: u64,
    pub bump: u8,
}

impl Profile {
    pub const DISCRIMINATOR: [u8; 8] = [184, 101, 165, 188, 95, 63, 127, 188];
    pub const LEN: usize = 8 + 32 + 8 + 8 + 1;
    /// Live tasks a profile may hold at once.
    pub const MAX_TASKS: u64 = 10;

    pub fn from_bytes(data: &[u8]) -> Result<Self, ClientError> {
        let mut body = record_body(data, &Self::DISCRIMINATOR)?;
        Ok(Self::deserialize(&mut body)?)
    }
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub owner: Pubkey,
    pub sequence: u64,
    pub content: String,
    pub completed: bool,
    pub bump: u8,
}

impl Task {
    pub const DISCRIMINATOR: [u8; 8] = [79, 34, 229, 55, 88, 90, 55, 84];
    pub const MAX_CONTENT_LEN: usize = 280;
    pub const LEN: usize = 8 + 32 + 8 + (4 + Self::MAX_CONTENT_LEN) + 1 + 1;

    pub fn from_bytes(data: &[u8]) -> Result<Self, ClientError> {
        let mut body = record_body(data, &Self::DISCRIMINATOR)?;
        Ok(Self::deserialize(&mut body)?)
    }
}

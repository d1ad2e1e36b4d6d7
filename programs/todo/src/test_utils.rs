//! In-memory accounts for exercising handlers without a validator.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::entrypoint::MAX_PERMITTED_DATA_INCREASE;
use anchor_lang::system_program;

use crate::address::{find_profile_address, find_task_address};
use crate::state::{Profile, Task};

/// Key slot laid out like the runtime's input buffer: the account's original
/// data length sits in the four bytes before the key.
#[repr(C, align(8))]
struct RuntimeKey {
    #[allow(dead_code)]
    original_data_len: u32,
    key: Pubkey,
}

/// Data laid out like the runtime's input buffer: a `u64` length prefix, then
/// the data, then room to grow, so `AccountInfo::resize` stays in bounds.
fn runtime_data(data: Vec<u8>) -> &'static mut [u8] {
    let len = data.len();
    let words = (8 + len + MAX_PERMITTED_DATA_INCREASE).div_ceil(8);
    let backing: &'static mut [u64] = Box::leak(vec![0u64; words].into_boxed_slice());
    backing[0] = len as u64;

    // SAFETY: the leaked allocation holds `words * 8` bytes; the view starts
    // after the prefix word and never outlives it.
    let view = unsafe {
        let base = backing.as_mut_ptr() as *mut u8;
        std::slice::from_raw_parts_mut(base.add(8), len)
    };
    view.copy_from_slice(&data);
    view
}

/// Builds an `AccountInfo` whose backing storage lives for the rest of the test binary.
pub fn leak_account(
    key: Pubkey,
    is_signer: bool,
    is_writable: bool,
    lamports: u64,
    data: Vec<u8>,
    owner: Pubkey,
) -> &'static AccountInfo<'static> {
    let slot: &'static RuntimeKey = Box::leak(Box::new(RuntimeKey {
        original_data_len: data.len() as u32,
        key,
    }));
    let owner = Box::leak(Box::new(owner));
    let lamports = Box::leak(Box::new(lamports));
    let data = runtime_data(data);

    Box::leak(Box::new(AccountInfo::new(
        &slot.key,
        is_signer,
        is_writable,
        lamports,
        data,
        owner,
        false,
        0,
    )))
}

pub fn record_data<T: AccountSerialize>(record: &T, space: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(space);
    record.try_serialize(&mut data).unwrap();
    data.resize(space, 0);
    data
}

pub fn signer(key: Pubkey) -> &'static AccountInfo<'static> {
    leak_account(key, true, true, 1_000_000_000, vec![], system_program::ID)
}

pub fn system_program_account() -> &'static AccountInfo<'static> {
    let key = Box::leak(Box::new(system_program::ID));
    let owner = Box::leak(Box::new(Pubkey::default()));
    let lamports = Box::leak(Box::new(1u64));
    let data: &'static mut [u8] = Box::leak(Vec::new().into_boxed_slice());

    Box::leak(Box::new(AccountInfo::new(
        key, false, false, lamports, data, owner, true, 0,
    )))
}

/// Nothing stored at `key`.
pub fn empty_account(key: Pubkey) -> &'static AccountInfo<'static> {
    leak_account(key, false, true, 0, vec![], system_program::ID)
}

/// A profile record stored at its canonical address.
pub fn profile_account(profile: &Profile) -> &'static AccountInfo<'static> {
    let (key, _) = find_profile_address(&profile.owner);
    leak_account(
        key,
        false,
        true,
        1_000_000,
        record_data(profile, 8 + Profile::INIT_SPACE),
        crate::ID,
    )
}

/// A task record stored at its canonical address.
pub fn task_account(task: &Task) -> &'static AccountInfo<'static> {
    let (key, _) = find_task_address(&task.owner, task.sequence);
    leak_account(
        key,
        false,
        true,
        2_000_000,
        record_data(task, 8 + Task::INIT_SPACE),
        crate::ID,
    )
}

pub fn new_profile(owner: Pubkey) -> Profile {
    let (_, bump) = find_profile_address(&owner);
    Profile::new(owner, bump)
}

pub fn new_task(owner: Pubkey, sequence: u64, content: &str) -> Task {
    let (_, bump) = find_task_address(&owner, sequence);
    Task::new(owner, sequence, content.to_string(), bump)
}

use anchor_lang::prelude::*;

use crate::address::find_task_address;
use crate::checks;
use crate::constants::TASK_SEED;
use crate::events::TaskAdded;
use crate::state::Task;
use crate::utils::{allocate_record, store_record};

#[derive(Accounts)]
pub struct AddTask<'info> {
    /// CHECK: signature is verified in the handler so it surfaces as `Unauthorized`.
    #[account(mut)]
    pub authority: UncheckedAccount<'info>,

    /// CHECK: loaded, owner-checked and address-checked in the handler.
    #[account(mut)]
    pub profile: UncheckedAccount<'info>,

    /// CHECK: must be derived from the profile's stored `next_sequence`.
    #[account(mut)]
    pub task: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> AddTask<'info> {
    pub fn add_task(&mut self, content: String) -> Result<()> {
        let mut profile = checks::authorized_profile(&self.authority, &self.profile)?;

        let owner = profile.owner;
        let sequence = profile.next_sequence;
        let (expected, bump) = find_task_address(&owner, sequence);
        checks::require_address(self.task.key, &expected)?;
        checks::require_capacity(&profile)?;
        checks::require_content_len(&content)?;

        let sequence_bytes = sequence.to_le_bytes();
        let bump_seed = [bump];
        let signer_seeds: &[&[u8]] = &[TASK_SEED, owner.as_ref(), &sequence_bytes, &bump_seed];

        allocate_record(
            &self.authority,
            &self.task,
            signer_seeds,
            8 + Task::INIT_SPACE,
            &self.system_program,
        )?;

        let assigned = profile.register_task()?;
        store_record(&self.task, &Task::new(owner, assigned, content, bump))?;
        store_record(&self.profile, &profile)?;

        msg!("Task {} added for {}", assigned, owner);
        emit!(TaskAdded {
            owner,
            task: expected,
            sequence: assigned,
            task_count: profile.task_count,
        });

        Ok(())
    }
}

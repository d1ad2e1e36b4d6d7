use anchor_lang::prelude::*;

use crate::checks;
use crate::events::TaskRemoved;
use crate::utils::{reclaim_record, store_record};

#[derive(Accounts)]
pub struct RemoveTask<'info> {
    /// CHECK: signature is verified in the handler; receives the task's rent.
    #[account(mut)]
    pub authority: UncheckedAccount<'info>,

    /// CHECK: loaded, owner-checked and address-checked in the handler.
    #[account(mut)]
    pub profile: UncheckedAccount<'info>,

    /// CHECK: loaded, owner-checked and address-checked in the handler.
    #[account(mut)]
    pub task: UncheckedAccount<'info>,
}

impl<'info> RemoveTask<'info> {
    pub fn remove_task(&mut self) -> Result<()> {
        let mut profile = checks::authorized_profile(&self.authority, &self.profile)?;
        let task = checks::authorized_task(&self.authority, &profile, &self.task)?;

        profile.release_task()?;
        store_record(&self.profile, &profile)?;
        reclaim_record(&self.task, &self.authority)?;

        msg!("Task {} removed for {}", task.sequence, task.owner);
        emit!(TaskRemoved {
            owner: task.owner,
            task: self.task.key(),
            sequence: task.sequence,
            task_count: profile.task_count,
        });

        Ok(())
    }
}

use anchor_lang::prelude::*;

use crate::checks;
use crate::events::TaskCompleted;
use crate::utils::store_record;

#[derive(Accounts)]
pub struct MarkTask<'info> {
    /// CHECK: signature is verified in the handler so it surfaces as `Unauthorized`.
    pub authority: UncheckedAccount<'info>,

    /// CHECK: loaded, owner-checked and address-checked in the handler.
    pub profile: UncheckedAccount<'info>,

    /// CHECK: loaded, owner-checked and address-checked in the handler.
    #[account(mut)]
    pub task: UncheckedAccount<'info>,
}

impl<'info> MarkTask<'info> {
    pub fn mark_task(&mut self) -> Result<()> {
        let profile = checks::authorized_profile(&self.authority, &self.profile)?;
        let mut task = checks::authorized_task(&self.authority, &profile, &self.task)?;

        task.mark_completed()?;
        store_record(&self.task, &task)?;

        msg!("Task {} completed for {}", task.sequence, task.owner);
        emit!(TaskCompleted {
            owner: task.owner,
            task: self.task.key(),
            sequence: task.sequence,
        });

        Ok(())
    }
}

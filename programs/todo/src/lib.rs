use anchor_lang::prelude::*;

declare_id!("3bYNLyZxCGWm1rkfN6U3UZB516axRSfxLG4BsTBxcwjt");

pub mod address;
pub mod checks;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use constants::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod todo {
    use super::*;

    pub fn initialize_profile(ctx: Context<InitializeProfile>) -> Result<()> {
        ctx.accounts.initialize_profile()
    }

    pub fn add_task(ctx: Context<AddTask>, content: String) -> Result<()> {
        ctx.accounts.add_task(content)
    }

    pub fn mark_task(ctx: Context<MarkTask>) -> Result<()> {
        ctx.accounts.mark_task()
    }

    pub fn remove_task(ctx: Context<RemoveTask>) -> Result<()> {
        ctx.accounts.remove_task()
    }
}

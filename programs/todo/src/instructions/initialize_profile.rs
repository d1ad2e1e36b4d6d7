use anchor_lang::prelude::*;

use crate::address::find_profile_address;
use crate::checks;
use crate::constants::PROFILE_SEED;
use crate::events::ProfileInitialized;
use crate::state::Profile;
use crate::utils::{allocate_record, store_record};

#[derive(Accounts)]
pub struct InitializeProfile<'info> {
    /// CHECK: signature is verified in the handler so it surfaces as `Unauthorized`.
    #[account(mut)]
    pub authority: UncheckedAccount<'info>,

    /// CHECK: must be the authority's derived profile address and still vacant.
    #[account(mut)]
    pub profile: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeProfile<'info> {
    pub fn initialize_profile(&mut self) -> Result<()> {
        checks::require_signer(&self.authority)?;

        let owner = self.authority.key();
        let (expected, bump) = find_profile_address(&owner);
        checks::require_address(self.profile.key, &expected)?;

        let bump_seed = [bump];
        let signer_seeds: &[&[u8]] = &[PROFILE_SEED, owner.as_ref(), &bump_seed];

        allocate_record(
            &self.authority,
            &self.profile,
            signer_seeds,
            8 + Profile::INIT_SPACE,
            &self.system_program,
        )?;
        store_record(&self.profile, &Profile::new(owner, bump))?;

        msg!("Profile initialized for {}", owner);
        emit!(ProfileInitialized {
            owner,
            profile: expected,
        });

        Ok(())
    }
}

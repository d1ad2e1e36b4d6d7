use anchor_lang::__private::BpfWriter;
use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::TodoError;

/// True when nothing lives at `target`: no data and not owned by this program.
pub fn is_vacant(target: &AccountInfo) -> bool {
    target.data_is_empty() && target.owner != &crate::ID
}

/// Creates a rent-exempt, program-owned account at a derived address.
///
/// `signer_seeds` must already include the bump. An address that only holds
/// lamports (someone funded it ahead of time) is topped up, allocated and
/// assigned instead of rejected.
pub fn allocate_record<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    signer_seeds: &[&[u8]],
    space: usize,
    system_program: &Program<'info, System>,
) -> Result<()> {
    require!(is_vacant(target), TodoError::AlreadyExists);

    let rent = Rent::get()?;
    let required_lamports = rent.minimum_balance(space);
    let signer_seeds = &[signer_seeds];

    let current_lamports = target.lamports();
    if current_lamports == 0 {
        let cpi_accounts = system_program::CreateAccount {
            from: payer.clone(),
            to: target.clone(),
        };
        let cpi_context = CpiContext::new_with_signer(
            system_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        );
        return system_program::create_account(
            cpi_context,
            required_lamports,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = required_lamports.saturating_sub(current_lamports);
    if top_up > 0 {
        let cpi_accounts = system_program::Transfer {
            from: payer.clone(),
            to: target.clone(),
        };
        system_program::transfer(
            CpiContext::new(system_program.to_account_info(), cpi_accounts),
            top_up,
        )?;
    }

    let cpi_accounts = system_program::Allocate {
        account_to_allocate: target.clone(),
    };
    system_program::allocate(
        CpiContext::new_with_signer(system_program.to_account_info(), cpi_accounts, signer_seeds),
        space as u64,
    )?;

    let cpi_accounts = system_program::Assign {
        account_to_assign: target.clone(),
    };
    system_program::assign(
        CpiContext::new_with_signer(system_program.to_account_info(), cpi_accounts, signer_seeds),
        &crate::ID,
    )
}

/// Reads a program-owned record, reporting `missing` when nothing usable lives there.
pub fn load_record<T: AccountDeserialize>(info: &AccountInfo, missing: TodoError) -> Result<T> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Err(error!(missing));
    }

    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map_err(|_| error!(missing))
}

/// Writes `record` from the start of the account data. The data view keeps its length.
pub fn store_record<T: AccountSerialize>(info: &AccountInfo, record: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let dst: &mut [u8] = &mut data;
    let mut writer = BpfWriter::new(dst);
    record.try_serialize(&mut writer)
}

/// Frees a record: rent goes to `destination`, the account returns to the
/// system program with no data.
pub fn reclaim_record<'info>(
    info: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<()> {
    let refund = info.lamports();
    let balance = destination
        .lamports()
        .checked_add(refund)
        .ok_or(TodoError::Overflow)?;

    **destination.try_borrow_mut_lamports()? = balance;
    **info.try_borrow_mut_lamports()? = 0;

    info.assign(&system_program::ID);
    info.resize(0)?;

    Ok(())
}

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::LendingError;

/// Calculate `amount * bps / 10_000` with u128 intermediates
pub fn apply_bps(amount: u64, bps: u16) -> Result<u64> {
    let value = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(error!(LendingError::MathOverflow))?
        .checked_div(BPS_PRECISION as u128) // Convert from basis points
        .ok_or(error!(LendingError::MathOverflow))?;

    u64::try_from(value).map_err(|_| error!(LendingError::MathOverflow))
}

/// Move lamports between two accounts owned by this program
pub fn move_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    if from.key == to.key || amount == 0 {
        return Ok(());
    }

    let mut from_lamports = from.try_borrow_mut_lamports()?;
    let mut to_lamports = to.try_borrow_mut_lamports()?;

    **from_lamports = from_lamports
        .checked_sub(amount)
        .ok_or(error!(LendingError::InsufficientFunds))?;
    **to_lamports = to_lamports
        .checked_add(amount)
        .ok_or(error!(LendingError::MathOverflow))?;

    Ok(())
}

/// Convert raw lamports to whole SOL for display.
/// Never feed the result back into ledger arithmetic.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Whether an amount renders as 0.0000 SOL at display precision.
/// The ledger itself treats any non-zero amount as usable.
pub fn displays_as_zero(lamports: u64) -> bool {
    // Half of one display unit rounds down to zero
    let unit = LAMPORTS_PER_SOL / 10u64.pow(DISPLAY_DECIMALS);
    lamports < unit / 2
}

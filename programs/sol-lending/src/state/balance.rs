use anchor_lang::prelude::*;
use crate::errors::LendingError;

/// Lamports a depositor holds inside the program.
/// Increased by deposits, repayments received and borrowed funds;
/// decreased by placed orders, withdrawals and repayments made.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct UserBalance {
    /// Holder of this balance (user's wallet)
    pub owner: Pubkey,

    /// Lamports available to lend or withdraw
    pub amount: u64,
}

impl UserBalance {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        8; // amount

    pub fn new(owner: Pubkey) -> Self {
        Self { owner, amount: 0 }
    }

    /// Deposit lamports. Each call is a separate transfer.
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, LendingError::InvalidAmount);

        self.amount = self.amount
            .checked_add(amount)
            .ok_or(error!(LendingError::InvalidAmount))?;

        Ok(())
    }

    /// Reserve lamports for a new order
    pub fn debit_for_order(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, LendingError::InvalidAmount);
        self.debit(amount)
    }

    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, LendingError::InvalidAmount);
        self.debit(amount)
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(self.amount >= amount, LendingError::InsufficientFunds);

        self.amount = self.amount
            .checked_sub(amount)
            .ok_or(error!(LendingError::InsufficientFunds))?;

        Ok(())
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.amount = self.amount
            .checked_add(amount)
            .ok_or(error!(LendingError::MathOverflow))?;

        Ok(())
    }
}

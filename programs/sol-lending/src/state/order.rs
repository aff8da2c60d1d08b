use anchor_lang::prelude::*;
use crate::errors::LendingError;

/// A lender's open offer, partially fillable by any borrower.
/// Orders are never deleted; an emptied order stays listed.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Order {
    /// Sequence number taken from `GlobalState::order_sequence`
    pub sn: u64,

    /// Lender who funded the order
    pub lender: Pubkey,

    /// Lamports still available to borrow
    pub balance: u64,

    /// Interest rate in basis points
    pub rate: u16,
}

impl Order {
    pub const LEN: usize = 8 + // discriminator
        8 + // sn
        32 + // lender
        8 + // balance
        2; // rate

    pub fn open(sn: u64, lender: Pubkey, amount: u64, rate: u16) -> Result<Self> {
        require!(amount > 0, LendingError::InvalidAmount);
        Ok(Self {
            sn,
            lender,
            balance: amount,
            rate,
        })
    }

    /// Any non-zero balance can be borrowed, dust included
    pub fn is_borrowable(&self) -> bool {
        self.balance > 0
    }

    /// Compare-and-decrement: either the whole amount is taken or nothing is
    pub fn reduce_for_borrow(&mut self, amount: u64) -> Result<()> {
        require!(
            amount > 0 && amount <= self.balance,
            LendingError::InsufficientOrderBalance
        );

        self.balance = self.balance
            .checked_sub(amount)
            .ok_or(error!(LendingError::InsufficientOrderBalance))?;

        Ok(())
    }

    /// Empty the order, returning the lamports to refund to the lender
    pub fn drain(&mut self) -> u64 {
        std::mem::take(&mut self.balance)
    }
}

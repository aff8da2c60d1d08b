use anchor_lang::prelude::*;
use crate::constants::FIRST_SEQUENCE;
use crate::errors::LendingError;

/// Process-wide sequence counters.
/// Each counter holds the sn the next record of its kind receives.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct GlobalState {
    pub order_sequence: u64,
    pub receipt_sequence: u64,
}

impl Default for GlobalState {
    fn default() -> Self {
        Self {
            order_sequence: FIRST_SEQUENCE,
            receipt_sequence: FIRST_SEQUENCE,
        }
    }
}

impl GlobalState {
    pub const LEN: usize = 8 + // discriminator
        8 + // order_sequence
        8; // receipt_sequence

    pub fn next_order_sn(&mut self) -> Result<u64> {
        Self::fetch_increment(&mut self.order_sequence)
    }

    pub fn next_receipt_sn(&mut self) -> Result<u64> {
        Self::fetch_increment(&mut self.receipt_sequence)
    }

    fn fetch_increment(counter: &mut u64) -> Result<u64> {
        let sn = *counter;
        *counter = sn
            .checked_add(1)
            .ok_or(error!(LendingError::MathOverflow))?;
        Ok(sn)
    }
}

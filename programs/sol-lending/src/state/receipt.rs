use anchor_lang::prelude::*;
use crate::errors::LendingError;
use crate::interest::InterestStrategy;
use crate::state::Order;

/// A realized loan. Closed (account reclaimed) once repaid.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct LoanReceipt {
    /// Sequence number taken from `GlobalState::receipt_sequence`
    pub sn: u64,
    pub borrower: Pubkey,
    /// Copied from the order at issuance
    pub lender: Pubkey,
    /// Principal in lamports
    pub amount: u64,
    /// Unix timestamp at issuance
    pub time: u64,
    /// Copied from the order at issuance (basis points)
    pub rate: u16,
}

impl LoanReceipt {
    pub const LEN: usize = 8 + // discriminator
        8 + // sn
        32 + // borrower
        32 + // lender
        8 + // amount
        8 + // time
        2; // rate

    pub fn issue(sn: u64, borrower: Pubkey, order: &Order, amount: u64, time: u64) -> Result<Self> {
        require!(amount > 0, LendingError::InvalidAmount);
        Ok(Self {
            sn,
            borrower,
            lender: order.lender,
            amount,
            time,
            rate: order.rate,
        })
    }

    /// Only the original borrower may close the loan
    pub fn authorize_repay(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.borrower, *caller, LendingError::Unauthorized);
        Ok(())
    }

    pub fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.time)
    }

    /// Principal plus accrued interest at `now`
    pub fn amount_owed(&self, strategy: &dyn InterestStrategy, now: u64) -> Result<u64> {
        strategy.amount_owed(self.amount, self.rate, self.elapsed(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::FlatFee;
    use anchor_lang::error::Error;

    #[test]
    fn issue_copies_order_terms() {
        let lender = Pubkey::new_unique();
        let borrower = Pubkey::new_unique();
        let order = Order::open(3, lender, 5_000, 250).unwrap();

        let receipt = LoanReceipt::issue(9, borrower, &order, 1_000, 1_700_000_000).unwrap();
        assert_eq!(receipt.sn, 9);
        assert_eq!(receipt.lender, lender);
        assert_eq!(receipt.borrower, borrower);
        assert_eq!(receipt.rate, 250);
        assert_eq!(receipt.time, 1_700_000_000);
    }

    #[test]
    fn only_borrower_may_repay() {
        let borrower = Pubkey::new_unique();
        let order = Order::open(1, Pubkey::new_unique(), 5_000, 100).unwrap();
        let receipt = LoanReceipt::issue(1, borrower, &order, 1_000, 0).unwrap();

        receipt.authorize_repay(&borrower).unwrap();
        assert_eq!(
            receipt.authorize_repay(&order.lender).unwrap_err(),
            Error::from(LendingError::Unauthorized)
        );
    }

    #[test]
    fn elapsed_never_underflows() {
        let order = Order::open(1, Pubkey::new_unique(), 5_000, 100).unwrap();
        let receipt = LoanReceipt::issue(1, Pubkey::new_unique(), &order, 1_000, 100).unwrap();
        assert_eq!(receipt.elapsed(50), 0);
        assert_eq!(receipt.elapsed(160), 60);
        assert_eq!(receipt.amount_owed(&FlatFee, 160).unwrap(), 1_010);
    }
}

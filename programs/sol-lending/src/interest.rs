use anchor_lang::prelude::*;
use crate::constants::SECONDS_PER_DAY;
use crate::errors::LendingError;
use crate::utils::apply_bps;

/// Computes what a borrower owes when closing a loan.
///
/// Inputs are the borrowed principal, the rate locked into the receipt and
/// the seconds elapsed since issuance. The result includes the principal.
pub trait InterestStrategy: Send + Sync {
    fn amount_owed(&self, principal: u64, rate_bps: u16, elapsed: u64) -> Result<u64>;
}

/// One flat fee per loan: `principal + principal * rate / 10_000`.
/// Elapsed time is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatFee;

impl InterestStrategy for FlatFee {
    fn amount_owed(&self, principal: u64, rate_bps: u16, _elapsed: u64) -> Result<u64> {
        principal
            .checked_add(apply_bps(principal, rate_bps)?)
            .ok_or(error!(LendingError::MathOverflow))
    }
}

/// Flat fee for a term of `cycle` seconds, then a daily penalty.
///
/// Day count: every started day past the term is charged in full
/// (`overdue / 86_400 + 1`), capped at `penalty_days`. A day starts at its
/// first second, so 1 s past the term charges 1 day and exactly 86_400 s
/// past it charges 2. Each charged day adds `principal * penalty_rate / 10_000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermWithPenalty {
    pub cycle: u64,
    pub penalty_rate: u16,
    pub penalty_days: u8,
}

impl TermWithPenalty {
    pub fn overdue_days(&self, elapsed: u64) -> u64 {
        if elapsed <= self.cycle {
            return 0;
        }
        let days = (elapsed - self.cycle) / SECONDS_PER_DAY + 1;
        days.min(self.penalty_days as u64)
    }
}

impl InterestStrategy for TermWithPenalty {
    fn amount_owed(&self, principal: u64, rate_bps: u16, elapsed: u64) -> Result<u64> {
        let base = FlatFee.amount_owed(principal, rate_bps, elapsed)?;
        let penalty = apply_bps(principal, self.penalty_rate)?
            .checked_mul(self.overdue_days(elapsed))
            .ok_or(error!(LendingError::MathOverflow))?;

        base.checked_add(penalty)
            .ok_or(error!(LendingError::MathOverflow))
    }
}

/// Built-in strategies selectable from the on-chain `Config`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accrual {
    Flat(FlatFee),
    Term(TermWithPenalty),
}

impl InterestStrategy for Accrual {
    fn amount_owed(&self, principal: u64, rate_bps: u16, elapsed: u64) -> Result<u64> {
        match self {
            Accrual::Flat(strategy) => strategy.amount_owed(principal, rate_bps, elapsed),
            Accrual::Term(strategy) => strategy.amount_owed(principal, rate_bps, elapsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_SOL: u64 = 1_000_000_000;

    #[test]
    fn flat_fee_ignores_time() {
        assert_eq!(FlatFee.amount_owed(2 * ONE_SOL, 100, 0).unwrap(), 2_020_000_000);
        assert_eq!(FlatFee.amount_owed(2 * ONE_SOL, 100, 10 * SECONDS_PER_DAY).unwrap(), 2_020_000_000);
        assert_eq!(FlatFee.amount_owed(ONE_SOL, 0, 0).unwrap(), ONE_SOL);
    }

    #[test]
    fn term_penalty_counts_started_days() {
        let term = TermWithPenalty {
            cycle: 30 * SECONDS_PER_DAY,
            penalty_rate: 10,
            penalty_days: 5,
        };
        assert_eq!(term.overdue_days(30 * SECONDS_PER_DAY), 0);
        assert_eq!(term.overdue_days(30 * SECONDS_PER_DAY + 1), 1);
        assert_eq!(term.overdue_days(31 * SECONDS_PER_DAY - 1), 1);
        assert_eq!(term.overdue_days(31 * SECONDS_PER_DAY), 2);
        assert_eq!(term.overdue_days(365 * SECONDS_PER_DAY), 5);

        // 1% fee plus two days at 0.1%
        assert_eq!(
            term.amount_owed(ONE_SOL, 100, 31 * SECONDS_PER_DAY).unwrap(),
            ONE_SOL + 10_000_000 + 2 * 1_000_000
        );
    }

    #[test]
    fn accrual_dispatch() {
        let flat = Accrual::Flat(FlatFee);
        assert_eq!(flat.amount_owed(ONE_SOL, 100, u64::MAX).unwrap(), 1_010_000_000);
    }
}

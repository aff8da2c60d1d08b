use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::LendingError;
use crate::interest::{Accrual, FlatFee, TermWithPenalty};

/// Global protocol configuration.
/// Written once by `initialize`, read-only afterwards.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    /// Protocol admin who initialized the program
    pub admin: Pubkey,

    /// Rate applied when a lender does not choose one (basis points)
    pub default_rate: u16,

    /// Lowest rate an order may carry (basis points)
    pub min_rate: u16,

    /// Highest rate an order may carry (basis points)
    pub max_rate: u16,

    /// Penalty per overdue day (basis points of principal)
    pub penalty_rate: u16,

    /// Maximum number of overdue days charged
    pub penalty_days: u8,

    /// Loan term in seconds, 0 for a flat fee with no due date
    pub cycle: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin: Pubkey::default(),
            default_rate: DEFAULT_RATE_BPS,
            min_rate: MIN_RATE_BPS,
            max_rate: MAX_RATE_BPS,
            penalty_rate: DEFAULT_PENALTY_RATE_BPS,
            penalty_days: DEFAULT_PENALTY_DAYS,
            cycle: DEFAULT_CYCLE_SECS,
        }
    }
}

impl Config {
    pub const LEN: usize = 8 + // discriminator
        32 + // admin
        2 + // default_rate
        2 + // min_rate
        2 + // max_rate
        2 + // penalty_rate
        1 + // penalty_days
        8; // cycle

    pub fn validate(&self) -> Result<()> {
        require!(self.min_rate <= self.max_rate, LendingError::InvalidConfig);
        require!(
            self.default_rate >= self.min_rate && self.default_rate <= self.max_rate,
            LendingError::InvalidConfig
        );
        Ok(())
    }

    /// Pick the rate for a new order, falling back to the default
    pub fn resolve_rate(&self, requested: Option<u16>) -> Result<u16> {
        let rate = requested.unwrap_or(self.default_rate);
        require!(
            rate >= self.min_rate && rate <= self.max_rate,
            LendingError::IllegalInterestRate
        );
        Ok(rate)
    }

    pub fn accrual(&self) -> Accrual {
        if self.cycle == 0 {
            Accrual::Flat(FlatFee)
        } else {
            Accrual::Term(TermWithPenalty {
                cycle: self.cycle,
                penalty_rate: self.penalty_rate,
                penalty_days: self.penalty_days,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.resolve_rate(None).unwrap(), DEFAULT_RATE_BPS);
        assert_eq!(config.accrual(), Accrual::Flat(FlatFee));
    }

    #[test]
    fn rate_window_is_enforced() {
        let config = Config {
            min_rate: 50,
            max_rate: 500,
            ..Config::default()
        };
        assert_eq!(config.resolve_rate(Some(50)).unwrap(), 50);
        assert_eq!(config.resolve_rate(Some(500)).unwrap(), 500);
        assert_eq!(
            config.resolve_rate(Some(501)).unwrap_err(),
            Error::from(LendingError::IllegalInterestRate)
        );
        assert_eq!(
            config.resolve_rate(Some(49)).unwrap_err(),
            Error::from(LendingError::IllegalInterestRate)
        );
    }

    #[test]
    fn inconsistent_window_is_rejected() {
        let config = Config {
            min_rate: 200,
            max_rate: 100,
            ..Config::default()
        };
        assert_eq!(config.validate().unwrap_err(), Error::from(LendingError::InvalidConfig));

        let config = Config {
            default_rate: 1_000,
            max_rate: 500,
            ..Config::default()
        };
        assert_eq!(config.validate().unwrap_err(), Error::from(LendingError::InvalidConfig));
    }

    #[test]
    fn cycle_selects_term_accrual() {
        let config = Config {
            cycle: 30 * SECONDS_PER_DAY,
            penalty_rate: 10,
            penalty_days: 7,
            ..Config::default()
        };
        assert_eq!(
            config.accrual(),
            Accrual::Term(TermWithPenalty {
                cycle: 30 * SECONDS_PER_DAY,
                penalty_rate: 10,
                penalty_days: 7,
            })
        );
    }
}

use anchor_lang::prelude::*;
use crate::instructions::InitializeParams;
use crate::ledger::LockPolicy;
use crate::state::Config;

/// Settings for a host-side ledger
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LedgerConfig {
    /// Recorded as the protocol admin
    pub admin: Pubkey,

    /// Protocol parameters, same as the on-chain `initialize` arguments
    pub params: InitializeParams,

    /// What a transaction does when one of its accounts is locked
    pub lock_policy: LockPolicy,
}

impl LedgerConfig {
    pub fn with_admin(mut self, admin: Pubkey) -> Self {
        self.admin = admin;
        self
    }

    pub fn with_default_rate(mut self, rate: u16) -> Self {
        self.params.default_rate = rate;
        self
    }

    pub fn with_rate_window(mut self, min_rate: u16, max_rate: u16) -> Self {
        self.params.min_rate = min_rate;
        self.params.max_rate = max_rate;
        self
    }

    /// Loan term in seconds with a daily overdue penalty
    pub fn with_term(mut self, cycle: u64, penalty_rate: u16, penalty_days: u8) -> Self {
        self.params.cycle = cycle;
        self.params.penalty_rate = penalty_rate;
        self.params.penalty_days = penalty_days;
        self
    }

    pub fn with_lock_policy(mut self, lock_policy: LockPolicy) -> Self {
        self.lock_policy = lock_policy;
        self
    }

    pub fn protocol_config(&self) -> Result<Config> {
        self.params.clone().into_config(self.admin)
    }
}

#![allow(dead_code)]

use std::sync::Arc;
use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use sol_lending::errors::LendingError;
use sol_lending::ledger::{Ledger, LedgerConfig, ManualClock};

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
pub const START_TIME: u64 = 1_700_000_000;

pub struct TestLedger {
    pub ledger: Ledger,
    pub clock: Arc<ManualClock>,
}

pub fn setup() -> TestLedger {
    setup_with(LedgerConfig::default())
}

pub fn setup_with(config: LedgerConfig) -> TestLedger {
    let clock = Arc::new(ManualClock::new(START_TIME));
    let ledger = Ledger::with_clock(config, clock.clone()).unwrap();
    TestLedger { ledger, clock }
}

pub fn assert_error<T: std::fmt::Debug>(result: anchor_lang::Result<T>, expected: LendingError) {
    assert_eq!(result.unwrap_err(), Error::from(expected));
}

/// Lender with `deposit` lamports and one order of `amount` at the default rate
pub fn funded_order(ledger: &Ledger, deposit: u64, amount: u64) -> (Pubkey, u64) {
    let lender = Pubkey::new_unique();
    ledger.deposit(&lender, deposit).unwrap();
    let sn = ledger.place_order(&lender, amount, None).unwrap();
    (lender, sn)
}

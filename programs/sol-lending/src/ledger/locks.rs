use std::collections::BTreeSet;
use std::sync::{Condvar, Mutex, PoisonError};
use anchor_lang::prelude::*;
use crate::errors::LendingError;
use crate::ledger::AccountKey;

/// What to do when a transaction's account is held by another one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockPolicy {
    /// Block until every requested account is free
    #[default]
    Wait,
    /// Reject the transaction with `ConcurrentModification`
    FailFast,
}

/// Write locks per account.
/// A transaction takes all of its accounts at once or none of them,
/// so two transactions can never deadlock on each other.
#[derive(Debug, Default)]
pub struct AccountLocks {
    locked: Mutex<BTreeSet<AccountKey>>,
    released: Condvar,
}

impl AccountLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self, keys: &[AccountKey], policy: LockPolicy) -> Result<AccountLockGuard<'_>> {
        let keys: BTreeSet<AccountKey> = keys.iter().copied().collect();
        let mut locked = self.locked.lock().unwrap_or_else(PoisonError::into_inner);

        while keys.iter().any(|key| locked.contains(key)) {
            match policy {
                LockPolicy::FailFast => {
                    msg!("Account in use, rejecting transaction");
                    return err!(LendingError::ConcurrentModification);
                }
                LockPolicy::Wait => {
                    locked = self.released.wait(locked).unwrap_or_else(PoisonError::into_inner);
                }
            }
        }

        locked.extend(keys.iter().copied());
        Ok(AccountLockGuard { locks: self, keys })
    }

    pub fn is_locked(&self, key: &AccountKey) -> bool {
        self.locked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }
}

/// Releases its accounts when dropped
#[derive(Debug)]
pub struct AccountLockGuard<'a> {
    locks: &'a AccountLocks,
    keys: BTreeSet<AccountKey>,
}

impl Drop for AccountLockGuard<'_> {
    fn drop(&mut self) {
        let mut locked = self.locks.locked.lock().unwrap_or_else(PoisonError::into_inner);
        for key in &self.keys {
            locked.remove(key);
        }
        self.locks.released.notify_all();
    }
}

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::sync::{PoisonError, RwLock};
use anchor_lang::prelude::*;
use crate::codec::AccountCodec;
use crate::constants::*;

/// Storage location of a record: its kind plus the key it is derived from.
/// Keys of different kinds never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccountKey {
    GlobalState,
    Config,
    Balance(Pubkey),
    Order(u64),
    Receipt(u64),
}

impl AccountKey {
    pub const ORDERS: RangeInclusive<AccountKey> = AccountKey::Order(0)..=AccountKey::Order(u64::MAX);
    pub const RECEIPTS: RangeInclusive<AccountKey> = AccountKey::Receipt(0)..=AccountKey::Receipt(u64::MAX);

    /// Address of the matching on-chain account
    pub fn address(&self) -> Pubkey {
        let (address, _bump) = match self {
            AccountKey::GlobalState => Pubkey::find_program_address(&[STATE_SEED], &crate::ID),
            AccountKey::Config => Pubkey::find_program_address(&[CONFIG_SEED], &crate::ID),
            AccountKey::Balance(owner) => {
                Pubkey::find_program_address(&[BALANCE_SEED, owner.as_ref()], &crate::ID)
            }
            AccountKey::Order(sn) => {
                Pubkey::find_program_address(&[ORDER_SEED, sn.to_le_bytes().as_ref()], &crate::ID)
            }
            AccountKey::Receipt(sn) => {
                Pubkey::find_program_address(&[RECEIPT_SEED, sn.to_le_bytes().as_ref()], &crate::ID)
            }
        };
        address
    }
}

/// Encoded account data by key
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: RwLock<BTreeMap<AccountKey, Vec<u8>>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &AccountKey) -> bool {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    /// Raw account bytes
    pub fn data(&self, key: &AccountKey) -> Option<Vec<u8>> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn load<T: AccountCodec>(&self, key: &AccountKey) -> Result<Option<T>> {
        self.data(key).map(|data| T::decode(&data)).transpose()
    }

    /// Decode every account in `range`, in key order
    pub fn scan<T: AccountCodec>(&self, range: RangeInclusive<AccountKey>) -> Result<Vec<T>> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .range(range)
            .map(|(_, data)| T::decode(data))
            .collect()
    }

    /// Overwrite raw bytes outside of any transaction.
    /// Only for seeding accounts before the ledger is shared.
    pub(crate) fn put_data(&self, key: AccountKey, data: Vec<u8>) {
        self.accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, data);
    }

    /// Apply a batch of writes atomically. `None` closes the account.
    fn apply(&self, writes: BTreeMap<AccountKey, Option<Vec<u8>>>) {
        let mut accounts = self.accounts.write().unwrap_or_else(PoisonError::into_inner);
        for (key, data) in writes {
            match data {
                Some(data) => {
                    accounts.insert(key, data);
                }
                None => {
                    accounts.remove(&key);
                }
            }
        }
    }
}

/// Staged writes over a store.
/// Reads see the transaction's own writes; nothing reaches the store
/// until `commit`. Dropping without committing discards everything.
pub struct Transaction<'a> {
    store: &'a AccountStore,
    writes: BTreeMap<AccountKey, Option<Vec<u8>>>,
}

impl<'a> Transaction<'a> {
    pub fn new(store: &'a AccountStore) -> Self {
        Self {
            store,
            writes: BTreeMap::new(),
        }
    }

    pub fn load<T: AccountCodec>(&self, key: &AccountKey) -> Result<Option<T>> {
        match self.writes.get(key) {
            Some(Some(data)) => T::decode(data).map(Some),
            Some(None) => Ok(None),
            None => self.store.load(key),
        }
    }

    pub fn save<T: AccountCodec>(&mut self, key: AccountKey, account: &T) -> Result<()> {
        let data = account.encode()?;
        self.writes.insert(key, Some(data));
        Ok(())
    }

    pub fn close(&mut self, key: AccountKey) {
        self.writes.insert(key, None);
    }

    pub fn commit(self) {
        self.store.apply(self.writes);
    }
}

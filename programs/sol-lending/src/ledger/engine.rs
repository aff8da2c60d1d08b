use std::sync::Arc;
use anchor_lang::prelude::*;
use crate::codec::AccountCodec;
use crate::errors::LendingError;
use crate::interest::InterestStrategy;
use crate::ledger::{
    AccountKey, AccountLocks, AccountStore, LedgerClock, LedgerConfig, LockPolicy, SystemClock,
    Transaction,
};
use crate::state::{Config, GlobalState, LoanReceipt, Order, UserBalance};

/// Which receipts `list_receipts` returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptFilter {
    All,
    Borrower(Pubkey),
    Lender(Pubkey),
}

impl ReceiptFilter {
    pub fn matches(&self, receipt: &LoanReceipt) -> bool {
        match self {
            ReceiptFilter::All => true,
            ReceiptFilter::Borrower(borrower) => receipt.borrower == *borrower,
            ReceiptFilter::Lender(lender) => receipt.lender == *lender,
        }
    }
}

/// Deterministic lending ledger.
///
/// Every operation is one transaction: it locks the accounts it writes,
/// stages its changes and commits them together, or fails and leaves the
/// store untouched. Transactions on disjoint accounts run in parallel;
/// sequence-number allocation serializes on `GlobalState`.
pub struct Ledger {
    store: AccountStore,
    locks: AccountLocks,
    lock_policy: LockPolicy,
    clock: Arc<dyn LedgerClock>,
    strategy: Arc<dyn InterestStrategy>,
}

impl Ledger {
    pub fn new(config: LedgerConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Equivalent of the on-chain `initialize` instruction
    pub fn with_clock(config: LedgerConfig, clock: Arc<dyn LedgerClock>) -> Result<Self> {
        let protocol = config.protocol_config()?;
        let store = AccountStore::new();
        store.put_data(AccountKey::GlobalState, GlobalState::default().encode()?);
        store.put_data(AccountKey::Config, protocol.encode()?);

        msg!("Ledger initialized with admin: {}", protocol.admin);
        msg!("Default rate: {} bps, window: {}-{} bps, cycle: {}s",
            protocol.default_rate,
            protocol.min_rate,
            protocol.max_rate,
            protocol.cycle
        );

        Ok(Self {
            store,
            locks: AccountLocks::new(),
            lock_policy: config.lock_policy,
            clock,
            strategy: Arc::new(protocol.accrual()),
        })
    }

    /// Replace the accrual strategy selected by the configuration
    pub fn with_interest_strategy(mut self, strategy: Arc<dyn InterestStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    fn transact<T>(
        &self,
        keys: &[AccountKey],
        apply: impl FnOnce(&mut Transaction<'_>) -> Result<T>,
    ) -> Result<T> {
        let _guard = self.locks.acquire(keys, self.lock_policy)?;
        let mut tx = Transaction::new(&self.store);
        let output = apply(&mut tx)?;
        tx.commit();
        Ok(output)
    }

    pub fn deposit(&self, holder: &Pubkey, amount: u64) -> Result<()> {
        let key = AccountKey::Balance(*holder);
        self.transact(&[key], |tx| {
            let mut balance = tx
                .load::<UserBalance>(&key)?
                .unwrap_or_else(|| UserBalance::new(*holder));
            balance.deposit(amount)?;
            tx.save(key, &balance)?;

            msg!("Deposited {} lamports for {}, balance: {}", amount, holder, balance.amount);
            Ok(())
        })
    }

    pub fn withdraw(&self, holder: &Pubkey, amount: u64) -> Result<()> {
        require!(amount > 0, LendingError::InvalidAmount);
        let key = AccountKey::Balance(*holder);
        self.transact(&[key], |tx| {
            let mut balance = tx
                .load::<UserBalance>(&key)?
                .ok_or(error!(LendingError::InsufficientFunds))?;
            balance.withdraw(amount)?;
            tx.save(key, &balance)?;

            msg!("Withdrew {} lamports for {}, balance: {}", amount, holder, balance.amount);
            Ok(())
        })
    }

    /// Fund a new order from the lender's balance. `None` uses the
    /// configured default rate. Returns the order's sn.
    pub fn place_order(&self, lender: &Pubkey, amount: u64, rate: Option<u16>) -> Result<u64> {
        require!(amount > 0, LendingError::InvalidAmount);
        let rate = self.config()?.resolve_rate(rate)?;
        let balance_key = AccountKey::Balance(*lender);

        self.transact(&[balance_key, AccountKey::GlobalState], |tx| {
            let mut balance = tx
                .load::<UserBalance>(&balance_key)?
                .ok_or(error!(LendingError::InsufficientFunds))?;
            balance.debit_for_order(amount)?;

            let mut global = Self::global_in(tx)?;
            let sn = global.next_order_sn()?;
            let order = Order::open(sn, *lender, amount, rate)?;

            tx.save(balance_key, &balance)?;
            tx.save(AccountKey::GlobalState, &global)?;
            tx.save(AccountKey::Order(sn), &order)?;

            msg!("Order {} placed by {}: {} lamports at {} bps", sn, lender, amount, rate);
            Ok(sn)
        })
    }

    /// Refund the rest of an order to its lender. The order stays listed
    /// with a zero balance. Returns the refunded lamports.
    pub fn cancel_order(&self, lender: &Pubkey, order_sn: u64) -> Result<u64> {
        let order_key = AccountKey::Order(order_sn);
        let balance_key = AccountKey::Balance(*lender);

        self.transact(&[order_key, balance_key], |tx| {
            let mut order = tx
                .load::<Order>(&order_key)?
                .ok_or(error!(LendingError::OrderNotFound))?;
            require_keys_eq!(order.lender, *lender, LendingError::Unauthorized);

            let refund = order.drain();
            let mut balance = tx
                .load::<UserBalance>(&balance_key)?
                .unwrap_or_else(|| UserBalance::new(*lender));
            balance.credit(refund)?;

            tx.save(order_key, &order)?;
            tx.save(balance_key, &balance)?;

            msg!("Order {} cancelled by {}, refunded {} lamports", order_sn, lender, refund);
            Ok(refund)
        })
    }

    /// Take `amount` from an order, crediting the borrower and issuing a
    /// receipt. Returns the receipt's sn.
    pub fn borrow(&self, borrower: &Pubkey, order_sn: u64, amount: u64) -> Result<u64> {
        let order_key = AccountKey::Order(order_sn);
        let balance_key = AccountKey::Balance(*borrower);

        self.transact(&[order_key, balance_key, AccountKey::GlobalState], |tx| {
            let mut order = tx
                .load::<Order>(&order_key)?
                .ok_or(error!(LendingError::OrderNotFound))?;
            order.reduce_for_borrow(amount)?;

            let mut balance = tx
                .load::<UserBalance>(&balance_key)?
                .unwrap_or_else(|| UserBalance::new(*borrower));
            balance.credit(amount)?;

            // The receipt key is covered by the GlobalState lock
            let mut global = Self::global_in(tx)?;
            let sn = global.next_receipt_sn()?;
            let now = self.clock.unix_timestamp();
            let receipt = LoanReceipt::issue(sn, *borrower, &order, amount, now)?;

            tx.save(order_key, &order)?;
            tx.save(balance_key, &balance)?;
            tx.save(AccountKey::GlobalState, &global)?;
            tx.save(AccountKey::Receipt(sn), &receipt)?;

            msg!("Receipt {} issued: {} borrowed {} lamports from order {}", sn, borrower, amount, order_sn);
            Ok(sn)
        })
    }

    /// Close a receipt, moving principal plus interest from the borrower's
    /// balance to the lender's. Returns the lamports paid.
    pub fn repay(&self, borrower: &Pubkey, receipt_sn: u64) -> Result<u64> {
        let receipt_key = AccountKey::Receipt(receipt_sn);

        // The lender never changes, so it can be read before locking
        let lender = self
            .store
            .load::<LoanReceipt>(&receipt_key)?
            .ok_or(error!(LendingError::ReceiptNotFound))?
            .lender;
        let borrower_key = AccountKey::Balance(*borrower);
        let lender_key = AccountKey::Balance(lender);

        self.transact(&[receipt_key, borrower_key, lender_key], |tx| {
            // Someone may have repaid it while we waited for the locks
            let receipt = tx
                .load::<LoanReceipt>(&receipt_key)?
                .ok_or(error!(LendingError::ReceiptNotFound))?;
            receipt.authorize_repay(borrower)?;

            let owed = receipt.amount_owed(self.strategy.as_ref(), self.clock.unix_timestamp())?;

            let mut borrower_balance = tx
                .load::<UserBalance>(&borrower_key)?
                .ok_or(error!(LendingError::InsufficientFunds))?;
            borrower_balance.debit(owed)?;
            tx.save(borrower_key, &borrower_balance)?;

            let mut lender_balance = tx
                .load::<UserBalance>(&lender_key)?
                .ok_or(error!(LendingError::BalanceNotFound))?;
            lender_balance.credit(owed)?;
            tx.save(lender_key, &lender_balance)?;

            tx.close(receipt_key);

            msg!("Receipt {} repaid by {}: {} lamports to {}", receipt_sn, borrower, owed, lender);
            Ok(owed)
        })
    }

    /// Lamports held by `holder`, zero when it never deposited
    pub fn get_balance(&self, holder: &Pubkey) -> Result<u64> {
        Ok(self
            .store
            .load::<UserBalance>(&AccountKey::Balance(*holder))?
            .map(|balance| balance.amount)
            .unwrap_or(0))
    }

    pub fn get_order(&self, order_sn: u64) -> Result<Option<Order>> {
        self.store.load(&AccountKey::Order(order_sn))
    }

    pub fn get_receipt(&self, receipt_sn: u64) -> Result<Option<LoanReceipt>> {
        self.store.load(&AccountKey::Receipt(receipt_sn))
    }

    /// Snapshot of every order, emptied ones included, by ascending sn
    pub fn list_orders(&self) -> Result<Vec<Order>> {
        self.store.scan(AccountKey::ORDERS)
    }

    /// Snapshot of open receipts by ascending sn
    pub fn list_receipts(&self, filter: ReceiptFilter) -> Result<Vec<LoanReceipt>> {
        let receipts: Vec<LoanReceipt> = self.store.scan(AccountKey::RECEIPTS)?;
        Ok(receipts
            .into_iter()
            .filter(|receipt| filter.matches(receipt))
            .collect())
    }

    /// What repaying the receipt would cost right now
    pub fn amount_owed(&self, receipt_sn: u64) -> Result<u64> {
        let receipt = self
            .get_receipt(receipt_sn)?
            .ok_or(error!(LendingError::ReceiptNotFound))?;
        receipt.amount_owed(self.strategy.as_ref(), self.clock.unix_timestamp())
    }

    pub fn config(&self) -> Result<Config> {
        self.store
            .load(&AccountKey::Config)?
            .ok_or(error!(LendingError::InvalidConfig))
    }

    pub fn global_state(&self) -> Result<GlobalState> {
        self.store
            .load(&AccountKey::GlobalState)?
            .ok_or(error!(LendingError::InvalidConfig))
    }

    fn global_in(tx: &Transaction<'_>) -> Result<GlobalState> {
        tx.load(&AccountKey::GlobalState)?
            .ok_or(error!(LendingError::InvalidConfig))
    }
}

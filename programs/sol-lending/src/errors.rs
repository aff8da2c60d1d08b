use anchor_lang::prelude::*;

#[error_code]
pub enum LendingError {
    #[msg("Amount must be greater than zero and fit the balance")]
    InvalidAmount,

    #[msg("Insufficient balance")]
    InsufficientFunds,

    #[msg("Insufficient order balance for borrow")]
    InsufficientOrderBalance,

    #[msg("No order found")]
    OrderNotFound,

    #[msg("No receipt found")]
    ReceiptNotFound,

    #[msg("Unauthorized access")]
    Unauthorized,

    #[msg("Account data does not match the expected layout")]
    MalformedAccount,

    #[msg("Account is locked by a concurrent transaction")]
    ConcurrentModification,

    #[msg("Illegal interest rate")]
    IllegalInterestRate,

    #[msg("No balance account found")]
    BalanceNotFound,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid protocol configuration")]
    InvalidConfig,
}

use anchor_lang::prelude::*;

declare_id!("DbvGG9jSbGDHZv7Q2auCCbPDmkKoz6cV7CRYQmGqh5gd");

pub mod codec;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod interest;
#[cfg(not(target_os = "solana"))]
pub mod ledger;
pub mod state;
pub mod utils;

use instructions::*;

#[program]
pub mod sol_lending {
    use super::*;

    /// Create the global sequence counters and the protocol configuration
    /// Can only be called once
    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        instructions::initialize::handler(ctx, params)
    }

    /// Deposit SOL into the caller's balance account
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Withdraw SOL from the caller's balance account
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Move part of the caller's balance into a new lending order
    pub fn place_order(ctx: Context<PlaceOrder>, amount: u64, rate: u16) -> Result<()> {
        instructions::place_order::handler(ctx, amount, rate)
    }

    /// Refund whatever is left on an order to its lender
    pub fn cancel_order(ctx: Context<CancelOrder>, order_sn: u64) -> Result<()> {
        instructions::cancel_order::handler(ctx, order_sn)
    }

    /// Borrow against an order, issuing a loan receipt
    pub fn borrow(ctx: Context<Borrow>, order_sn: u64, amount: u64) -> Result<()> {
        instructions::borrow::handler(ctx, order_sn, amount)
    }

    /// Repay a loan in full and close its receipt
    pub fn repay(ctx: Context<Repay>, receipt_sn: u64) -> Result<()> {
        instructions::repay::handler(ctx, receipt_sn)
    }
}

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::LendingError;
use crate::events::RepayEvent;
use crate::state::{Config, LoanReceipt, UserBalance};
use crate::utils::move_lamports;

#[derive(Accounts)]
#[instruction(receipt_sn: u64)]
pub struct Repay<'info> {
    #[account(
        mut,
        close = payer,
        seeds = [RECEIPT_SEED, receipt_sn.to_le_bytes().as_ref()],
        bump
    )]
    pub receipt: Account<'info, LoanReceipt>,

    #[account(
        mut,
        seeds = [BALANCE_SEED, payer.key().as_ref()],
        bump
    )]
    pub borrower_balance: Account<'info, UserBalance>,

    #[account(
        mut,
        seeds = [BALANCE_SEED, receipt.lender.as_ref()],
        bump
    )]
    pub lender_balance: Account<'info, UserBalance>,

    #[account(
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub payer: Signer<'info>,
}

pub fn handler(ctx: Context<Repay>, receipt_sn: u64) -> Result<()> {
    let borrower = ctx.accounts.payer.key();
    let clock = Clock::get()?;
    let now = u64::try_from(clock.unix_timestamp).map_err(|_| error!(LendingError::MathOverflow))?;

    let receipt = &ctx.accounts.receipt;
    require!(receipt.sn == receipt_sn, LendingError::ReceiptNotFound);
    receipt.authorize_repay(&borrower)?;

    let accrual = ctx.accounts.config.accrual();
    let owed = receipt.amount_owed(&accrual, now)?;
    let principal = receipt.amount;
    let lender = receipt.lender;

    if lender == borrower {
        // Both sides are the same account, only check coverage
        require!(ctx.accounts.borrower_balance.amount >= owed, LendingError::InsufficientFunds);
    } else {
        ctx.accounts.borrower_balance.debit(owed)?;
        ctx.accounts.lender_balance.credit(owed)?;

        move_lamports(
            &ctx.accounts.borrower_balance.to_account_info(),
            &ctx.accounts.lender_balance.to_account_info(),
            owed,
        )?;
    }

    msg!("Receipt {} repaid by {}: {} lamports to {}", receipt_sn, borrower, owed, lender);
    emit!(RepayEvent {
        receipt_sn,
        borrower,
        lender,
        principal,
        amount: owed,
    });

    Ok(())
}

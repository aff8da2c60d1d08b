use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::LendingError;
use crate::events::BorrowEvent;
use crate::state::{GlobalState, LoanReceipt, Order, UserBalance};
use crate::utils::move_lamports;

#[derive(Accounts)]
#[instruction(order_sn: u64)]
pub struct Borrow<'info> {
    #[account(
        init,
        payer = payer,
        space = LoanReceipt::LEN,
        seeds = [RECEIPT_SEED, global.receipt_sequence.to_le_bytes().as_ref()],
        bump
    )]
    pub receipt: Account<'info, LoanReceipt>,

    #[account(
        mut,
        seeds = [ORDER_SEED, order_sn.to_le_bytes().as_ref()],
        bump
    )]
    pub order: Account<'info, Order>,

    #[account(
        init_if_needed,
        payer = payer,
        space = UserBalance::LEN,
        seeds = [BALANCE_SEED, payer.key().as_ref()],
        bump
    )]
    pub borrower_balance: Account<'info, UserBalance>,

    #[account(
        mut,
        seeds = [STATE_SEED],
        bump
    )]
    pub global: Account<'info, GlobalState>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Borrow>, order_sn: u64, amount: u64) -> Result<()> {
    let borrower = ctx.accounts.payer.key();
    let clock = Clock::get()?;
    let now = u64::try_from(clock.unix_timestamp).map_err(|_| error!(LendingError::MathOverflow))?;

    require!(ctx.accounts.order.sn == order_sn, LendingError::OrderNotFound);
    ctx.accounts.order.reduce_for_borrow(amount)?;

    let borrower_balance = &mut ctx.accounts.borrower_balance;
    if borrower_balance.owner == Pubkey::default() {
        borrower_balance.owner = borrower;
    }
    borrower_balance.credit(amount)?;

    let sn = ctx.accounts.global.next_receipt_sn()?;
    let receipt = LoanReceipt::issue(sn, borrower, &ctx.accounts.order, amount, now)?;
    let lender = receipt.lender;
    let rate = receipt.rate;
    ctx.accounts.receipt.set_inner(receipt);

    move_lamports(
        &ctx.accounts.order.to_account_info(),
        &ctx.accounts.borrower_balance.to_account_info(),
        amount,
    )?;

    msg!("Receipt {} issued: {} borrowed {} lamports from order {}", sn, borrower, amount, order_sn);
    emit!(BorrowEvent {
        receipt_sn: sn,
        order_sn,
        borrower,
        lender,
        amount,
        time: now,
        rate,
        order_balance: ctx.accounts.order.balance,
    });

    Ok(())
}

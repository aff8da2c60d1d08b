use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::LendingError;
use crate::events::CancelOrderEvent;
use crate::state::{Order, UserBalance};
use crate::utils::move_lamports;

#[derive(Accounts)]
#[instruction(order_sn: u64)]
pub struct CancelOrder<'info> {
    #[account(
        mut,
        seeds = [ORDER_SEED, order_sn.to_le_bytes().as_ref()],
        bump
    )]
    pub order: Account<'info, Order>,

    #[account(
        mut,
        seeds = [BALANCE_SEED, payer.key().as_ref()],
        bump
    )]
    pub user_balance: Account<'info, UserBalance>,

    #[account(mut)]
    pub payer: Signer<'info>,
}

pub fn handler(ctx: Context<CancelOrder>, order_sn: u64) -> Result<()> {
    let lender = ctx.accounts.payer.key();

    require!(ctx.accounts.order.sn == order_sn, LendingError::OrderNotFound);
    require_keys_eq!(ctx.accounts.order.lender, lender, LendingError::Unauthorized);

    // The order stays listed with a zero balance
    let refund = ctx.accounts.order.drain();
    ctx.accounts.user_balance.credit(refund)?;

    move_lamports(
        &ctx.accounts.order.to_account_info(),
        &ctx.accounts.user_balance.to_account_info(),
        refund,
    )?;

    msg!("Order {} cancelled by {}, refunded {} lamports", order_sn, lender, refund);
    emit!(CancelOrderEvent {
        order_sn,
        lender,
        balance: refund,
    });

    Ok(())
}

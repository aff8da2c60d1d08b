use anchor_lang::prelude::*;
use crate::constants::*;
use crate::events::PlaceOrderEvent;
use crate::state::{Config, GlobalState, Order, UserBalance};
use crate::utils::move_lamports;

#[derive(Accounts)]
pub struct PlaceOrder<'info> {
    #[account(
        init,
        payer = payer,
        space = Order::LEN,
        seeds = [ORDER_SEED, global.order_sequence.to_le_bytes().as_ref()],
        bump
    )]
    pub order: Account<'info, Order>,

    #[account(
        mut,
        seeds = [BALANCE_SEED, payer.key().as_ref()],
        bump
    )]
    pub user_balance: Account<'info, UserBalance>,

    #[account(
        mut,
        seeds = [STATE_SEED],
        bump
    )]
    pub global: Account<'info, GlobalState>,

    #[account(
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PlaceOrder>, amount: u64, rate: u16) -> Result<()> {
    let lender = ctx.accounts.payer.key();
    let rate = ctx.accounts.config.resolve_rate(Some(rate))?;

    ctx.accounts.user_balance.debit_for_order(amount)?;
    let sn = ctx.accounts.global.next_order_sn()?;
    ctx.accounts.order.set_inner(Order::open(sn, lender, amount, rate)?);

    move_lamports(
        &ctx.accounts.user_balance.to_account_info(),
        &ctx.accounts.order.to_account_info(),
        amount,
    )?;

    msg!("Order {} placed by {}: {} lamports at {} bps", sn, lender, amount, rate);
    emit!(PlaceOrderEvent {
        order_sn: sn,
        lender,
        balance: amount,
        rate,
    });

    Ok(())
}

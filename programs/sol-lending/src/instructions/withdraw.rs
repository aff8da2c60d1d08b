use anchor_lang::prelude::*;
use crate::constants::*;
use crate::events::WithdrawEvent;
use crate::state::UserBalance;
use crate::utils::move_lamports;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [BALANCE_SEED, payer.key().as_ref()],
        bump,
        constraint = user_balance.owner == payer.key() @ crate::errors::LendingError::Unauthorized
    )]
    pub user_balance: Account<'info, UserBalance>,

    #[account(mut)]
    pub payer: Signer<'info>,
}

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let holder = ctx.accounts.payer.key();

    ctx.accounts.user_balance.withdraw(amount)?;
    let balance = ctx.accounts.user_balance.amount;

    move_lamports(
        &ctx.accounts.user_balance.to_account_info(),
        &ctx.accounts.payer.to_account_info(),
        amount,
    )?;

    msg!("Withdrew {} lamports for {}, balance: {}", amount, holder, balance);
    emit!(WithdrawEvent { holder, amount, balance });

    Ok(())
}

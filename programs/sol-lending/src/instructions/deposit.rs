use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use anchor_lang::solana_program::system_instruction;
use crate::constants::*;
use crate::events::DepositEvent;
use crate::state::UserBalance;

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        init_if_needed,
        payer = payer,
        space = UserBalance::LEN,
        seeds = [BALANCE_SEED, payer.key().as_ref()],
        bump
    )]
    pub user_balance: Account<'info, UserBalance>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let holder = ctx.accounts.payer.key();

    let user_balance = &mut ctx.accounts.user_balance;
    if user_balance.owner == Pubkey::default() {
        user_balance.owner = holder;
    }
    user_balance.deposit(amount)?;
    let balance = user_balance.amount;

    invoke(
        &system_instruction::transfer(&holder, &ctx.accounts.user_balance.key(), amount),
        &[
            ctx.accounts.payer.to_account_info(),
            ctx.accounts.user_balance.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )?;

    msg!("Deposited {} lamports for {}, balance: {}", amount, holder, balance);
    emit!(DepositEvent { holder, amount, balance });

    Ok(())
}

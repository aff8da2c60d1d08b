use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::{Config, GlobalState};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitializeParams {
    pub default_rate: u16,
    pub min_rate: u16,
    pub max_rate: u16,
    pub penalty_rate: u16,
    pub penalty_days: u8,
    pub cycle: u64,
}

impl Default for InitializeParams {
    fn default() -> Self {
        Self {
            default_rate: DEFAULT_RATE_BPS,
            min_rate: MIN_RATE_BPS,
            max_rate: MAX_RATE_BPS,
            penalty_rate: DEFAULT_PENALTY_RATE_BPS,
            penalty_days: DEFAULT_PENALTY_DAYS,
            cycle: DEFAULT_CYCLE_SECS,
        }
    }
}

impl InitializeParams {
    /// Build and validate the protocol configuration
    pub fn into_config(self, admin: Pubkey) -> Result<Config> {
        let config = Config {
            admin,
            default_rate: self.default_rate,
            min_rate: self.min_rate,
            max_rate: self.max_rate,
            penalty_rate: self.penalty_rate,
            penalty_days: self.penalty_days,
            cycle: self.cycle,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = GlobalState::LEN,
        seeds = [STATE_SEED],
        bump
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        init,
        payer = admin,
        space = Config::LEN,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    let config = params.into_config(ctx.accounts.admin.key())?;

    msg!("Protocol initialized with admin: {}", config.admin);
    msg!("Default rate: {} bps, window: {}-{} bps, cycle: {}s",
        config.default_rate,
        config.min_rate,
        config.max_rate,
        config.cycle
    );

    ctx.accounts.config.set_inner(config);
    ctx.accounts.global_state.set_inner(GlobalState::default());

    Ok(())
}

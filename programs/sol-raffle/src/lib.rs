use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

declare_id!("Fb4fYjcDCM5QpqQaaxcDVdXV9k7kCUQVkMDssWaDJz4Y");

#[program]
pub mod sol_raffle {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, entrance_fee: u64, interval: i64) -> Result<()> {
        process_initialize(ctx, entrance_fee, interval)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        process_enter_raffle(ctx, amount)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        process_perform_upkeep(ctx)
    }

    pub fn select_winner(ctx: Context<SelectWinner>) -> Result<()> {
        process_select_winner(ctx)
    }
}

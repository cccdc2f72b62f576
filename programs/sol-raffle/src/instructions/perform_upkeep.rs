use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::RAFFLE_SEED;
use crate::error::ErrorCode;
use crate::events::RandomnessRequested;
use crate::state::Raffle;

/// Accounts required to start a draw for the current round.
///
/// Ensures:
/// 1. The conditions for a draw are currently met.
/// 2. The committed randomness account is valid and has not been revealed
///    previously.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The account paying transaction fees. Any caller may crank upkeep.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The raffle state account.
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Randomness account from Switchboard, committed for this draw.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// System program.
    pub system_program: Program<'info, System>,
}

pub fn process_perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;

    if !raffle.upkeep_needed(clock.unix_timestamp) {
        msg!("State: {:?}", raffle.state);
        msg!("Players: {}", raffle.player_count());
        msg!("Pot: {}", raffle.pot_amount);
        return Err(ErrorCode::UpkeepNotNeeded.into());
    }

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| ErrorCode::InvalidRandomnessData)?;

    if !Raffle::commitment_is_fresh(randomness_data.seed_slot, clock.slot) {
        msg!("Seed slot: {}", randomness_data.seed_slot);
        msg!("Current slot: {}", clock.slot);
        return Err(ErrorCode::RandomnessAlreadyRevealed.into());
    }

    raffle.commit_randomness(
        ctx.accounts.randomness_account_data.key(),
        clock.unix_timestamp,
    )?;

    emit!(RandomnessRequested {
        randomness_account: ctx.accounts.randomness_account_data.key(),
        round: raffle.round,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::RAFFLE_SEED;
use crate::events::RaffleEntered;
use crate::state::Raffle;

/// Accounts required to enter the current round.
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The player entering the raffle and paying the entrance fee.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The raffle state account holding the pot.
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// System program for the entry payment transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the caller into the current round.
///
/// Steps performed:
/// 1. Check that the raffle is open, the payment covers the entrance fee,
///    and the round has a free slot.
/// 2. Record the entry and add the payment to the pot.
/// 3. Transfer the payment from the player to the raffle account.
///
/// # Arguments
/// * `ctx` - Context containing EnterRaffle accounts
/// * `amount` - Entry payment in lamports, at least the entrance fee
pub fn process_enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let raffle = &mut ctx.accounts.raffle;

    raffle.try_enter(ctx.accounts.player.key(), amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: raffle.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(RaffleEntered {
        player: ctx.accounts.player.key(),
        round: raffle.round,
        amount,
        pot_amount: raffle.pot_amount,
    });

    Ok(())
}

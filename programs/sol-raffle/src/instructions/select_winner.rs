use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::RAFFLE_SEED;
use crate::error::ErrorCode;
use crate::events::WinnerPicked;
use crate::state::Raffle;

/// Accounts required to settle a pending draw.
///
/// Ensures:
/// 1. The randomness account provided matches the pending request.
/// 2. The revealed value selects the winner deterministically.
/// 3. Lamports are correctly transferred to the winner.
#[derive(Accounts)]
pub struct SelectWinner<'info> {
    /// Account paying for any transaction fees. Any caller may crank the
    /// settlement.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The raffle state account.
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// The randomness oracle account providing verifiable randomness.
    /// CHECK: The account's key and data are validated against the pending
    /// request within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// The account receiving the pot.
    /// CHECK: Validated in the handler against the player the revealed value
    /// selects.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    /// System program for lamports transfers.
    pub system_program: Program<'info, System>,
}

/// Settles a pending draw.
///
/// Steps:
/// 1. Verify the randomness account against the pending request.
/// 2. Read the revealed value and derive the winning index from it.
/// 3. Ensure the passed winner account is the selected player.
/// 4. Transfer the pot to the winner and reset the round.
///
/// # Arguments
/// * `ctx` - Context containing `SelectWinner` accounts
pub fn process_select_winner(ctx: Context<SelectWinner>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;

    raffle.verify_pending(ctx.accounts.randomness_account_data.key())?;

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| ErrorCode::InvalidRandomnessData)?;
    let revealed_random_value = randomness_data
        .get_value(&clock)
        .map_err(|_| ErrorCode::RandomnessNotResolved)?;

    // only the first 8 bytes of the 32-byte reveal are consumed
    let random_value = u64::from_le_bytes([
        revealed_random_value[0],
        revealed_random_value[1],
        revealed_random_value[2],
        revealed_random_value[3],
        revealed_random_value[4],
        revealed_random_value[5],
        revealed_random_value[6],
        revealed_random_value[7],
    ]);

    msg!("Randomness result: {}", random_value);
    msg!("Player count: {}", raffle.player_count());

    let winner_index = raffle.winner_index(random_value)?;
    let winning_player = raffle.player(winner_index)?;

    msg!("Winner: {}", winning_player);

    if ctx.accounts.winner.key() != winning_player {
        msg!("Expected winner account: {}", winning_player);
        return Err(ErrorCode::TransferFailed.into());
    }

    let payout = raffle.pot_amount;
    let round = raffle.round;

    **raffle.to_account_info().try_borrow_mut_lamports()? -= payout;
    **ctx.accounts.winner.try_borrow_mut_lamports()? += payout;

    raffle.settle(winning_player, clock.unix_timestamp);

    emit!(WinnerPicked {
        winner: winning_player,
        round,
        payout,
    });

    Ok(())
}

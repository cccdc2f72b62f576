use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::state::{Raffle, RaffleState};

/// Accounts required to initialize the raffle.
/// This sets up the singleton raffle account on-chain with its round
/// parameters.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The raffle state account that stores the round and pot information.
    #[account(
        init,
        payer = payer,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Initializes the raffle account with its entrance fee and draw interval,
/// opening the first round.
///
/// # Arguments
/// * `ctx` - Context holding the Initialize accounts
/// * `entrance_fee` - Minimum entry payment in lamports
/// * `interval` - Seconds between a settlement and the next possible draw
pub fn process_initialize(
    ctx: Context<Initialize>,
    entrance_fee: u64,
    interval: i64,
) -> Result<()> {
    Raffle::validate_config(entrance_fee, interval)?;

    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;
    raffle.bump = ctx.bumps.raffle;
    raffle.state = RaffleState::Open;
    raffle.round = 1;
    raffle.entrance_fee = entrance_fee;
    raffle.interval = interval;
    raffle.last_timestamp = clock.unix_timestamp;
    raffle.pot_amount = 0;
    raffle.recent_winner = None;
    raffle.pending_request = None;
    raffle.players = Vec::new();
    Ok(())
}

use anchor_lang::prelude::*;

use crate::constants::MAX_PLAYERS;
use crate::error::ErrorCode;

/// Lifecycle of a raffle round.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum RaffleState {
    /// Entries are accepted and no draw is pending.
    Open,
    /// A randomness request is outstanding; entries are rejected until the
    /// request is revealed and settled.
    Calculating,
}

/// The single outstanding randomness request, recorded when upkeep commits
/// a draw and cleared at settlement.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct PendingRequest {
    /// The Switchboard randomness account committed for this draw.
    /// Its key is the request identifier a reveal must match.
    pub randomness_account: Pubkey,

    /// The UNIX timestamp at which the request was committed.
    pub requested_at: i64,
}

#[account]
#[derive(InitSpace)]
pub struct Raffle {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The current lifecycle state of the raffle.
    pub state: RaffleState,

    /// The number of the round currently collecting entries, starting at 1.
    pub round: u64,

    /// The minimum payment (in lamports) required to enter.
    pub entrance_fee: u64,

    /// The number of seconds that must elapse since the last settlement
    /// before a draw may start.
    pub interval: i64,

    /// The UNIX timestamp of the last settlement, or of initialization
    /// while no round has settled yet.
    pub last_timestamp: i64,

    /// The total amount of SOL (in lamports) paid in by the current round's
    /// players. Tracked separately from the account balance, which also
    /// carries rent.
    pub pot_amount: u64,

    /// The winner of the most recently settled round.
    pub recent_winner: Option<Pubkey>,

    /// The outstanding randomness request, if a draw is pending.
    /// At most one exists at any time.
    pub pending_request: Option<PendingRequest>,

    /// The players of the current round, in entry order. A player entering
    /// more than once appears once per entry.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,
}

impl Raffle {
    /// Validates the deployment parameters supplied at initialization.
    pub fn validate_config(entrance_fee: u64, interval: i64) -> Result<()> {
        require!(entrance_fee > 0, ErrorCode::InvalidEntranceFee);
        require!(interval > 0, ErrorCode::InvalidInterval);
        Ok(())
    }

    /// Admits a player into the current round.
    pub fn try_enter(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(
            amount >= self.entrance_fee,
            ErrorCode::NotEnoughLamportsEntered
        );
        require!(self.state == RaffleState::Open, ErrorCode::RaffleNotOpen);
        require!(self.players.len() < MAX_PLAYERS, ErrorCode::RaffleFull);

        self.players.push(player);
        self.pot_amount = self
            .pot_amount
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Whether a draw should start: the raffle is open, the interval has
    /// elapsed since the last settlement, and the round has players and a
    /// funded pot. Off-chain cranks evaluate this against a fetched account;
    /// `commit_randomness` re-checks it on-chain.
    pub fn upkeep_needed(&self, now: i64) -> bool {
        let is_open = self.state == RaffleState::Open;
        let interval_elapsed = now.saturating_sub(self.last_timestamp) >= self.interval;
        let has_players = !self.players.is_empty();
        let has_pot = self.pot_amount > 0;
        is_open && interval_elapsed && has_players && has_pot
    }

    /// Whether a randomness commitment is acceptable: its seed slot must be
    /// the slot immediately preceding the current one.
    pub fn commitment_is_fresh(seed_slot: u64, current_slot: u64) -> bool {
        seed_slot == current_slot.saturating_sub(1)
    }

    /// Starts a draw: transitions to Calculating and records the committed
    /// randomness account as the one outstanding request.
    pub fn commit_randomness(&mut self, randomness_account: Pubkey, now: i64) -> Result<()> {
        require!(self.upkeep_needed(now), ErrorCode::UpkeepNotNeeded);
        self.state = RaffleState::Calculating;
        self.pending_request = Some(PendingRequest {
            randomness_account,
            requested_at: now,
        });
        Ok(())
    }

    /// Checks a reveal against the outstanding request. Rejects a reveal
    /// with no pending request, a mismatched account, or a request that was
    /// already settled.
    pub fn verify_pending(&self, randomness_account: Pubkey) -> Result<()> {
        match self.pending_request {
            Some(pending) if pending.randomness_account == randomness_account => Ok(()),
            _ => Err(ErrorCode::UnknownRandomnessRequest.into()),
        }
    }

    /// Maps a revealed random value onto the current players by plain modulo
    /// over the player count.
    pub fn winner_index(&self, random_value: u64) -> Result<usize> {
        require!(!self.players.is_empty(), ErrorCode::IndexOutOfRange);
        Ok((random_value % self.players.len() as u64) as usize)
    }

    pub fn player_count(&self) -> u64 {
        self.players.len() as u64
    }

    pub fn player(&self, index: usize) -> Result<Pubkey> {
        let player = self
            .players
            .get(index)
            .copied()
            .ok_or(ErrorCode::IndexOutOfRange)?;
        Ok(player)
    }

    /// Ends the round after the winner has been paid: clears the players and
    /// the pot, records the winner, drops the settled request, and reopens
    /// for the next round.
    pub fn settle(&mut self, winner: Pubkey, now: i64) {
        self.players.clear();
        self.pot_amount = 0;
        self.recent_winner = Some(winner);
        self.pending_request = None;
        self.state = RaffleState::Open;
        self.last_timestamp = now;
        self.round = self.round.saturating_add(1);
    }
}

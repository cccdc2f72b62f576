/// Seed for the singleton raffle PDA.
pub const RAFFLE_SEED: &[u8] = b"raffle";

/// Hard cap on entries per round. Account space is fixed at creation,
/// so the players vector is sized for this many slots.
pub const MAX_PLAYERS: usize = 200;

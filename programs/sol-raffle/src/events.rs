use anchor_lang::prelude::*;

#[event]
pub struct RaffleEntered {
    pub player: Pubkey,
    pub round: u64,
    pub amount: u64,
    pub pot_amount: u64,
}

#[event]
pub struct RandomnessRequested {
    pub randomness_account: Pubkey,
    pub round: u64,
}

#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    pub round: u64,
    pub payout: u64,
}

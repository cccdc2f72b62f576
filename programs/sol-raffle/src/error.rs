use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Payment does not cover the entrance fee")]
    NotEnoughLamportsEntered,
    #[msg("Raffle is not open")]
    RaffleNotOpen,
    #[msg("Upkeep is not needed")]
    UpkeepNotNeeded,
    #[msg("Randomness account does not match the pending request")]
    UnknownRandomnessRequest,
    #[msg("Payout could not be transferred to the selected winner")]
    TransferFailed,
    #[msg("Player index is out of range")]
    IndexOutOfRange,
    #[msg("Round is full")]
    RaffleFull,
    #[msg("Randomness data is invalid")]
    InvalidRandomnessData,
    #[msg("Randomness has already been revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness is not yet resolved")]
    RandomnessNotResolved,
    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,
    #[msg("Interval must be greater than zero")]
    InvalidInterval,
    #[msg("Math overflow")]
    MathOverflow,
}

use anchor_lang::prelude::*;

#[error_code]
pub enum SportsbetError {
    #[msg("Platform has already been initialized.")]
    AlreadyInitialized,
    #[msg("Platform has not been initialized.")]
    PlatformNotInitialized,
    #[msg("Only the platform authority can perform this action.")]
    Unauthorized,
    #[msg("Platform fee must be between 0 and 25 percent.")]
    InvalidPlatformFee,
    #[msg("A match with this id already exists.")]
    DuplicateMatch,
    #[msg("Match id exceeds maximum length of 32 bytes.")]
    MatchIdTooLong,
    #[msg("Team names must be non-empty, at most 32 bytes and distinct.")]
    InvalidMatchData,
    #[msg("Mint does not match the platform stake mint.")]
    InvalidMint,
    #[msg("Token account owner or mint does not match.")]
    InvalidTokenAccount,
    #[msg("Game has already started.")]
    GameAlreadyStarted,
    #[msg("Bet amount must be greater than zero.")]
    InvalidBetAmount,
    #[msg("Predicted winner is not a team in this match.")]
    InvalidPrediction,
    #[msg("Bettor has already placed a bet on this match.")]
    DuplicateBet,
    #[msg("Insufficient funds.")]
    InsufficientFunds,
    #[msg("Match has already been settled.")]
    MatchAlreadySettled,
    #[msg("Winner is not a team in this match.")]
    InvalidWinner,
    #[msg("Match has not been settled yet.")]
    MatchNotSettled,
    #[msg("Only winning bets can claim.")]
    NotWinner,
    #[msg("Bet has already been claimed.")]
    AlreadyClaimed,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}

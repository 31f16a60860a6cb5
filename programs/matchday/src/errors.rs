use anchor_lang::prelude::*;

#[error_code]
pub enum MatchdayError {
    #[msg("Marketplace is paused")]
    TournamentPaused,

    #[msg("Unauthorized: signer is not the tournament authority")]
    Unauthorized,

    #[msg("Invalid treasury account")]
    InvalidTreasury,

    #[msg("Team name cannot be empty")]
    TeamNameEmpty,

    #[msg("Team name exceeds maximum length")]
    TeamNameTooLong,

    #[msg("Stadium name exceeds maximum length")]
    StadiumNameTooLong,

    #[msg("Round label exceeds maximum length")]
    RoundLabelTooLong,

    #[msg("Flag URI exceeds maximum length")]
    UriTooLong,

    #[msg("String contains non-printable characters")]
    InvalidCharacters,

    #[msg("Kickoff must be in the future")]
    KickoffInPast,

    #[msg("Invalid fixture capacity")]
    InvalidCapacity,

    #[msg("Ticket price below minimum")]
    PriceTooLow,

    #[msg("Ticket price above maximum")]
    PriceTooHigh,

    #[msg("Fixture is sold out")]
    SoldOut,

    #[msg("Match has already been played")]
    MatchAlreadyPlayed,

    #[msg("Match has not kicked off yet")]
    MatchNotStarted,

    #[msg("Final score has already been recorded")]
    ResultAlreadyRecorded,

    #[msg("Seller does not own this ticket")]
    NotTicketOwner,

    #[msg("Resale window is closed (24h rule)")]
    ResaleWindowClosed,

    #[msg("Asking price exceeds 110% of face value")]
    PriceExceedsCeiling,

    #[msg("Asking price must be greater than zero")]
    InvalidAskingPrice,

    #[msg("Face value must be greater than zero")]
    InvalidFacePrice,

    #[msg("Buyers cannot purchase their own listing")]
    SelfPurchaseForbidden,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Operation locked due to reentrancy")]
    ReentrancyLocked,
}

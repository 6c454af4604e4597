use anchor_lang::prelude::*;

#[error_code]
pub enum WarsError {
    // ── Invalid input ──
    #[msg("Invalid house ID")]
    InvalidHouseId,
    #[msg("Invalid multiplier")]
    InvalidMultiplier,
    #[msg("Must total 10000 basis points")]
    InvalidDistributionTotal,
    #[msg("Too many prize tiers (max one per house)")]
    TooManyPrizeTiers,
    #[msg("Invalid season duration")]
    InvalidDuration,
    #[msg("Invalid lock duration")]
    InvalidLockDuration,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Invalid configuration parameters")]
    InvalidParams,

    // ── Illegal state transitions ──
    #[msg("Previous season not finalized")]
    PreviousSeasonNotFinalized,
    #[msg("Season not ended")]
    NotEnded,
    #[msg("Already finalized")]
    AlreadyFinalized,
    #[msg("Season finalized")]
    SeasonFinalized,
    #[msg("Season not finalized")]
    SeasonNotFinalized,
    #[msg("House already set")]
    HouseAlreadySet,
    #[msg("Stake is still locked")]
    StakeLocked,
    #[msg("Game master roster is full")]
    RosterFull,
    #[msg("Key already holds the game master role")]
    AlreadyGameMaster,
    #[msg("Key does not hold the game master role")]
    NotGameMaster,
    #[msg("No authority transfer pending")]
    NoPendingTransfer,
    #[msg("Timelock active")]
    TimelockActive,
    #[msg("Invalid authority")]
    InvalidAuthority,

    // ── Authorization ──
    #[msg("Caller lacks the required role")]
    Unauthorized,

    // ── Arithmetic ──
    #[msg("Math operation overflow")]
    MathOverflow,
}

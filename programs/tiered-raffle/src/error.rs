use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,

    // Configuration rejected at creation.
    #[msg("Pricing table must contain at least one option")]
    EmptyPricingTable,
    #[msg("Pricing table exceeds the maximum number of options")]
    TooManyPricingOptions,
    #[msg("Pricing option index is out of bounds or the option is malformed")]
    InvalidPricingOption,
    #[msg("Prize schedule must contain at least one tier")]
    EmptyPrizeSchedule,
    #[msg("Prize schedule exceeds the maximum number of tiers")]
    TooManyPrizeTiers,
    #[msg("Prize tiers must partition the winner ranks contiguously and in tier order")]
    InvalidPrizeTier,
    #[msg("Total winners exceeds the maximum allowed")]
    TooManyWinners,
    #[msg("Maximum entries per participant must be greater than zero")]
    InvalidParticipantCap,
    #[msg("Protocol fee cannot exceed 100%")]
    InvalidProtocolFee,
    #[msg("Too many currencies for the allow-list")]
    TooManyCurrencies,
    #[msg("Currency is not allowed")]
    CurrencyNotAllowed,
    #[msg("Cutoff time must be at least 1 hour in the future")]
    CutoffTooClose,
    #[msg("Raffle duration exceeds maximum allowed")]
    DurationTooLong,

    // Operation invalid for the current status.
    #[msg("Raffle is not open")]
    RaffleNotOpen,
    #[msg("Raffle entry period has ended")]
    RaffleEnded,
    #[msg("Raffle entry period has not ended yet")]
    RaffleNotEnded,
    #[msg("Raffle is not in Drawing state")]
    RaffleNotDrawing,
    #[msg("The raffle has not been drawn yet")]
    RaffleNotDrawn,
    #[msg("Raffle is not refundable")]
    RaffleNotRefundable,
    #[msg("Raffle status does not allow this operation")]
    WrongStatus,
    #[msg("Every prize tier must be deposited before entries are accepted")]
    PrizesNotDeposited,

    // Per-participant and pricing bounds.
    #[msg("Purchase would exceed the maximum entries per participant")]
    EntriesExceedParticipantCap,
    #[msg("Purchase would exceed the fixed minimum entries")]
    MaximumEntriesReached,
    #[msg("Not enough entries or participants to award every prize")]
    InsufficientEntriesForPrizes,
    #[msg("Raffle has reached the maximum number of participants")]
    TooManyParticipants,
    #[msg("Entry ledger has no room for another purchase block")]
    EntryLedgerFull,
    #[msg("Batch size must be greater than zero")]
    InvalidBatchSize,

    // Randomness binding.
    #[msg("A randomness request is already pending for this raffle")]
    RequestAlreadyPending,
    #[msg("The randomness for this raffle has already been consumed")]
    RandomnessAlreadyConsumed,
    #[msg("Unknown randomness request")]
    UnknownRequest,
    #[msg("Randomness request already fulfilled")]
    AlreadyFulfilled,
    #[msg("Randomness has not been fulfilled yet")]
    RandomnessNotReady,

    // Index and rank bounds.
    #[msg("Entry index is out of range")]
    IndexOutOfRange,
    #[msg("Winner rank is out of range")]
    RankOutOfRange,

    // Settlement.
    #[msg("Fees have already been claimed")]
    AlreadyClaimed,
    #[msg("Entries have already been refunded")]
    AlreadyRefunded,
    #[msg("Prize has already been claimed")]
    PrizeAlreadyClaimed,
    #[msg("Prize tier has already been deposited")]
    PrizeAlreadyDeposited,
    #[msg("Prize tier has not been deposited")]
    PrizeNotDeposited,
    #[msg("Payout exceeds the funds recorded for this raffle")]
    InsufficientFunds,
    #[msg("Participant owns no entries in this raffle")]
    NoEntriesOwned,

    // Accounts and authorities.
    #[msg("Only the program management authority can perform this action")]
    NotProgramManagementAuthority,
    #[msg("Only the raffle creator or management authority can perform this action")]
    NotRaffleAuthority,
    #[msg("Only the randomness authority can fulfill randomness")]
    NotRandomnessAuthority,
    #[msg("Fee recipient does not match the configured one")]
    InvalidFeeRecipient,
    #[msg("Only the winner can claim this prize")]
    NotWinner,
    #[msg("Participant stats belong to another participant")]
    OwnerMismatch,
    #[msg("Entry ledger or winner list does not belong to this raffle")]
    RaffleAccountMismatch,
    #[msg("Token account does not match the expected mint or owner")]
    InvalidTokenAccount,
    #[msg("Token accounts and token program are required for this currency")]
    MissingTokenAccounts,
}

use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{
        Config, CreateRaffleParams, CurrencyAllowList, EntryLedger, Raffle, Treasury, WinnerList,
        RAFFLE_ACCOUNT_SIZE, TREASURY_ACCOUNT_SIZE, TREASURY_SEED,
    },
};

/// Event emitted when a raffle is created
#[event]
pub struct RaffleCreated {
    /// The pubkey of the created raffle
    pub raffle: Pubkey,
    /// Sequential raffle id
    pub raffle_id: u64,
    /// Account that escrows the prizes and receives the revenue share
    pub creator: Pubkey,
    /// SPL mint of the raffle, `None` for native lamports
    pub currency: Option<Pubkey>,
    pub minimum_entries: u64,
    pub is_minimum_entries_fixed: bool,
    pub total_winners: u32,
    /// When the entry period ends
    pub cutoff_time: i64,
    /// When the raffle was created
    pub created_at: i64,
}

/// Instruction to create a new raffle with its pricing table and prize schedule
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `params` - Cutoff, minimum entries, per-participant cap, currency, prize tiers
///   and pricing options
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates caller is the program management authority via config PDA
/// 2. Validates the currency against the allow-list
/// 3. Validates the pricing table (1 to 5 options, every option grants entries)
/// 4. Validates the prize tiers partition the winner ranks contiguously
/// 5. Verifies the cutoff is at least 1 hour and at most 30 days ahead
///
/// # Account Validations
/// * Raffle - New PDA with seeds ["raffle", raffle_counter]
/// * Treasury - New PDA with seeds ["treasury", raffle_key]
/// * EntryLedger - Zeroed account of `ENTRY_LEDGER_ACCOUNT_SIZE` bytes owned by
///   this program, allocated by the client in the same transaction
/// * WinnerList - Zeroed account of `WINNER_LIST_ACCOUNT_SIZE` bytes, allocated
///   the same way
/// * Config - PDA storing the management authority and raffle counter
///
/// # Implementation Notes
/// - Nothing is written when validation fails
/// - The protocol fee is snapshotted from the config
/// - Prizes must be deposited by the creator before entries are accepted
pub fn create_raffle(ctx: Context<CreateRaffle>, params: CreateRaffleParams) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let raffle_id = ctx.accounts.config.raffle_counter;

    let mut raffle = Raffle::open(
        raffle_id,
        ctx.accounts.creator.key(),
        params,
        ctx.accounts.config.protocol_fee_bp,
        current_time,
        &*ctx.accounts.currencies,
        ctx.bumps.raffle,
        ctx.bumps.treasury,
    )?;
    raffle.entry_ledger = ctx.accounts.entry_ledger.key();
    raffle.winner_list = ctx.accounts.winner_list.key();
    let total_winners = raffle.total_winners();
    ctx.accounts.raffle.set_inner(raffle);

    let raffle_key = ctx.accounts.raffle.key();
    ctx.accounts.treasury.set_inner(Treasury {
        raffle: raffle_key,
        bump: ctx.bumps.treasury,
    });
    ctx.accounts.entry_ledger.load_init()?.raffle = raffle_key;
    ctx.accounts.winner_list.load_init()?.raffle = raffle_key;

    // Increment the raffle counter
    ctx.accounts.config.raffle_counter = raffle_id
        .checked_add(1)
        .ok_or(RaffleError::Overflow)?;

    let raffle = &ctx.accounts.raffle;
    emit!(RaffleCreated {
        raffle: raffle_key,
        raffle_id,
        creator: raffle.creator,
        currency: raffle.currency,
        minimum_entries: raffle.minimum_entries,
        is_minimum_entries_fixed: raffle.is_minimum_entries_fixed,
        total_winners,
        cutoff_time: raffle.cutoff_time,
        created_at: current_time,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateRaffle<'info> {
    #[account(
        init,
        payer = management_authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [
            b"raffle",
            config.raffle_counter.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    #[account(mut)]
    pub management_authority: Signer<'info>,

    /// Account that deposits the prizes and receives the creator share
    pub creator: SystemAccount<'info>,

    #[account(
        init,
        payer = management_authority,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(zero)]
    pub entry_ledger: AccountLoader<'info, EntryLedger>,

    #[account(zero)]
    pub winner_list: AccountLoader<'info, WinnerList>,

    /// The config account storing the authorities and the raffle counter
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = management_authority @ RaffleError::NotProgramManagementAuthority,
    )]
    pub config: Account<'info, Config>,

    #[account(seeds = [b"currencies"], bump = currencies.bump)]
    pub currencies: Account<'info, CurrencyAllowList>,

    pub system_program: Program<'info, System>,
}

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::RaffleError,
    payment::{collect_native, TokenRoute},
    state::{Config, EntryLedger, ParticipantStats, Raffle, Treasury, PARTICIPANT_SEED, TREASURY_SEED},
};

/// Event emitted when entries are purchased
#[event]
pub struct EntriesPurchased {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The participant's address
    pub participant: Pubkey,
    /// Number of entries granted by the selected pricing options
    pub entries: u64,
    /// Total amount paid in the raffle's currency
    pub amount: u64,
    /// First entry index of this purchase
    pub range_start: u64,
    /// One past the last entry index of this purchase
    pub range_end: u64,
}

/// Event emitted when a raffle asks the randomness provider for a word.
/// The provider answers with `fulfill_randomness` and the same request id.
#[event]
pub struct RandomnessRequested {
    pub raffle: Pubkey,
    pub raffle_id: u64,
    pub request_id: u64,
}

/// Instruction to purchase entries through one or more pricing options
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `pricing_option_indices` - Indices into the raffle's pricing table; an index may
///   repeat to buy the same bundle more than once
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates the raffle is Open, before its cutoff, with every prize escrowed
/// 2. Validates every index against the pricing table
/// 3. Enforces the per-participant entry cap
/// 4. Enforces the fixed minimum as a hard cap when configured
/// 5. Verifies SPL token accounts match the raffle currency and treasury
///
/// # Account Validations
/// * Raffle - Must be accepting entries
/// * ParticipantStats - PDA with seeds ["participant", raffle_key, signer_key]
/// * EntryLedger - The raffle's ledger, gains at most one participant and one block
/// * Treasury - Receives native payments, authority of the revenue vault
///
/// # Implementation Notes
/// - Uses checked arithmetic operations to prevent overflow
/// - Once the minimum is reached and every prize can be awarded, the raffle stops
///   taking entries and requests randomness in the same instruction
pub fn enter_raffle(ctx: Context<EnterRaffle>, pricing_option_indices: Vec<u8>) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();
    let participant = ctx.accounts.participant.key();

    let purchase = ctx.accounts.raffle.buy_entries(
        &mut *ctx.accounts.entry_ledger.load_mut()?,
        &mut ctx.accounts.participant_stats,
        &mut ctx.accounts.config,
        &pricing_option_indices,
        current_time,
    )?;

    match ctx.accounts.raffle.currency {
        None => collect_native(
            &ctx.accounts.participant,
            &ctx.accounts.treasury,
            &ctx.accounts.system_program,
            purchase.amount,
        )?,
        Some(mint) => TokenRoute::resolve(
            &ctx.accounts.participant_token_account,
            &ctx.accounts.revenue_vault,
            &ctx.accounts.token_program,
            &mint,
            &participant,
            &ctx.accounts.treasury.key(),
        )?
        .collect(&ctx.accounts.participant, purchase.amount)?,
    }

    emit!(EntriesPurchased {
        raffle: raffle_key,
        participant,
        entries: purchase.entries,
        amount: purchase.amount,
        range_start: purchase.range_start,
        range_end: purchase.range_end,
    });

    if let Some(request_id) = purchase.request_id {
        emit!(RandomnessRequested {
            raffle: raffle_key,
            raffle_id: ctx.accounts.raffle.id,
            request_id,
        });
    }

    Ok(())
}

/// Accounts required for the enter_raffle instruction
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// Issues the randomness request id when the purchase triggers drawing
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        has_one = entry_ledger @ RaffleError::RaffleAccountMismatch,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// Participant's stats account
    /// PDA with seeds ["participant", raffle_key, signer_key]
    #[account(
        mut,
        seeds = [
            PARTICIPANT_SEED,
            raffle.key().as_ref(),
            participant.key().as_ref(),
        ],
        bump = participant_stats.bump,
    )]
    pub participant_stats: Account<'info, ParticipantStats>,

    #[account(mut)]
    pub entry_ledger: AccountLoader<'info, EntryLedger>,

    /// Treasury account that receives native payments
    /// PDA with seeds ["treasury", raffle_key]
    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// The account purchasing entries
    #[account(mut)]
    pub participant: Signer<'info>,

    /// Source of the payment when the raffle is priced in an SPL token
    #[account(mut)]
    pub participant_token_account: Option<Account<'info, TokenAccount>>,

    /// Treasury-owned vault receiving SPL token payments
    #[account(mut)]
    pub revenue_vault: Option<Account<'info, TokenAccount>>,

    pub token_program: Option<Program<'info, Token>>,

    pub system_program: Program<'info, System>,
}

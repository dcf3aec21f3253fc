use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::RaffleError,
    payment::{pay_native, TokenRoute},
    state::{ParticipantStats, Raffle, Treasury, PARTICIPANT_SEED, TREASURY_SEED},
};

/// Event emitted when a participant is refunded
#[event]
pub struct EntryRefunded {
    pub raffle: Pubkey,
    pub participant: Pubkey,
    /// Everything the participant paid into the raffle
    pub amount: u64,
}

/// Instruction to reclaim payments from a raffle that will not be drawn
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates the raffle is in Refundable state
/// 2. Ensures signer is the owner of the participant stats
/// 3. Confirms the participant bought entries and was not refunded yet
///
/// # Account Validations
/// * Raffle - Must be in Refundable state
/// * Signer - Must match the owner of the participant stats
/// * ParticipantStats - PDA storing purchase totals, marked refunded
/// * Treasury - Must match raffle's treasury and use proper PDA seeds
///
/// # Implementation Notes
/// - Refunds the full amount paid across every purchase
/// - Native funds transfer directly out of the treasury PDA
pub fn refund(ctx: Context<Refund>) -> Result<()> {
    let participant = ctx.accounts.participant.key();
    let amount = ctx
        .accounts
        .raffle
        .refund(&mut ctx.accounts.participant_stats)?;

    match ctx.accounts.raffle.currency {
        None => pay_native(
            &ctx.accounts.treasury,
            &ctx.accounts.participant.to_account_info(),
            amount,
        )?,
        Some(mint) => TokenRoute::resolve(
            &ctx.accounts.participant_token_account,
            &ctx.accounts.revenue_vault,
            &ctx.accounts.token_program,
            &mint,
            &participant,
            &ctx.accounts.treasury.key(),
        )?
        .pay(&ctx.accounts.treasury, amount)?,
    }

    emit!(EntryRefunded {
        raffle: ctx.accounts.raffle.key(),
        participant,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Refund<'info> {
    /// The participant reclaiming their payments
    #[account(mut)]
    pub participant: Signer<'info>,

    /// Stats PDA for this participant in this raffle
    #[account(
        mut,
        seeds = [
            PARTICIPANT_SEED,
            raffle.key().as_ref(),
            participant.key().as_ref(),
        ],
        bump = participant_stats.bump,
        constraint = participant_stats.participant == participant.key() @ RaffleError::OwnerMismatch,
    )]
    pub participant_stats: Account<'info, ParticipantStats>,

    /// The raffle account that must be in Refundable state
    #[account(mut)]
    pub raffle: Box<Account<'info, Raffle>>,

    /// Treasury PDA for this raffle that holds the funds
    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub participant_token_account: Option<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub revenue_vault: Option<Account<'info, TokenAccount>>,

    pub token_program: Option<Program<'info, Token>>,
}

use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{ParticipantStats, Raffle, RaffleStatus, PARTICIPANT_SEED, PARTICIPANT_STATS_ACCOUNT_SIZE},
};

/// Initializes the stats account of a participant in a specific raffle.
/// The account is PDA-derived using ["participant", raffle_pubkey, user_pubkey].
///
/// # Account Structure
/// - `signer` (Signer): The participant who will own the stats account
/// - `participant_stats` (PDA): Running totals of the participant's purchases
/// - `raffle` (Account): The raffle the stats belong to, must be Open
/// - `system_program`: Required for account creation
///
/// # Access Control
/// - Anyone can initialize their own stats account
/// - One stats account per participant per raffle
pub fn init_participant_stats(ctx: Context<InitParticipantStats>) -> Result<()> {
    require!(
        ctx.accounts.raffle.status == RaffleStatus::Open,
        RaffleError::RaffleNotOpen
    );

    ctx.accounts.participant_stats.set_inner(ParticipantStats::new(
        ctx.accounts.raffle.key(),
        ctx.accounts.signer.key(),
        ctx.bumps.participant_stats,
    ));

    Ok(())
}

#[derive(Accounts)]
pub struct InitParticipantStats<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = PARTICIPANT_STATS_ACCOUNT_SIZE,
        seeds = [
            PARTICIPANT_SEED,
            raffle.key().as_ref(),
            signer.key().as_ref(),
        ],
        bump,
    )]
    pub participant_stats: Account<'info, ParticipantStats>,

    pub raffle: Box<Account<'info, Raffle>>,
    pub system_program: Program<'info, System>,
}

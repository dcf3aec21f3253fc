use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    instructions::enter_raffle::RandomnessRequested,
    state::{Config, EntryLedger, Raffle, RaffleStatus},
};

/// Event emitted when the entry period of a raffle ends
#[event]
pub struct RaffleClosed {
    pub raffle: Pubkey,
    /// `Drawing` when the raffle goes on to draw, `Refundable` otherwise
    pub status: RaffleStatus,
    pub total_entries: u64,
    pub participant_count: u32,
}

/// Ends the entry period of a raffle once its cutoff has passed.
///
/// The raffle moves to Drawing and requests randomness when it met its minimum, or
/// when the minimum is not fixed and its entries and participants still cover every
/// prize. Otherwise it becomes Refundable and participants can reclaim their payments.
///
/// Anyone can call this instruction.
///
/// # Errors
/// - `RaffleNotOpen` if the raffle already left the Open state
/// - `RaffleNotEnded` if the cutoff time hasn't been reached
pub fn close_raffle(ctx: Context<CloseRaffle>) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();
    let participant_count = ctx.accounts.entry_ledger.load()?.participant_count();

    let raffle = &mut ctx.accounts.raffle;
    let request = raffle.end_entry_period(&mut ctx.accounts.config, current_time, participant_count)?;

    emit!(RaffleClosed {
        raffle: raffle_key,
        status: raffle.status,
        total_entries: raffle.total_entries,
        participant_count: participant_count as u32,
    });
    if let Some(request_id) = request {
        emit!(RandomnessRequested {
            raffle: raffle_key,
            raffle_id: raffle.id,
            request_id,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct CloseRaffle<'info> {
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

    pub entry_ledger: AccountLoader<'info, EntryLedger>,

    pub signer: Signer<'info>,
}

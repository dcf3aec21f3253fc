use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    selection,
    state::{EntryLedger, Raffle, RaffleStatus, WinnerList},
};

/// Event emitted after every winner selection batch
#[event]
pub struct WinnersSelected {
    pub raffle: Pubkey,
    /// Ranks resolved by this call
    pub resolved: u32,
    /// Next rank to resolve
    pub current_position: u32,
    pub total_winners: u32,
}

/// Event emitted once the last winner rank is resolved
#[event]
pub struct RaffleDrawn {
    pub raffle: Pubkey,
    pub total_winners: u32,
}

/// Resolves the next batch of winner ranks from the fulfilled random word.
///
/// Each call resolves at most `max_batch` ranks (capped at 200), so a large prize
/// schedule is drawn over several transactions. The ledger and the winner list are
/// read in place, so the cost of a call grows with the batch, not with the number
/// of participants. The result does not depend on how ranks are split into batches.
///
/// Anyone can call this instruction. Once every rank is resolved the raffle
/// becomes Drawn and further calls do nothing.
pub fn select_winners(ctx: Context<SelectWinners>, max_batch: u32) -> Result<()> {
    let raffle_key = ctx.accounts.raffle.key();
    let raffle = &mut ctx.accounts.raffle;
    let entry_ledger = ctx.accounts.entry_ledger.load()?;
    let mut winner_list = ctx.accounts.winner_list.load_mut()?;

    let resolved = selection::select_winners(raffle, &entry_ledger, &mut winner_list, max_batch)?;
    if resolved == 0 {
        return Ok(());
    }

    let total_winners = raffle.total_winners();
    emit!(WinnersSelected {
        raffle: raffle_key,
        resolved,
        current_position: winner_list.current_position,
        total_winners,
    });
    if raffle.status == RaffleStatus::Drawn {
        emit!(RaffleDrawn {
            raffle: raffle_key,
            total_winners,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct SelectWinners<'info> {
    #[account(
        mut,
        has_one = entry_ledger @ RaffleError::RaffleAccountMismatch,
        has_one = winner_list @ RaffleError::RaffleAccountMismatch,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    pub entry_ledger: AccountLoader<'info, EntryLedger>,

    #[account(mut)]
    pub winner_list: AccountLoader<'info, WinnerList>,

    pub signer: Signer<'info>,
}

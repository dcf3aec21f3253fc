use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{EntryLedger, ParticipantStats, Raffle, RaffleStatus, Winner, WinnerList},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleSummary {
    pub status: RaffleStatus,
    pub total_entries: u64,
    pub amount_collected: u64,
    pub participant_count: u32,
    pub total_winners: u32,
    /// Next winner rank to resolve
    pub current_position: u32,
    pub latest_request_id: Option<u64>,
    pub randomness_fulfilled: bool,
    /// Revenue not yet paid out as fees or refunds
    pub outstanding_revenue: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ParticipantSummary {
    pub amount_paid: u64,
    pub entries_count: u64,
    pub refunded: bool,
}

/// Most winners returned by one `get_winners` call, bounded by the return data size.
pub const MAX_WINNERS_PER_VIEW: u32 = 20;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct WinnerSummary {
    pub rank: u32,
    pub participant: Pubkey,
    pub entry_index: u64,
    pub prize_index: u8,
    pub claimed: bool,
}

impl WinnerSummary {
    fn new(rank: u32, winner: &Winner) -> Self {
        Self {
            rank,
            participant: winner.participant,
            entry_index: winner.entry_index,
            prize_index: winner.prize_index,
            claimed: winner.is_claimed(),
        }
    }
}

pub fn get_raffle_summary(ctx: Context<GetRaffleSummary>) -> Result<RaffleSummary> {
    let raffle = &ctx.accounts.raffle;
    Ok(RaffleSummary {
        status: raffle.status,
        total_entries: raffle.total_entries,
        amount_collected: raffle.amount_collected,
        participant_count: ctx.accounts.entry_ledger.load()?.participant_count() as u32,
        total_winners: raffle.total_winners(),
        current_position: ctx.accounts.winner_list.load()?.current_position,
        latest_request_id: raffle.latest_request_id(),
        randomness_fulfilled: raffle.random_word().is_ok(),
        outstanding_revenue: raffle.outstanding_revenue()?,
    })
}

pub fn get_participant_stats(ctx: Context<GetParticipantStats>) -> Result<ParticipantSummary> {
    let stats = &ctx.accounts.participant_stats;
    Ok(ParticipantSummary {
        amount_paid: stats.amount_paid,
        entries_count: stats.entries_count,
        refunded: stats.refunded,
    })
}

/// Resolved winners from rank `start`, at most `MAX_WINNERS_PER_VIEW` of them.
pub fn get_winners(ctx: Context<GetWinners>, start: u32, limit: u32) -> Result<Vec<WinnerSummary>> {
    let winner_list = ctx.accounts.winner_list.load()?;
    Ok(winner_list
        .resolved()
        .iter()
        .zip(0u32..)
        .skip(start as usize)
        .take(limit.min(MAX_WINNERS_PER_VIEW) as usize)
        .map(|(winner, rank)| WinnerSummary::new(rank, winner))
        .collect())
}

#[derive(Accounts)]
pub struct GetRaffleSummary<'info> {
    #[account(
        has_one = entry_ledger @ RaffleError::RaffleAccountMismatch,
        has_one = winner_list @ RaffleError::RaffleAccountMismatch,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    pub entry_ledger: AccountLoader<'info, EntryLedger>,

    pub winner_list: AccountLoader<'info, WinnerList>,
}

#[derive(Accounts)]
pub struct GetParticipantStats<'info> {
    #[account(has_one = raffle)]
    pub participant_stats: Account<'info, ParticipantStats>,

    pub raffle: Box<Account<'info, Raffle>>,
}

#[derive(Accounts)]
pub struct GetWinners<'info> {
    #[account(has_one = winner_list @ RaffleError::RaffleAccountMismatch)]
    pub raffle: Box<Account<'info, Raffle>>,

    pub winner_list: AccountLoader<'info, WinnerList>,
}

use anchor_lang::{prelude::*, solana_program::hash::hashv};
use arrayref::array_ref;

use crate::{
    error::RaffleError,
    state::{EntryLedger, Raffle, RaffleStatus, Winner, WinnerList},
};

/// Salted re-derivations tried before falling back to a linear scan of the ledger.
pub const MAX_REDRAW_ATTEMPTS: u32 = 16;

/// Maps `sha256(word || rank || attempt)` onto `[0, total_entries)`.
///
/// The digest is read as a big-endian 256-bit integer and reduced modulo
/// `total_entries`. The modulo bias is below 2^-190 for any u64 range.
pub fn candidate_index(word: &[u8; 32], rank: u32, attempt: u32, total_entries: u64) -> u64 {
    let digest = hashv(&[word.as_ref(), &rank.to_le_bytes(), &attempt.to_le_bytes()]).to_bytes();
    let high = u128::from_be_bytes(*array_ref![digest, 0, 16]);
    let low = u128::from_be_bytes(*array_ref![digest, 16, 16]);

    let n = total_entries as u128;
    // 2^128 mod n
    let radix = (u128::MAX % n + 1) % n;
    // both factors are below n <= 2^64, so the product fits
    let reduced = ((high % n) * radix % n + low % n) % n;
    reduced as u64
}

/// Picks the entry for `rank`, skipping participants that already won.
fn draw_rank(
    word: &[u8; 32],
    rank: u32,
    ledger: &EntryLedger,
    winners: &WinnerList,
) -> Result<(u32, u64)> {
    let total_entries = ledger.total_entries();
    for attempt in 0..MAX_REDRAW_ATTEMPTS {
        let index = candidate_index(word, rank, attempt, total_entries);
        let (slot, _) = ledger.lookup_owner(index)?;
        if !winners.has_won(slot) {
            return Ok((slot, index));
        }
    }

    let index = candidate_index(word, rank, MAX_REDRAW_ATTEMPTS, total_entries);
    let origin = ledger.block_position(index)?;
    let blocks = ledger.blocks();
    (0..blocks.len())
        .map(|offset| (origin + offset) % blocks.len())
        .find(|&k| !winners.has_won(blocks[k].participant))
        .map(|k| (blocks[k].participant, ledger.block_start(k)))
        .ok_or_else(|| error!(RaffleError::InsufficientEntriesForPrizes))
}

/// Resolves up to `max_batch` further winner ranks and returns how many were
/// recorded. The raffle becomes `Drawn` with the batch that resolves the last rank.
///
/// Every rank depends only on the random word, the rank itself and the winners
/// already recorded, so any split into batches yields the same list.
pub fn select_winners(
    raffle: &mut Raffle,
    ledger: &EntryLedger,
    winners: &mut WinnerList,
    max_batch: u32,
) -> Result<u32> {
    let total_winners = raffle.total_winners();
    if winners.is_complete(total_winners)
        && matches!(raffle.status, RaffleStatus::Drawn | RaffleStatus::Complete)
    {
        return Ok(0);
    }

    require!(max_batch > 0, RaffleError::InvalidBatchSize);
    require!(raffle.status == RaffleStatus::Drawing, RaffleError::RaffleNotDrawing);
    let word = raffle.random_word()?;

    let participant_count = ledger.participant_count();
    require!(
        raffle.can_award_prizes(participant_count),
        RaffleError::InsufficientEntriesForPrizes
    );

    let batch = winners.next_batch_len(max_batch, total_winners);
    for _ in 0..batch {
        let rank = winners.current_position;
        let (prize_index, _) = raffle.tier_for_rank(rank)?;
        let (slot, entry_index) = draw_rank(&word, rank, ledger, winners)?;
        winners.push(
            slot,
            Winner::new(ledger.participants[slot as usize], entry_index, prize_index),
        )?;
    }

    if winners.is_complete(total_winners) {
        raffle.status = RaffleStatus::Drawn;
        msg!("Raffle {} drawn, {} winners", raffle.id, total_winners);
    }
    Ok(batch)
}

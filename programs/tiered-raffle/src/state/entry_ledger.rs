use std::ops::Range;

use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{ParticipantStats, Raffle, RaffleStatus},
};

/// Upper bound on distinct participants per raffle.
pub const MAX_PARTICIPANTS: usize = 4_096;

/// Upper bound on purchase blocks per raffle. Consecutive purchases by the same
/// participant share a block.
pub const MAX_ENTRY_BLOCKS: usize = 8_192;

// 8 discriminator + 32 raffle + 4 participant_count + 4 block_count
//   + 32 * 4096 participants + 16 * 8192 blocks = 262_192
pub const ENTRY_LEDGER_ACCOUNT_SIZE: usize = 8 + std::mem::size_of::<EntryLedger>();

/// A run of consecutive entry indices owned by one participant. The block starts
/// where the previous one ends.
#[zero_copy]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EntryBlock {
    pub range_end: u64,
    pub participant: u32,
    pub _padding: [u8; 4],
}

/// Append-only map from entry index to owner. Blocks are disjoint, kept in purchase
/// order, and together cover `[0, total_entries)`.
///
/// Too large for a CPI `init`: the client allocates it with
/// `ENTRY_LEDGER_ACCOUNT_SIZE` bytes owned by this program and `create_raffle`
/// claims it.
#[account(zero_copy)]
pub struct EntryLedger {
    pub raffle: Pubkey,
    pub participant_count: u32,
    pub block_count: u32,
    /// Distinct participants in first-purchase order.
    pub participants: [Pubkey; MAX_PARTICIPANTS],
    pub blocks: [EntryBlock; MAX_ENTRY_BLOCKS],
}

impl Default for EntryLedger {
    #[inline]
    fn default() -> EntryLedger {
        EntryLedger {
            raffle: Pubkey::default(),
            participant_count: 0,
            block_count: 0,
            participants: [Pubkey::default(); MAX_PARTICIPANTS],
            blocks: [EntryBlock::default(); MAX_ENTRY_BLOCKS],
        }
    }
}

impl EntryLedger {
    pub fn participant_count(&self) -> usize {
        self.participant_count as usize
    }

    pub fn participants(&self) -> &[Pubkey] {
        &self.participants[..self.participant_count as usize]
    }

    pub fn blocks(&self) -> &[EntryBlock] {
        &self.blocks[..self.block_count as usize]
    }

    pub fn total_entries(&self) -> u64 {
        self.blocks().last().map_or(0, |block| block.range_end)
    }

    /// First entry index of block `k`.
    pub fn block_start(&self, k: usize) -> u64 {
        match k {
            0 => 0,
            _ => self.blocks[k - 1].range_end,
        }
    }

    /// Records `entries` bought for `amount` and returns the new end of the ledger.
    pub fn record_purchase(
        &mut self,
        raffle: &mut Raffle,
        stats: &mut ParticipantStats,
        entries: u64,
        amount: u64,
    ) -> Result<u64> {
        require!(raffle.status == RaffleStatus::Open, RaffleError::RaffleNotOpen);
        require!(raffle.all_prizes_deposited(), RaffleError::PrizesNotDeposited);
        require!(entries > 0, RaffleError::InvalidPricingOption);

        let entries_count = stats
            .entries_count
            .checked_add(entries)
            .ok_or(RaffleError::Overflow)?;
        require!(
            entries_count <= raffle.maximum_entries_per_participant,
            RaffleError::EntriesExceedParticipantCap
        );

        let range_end = raffle
            .total_entries
            .checked_add(entries)
            .ok_or(RaffleError::Overflow)?;
        if raffle.is_minimum_entries_fixed {
            require!(
                range_end <= raffle.minimum_entries,
                RaffleError::MaximumEntriesReached
            );
        }

        let amount_collected = raffle
            .amount_collected
            .checked_add(amount)
            .ok_or(RaffleError::Overflow)?;
        let amount_paid = stats
            .amount_paid
            .checked_add(amount)
            .ok_or(RaffleError::Overflow)?;

        let extends_last = stats.ledger_index.is_some()
            && self.blocks().last().map(|block| block.participant) == stats.ledger_index;
        if stats.ledger_index.is_none() {
            require!(
                self.participant_count() < MAX_PARTICIPANTS,
                RaffleError::TooManyParticipants
            );
        }
        if !extends_last {
            require!(
                (self.block_count as usize) < MAX_ENTRY_BLOCKS,
                RaffleError::EntryLedgerFull
            );
        }

        let slot = match stats.ledger_index {
            Some(slot) => slot,
            None => {
                let slot = self.participant_count;
                self.participants[slot as usize] = stats.participant;
                self.participant_count += 1;
                stats.ledger_index = Some(slot);
                slot
            }
        };

        if extends_last {
            self.blocks[self.block_count as usize - 1].range_end = range_end;
        } else {
            self.blocks[self.block_count as usize] = EntryBlock {
                range_end,
                participant: slot,
                _padding: [0; 4],
            };
            self.block_count += 1;
        }

        raffle.total_entries = range_end;
        raffle.amount_collected = amount_collected;
        stats.entries_count = entries_count;
        stats.amount_paid = amount_paid;

        Ok(range_end)
    }

    /// Position of the block holding `index`.
    pub fn block_position(&self, index: u64) -> Result<usize> {
        require!(index < self.total_entries(), RaffleError::IndexOutOfRange);
        Ok(self.blocks().partition_point(|block| block.range_end <= index))
    }

    /// Participant slot and key owning entry `index`.
    pub fn lookup_owner(&self, index: u64) -> Result<(u32, Pubkey)> {
        let slot = self.blocks[self.block_position(index)?].participant;
        Ok((slot, self.participants[slot as usize]))
    }

    /// Every `[start, end)` range owned by the participant at `slot`, in ledger order.
    pub fn ranges_of(&self, slot: u32) -> impl Iterator<Item = Range<u64>> + '_ {
        self.blocks()
            .iter()
            .enumerate()
            .filter(move |(_, block)| block.participant == slot)
            .map(|(k, block)| self.block_start(k)..block.range_end)
    }
}

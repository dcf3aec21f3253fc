use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{MAX_PARTICIPANTS, MAX_TOTAL_WINNERS},
};

/// Most ranks resolved by one `select_winners` call.
pub const MAX_WINNERS_PER_BATCH: u32 = 200;

/// One bit per entry ledger participant.
pub const WON_BITMAP_LEN: usize = MAX_PARTICIPANTS / 8;

// 8 discriminator + 32 raffle + 4 current_position + 4 padding + 512 bitmap
//   + 48 * 4000 winners = 192_560
pub const WINNER_LIST_ACCOUNT_SIZE: usize = 8 + std::mem::size_of::<WinnerList>();

#[zero_copy]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Winner {
    pub participant: Pubkey,
    pub entry_index: u64,
    pub prize_index: u8,
    pub claimed: u8,
    pub _padding: [u8; 6],
}

impl Winner {
    pub fn new(participant: Pubkey, entry_index: u64, prize_index: u8) -> Self {
        Self {
            participant,
            entry_index,
            prize_index,
            claimed: 0,
            _padding: [0; 6],
        }
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed != 0
    }
}

/// Winners in rank order. `winners[r]` holds rank `r` for every `r` below
/// `current_position`. Allocated by the client like the entry ledger.
#[account(zero_copy)]
pub struct WinnerList {
    pub raffle: Pubkey,
    /// Next rank to resolve.
    pub current_position: u32,
    pub _padding: [u8; 4],
    /// Bit `i` is set once ledger participant `i` has won.
    pub won: [u8; WON_BITMAP_LEN],
    pub winners: [Winner; MAX_TOTAL_WINNERS as usize],
}

impl Default for WinnerList {
    #[inline]
    fn default() -> WinnerList {
        WinnerList {
            raffle: Pubkey::default(),
            current_position: 0,
            _padding: [0; 4],
            won: [0; WON_BITMAP_LEN],
            winners: [Winner::default(); MAX_TOTAL_WINNERS as usize],
        }
    }
}

impl WinnerList {
    /// Ranks the next call may append, bounded by the request, the per-batch cap
    /// and the ranks left.
    pub fn next_batch_len(&self, max_batch: u32, total_winners: u32) -> u32 {
        let remaining = total_winners.saturating_sub(self.current_position);
        max_batch.min(MAX_WINNERS_PER_BATCH).min(remaining)
    }

    pub fn has_won(&self, slot: u32) -> bool {
        self.won
            .get(slot as usize / 8)
            .is_some_and(|byte| byte & (1 << (slot % 8)) != 0)
    }

    /// Appends `winner` at the next rank and marks ledger slot `slot` as won.
    pub fn push(&mut self, slot: u32, winner: Winner) -> Result<()> {
        let rank = self.current_position as usize;
        *self.winners.get_mut(rank).ok_or(RaffleError::TooManyWinners)? = winner;
        if let Some(byte) = self.won.get_mut(slot as usize / 8) {
            *byte |= 1 << (slot % 8);
        }
        self.current_position += 1;
        Ok(())
    }

    pub fn is_complete(&self, total_winners: u32) -> bool {
        self.current_position >= total_winners
    }

    /// Resolved winners in rank order.
    pub fn resolved(&self) -> &[Winner] {
        &self.winners[..self.current_position as usize]
    }

    pub fn participants(&self) -> impl Iterator<Item = &Pubkey> + '_ {
        self.resolved().iter().map(|winner| &winner.participant)
    }

    /// Marks rank `rank` as claimed by `claimant` and returns the winner record.
    pub fn claim(&mut self, rank: u32, claimant: &Pubkey) -> Result<Winner> {
        require!(rank < self.current_position, RaffleError::RankOutOfRange);
        let winner = &mut self.winners[rank as usize];
        require_keys_eq!(winner.participant, *claimant, RaffleError::NotWinner);
        require!(!winner.is_claimed(), RaffleError::PrizeAlreadyClaimed);

        winner.claimed = 1;
        Ok(*winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_raffle_error;

    #[test]
    fn account_layout_fits_its_allocation() {
        assert_eq!(std::mem::size_of::<Winner>(), 48);
        assert_eq!(WINNER_LIST_ACCOUNT_SIZE, 192_560);
        assert_eq!(WON_BITMAP_LEN * 8, MAX_PARTICIPANTS);
    }

    #[test]
    fn bitmap_tracks_winning_slots() {
        let mut list = Box::<WinnerList>::default();

        list.push(9, Winner::new(Pubkey::new_unique(), 40, 0)).unwrap();
        list.push(16, Winner::new(Pubkey::new_unique(), 2, 0)).unwrap();
        assert!(list.has_won(9));
        assert!(list.has_won(16));
        assert!(!list.has_won(8));
        assert!(!list.has_won(MAX_PARTICIPANTS as u32 + 400));
        assert_eq!(list.current_position, 2);
        assert_eq!(list.participants().count(), 2);
    }

    #[test]
    fn batch_len_respects_every_bound() {
        let mut list = Box::<WinnerList>::default();
        assert_eq!(list.next_batch_len(500, 2403), MAX_WINNERS_PER_BATCH);
        assert_eq!(list.next_batch_len(7, 2403), 7);
        assert_eq!(list.next_batch_len(500, 3), 3);

        list.current_position = 2303;
        assert_eq!(list.next_batch_len(u32::MAX, 2403), 100);
        list.current_position = 2403;
        assert_eq!(list.next_batch_len(200, 2403), 0);
    }

    #[test]
    fn full_list_rejects_another_rank() {
        let mut list = Box::<WinnerList>::default();
        list.current_position = MAX_TOTAL_WINNERS;
        assert_raffle_error(
            list.push(0, Winner::new(Pubkey::new_unique(), 0, 0)),
            RaffleError::TooManyWinners,
        );
        assert!(!list.has_won(0));
        assert_eq!(list.current_position, MAX_TOTAL_WINNERS);
    }

    #[test]
    fn only_the_winner_claims_once() {
        let alice = Pubkey::new_unique();
        let mut list = Box::<WinnerList>::default();
        list.push(0, Winner::new(alice, 12, 0)).unwrap();

        assert_raffle_error(list.claim(0, &Pubkey::new_unique()), RaffleError::NotWinner);
        assert_raffle_error(list.claim(1, &alice), RaffleError::RankOutOfRange);

        let claimed = list.claim(0, &alice).unwrap();
        assert_eq!(claimed.entry_index, 12);
        assert!(claimed.is_claimed());
        assert_raffle_error(list.claim(0, &alice), RaffleError::PrizeAlreadyClaimed);
    }
}

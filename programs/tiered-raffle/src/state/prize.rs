use anchor_lang::prelude::*;

use crate::error::RaffleError;

pub const MAX_PRIZE_TIERS: usize = 20;
pub const MAX_TOTAL_WINNERS: u32 = 4_000;

// 4 winner_count + 4 rank_range_end + 1 kind + 1 tier + 32 mint + 8 amount
pub const PRIZE_TIER_SIZE: usize = 4 + 4 + 1 + 1 + 32 + 8;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrizeKind {
    /// One unit of an NFT mint.
    NonFungible = 0,
    /// `amount` base units of a fungible mint for each winner of the tier.
    Fungible = 1,
}

/// A prize bracket owning the winner ranks `[previous rank_range_end, rank_range_end)`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrizeTier {
    pub winner_count: u32,
    pub rank_range_end: u32,
    pub kind: PrizeKind,
    pub tier: u8,
    pub mint: Pubkey,
    pub amount: u64,
}

impl PrizeTier {
    /// Total amount the creator escrows for this tier.
    pub fn escrow_amount(&self) -> Result<u64> {
        Ok(self
            .amount
            .checked_mul(self.winner_count as u64)
            .ok_or(RaffleError::Overflow)?)
    }
}

/// Checks that the tiers partition `[0, total_winners)` contiguously in tier order.
pub fn validate_prize_schedule(prizes: &[PrizeTier]) -> Result<()> {
    require!(!prizes.is_empty(), RaffleError::EmptyPrizeSchedule);
    require!(prizes.len() <= MAX_PRIZE_TIERS, RaffleError::TooManyPrizeTiers);

    let mut cumulative: u32 = 0;
    let mut previous_tier: u8 = 0;
    for prize in prizes {
        require!(prize.winner_count > 0, RaffleError::InvalidPrizeTier);
        require!(prize.tier >= previous_tier, RaffleError::InvalidPrizeTier);

        cumulative = cumulative
            .checked_add(prize.winner_count)
            .ok_or(RaffleError::Overflow)?;
        require!(prize.rank_range_end == cumulative, RaffleError::InvalidPrizeTier);

        match prize.kind {
            PrizeKind::NonFungible => require!(
                prize.winner_count == 1 && prize.amount == 1,
                RaffleError::InvalidPrizeTier
            ),
            PrizeKind::Fungible => require!(prize.amount > 0, RaffleError::InvalidPrizeTier),
        }
        prize.escrow_amount()?;

        previous_tier = prize.tier;
    }

    require!(cumulative <= MAX_TOTAL_WINNERS, RaffleError::TooManyWinners);
    Ok(())
}

/// Number of winner ranks covered by the schedule.
pub fn total_winners(prizes: &[PrizeTier]) -> u32 {
    prizes.last().map_or(0, |prize| prize.rank_range_end)
}

/// Returns the tier index and tier owning `rank`. Boundaries are inclusive at the
/// bottom and exclusive at the top.
pub fn tier_for_rank(prizes: &[PrizeTier], rank: u32) -> Result<(u8, &PrizeTier)> {
    let index = prizes
        .iter()
        .position(|prize| rank < prize.rank_range_end)
        .ok_or(RaffleError::RankOutOfRange)?;
    Ok((index as u8, &prizes[index]))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::test_utils::assert_raffle_error;

    pub(crate) fn nft(rank_range_end: u32, tier: u8) -> PrizeTier {
        PrizeTier {
            winner_count: 1,
            rank_range_end,
            kind: PrizeKind::NonFungible,
            tier,
            mint: Pubkey::new_unique(),
            amount: 1,
        }
    }

    pub(crate) fn fungible(winner_count: u32, rank_range_end: u32, tier: u8, amount: u64) -> PrizeTier {
        PrizeTier {
            winner_count,
            rank_range_end,
            kind: PrizeKind::Fungible,
            tier,
            mint: Pubkey::new_unique(),
            amount,
        }
    }

    /// Eight tiers, 2403 winners: three NFTs followed by five USDT brackets.
    pub(crate) fn eight_tier_schedule() -> Vec<PrizeTier> {
        vec![
            nft(1, 0),
            nft(2, 1),
            nft(3, 2),
            fungible(10, 13, 3, 100_000_000),
            fungible(40, 53, 4, 50_000_000),
            fungible(100, 153, 4, 25_000_000),
            fungible(750, 903, 5, 10_000_000),
            fungible(1500, 2403, 6, 5_000_000),
        ]
    }

    #[test]
    fn accepts_contiguous_schedule() {
        let prizes = eight_tier_schedule();
        assert!(validate_prize_schedule(&prizes).is_ok());
        assert_eq!(total_winners(&prizes), 2403);
        assert_eq!(
            prizes.iter().map(|prize| prize.winner_count).sum::<u32>(),
            2403
        );
    }

    #[test]
    fn rank_boundaries_map_to_tiers() {
        let prizes = eight_tier_schedule();

        assert_eq!(tier_for_rank(&prizes, 0).unwrap().0, 0);
        assert_eq!(tier_for_rank(&prizes, 2).unwrap().0, 2);
        assert_eq!(tier_for_rank(&prizes, 3).unwrap().0, 3);
        assert_eq!(tier_for_rank(&prizes, 12).unwrap().0, 3);
        assert_eq!(tier_for_rank(&prizes, 13).unwrap().0, 4);
        assert_eq!(tier_for_rank(&prizes, 902).unwrap().0, 6);
        assert_eq!(tier_for_rank(&prizes, 903).unwrap().0, 7);
        assert_eq!(tier_for_rank(&prizes, 2402).unwrap().0, 7);
        assert_raffle_error(tier_for_rank(&prizes, 2403), RaffleError::RankOutOfRange);
    }

    #[test]
    fn rejects_gaps_and_overlaps() {
        let mut prizes = eight_tier_schedule();
        prizes[4].rank_range_end = 54;
        assert_raffle_error(validate_prize_schedule(&prizes), RaffleError::InvalidPrizeTier);

        let mut prizes = eight_tier_schedule();
        prizes[3].rank_range_end = 12;
        assert_raffle_error(validate_prize_schedule(&prizes), RaffleError::InvalidPrizeTier);
    }

    #[test]
    fn rejects_out_of_order_tiers() {
        let prizes = vec![nft(1, 2), nft(2, 1)];
        assert_raffle_error(validate_prize_schedule(&prizes), RaffleError::InvalidPrizeTier);
    }

    #[test]
    fn non_fungible_tiers_pay_a_single_unit() {
        let mut prize = nft(2, 0);
        prize.winner_count = 2;
        assert_raffle_error(validate_prize_schedule(&[prize]), RaffleError::InvalidPrizeTier);

        let prize = fungible(1, 1, 0, 0);
        assert_raffle_error(validate_prize_schedule(&[prize]), RaffleError::InvalidPrizeTier);
    }

    #[test]
    fn rejects_empty_and_oversized_schedules() {
        assert_raffle_error(validate_prize_schedule(&[]), RaffleError::EmptyPrizeSchedule);

        let prizes = vec![fungible(MAX_TOTAL_WINNERS + 1, MAX_TOTAL_WINNERS + 1, 0, 1)];
        assert_raffle_error(validate_prize_schedule(&prizes), RaffleError::TooManyWinners);

        let prizes: Vec<PrizeTier> = (0..=MAX_PRIZE_TIERS as u32).map(|i| nft(i + 1, 0)).collect();
        assert_raffle_error(validate_prize_schedule(&prizes), RaffleError::TooManyPrizeTiers);
    }

    #[test]
    fn escrow_covers_every_winner() {
        let prize = fungible(750, 750, 0, 10_000_000);
        assert_eq!(prize.escrow_amount().unwrap(), 7_500_000_000);
    }
}

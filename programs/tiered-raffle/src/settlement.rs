use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{ParticipantStats, PrizeTier, Raffle, RaffleStatus, Winner, WinnerList, ONE_HUNDRED_PERCENT_BP},
};

/// Split of a raffle's gross revenue once its winners are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub protocol_fee: u64,
    pub creator_share: u64,
}

impl FeeSplit {
    pub fn total(&self) -> u64 {
        self.protocol_fee + self.creator_share
    }
}

impl Raffle {
    pub fn fee_split(&self) -> Result<FeeSplit> {
        let protocol_fee = (self.amount_collected as u128)
            .checked_mul(self.protocol_fee_bp as u128)
            .ok_or(RaffleError::Overflow)?
            / ONE_HUNDRED_PERCENT_BP as u128;
        let protocol_fee = u64::try_from(protocol_fee).map_err(|_| RaffleError::Overflow)?;

        Ok(FeeSplit {
            protocol_fee,
            creator_share: self.amount_collected - protocol_fee,
        })
    }

    /// Settles revenue of a drawn raffle once and completes it.
    pub fn claim_fees(&mut self) -> Result<FeeSplit> {
        match self.status {
            RaffleStatus::Drawn => {}
            RaffleStatus::Complete => return err!(RaffleError::AlreadyClaimed),
            _ => return err!(RaffleError::WrongStatus),
        }

        let split = self.fee_split()?;
        require!(
            split.total() <= self.outstanding_revenue()?,
            RaffleError::InsufficientFunds
        );

        self.fees_claimed = split.total();
        self.status = RaffleStatus::Complete;
        Ok(split)
    }

    /// Returns what `stats` paid into a refundable raffle and marks it refunded.
    pub fn refund(&mut self, stats: &mut ParticipantStats) -> Result<u64> {
        require!(
            self.status == RaffleStatus::Refundable,
            RaffleError::RaffleNotRefundable
        );
        require!(stats.entries_count > 0, RaffleError::NoEntriesOwned);
        require!(!stats.refunded, RaffleError::AlreadyRefunded);

        let amount = stats.amount_paid;
        require!(
            amount <= self.outstanding_revenue()?,
            RaffleError::InsufficientFunds
        );

        self.amount_refunded = self
            .amount_refunded
            .checked_add(amount)
            .ok_or(RaffleError::Overflow)?;
        stats.refunded = true;
        Ok(amount)
    }

    /// Marks rank `rank` claimed by `claimant` and returns the record with its tier.
    pub fn record_prize_claim(
        &mut self,
        winners: &mut WinnerList,
        rank: u32,
        claimant: &Pubkey,
    ) -> Result<(Winner, PrizeTier)> {
        require!(
            matches!(self.status, RaffleStatus::Drawn | RaffleStatus::Complete),
            RaffleError::RaffleNotDrawn
        );

        let winner = winners.claim(rank, claimant)?;
        let prize = *self
            .prizes
            .get(winner.prize_index as usize)
            .ok_or(RaffleError::InvalidPrizeTier)?;
        self.prizes_claimed = self
            .prizes_claimed
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;
        Ok((winner, prize))
    }

    /// Revenue still held for this raffle.
    pub fn outstanding_revenue(&self) -> Result<u64> {
        let settled = self
            .fees_claimed
            .checked_add(self.amount_refunded)
            .ok_or(RaffleError::Overflow)?;
        Ok(self
            .amount_collected
            .checked_sub(settled)
            .ok_or(RaffleError::InsufficientFunds)?)
    }
}

use anchor_lang::prelude::*;

use crate::error::RaffleError;

// 8 discriminator + 32 management_authority + 32 fee_recipient + 32 randomness_authority
// + 2 protocol_fee_bp + 8 raffle_counter + 8 request_counter + 1 bump
pub const CONFIG_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 32 + 2 + 8 + 8 + 1;

pub const ONE_HUNDRED_PERCENT_BP: u16 = 10_000;

#[account]
pub struct Config {
    pub management_authority: Pubkey,
    pub fee_recipient: Pubkey,
    pub randomness_authority: Pubkey,
    pub protocol_fee_bp: u16,
    pub raffle_counter: u64,
    /// Id of the most recently issued randomness request, zero before the first one.
    pub request_counter: u64,
    pub bump: u8,
}

impl Config {
    /// Issues the next randomness request id. Ids start at one and are never reused.
    pub fn next_request_id(&mut self) -> Result<u64> {
        self.request_counter = self
            .request_counter
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;
        Ok(self.request_counter)
    }

    pub fn latest_request_id(&self) -> u64 {
        self.request_counter
    }
}

use anchor_lang::prelude::*;

pub const TREASURY_SEED: &[u8] = b"treasury";

// 8 discriminator, 32 pubkey, 1 bump
pub const TREASURY_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Per-raffle PDA holding native revenue. It is also the token authority of every
/// vault the raffle pays out of.
#[account]
pub struct Treasury {
    pub raffle: Pubkey,
    pub bump: u8,
}

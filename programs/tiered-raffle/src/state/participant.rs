use anchor_lang::prelude::*;

pub const PARTICIPANT_SEED: &[u8] = b"participant";

// 8 discriminator + 32 raffle + 32 participant + 5 ledger_index + 8 amount_paid
// + 8 entries_count + 1 refunded + 1 bump
pub const PARTICIPANT_STATS_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 5 + 8 + 8 + 1 + 1;

/// Running totals for one participant in one raffle.
#[account]
#[derive(Debug)]
pub struct ParticipantStats {
    pub raffle: Pubkey,
    pub participant: Pubkey,
    /// Slot in the entry ledger's participant table, assigned on first purchase.
    pub ledger_index: Option<u32>,
    pub amount_paid: u64,
    pub entries_count: u64,
    pub refunded: bool,
    pub bump: u8,
}

impl ParticipantStats {
    pub fn new(raffle: Pubkey, participant: Pubkey, bump: u8) -> Self {
        Self {
            raffle,
            participant,
            ledger_index: None,
            amount_paid: 0,
            entries_count: 0,
            refunded: false,
            bump,
        }
    }
}

use anchor_lang::prelude::*;

pub const MAX_ALLOWED_CURRENCIES: usize = 16;

// 8 discriminator + 4 vec length + 32 per currency + 1 bump
pub const CURRENCY_ALLOW_LIST_ACCOUNT_SIZE: usize = 8 + 4 + 32 * MAX_ALLOWED_CURRENCIES + 1;

/// Read-only view of which currencies a raffle may be priced in.
/// `None` is the native currency and is always accepted.
pub trait CurrencyPolicy {
    fn is_allowed(&self, currency: Option<&Pubkey>) -> bool;
}

/// Allow-list written once at program initialization and only read afterwards.
#[account]
pub struct CurrencyAllowList {
    pub currencies: Vec<Pubkey>,
    pub bump: u8,
}

impl CurrencyPolicy for CurrencyAllowList {
    fn is_allowed(&self, currency: Option<&Pubkey>) -> bool {
        match currency {
            None => true,
            Some(mint) => self.currencies.contains(mint),
        }
    }
}

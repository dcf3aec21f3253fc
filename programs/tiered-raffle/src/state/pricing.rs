use anchor_lang::prelude::*;

use crate::error::RaffleError;

pub const MAX_PRICING_OPTIONS: usize = 5;

// 8 entries + 8 price
pub const PRICING_OPTION_SIZE: usize = 8 + 8;

/// One bulk-pricing tier: `entries` entries for `price` base units of the raffle currency.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingOption {
    pub entries: u64,
    pub price: u64,
}

/// Rejects empty or oversized tables and zero-entry options. Discount monotonicity
/// is the creator's business and is not checked.
pub fn validate_pricing_options(options: &[PricingOption]) -> Result<()> {
    require!(!options.is_empty(), RaffleError::EmptyPricingTable);
    require!(
        options.len() <= MAX_PRICING_OPTIONS,
        RaffleError::TooManyPricingOptions
    );
    require!(
        options.iter().all(|option| option.entries > 0),
        RaffleError::InvalidPricingOption
    );
    Ok(())
}

/// Sums entries and price over the selected option indices.
/// The same option may be selected more than once.
pub fn evaluate_pricing(options: &[PricingOption], selections: &[u8]) -> Result<(u64, u64)> {
    require!(!selections.is_empty(), RaffleError::InvalidPricingOption);

    let mut total_entries: u64 = 0;
    let mut total_price: u64 = 0;
    for &index in selections {
        let option = options
            .get(index as usize)
            .ok_or(RaffleError::InvalidPricingOption)?;
        total_entries = total_entries
            .checked_add(option.entries)
            .ok_or(RaffleError::Overflow)?;
        total_price = total_price
            .checked_add(option.price)
            .ok_or(RaffleError::Overflow)?;
    }

    Ok((total_entries, total_price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_raffle_error;

    fn usdt(amount: f64) -> u64 {
        (amount * 1_000_000.0) as u64
    }

    fn bulk_options() -> Vec<PricingOption> {
        vec![
            PricingOption { entries: 50, price: usdt(17.5) },
            PricingOption { entries: 110, price: usdt(35.0) },
            PricingOption { entries: 275, price: usdt(87.5) },
            PricingOption { entries: 575, price: usdt(175.0) },
            PricingOption { entries: 1200, price: usdt(350.0) },
        ]
    }

    #[test]
    fn evaluates_combined_bulk_selection() {
        let (entries, price) = evaluate_pricing(&bulk_options(), &[0, 1, 2]).unwrap();
        assert_eq!(entries, 435);
        assert_eq!(price, 140_000_000);
    }

    #[test]
    fn repeated_selection_counts_twice() {
        let (entries, price) = evaluate_pricing(&bulk_options(), &[4, 4]).unwrap();
        assert_eq!(entries, 2400);
        assert_eq!(price, usdt(700.0));
    }

    #[test]
    fn out_of_bounds_index_is_rejected() {
        assert_raffle_error(
            evaluate_pricing(&bulk_options(), &[1, 5]),
            RaffleError::InvalidPricingOption,
        );
    }

    #[test]
    fn empty_selection_is_rejected() {
        assert_raffle_error(
            evaluate_pricing(&bulk_options(), &[]),
            RaffleError::InvalidPricingOption,
        );
    }

    #[test]
    fn price_overflow_is_reported() {
        let options = vec![PricingOption { entries: 1, price: u64::MAX }];
        assert_raffle_error(evaluate_pricing(&options, &[0, 0]), RaffleError::Overflow);
    }

    #[test]
    fn validation_limits_table_shape() {
        assert!(validate_pricing_options(&bulk_options()).is_ok());
        assert_raffle_error(validate_pricing_options(&[]), RaffleError::EmptyPricingTable);

        let mut too_many = bulk_options();
        too_many.push(PricingOption { entries: 2400, price: usdt(650.0) });
        assert_raffle_error(
            validate_pricing_options(&too_many),
            RaffleError::TooManyPricingOptions,
        );

        let zero = vec![PricingOption { entries: 0, price: 1 }];
        assert_raffle_error(
            validate_pricing_options(&zero),
            RaffleError::InvalidPricingOption,
        );
    }

    #[test]
    fn free_options_are_accepted() {
        let options = vec![PricingOption { entries: 1, price: 0 }];
        assert_eq!(evaluate_pricing(&options, &[0]).unwrap(), (1, 0));
    }
}

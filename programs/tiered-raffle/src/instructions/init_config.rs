use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{
        Config, CurrencyAllowList, CONFIG_ACCOUNT_SIZE, CURRENCY_ALLOW_LIST_ACCOUNT_SIZE,
        MAX_ALLOWED_CURRENCIES, ONE_HUNDRED_PERCENT_BP,
    },
};

/// Event emitted when the program configuration is initialized
#[event]
pub struct ConfigInitialized {
    pub management_authority: Pubkey,
    pub fee_recipient: Pubkey,
    pub randomness_authority: Pubkey,
    /// Protocol fee in basis points applied to raffles created from now on
    pub protocol_fee_bp: u16,
    /// SPL mints raffles may be priced in, besides native lamports
    pub currencies: Vec<Pubkey>,
}

/// Instruction to initialize the program configuration
/// This should be called once during program deployment
///
/// # Arguments
/// * `protocol_fee_bp` - Share of each raffle's revenue paid to the fee recipient
/// * `currencies` - SPL mints accepted as raffle currencies (max 16)
///
/// # Security Considerations
/// - Creates PDAs with seeds "config" and "currencies"
/// - Only needs to be called once during deployment
/// - The caller of this instruction must be the owner of the program
/// - The management, randomness and fee recipient accounts are set and locked
/// - The currency allow-list is never written again
///
/// # Account Validations
/// * Config - New PDA initialized with proper space allocation
/// * Currencies - New PDA holding the allow-list
/// * Upgrade Authority - Signer needs to be the owner of the program
/// * Management Authority - Account becomes the program management authority
/// * Randomness Authority - Only account allowed to fulfill randomness requests
/// * Fee Recipient - Receives the protocol fee of every raffle
pub fn init_config(
    ctx: Context<InitConfig>,
    protocol_fee_bp: u16,
    currencies: Vec<Pubkey>,
) -> Result<()> {
    require!(
        protocol_fee_bp <= ONE_HUNDRED_PERCENT_BP,
        RaffleError::InvalidProtocolFee
    );
    require!(
        currencies.len() <= MAX_ALLOWED_CURRENCIES,
        RaffleError::TooManyCurrencies
    );

    ctx.accounts.config.set_inner(Config {
        management_authority: ctx.accounts.management_authority.key(),
        fee_recipient: ctx.accounts.fee_recipient.key(),
        randomness_authority: ctx.accounts.randomness_authority.key(),
        protocol_fee_bp,
        raffle_counter: 0,
        request_counter: 0,
        bump: ctx.bumps.config,
    });
    ctx.accounts.currencies.set_inner(CurrencyAllowList {
        currencies: currencies.clone(),
        bump: ctx.bumps.currencies,
    });

    emit!(ConfigInitialized {
        management_authority: ctx.accounts.management_authority.key(),
        fee_recipient: ctx.accounts.fee_recipient.key(),
        randomness_authority: ctx.accounts.randomness_authority.key(),
        protocol_fee_bp,
        currencies,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(
        init,
        payer = upgrade_authority,
        space = CONFIG_ACCOUNT_SIZE,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = upgrade_authority,
        space = CURRENCY_ALLOW_LIST_ACCOUNT_SIZE,
        seeds = [b"currencies"],
        bump
    )]
    pub currencies: Account<'info, CurrencyAllowList>,

    #[account(mut)]
    pub upgrade_authority: Signer<'info>,
    pub management_authority: SystemAccount<'info>,
    pub randomness_authority: SystemAccount<'info>,
    pub fee_recipient: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

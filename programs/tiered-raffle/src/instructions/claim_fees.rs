use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::RaffleError,
    payment::{pay_native, TokenRoute},
    state::{Config, Raffle, Treasury, TREASURY_SEED},
};

/// Event emitted when the revenue of a drawn raffle is settled
#[event]
pub struct FeesClaimed {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Amount paid to the protocol fee recipient
    pub protocol_fee: u64,
    /// Amount paid to the raffle creator
    pub creator_share: u64,
}

/// Instruction to split a drawn raffle's revenue between the protocol and the creator
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Verifies the signer is the raffle creator or the management authority
/// 2. Validates the raffle is Drawn; a Complete raffle was already settled
/// 3. Verifies the fee recipient matches the config
/// 4. Pays from recorded revenue only, never from the vault balance
///
/// # Account Validations
/// * Raffle - Must be in Drawn state, moves to Complete
/// * Authority - Raffle creator or program management authority
/// * Treasury - Must match raffle's treasury and use proper PDA seeds
/// * Fee Recipient - Must match the config's fee recipient
/// * Creator - Must match the raffle creator
pub fn claim_fees(ctx: Context<ClaimFees>) -> Result<()> {
    let split = ctx.accounts.raffle.claim_fees()?;
    let treasury_key = ctx.accounts.treasury.key();

    match ctx.accounts.raffle.currency {
        None => {
            pay_native(
                &ctx.accounts.treasury,
                &ctx.accounts.fee_recipient.to_account_info(),
                split.protocol_fee,
            )?;
            pay_native(
                &ctx.accounts.treasury,
                &ctx.accounts.creator.to_account_info(),
                split.creator_share,
            )?;
        }
        Some(mint) => {
            TokenRoute::resolve(
                &ctx.accounts.fee_recipient_token_account,
                &ctx.accounts.revenue_vault,
                &ctx.accounts.token_program,
                &mint,
                &ctx.accounts.fee_recipient.key(),
                &treasury_key,
            )?
            .pay(&ctx.accounts.treasury, split.protocol_fee)?;
            TokenRoute::resolve(
                &ctx.accounts.creator_token_account,
                &ctx.accounts.revenue_vault,
                &ctx.accounts.token_program,
                &mint,
                &ctx.accounts.creator.key(),
                &treasury_key,
            )?
            .pay(&ctx.accounts.treasury, split.creator_share)?;
        }
    }

    emit!(FeesClaimed {
        raffle: ctx.accounts.raffle.key(),
        protocol_fee: split.protocol_fee,
        creator_share: split.creator_share,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimFees<'info> {
    #[account(
        mut,
        has_one = creator @ RaffleError::NotRaffleAuthority,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = fee_recipient @ RaffleError::InvalidFeeRecipient,
    )]
    pub config: Account<'info, Config>,

    #[account(
        constraint = authority.key() == raffle.creator
            || authority.key() == config.management_authority
            @ RaffleError::NotRaffleAuthority,
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// CHECK: must match the raffle creator via has_one, only receives funds
    #[account(mut)]
    pub creator: UncheckedAccount<'info>,

    /// CHECK: must match the config fee recipient via has_one, only receives funds
    #[account(mut)]
    pub fee_recipient: UncheckedAccount<'info>,

    #[account(mut)]
    pub creator_token_account: Option<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub fee_recipient_token_account: Option<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub revenue_vault: Option<Account<'info, TokenAccount>>,

    pub token_program: Option<Program<'info, Token>>,
}

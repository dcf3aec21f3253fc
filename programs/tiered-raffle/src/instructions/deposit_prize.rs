use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::RaffleError,
    payment::TokenRoute,
    state::{Raffle, Treasury, TREASURY_SEED},
};

/// Event emitted when a prize tier is escrowed
#[event]
pub struct PrizeDeposited {
    pub raffle: Pubkey,
    /// Index of the tier in the prize schedule
    pub tier_index: u8,
    pub mint: Pubkey,
    /// Total units escrowed for every winner of the tier
    pub amount: u64,
}

/// Instruction to escrow one prize tier into a treasury-owned vault
///
/// # Arguments
/// * `tier_index` - Index of the tier in the raffle's prize schedule
///
/// # Security Considerations
/// 1. Only the raffle creator can deposit
/// 2. The raffle must still be open
/// 3. Each tier is deposited exactly once
/// 4. The vault must hold the tier's mint and be owned by the treasury
///
/// # Account Validations
/// * Raffle - Must be Open, creator must match
/// * Treasury - PDA with seeds ["treasury", raffle_key], vault authority
/// * Creator Token Account - Source of the prize, owned by the creator
/// * Prize Vault - Destination, owned by the treasury
pub fn deposit_prize(ctx: Context<DepositPrize>, tier_index: u8) -> Result<()> {
    let prize = ctx.accounts.raffle.mark_prize_deposited(tier_index)?;
    let amount = prize.escrow_amount()?;

    TokenRoute::new(
        &ctx.accounts.creator_token_account,
        &ctx.accounts.prize_vault,
        &ctx.accounts.token_program,
        &prize.mint,
        &ctx.accounts.creator.key(),
        &ctx.accounts.treasury.key(),
    )?
    .collect(&ctx.accounts.creator, amount)?;

    emit!(PrizeDeposited {
        raffle: ctx.accounts.raffle.key(),
        tier_index,
        mint: prize.mint,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositPrize<'info> {
    #[account(
        mut,
        has_one = creator @ RaffleError::NotRaffleAuthority,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub creator_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub prize_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

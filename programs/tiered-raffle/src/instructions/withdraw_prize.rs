use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::RaffleError,
    payment::TokenRoute,
    state::{Raffle, Treasury, TREASURY_SEED},
};

/// Event emitted when the creator takes back an escrowed prize tier
#[event]
pub struct PrizeWithdrawn {
    pub raffle: Pubkey,
    pub tier_index: u8,
    pub mint: Pubkey,
    pub amount: u64,
}

/// Instruction to return the escrow of one prize tier from a refundable raffle
///
/// # Security Considerations
/// 1. Only the raffle creator can withdraw
/// 2. The raffle must be Refundable, so no winner can claim the prize
/// 3. The tier must still be deposited
///
/// # Account Validations
/// * Raffle - Must be in Refundable state, creator must match
/// * Prize Vault - Must hold the tier's mint and belong to the treasury
/// * Creator Token Account - Must hold the tier's mint and belong to the creator
pub fn withdraw_prize(ctx: Context<WithdrawPrize>, tier_index: u8) -> Result<()> {
    let prize = ctx.accounts.raffle.mark_prize_withdrawn(tier_index)?;
    let amount = prize.escrow_amount()?;

    TokenRoute::new(
        &ctx.accounts.creator_token_account,
        &ctx.accounts.prize_vault,
        &ctx.accounts.token_program,
        &prize.mint,
        &ctx.accounts.creator.key(),
        &ctx.accounts.treasury.key(),
    )?
    .pay(&ctx.accounts.treasury, amount)?;

    emit!(PrizeWithdrawn {
        raffle: ctx.accounts.raffle.key(),
        tier_index,
        mint: prize.mint,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawPrize<'info> {
    #[account(
        mut,
        has_one = creator @ RaffleError::NotRaffleAuthority,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

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

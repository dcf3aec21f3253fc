use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::RaffleError,
    payment::TokenRoute,
    state::{Raffle, Treasury, WinnerList, TREASURY_SEED},
};

/// Event emitted when a winner collects a prize
#[event]
pub struct PrizeClaimed {
    pub raffle: Pubkey,
    pub winner: Pubkey,
    pub rank: u32,
    /// Index of the tier in the prize schedule
    pub prize_index: u8,
    pub mint: Pubkey,
    pub amount: u64,
}

/// Instruction for a winner to collect the prize of one rank
///
/// # Security Considerations
/// 1. The raffle must be Drawn or Complete
/// 2. Only the participant recorded at `rank` can claim it
/// 3. Each rank is paid once
/// 4. Tokens leave the prize vault under the treasury's signature
///
/// # Account Validations
/// * WinnerList - The list recorded on the raffle at creation
/// * Winner Token Account - Must hold the prize mint and belong to the winner
/// * Prize Vault - Must hold the prize mint and belong to the treasury
pub fn claim_prize(ctx: Context<ClaimPrize>, rank: u32) -> Result<()> {
    let winner_key = ctx.accounts.winner.key();
    let mut winner_list = ctx.accounts.winner_list.load_mut()?;
    let (winner, prize) = ctx
        .accounts
        .raffle
        .record_prize_claim(&mut winner_list, rank, &winner_key)?;
    drop(winner_list);

    TokenRoute::new(
        &ctx.accounts.winner_token_account,
        &ctx.accounts.prize_vault,
        &ctx.accounts.token_program,
        &prize.mint,
        &winner_key,
        &ctx.accounts.treasury.key(),
    )?
    .pay(&ctx.accounts.treasury, prize.amount)?;

    emit!(PrizeClaimed {
        raffle: ctx.accounts.raffle.key(),
        winner: winner_key,
        rank,
        prize_index: winner.prize_index,
        mint: prize.mint,
        amount: prize.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimPrize<'info> {
    #[account(
        mut,
        has_one = winner_list @ RaffleError::RaffleAccountMismatch,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    #[account(mut)]
    pub winner_list: AccountLoader<'info, WinnerList>,

    #[account(
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    pub winner: Signer<'info>,

    #[account(mut)]
    pub winner_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub prize_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

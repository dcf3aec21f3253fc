use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Config, Raffle},
};

/// Event emitted when the randomness provider answers a request
#[event]
pub struct RandomnessFulfilled {
    pub raffle: Pubkey,
    pub request_id: u64,
    pub random_word: [u8; 32],
}

/// Callback of the randomness provider. Stores the word for a pending request so
/// winner selection can start.
///
/// # Errors
/// - `NotRandomnessAuthority` if the signer is not the configured provider
/// - `UnknownRequest` if the raffle has no request with this id
/// - `AlreadyFulfilled` if the word was already delivered
/// - `RaffleNotDrawing` if the raffle is no longer drawing
pub fn fulfill_randomness(
    ctx: Context<FulfillRandomness>,
    request_id: u64,
    random_word: [u8; 32],
) -> Result<()> {
    ctx.accounts
        .raffle
        .fulfill_randomness(request_id, random_word)?;

    emit!(RandomnessFulfilled {
        raffle: ctx.accounts.raffle.key(),
        request_id,
        random_word,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FulfillRandomness<'info> {
    #[account(mut)]
    pub raffle: Box<Account<'info, Raffle>>,

    pub randomness_authority: Signer<'info>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = randomness_authority @ RaffleError::NotRandomnessAuthority,
    )]
    pub config: Account<'info, Config>,
}

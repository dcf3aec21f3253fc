//! Moves revenue and prizes between participants and a raffle's treasury.
//!
//! Native lamports are paid into the treasury PDA through the system program and
//! paid out by adjusting its lamports directly, which works because the program
//! owns it. SPL tokens live in vaults whose authority is the treasury, so payouts
//! are signed with the treasury seeds.

use anchor_lang::{prelude::*, system_program};
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    error::RaffleError,
    state::{Treasury, TREASURY_SEED},
};

/// The token accounts needed to settle one mint with one user.
pub struct TokenRoute<'a, 'info> {
    /// The user's token account.
    pub user: &'a Account<'info, TokenAccount>,
    /// Treasury-owned vault.
    pub vault: &'a Account<'info, TokenAccount>,
    pub token_program: &'a Program<'info, Token>,
}

impl<'a, 'info> TokenRoute<'a, 'info> {
    /// Collects the optional token accounts of an instruction and checks them
    /// against `mint`, the user and the treasury.
    pub fn resolve(
        user: &'a Option<Account<'info, TokenAccount>>,
        vault: &'a Option<Account<'info, TokenAccount>>,
        token_program: &'a Option<Program<'info, Token>>,
        mint: &Pubkey,
        user_key: &Pubkey,
        treasury: &Pubkey,
    ) -> Result<Self> {
        let (Some(user), Some(vault), Some(token_program)) = (user, vault, token_program) else {
            return err!(RaffleError::MissingTokenAccounts);
        };
        Self::new(user, vault, token_program, mint, user_key, treasury)
    }

    pub fn new(
        user: &'a Account<'info, TokenAccount>,
        vault: &'a Account<'info, TokenAccount>,
        token_program: &'a Program<'info, Token>,
        mint: &Pubkey,
        user_key: &Pubkey,
        treasury: &Pubkey,
    ) -> Result<Self> {
        check_token_account(user, mint, user_key)?;
        check_token_account(vault, mint, treasury)?;

        Ok(Self {
            user,
            vault,
            token_program,
        })
    }

    /// Moves `amount` from the user into the vault. The user signs.
    #[allow(deprecated)]
    pub fn collect(&self, authority: &Signer<'info>, amount: u64) -> Result<()> {
        let cpi_accounts = Transfer {
            from: self.user.to_account_info(),
            to: self.vault.to_account_info(),
            authority: authority.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);
        token::transfer(cpi_ctx, amount)
    }

    /// Moves `amount` from the vault to the user, signed by the treasury PDA.
    #[allow(deprecated)]
    pub fn pay(&self, treasury: &Account<'info, Treasury>, amount: u64) -> Result<()> {
        let bump = [treasury.bump];
        let seeds: &[&[u8]] = &[TREASURY_SEED, treasury.raffle.as_ref(), &bump];
        let signer_seeds = &[seeds];

        let cpi_accounts = Transfer {
            from: self.vault.to_account_info(),
            to: self.user.to_account_info(),
            authority: treasury.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        );
        token::transfer(cpi_ctx, amount)
    }
}

pub fn check_token_account(account: &TokenAccount, mint: &Pubkey, owner: &Pubkey) -> Result<()> {
    require_keys_eq!(account.mint, *mint, RaffleError::InvalidTokenAccount);
    require_keys_eq!(account.owner, *owner, RaffleError::InvalidTokenAccount);
    Ok(())
}

/// Transfers `amount` lamports from `payer` into the treasury.
pub fn collect_native<'info>(
    payer: &Signer<'info>,
    treasury: &Account<'info, Treasury>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    let cpi_context = CpiContext::new(
        system_program.to_account_info(),
        system_program::Transfer {
            from: payer.to_account_info(),
            to: treasury.to_account_info(),
        },
    );
    system_program::transfer(cpi_context, amount)
}

/// Pays `amount` lamports out of the treasury. Its rent-exempt reserve is never
/// touched because payouts are bounded by recorded revenue.
pub fn pay_native<'info>(
    treasury: &Account<'info, Treasury>,
    recipient: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let treasury_account = treasury.to_account_info();
    treasury_account.sub_lamports(amount)?;
    recipient.add_lamports(amount)?;
    Ok(())
}

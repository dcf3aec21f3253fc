use anchor_lang::prelude::*;
use instructions::*;

pub mod error;
pub mod instructions;
pub mod payment;
pub mod selection;
pub mod settlement;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;

use state::CreateRaffleParams;

declare_id!("Aevm4KHhJwsk9Mb2RrcKEfJzJnoAHbwYswf4Tx6CPYvc");

#[program]
pub mod tiered_raffle {
    use super::*;

    pub fn init_config(
        ctx: Context<InitConfig>,
        protocol_fee_bp: u16,
        currencies: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::init_config::init_config(ctx, protocol_fee_bp, currencies)
    }

    pub fn create_raffle(ctx: Context<CreateRaffle>, params: CreateRaffleParams) -> Result<()> {
        instructions::create_raffle::create_raffle(ctx, params)
    }

    pub fn deposit_prize(ctx: Context<DepositPrize>, tier_index: u8) -> Result<()> {
        instructions::deposit_prize::deposit_prize(ctx, tier_index)
    }

    pub fn init_participant_stats(ctx: Context<InitParticipantStats>) -> Result<()> {
        instructions::init_participant_stats::init_participant_stats(ctx)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, pricing_option_indices: Vec<u8>) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, pricing_option_indices)
    }

    pub fn close_raffle(ctx: Context<CloseRaffle>) -> Result<()> {
        instructions::close_raffle::close_raffle(ctx)
    }

    pub fn fulfill_randomness(
        ctx: Context<FulfillRandomness>,
        request_id: u64,
        random_word: [u8; 32],
    ) -> Result<()> {
        instructions::fulfill_randomness::fulfill_randomness(ctx, request_id, random_word)
    }

    pub fn select_winners(ctx: Context<SelectWinners>, max_batch: u32) -> Result<()> {
        instructions::select_winners::select_winners(ctx, max_batch)
    }

    pub fn claim_prize(ctx: Context<ClaimPrize>, rank: u32) -> Result<()> {
        instructions::claim_prize::claim_prize(ctx, rank)
    }

    pub fn claim_fees(ctx: Context<ClaimFees>) -> Result<()> {
        instructions::claim_fees::claim_fees(ctx)
    }

    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        instructions::refund::refund(ctx)
    }

    pub fn withdraw_prize(ctx: Context<WithdrawPrize>, tier_index: u8) -> Result<()> {
        instructions::withdraw_prize::withdraw_prize(ctx, tier_index)
    }

    pub fn get_raffle_summary(ctx: Context<GetRaffleSummary>) -> Result<RaffleSummary> {
        instructions::views::get_raffle_summary(ctx)
    }

    pub fn get_participant_stats(ctx: Context<GetParticipantStats>) -> Result<ParticipantSummary> {
        instructions::views::get_participant_stats(ctx)
    }

    pub fn get_winners(ctx: Context<GetWinners>, start: u32, limit: u32) -> Result<Vec<WinnerSummary>> {
        instructions::views::get_winners(ctx, start, limit)
    }
}

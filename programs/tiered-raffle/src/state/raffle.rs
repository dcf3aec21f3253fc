use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{
        bind_request, evaluate_pricing, pending_request, tier_for_rank, total_winners,
        validate_prize_schedule, validate_pricing_options, Config, CurrencyPolicy, EntryLedger,
        ParticipantStats, PricingOption, PrizeTier, RandomnessRequest, MAX_PRICING_OPTIONS, MAX_PRIZE_TIERS, PRICING_OPTION_SIZE,
        PRIZE_TIER_SIZE, RANDOMNESS_REQUEST_SIZE,
    },
};

pub const MAX_DURATION: i64 = 30 * 24 * 60 * 60; // 30 days in seconds
pub const MIN_DURATION: i64 = 60 * 60; // 1 hour in seconds

// Space calculation:
// 8 (discriminator) +
// 8 (id) +
// 32 (creator) +
// 32 (entry_ledger) +
// 32 (winner_list) +
// 33 (currency: Option<Pubkey>) +
// 1 (status) +
// 1 (is_minimum_entries_fixed) +
// 8 (minimum_entries) +
// 8 (maximum_entries_per_participant) +
// 8 (cutoff_time) +
// 8 (created_at) +
// 2 (protocol_fee_bp) +
// 8 (total_entries) +
// 8 (amount_collected) +
// 8 (amount_refunded) +
// 8 (fees_claimed) +
// 4 (prizes_deposited) +
// 4 (prizes_claimed) +
// 4 + 5 * 16 (pricing_options) +
// 4 + 20 * 50 (prizes) +
// 1 + 41 (randomness: Option<RandomnessRequest>) +
// 1 (bump) +
// 1 (treasury_bump)
pub const RAFFLE_ACCOUNT_SIZE: usize = 8
    + 8
    + 32
    + 32
    + 32
    + 33
    + 1
    + 1
    + 8
    + 8
    + 8
    + 8
    + 2
    + 8
    + 8
    + 8
    + 8
    + 4
    + 4
    + (4 + MAX_PRICING_OPTIONS * PRICING_OPTION_SIZE)
    + (4 + MAX_PRIZE_TIERS * PRIZE_TIER_SIZE)
    + (1 + RANDOMNESS_REQUEST_SIZE)
    + 1
    + 1;

/// Lifecycle of a raffle. A raffle whose randomness has arrived but whose winners are
/// still being selected stays in `Drawing`; see `Raffle::random_word`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleStatus {
    Open = 0,
    Drawing = 1,
    Drawn = 2,
    Complete = 3,
    Refundable = 4,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateRaffleParams {
    pub cutoff_time: i64,
    pub is_minimum_entries_fixed: bool,
    pub minimum_entries: u64,
    pub maximum_entries_per_participant: u64,
    /// `None` prices the raffle in native lamports.
    pub currency: Option<Pubkey>,
    pub prizes: Vec<PrizeTier>,
    pub pricing_options: Vec<PricingOption>,
}

/// Outcome of one entry purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryPurchase {
    pub entries: u64,
    pub amount: u64,
    pub range_start: u64,
    pub range_end: u64,
    /// Set when this purchase moved the raffle to `Drawing`.
    pub request_id: Option<u64>,
}

#[account]
#[derive(Debug)]
pub struct Raffle {
    pub id: u64,
    pub creator: Pubkey,
    /// Zero-copy accounts claimed at creation.
    pub entry_ledger: Pubkey,
    pub winner_list: Pubkey,
    pub currency: Option<Pubkey>,
    pub status: RaffleStatus,
    pub is_minimum_entries_fixed: bool,
    pub minimum_entries: u64,
    pub maximum_entries_per_participant: u64,
    pub cutoff_time: i64,
    pub created_at: i64,
    pub protocol_fee_bp: u16,
    pub total_entries: u64,
    /// Gross revenue: the sum of every participant's `amount_paid`.
    pub amount_collected: u64,
    pub amount_refunded: u64,
    /// Protocol fee plus creator share, paid out once by `claim_fees`.
    pub fees_claimed: u64,
    /// Bit `i` is set once tier `i` has been escrowed.
    pub prizes_deposited: u32,
    pub prizes_claimed: u32,
    pub pricing_options: Vec<PricingOption>,
    pub prizes: Vec<PrizeTier>,
    pub randomness: Option<RandomnessRequest>,
    pub bump: u8,
    pub treasury_bump: u8,
}

impl Raffle {
    /// Validates `params` and builds an open raffle. Nothing is written on failure.
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        id: u64,
        creator: Pubkey,
        params: CreateRaffleParams,
        protocol_fee_bp: u16,
        now: i64,
        currencies: &impl CurrencyPolicy,
        bump: u8,
        treasury_bump: u8,
    ) -> Result<Self> {
        require!(
            currencies.is_allowed(params.currency.as_ref()),
            RaffleError::CurrencyNotAllowed
        );
        require!(
            params.maximum_entries_per_participant > 0,
            RaffleError::InvalidParticipantCap
        );
        require!(
            params.cutoff_time >= now.checked_add(MIN_DURATION).ok_or(RaffleError::Overflow)?,
            RaffleError::CutoffTooClose
        );
        require!(
            params.cutoff_time <= now.checked_add(MAX_DURATION).ok_or(RaffleError::Overflow)?,
            RaffleError::DurationTooLong
        );
        validate_pricing_options(&params.pricing_options)?;
        validate_prize_schedule(&params.prizes)?;

        Ok(Self {
            id,
            creator,
            entry_ledger: Pubkey::default(),
            winner_list: Pubkey::default(),
            currency: params.currency,
            status: RaffleStatus::Open,
            is_minimum_entries_fixed: params.is_minimum_entries_fixed,
            minimum_entries: params.minimum_entries,
            maximum_entries_per_participant: params.maximum_entries_per_participant,
            cutoff_time: params.cutoff_time,
            created_at: now,
            protocol_fee_bp,
            total_entries: 0,
            amount_collected: 0,
            amount_refunded: 0,
            fees_claimed: 0,
            prizes_deposited: 0,
            prizes_claimed: 0,
            pricing_options: params.pricing_options,
            prizes: params.prizes,
            randomness: None,
            bump,
            treasury_bump,
        })
    }

    pub fn total_winners(&self) -> u32 {
        total_winners(&self.prizes)
    }

    pub fn tier_for_rank(&self, rank: u32) -> Result<(u8, &PrizeTier)> {
        tier_for_rank(&self.prizes, rank)
    }

    pub fn all_prizes_deposited(&self) -> bool {
        let mask = (1u64 << self.prizes.len()) - 1;
        self.prizes_deposited as u64 == mask
    }

    pub fn is_prize_deposited(&self, tier_index: u8) -> bool {
        tier_index < 32 && self.prizes_deposited & (1 << tier_index) != 0
    }

    /// Marks a tier as escrowed and returns it so the caller can move the tokens.
    pub fn mark_prize_deposited(&mut self, tier_index: u8) -> Result<PrizeTier> {
        require!(self.status == RaffleStatus::Open, RaffleError::RaffleNotOpen);
        let prize = *self
            .prizes
            .get(tier_index as usize)
            .ok_or(RaffleError::InvalidPrizeTier)?;
        require!(
            !self.is_prize_deposited(tier_index),
            RaffleError::PrizeAlreadyDeposited
        );

        self.prizes_deposited |= 1 << tier_index;
        Ok(prize)
    }

    /// Releases an escrowed tier back to the creator of a refundable raffle.
    pub fn mark_prize_withdrawn(&mut self, tier_index: u8) -> Result<PrizeTier> {
        require!(
            self.status == RaffleStatus::Refundable,
            RaffleError::RaffleNotRefundable
        );
        let prize = *self
            .prizes
            .get(tier_index as usize)
            .ok_or(RaffleError::InvalidPrizeTier)?;
        require!(
            self.is_prize_deposited(tier_index),
            RaffleError::PrizeNotDeposited
        );

        self.prizes_deposited &= !(1 << tier_index);
        Ok(prize)
    }

    /// Entries are accepted while the raffle is open, before its cutoff, and once
    /// every prize is escrowed.
    pub fn ensure_accepting_entries(&self, now: i64) -> Result<()> {
        require!(self.status == RaffleStatus::Open, RaffleError::RaffleNotOpen);
        require!(now < self.cutoff_time, RaffleError::RaffleEnded);
        require!(self.all_prizes_deposited(), RaffleError::PrizesNotDeposited);
        Ok(())
    }

    pub fn minimum_reached(&self) -> bool {
        self.total_entries >= self.minimum_entries
    }

    /// Whether the ledger holds enough entries and distinct participants for every
    /// winner rank to go to a different participant.
    pub fn can_award_prizes(&self, participant_count: usize) -> bool {
        let winners = self.total_winners() as u64;
        self.total_entries >= winners && participant_count as u64 >= winners
    }

    /// Issues a randomness request and moves the raffle to `Drawing`.
    pub fn request_randomness(&mut self, config: &mut Config) -> Result<u64> {
        require!(self.status == RaffleStatus::Open, RaffleError::RaffleNotOpen);
        let request_id = bind_request(&mut self.randomness, || config.next_request_id())?;
        self.status = RaffleStatus::Drawing;

        msg!("Raffle {} drawing, randomness request {}", self.id, request_id);
        Ok(request_id)
    }

    /// Called after every purchase: once the minimum is reached the raffle stops
    /// taking entries and asks for randomness.
    pub fn begin_drawing_if_ready(
        &mut self,
        config: &mut Config,
        participant_count: usize,
    ) -> Result<Option<u64>> {
        if self.status != RaffleStatus::Open
            || !self.minimum_reached()
            || !self.can_award_prizes(participant_count)
        {
            return Ok(None);
        }
        self.request_randomness(config).map(Some)
    }

    /// Prices `selections`, records the entries for `stats` and starts drawing once
    /// the minimum is reached. The caller moves the funds.
    pub fn buy_entries(
        &mut self,
        ledger: &mut EntryLedger,
        stats: &mut ParticipantStats,
        config: &mut Config,
        selections: &[u8],
        now: i64,
    ) -> Result<EntryPurchase> {
        self.ensure_accepting_entries(now)?;
        let (entries, amount) = evaluate_pricing(&self.pricing_options, selections)?;

        let range_start = self.total_entries;
        let range_end = ledger.record_purchase(self, stats, entries, amount)?;
        let request_id = self.begin_drawing_if_ready(config, ledger.participant_count())?;

        Ok(EntryPurchase {
            entries,
            amount,
            range_start,
            range_end,
            request_id,
        })
    }

    /// Ends the entry period after the cutoff. The raffle draws when it met its
    /// minimum, or when the minimum is not fixed and the entries still cover every
    /// prize; otherwise every participant becomes eligible for a refund.
    pub fn end_entry_period(
        &mut self,
        config: &mut Config,
        now: i64,
        participant_count: usize,
    ) -> Result<Option<u64>> {
        require!(self.status == RaffleStatus::Open, RaffleError::RaffleNotOpen);
        require!(now >= self.cutoff_time, RaffleError::RaffleNotEnded);

        let drawable = self.can_award_prizes(participant_count)
            && (self.minimum_reached() || !self.is_minimum_entries_fixed);
        if drawable {
            return self.request_randomness(config).map(Some);
        }

        self.status = RaffleStatus::Refundable;
        msg!("Raffle {} refundable with {} entries", self.id, self.total_entries);
        Ok(None)
    }

    /// Stores the provider's word. A replayed callback fails with `AlreadyFulfilled`
    /// whatever the raffle status.
    pub fn fulfill_randomness(&mut self, request_id: u64, random_word: [u8; 32]) -> Result<()> {
        let request = pending_request(&mut self.randomness, request_id)?;
        require!(self.status == RaffleStatus::Drawing, RaffleError::RaffleNotDrawing);

        request.random_word = Some(random_word);
        Ok(())
    }

    /// The fulfilled word, available once the provider has called back.
    pub fn random_word(&self) -> Result<[u8; 32]> {
        self.randomness
            .and_then(|request| request.random_word)
            .ok_or_else(|| error!(RaffleError::RandomnessNotReady))
    }

    pub fn latest_request_id(&self) -> Option<u64> {
        self.randomness.map(|request| request.request_id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::state::{
        entry_ledger::tests::{empty_ledger, stats_for},
        prize::tests::eight_tier_schedule,
        CurrencyAllowList,
    };
    use crate::test_utils::assert_raffle_error;

    pub(crate) const NOW: i64 = 1_700_000_000;
    pub(crate) const CUTOFF: i64 = NOW + 24 * 60 * 60;

    pub(crate) fn usdt_options() -> Vec<PricingOption> {
        vec![
            PricingOption { entries: 50, price: 17_500_000 },
            PricingOption { entries: 110, price: 35_000_000 },
            PricingOption { entries: 275, price: 87_500_000 },
            PricingOption { entries: 575, price: 175_000_000 },
            PricingOption { entries: 1200, price: 350_000_000 },
        ]
    }

    pub(crate) fn params(minimum_entries: u64, fixed: bool) -> CreateRaffleParams {
        CreateRaffleParams {
            cutoff_time: CUTOFF,
            is_minimum_entries_fixed: fixed,
            minimum_entries,
            maximum_entries_per_participant: 1200,
            currency: None,
            prizes: eight_tier_schedule(),
            pricing_options: usdt_options(),
        }
    }

    pub(crate) fn config() -> Config {
        Config {
            management_authority: Pubkey::new_unique(),
            fee_recipient: Pubkey::new_unique(),
            randomness_authority: Pubkey::new_unique(),
            protocol_fee_bp: 500,
            raffle_counter: 0,
            request_counter: 0,
            bump: 255,
        }
    }

    fn no_currencies() -> CurrencyAllowList {
        CurrencyAllowList {
            currencies: vec![],
            bump: 0,
        }
    }

    pub(crate) fn open_raffle(params: CreateRaffleParams) -> Raffle {
        let mut raffle = Raffle::open(1, Pubkey::new_unique(), params, 500, NOW, &no_currencies(), 254, 253)
            .unwrap();
        raffle.prizes_deposited = ((1u64 << raffle.prizes.len()) - 1) as u32;
        raffle
    }

    #[test]
    fn opens_with_valid_configuration() {
        let raffle = Raffle::open(3, Pubkey::new_unique(), params(5000, false), 500, NOW, &no_currencies(), 1, 2)
            .unwrap();
        assert_eq!(raffle.status, RaffleStatus::Open);
        assert_eq!(raffle.total_winners(), 2403);
        assert_eq!(raffle.total_entries, 0);
        assert!(!raffle.all_prizes_deposited());
        assert_eq!(raffle.latest_request_id(), None);
    }

    #[test]
    fn rejects_bad_configuration() {
        let creator = Pubkey::new_unique();

        let mut bad = params(5000, false);
        bad.maximum_entries_per_participant = 0;
        assert_raffle_error(
            Raffle::open(1, creator, bad, 0, NOW, &no_currencies(), 0, 0),
            RaffleError::InvalidParticipantCap,
        );

        let mut bad = params(5000, false);
        bad.pricing_options.clear();
        assert_raffle_error(
            Raffle::open(1, creator, bad, 0, NOW, &no_currencies(), 0, 0),
            RaffleError::EmptyPricingTable,
        );

        let mut bad = params(5000, false);
        bad.prizes[5].rank_range_end += 1;
        assert_raffle_error(
            Raffle::open(1, creator, bad, 0, NOW, &no_currencies(), 0, 0),
            RaffleError::InvalidPrizeTier,
        );

        let mut bad = params(5000, false);
        bad.currency = Some(Pubkey::new_unique());
        assert_raffle_error(
            Raffle::open(1, creator, bad, 0, NOW, &no_currencies(), 0, 0),
            RaffleError::CurrencyNotAllowed,
        );

        let mut bad = params(5000, false);
        bad.cutoff_time = NOW + 60;
        assert_raffle_error(
            Raffle::open(1, creator, bad, 0, NOW, &no_currencies(), 0, 0),
            RaffleError::CutoffTooClose,
        );
    }

    #[test]
    fn allow_listed_currency_is_accepted() {
        let usdt = Pubkey::new_unique();
        let currencies = CurrencyAllowList {
            currencies: vec![usdt],
            bump: 0,
        };
        let mut p = params(5000, false);
        p.currency = Some(usdt);
        let raffle = Raffle::open(1, Pubkey::new_unique(), p, 0, NOW, &currencies, 0, 0).unwrap();
        assert_eq!(raffle.currency, Some(usdt));
    }

    #[test]
    fn prize_deposits_gate_entries() {
        let mut raffle = Raffle::open(1, Pubkey::new_unique(), params(10, false), 0, NOW, &no_currencies(), 0, 0)
            .unwrap();
        assert_raffle_error(
            raffle.ensure_accepting_entries(NOW),
            RaffleError::PrizesNotDeposited,
        );

        for tier in 0..8u8 {
            raffle.mark_prize_deposited(tier).unwrap();
        }
        assert_raffle_error(
            raffle.mark_prize_deposited(2),
            RaffleError::PrizeAlreadyDeposited,
        );
        assert_raffle_error(raffle.mark_prize_deposited(8), RaffleError::InvalidPrizeTier);

        assert!(raffle.all_prizes_deposited());
        assert!(raffle.ensure_accepting_entries(NOW).is_ok());
        assert_raffle_error(raffle.ensure_accepting_entries(CUTOFF), RaffleError::RaffleEnded);
    }

    #[test]
    fn withdrawal_requires_refundable_raffle() {
        let mut raffle = open_raffle(params(5000, true));
        assert_raffle_error(raffle.mark_prize_withdrawn(0), RaffleError::RaffleNotRefundable);

        raffle.end_entry_period(&mut config(), CUTOFF, 0).unwrap();
        assert_eq!(raffle.status, RaffleStatus::Refundable);

        let prize = raffle.mark_prize_withdrawn(3).unwrap();
        assert_eq!(prize.winner_count, 10);
        assert!(!raffle.is_prize_deposited(3));
        assert_raffle_error(raffle.mark_prize_withdrawn(3), RaffleError::PrizeNotDeposited);
    }

    #[test]
    fn ending_entries_before_cutoff_fails() {
        let mut raffle = open_raffle(params(5000, true));
        assert_raffle_error(
            raffle.end_entry_period(&mut config(), CUTOFF - 1, 0),
            RaffleError::RaffleNotEnded,
        );
    }

    #[test]
    fn ending_entries_draws_when_minimum_is_soft_and_prizes_are_covered() {
        let mut raffle = open_raffle(params(5000, false));
        raffle.total_entries = 3250;
        let mut config = config();

        let request_id = raffle.end_entry_period(&mut config, CUTOFF, 3250).unwrap();
        assert_eq!(request_id, Some(1));
        assert_eq!(raffle.status, RaffleStatus::Drawing);
        assert_eq!(raffle.latest_request_id(), Some(1));
        assert_raffle_error(raffle.random_word(), RaffleError::RandomnessNotReady);
    }

    #[test]
    fn ending_entries_refunds_when_fixed_minimum_is_missed() {
        let mut raffle = open_raffle(params(5000, true));
        raffle.total_entries = 4999;

        assert_eq!(raffle.end_entry_period(&mut config(), CUTOFF, 4999).unwrap(), None);
        assert_eq!(raffle.status, RaffleStatus::Refundable);
        assert_raffle_error(raffle.end_entry_period(&mut config(), CUTOFF, 4999), RaffleError::RaffleNotOpen);
    }

    #[test]
    fn ending_entries_refunds_when_participants_cannot_cover_prizes() {
        let mut raffle = open_raffle(params(100, false));
        raffle.total_entries = 6085;

        assert_eq!(raffle.end_entry_period(&mut config(), CUTOFF, 6).unwrap(), None);
        assert_eq!(raffle.status, RaffleStatus::Refundable);
    }

    #[test]
    fn drawing_begins_once_minimum_is_reached() {
        let mut raffle = open_raffle(params(3000, false));
        let mut config = config();

        raffle.total_entries = 2999;
        assert_eq!(raffle.begin_drawing_if_ready(&mut config, 2999).unwrap(), None);
        assert_eq!(raffle.status, RaffleStatus::Open);

        raffle.total_entries = 3250;
        assert_eq!(raffle.begin_drawing_if_ready(&mut config, 3250).unwrap(), Some(1));
        assert_eq!(raffle.status, RaffleStatus::Drawing);

        assert_eq!(raffle.begin_drawing_if_ready(&mut config, 3250).unwrap(), None);
        assert_eq!(config.latest_request_id(), 1);
    }

    #[test]
    fn bulk_purchase_records_entries_and_starts_drawing_at_minimum() {
        let mut raffle = open_raffle(params(600, false));
        raffle.prizes.truncate(3);
        raffle.prizes_deposited = 0b111;
        let mut config = config();
        let mut ledger = empty_ledger();
        let mut alice = stats_for(ledger.raffle, Pubkey::new_unique());
        let mut bob = stats_for(ledger.raffle, Pubkey::new_unique());
        let mut carol = stats_for(ledger.raffle, Pubkey::new_unique());

        let purchase = raffle
            .buy_entries(&mut ledger, &mut alice, &mut config, &[0, 1, 2], NOW)
            .unwrap();
        assert_eq!(purchase.entries, 435);
        assert_eq!(purchase.amount, 140_000_000);
        assert_eq!((purchase.range_start, purchase.range_end), (0, 435));
        assert_eq!(purchase.request_id, None);
        assert_eq!((alice.entries_count, alice.amount_paid), (435, 140_000_000));

        raffle.buy_entries(&mut ledger, &mut bob, &mut config, &[0], NOW).unwrap();
        let purchase = raffle
            .buy_entries(&mut ledger, &mut carol, &mut config, &[1], NOW)
            .unwrap();
        assert_eq!((purchase.range_start, purchase.range_end), (485, 595));
        assert_eq!(purchase.request_id, None);

        let purchase = raffle
            .buy_entries(&mut ledger, &mut carol, &mut config, &[0], NOW)
            .unwrap();
        assert_eq!(purchase.request_id, Some(1));
        assert_eq!(raffle.status, RaffleStatus::Drawing);
        assert_raffle_error(
            raffle.buy_entries(&mut ledger, &mut bob, &mut config, &[0], NOW),
            RaffleError::RaffleNotOpen,
        );
        assert_raffle_error(
            open_raffle(params(600, false)).buy_entries(&mut ledger, &mut bob, &mut config, &[9], NOW),
            RaffleError::InvalidPricingOption,
        );
    }

    #[test]
    fn second_request_while_pending_fails() {
        let mut raffle = open_raffle(params(3000, false));
        let mut config = config();
        raffle.request_randomness(&mut config).unwrap();

        raffle.status = RaffleStatus::Open;
        assert_raffle_error(
            raffle.request_randomness(&mut config),
            RaffleError::RequestAlreadyPending,
        );
        assert_eq!(config.latest_request_id(), 1);
    }

    #[test]
    fn consumed_randomness_is_not_requested_again() {
        let mut raffle = open_raffle(params(3000, false));
        let mut config = config();
        let request_id = raffle.request_randomness(&mut config).unwrap();
        raffle.fulfill_randomness(request_id, [4; 32]).unwrap();

        raffle.status = RaffleStatus::Open;
        assert_raffle_error(
            raffle.request_randomness(&mut config),
            RaffleError::RandomnessAlreadyConsumed,
        );
        assert_eq!(config.latest_request_id(), request_id);
        assert_eq!(raffle.random_word().unwrap(), [4; 32]);
    }

    #[test]
    fn replayed_fulfillment_after_drawing_reports_already_fulfilled() {
        let mut raffle = open_raffle(params(3000, false));
        let request_id = raffle.request_randomness(&mut config()).unwrap();

        raffle.status = RaffleStatus::Refundable;
        assert_raffle_error(
            raffle.fulfill_randomness(request_id, [1; 32]),
            RaffleError::RaffleNotDrawing,
        );
        assert_raffle_error(raffle.random_word(), RaffleError::RandomnessNotReady);

        raffle.status = RaffleStatus::Drawing;
        raffle.fulfill_randomness(request_id, [1; 32]).unwrap();
        raffle.status = RaffleStatus::Drawn;
        assert_raffle_error(
            raffle.fulfill_randomness(request_id, [2; 32]),
            RaffleError::AlreadyFulfilled,
        );
        assert_eq!(raffle.random_word().unwrap(), [1; 32]);
    }

    #[test]
    fn fulfillment_is_matched_by_request_id() {
        let mut raffle = open_raffle(params(3000, false));
        let mut config = config();
        let request_id = raffle.request_randomness(&mut config).unwrap();

        assert_raffle_error(
            raffle.fulfill_randomness(request_id + 1, [1; 32]),
            RaffleError::UnknownRequest,
        );
        raffle.fulfill_randomness(request_id, [1; 32]).unwrap();
        assert_eq!(raffle.random_word().unwrap(), [1; 32]);
        assert_raffle_error(
            raffle.fulfill_randomness(request_id, [2; 32]),
            RaffleError::AlreadyFulfilled,
        );
    }
}

use anchor_lang::prelude::*;

use crate::error::RaffleError;

// 8 request_id + 1 option tag + 32 random_word
pub const RANDOMNESS_REQUEST_SIZE: usize = 8 + 1 + 32;

/// A randomness request issued for one raffle. The provider fulfills it later by
/// calling back with the same `request_id`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomnessRequest {
    pub request_id: u64,
    pub random_word: Option<[u8; 32]>,
}

impl RandomnessRequest {
    pub fn is_fulfilled(&self) -> bool {
        self.random_word.is_some()
    }
}

/// Records a new request in `slot` under the id returned by `issue`, which runs only
/// once the slot is known to be free. A raffle holds at most one request, and a
/// fulfilled request is never replaced.
pub fn bind_request(
    slot: &mut Option<RandomnessRequest>,
    issue: impl FnOnce() -> Result<u64>,
) -> Result<u64> {
    if let Some(existing) = slot {
        require!(existing.is_fulfilled(), RaffleError::RequestAlreadyPending);
        return err!(RaffleError::RandomnessAlreadyConsumed);
    }

    let request_id = issue()?;
    *slot = Some(RandomnessRequest {
        request_id,
        random_word: None,
    });
    Ok(request_id)
}

/// The unfulfilled request in `slot` issued as `request_id`. The word it receives
/// is written exactly once.
pub fn pending_request(
    slot: &mut Option<RandomnessRequest>,
    request_id: u64,
) -> Result<&mut RandomnessRequest> {
    let request = slot
        .as_mut()
        .filter(|request| request.request_id == request_id)
        .ok_or(RaffleError::UnknownRequest)?;
    require!(!request.is_fulfilled(), RaffleError::AlreadyFulfilled);
    Ok(request)
}

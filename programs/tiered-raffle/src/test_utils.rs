use std::fmt::Debug;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::error::RaffleError;

pub fn assert_raffle_error<T: Debug>(result: Result<T>, expected: RaffleError) {
    match result {
        Err(Error::AnchorError(error)) => assert_eq!(
            error.error_code_number,
            u32::from(expected),
            "expected {:?}, got {}",
            expected,
            error.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

pub mod claim_fees;
pub mod claim_prize;
pub mod close_raffle;
pub mod create_raffle;
pub mod deposit_prize;
pub mod enter_raffle;
pub mod fulfill_randomness;
pub mod init_config;
pub mod init_participant_stats;
pub mod refund;
pub mod select_winners;
pub mod views;
pub mod withdraw_prize;

pub use claim_fees::*;
pub use claim_prize::*;
pub use close_raffle::*;
pub use create_raffle::*;
pub use deposit_prize::*;
pub use enter_raffle::*;
pub use fulfill_randomness::*;
pub use init_config::*;
pub use init_participant_stats::*;
pub use refund::*;
pub use select_winners::*;
pub use views::*;
pub use withdraw_prize::*;

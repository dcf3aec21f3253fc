pub use config::*;
pub use currency::*;
pub use entry_ledger::*;
pub use participant::*;
pub use pricing::*;
pub use prize::*;
pub use raffle::*;
pub use randomness::*;
pub use treasury::*;
pub use winner::*;

pub mod config;
pub mod currency;
pub mod entry_ledger;
pub mod participant;
pub mod pricing;
pub mod prize;
pub mod raffle;
pub mod randomness;
pub mod treasury;
pub mod winner;

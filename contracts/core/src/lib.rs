#[cfg(not(feature = "library"))]
pub mod contract;
pub mod error;
pub mod execute;
pub mod genesis;
pub mod ledger;
pub mod msg;
pub mod query;
pub mod state;
#[cfg(test)]
mod testing;
pub mod utils;

pub const CONTRACT_NAME: &str = "crates.io:denom-registry-core";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// reply IDs
const AFTER_MINT: u64 = 1111;
const AFTER_TRANSFER: u64 = 2222;

pub mod contract;
mod error;
pub mod msg;
pub mod state;

#[cfg(test)]
mod test_utils;

pub use crate::error::ContractError;

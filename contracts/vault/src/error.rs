use cosmwasm_std::{ConversionOverflowError, OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    ConversionOverflow(#[from] ConversionOverflowError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Invalid amount")]
    InvalidAmount {},

    #[error("Invalid parameter: {msg}")]
    InvalidParameter { msg: String },

    #[error("Insufficient liquidity: requested {requested}, available {available}")]
    InsufficientLiquidity {
        requested: Uint128,
        available: Uint128,
    },

    #[error("Insufficient balance: {available} available")]
    InsufficientBalance { available: Uint128 },

    #[error("Position {position_id} not found")]
    PositionNotFound { position_id: u64 },

    #[error("Position {position_id} is closed")]
    PositionClosed { position_id: u64 },

    #[error("Position {position_id} still has outstanding debt")]
    OutstandingDebt { position_id: u64 },

    #[error("Wrong token sent")]
    WrongToken {},
}

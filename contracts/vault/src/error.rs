use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    StdError(#[from] StdError),
    #[error("Payment error: {0}")]
    PaymentError(#[from] PaymentError),
    #[error("Sender is not an admin")]
    Unauthorized(),
    #[error("Admin not found")]
    AdminNotFound(),
    #[error("The contract needs at least 1 admin")]
    LastAdmin(),
    #[error("Buy price {buy} must not exceed sell price {sell}")]
    InvalidPriceOrdering { buy: Uint128, sell: Uint128 },
    #[error("Percentage {0} is outside of [0, 50]")]
    OutOfRange(i64),
    #[error("A withdrawal request is already pending")]
    PendingRequestExists(),
    #[error("Requested {requested} exceeds the withdrawal ceiling of {ceiling}")]
    ExceedsPercentageLimit {
        requested: Uint128,
        ceiling: Uint128,
    },
    #[error("No approved withdrawal request")]
    NoApprovedRequest(),
    #[error("Vault holds {available}, cannot pay out {requested}")]
    InsufficientBalance {
        requested: Uint128,
        available: Uint128,
    },
    #[error("Token contract is not configured")]
    TokenContractNotSet(),
    #[error("Token contract call failed: {0}")]
    ExternalCallFailure(String),
    #[error("Integer overflow")]
    Overflow(),
}

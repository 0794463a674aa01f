use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    StdError(#[from] StdError),
    #[error("Unauthorized")]
    Unauthorized(),
    #[error("No vault has been registered")]
    VaultNotSet(),
    #[error("Balance of {available} is lower than {requested}")]
    InsufficientBalance {
        requested: Uint128,
        available: Uint128,
    },
    #[error("Allowance of {available} is lower than {requested}")]
    InsufficientAllowance {
        requested: Uint128,
        available: Uint128,
    },
    #[error("Integer overflow")]
    Overflow(),
}

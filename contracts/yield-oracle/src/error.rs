use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("exchange rate mantissa must be positive")]
    ZeroExchangeRate,

    #[error("no operators configured")]
    NoOperators,
}

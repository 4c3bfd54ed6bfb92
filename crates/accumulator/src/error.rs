use common::CoinDenomination;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccumulatorError {
    #[error("Invalid parameters for accumulator: {0}")]
    InvalidParameters(String),

    #[error("Accumulator is not initialized")]
    NotInitialized,

    #[error(
        "Wrong denomination for coin. Expected coins of denomination: {expected}. \
         Instead, got a coin of denomination: {got}"
    )]
    DenominationMismatch {
        expected: CoinDenomination,
        got: CoinDenomination,
    },

    #[error("Coin is not valid")]
    InvalidCoin,

    #[error("Modulus index {index} out of range for {len} moduli")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, AccumulatorError>;

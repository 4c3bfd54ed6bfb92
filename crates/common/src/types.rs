use crate::params::AccumulatorParams;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Value class of a coin. Coins and accumulators only mix within one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CoinDenomination {
    One,
    Ten,
    TwentyFive,
    Fifty,
    OneHundred,
}

impl CoinDenomination {
    pub const ALL: [CoinDenomination; 5] = [
        CoinDenomination::One,
        CoinDenomination::Ten,
        CoinDenomination::TwentyFive,
        CoinDenomination::Fifty,
        CoinDenomination::OneHundred,
    ];

    /// Face value of the denomination.
    pub fn value(&self) -> u32 {
        match self {
            CoinDenomination::One => 1,
            CoinDenomination::Ten => 10,
            CoinDenomination::TwentyFive => 25,
            CoinDenomination::Fifty => 50,
            CoinDenomination::OneHundred => 100,
        }
    }

    /// Inverse of [`CoinDenomination::value`].
    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.value() == value)
    }
}

impl fmt::Display for CoinDenomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The public half of a minted coin: its commitment value and denomination.
///
/// Two coins are equal when both the commitment and the denomination match;
/// the parameter object is context, not identity.
#[derive(Debug, Clone)]
pub struct PublicCoin {
    params: Arc<AccumulatorParams>,
    value: BigUint,
    denomination: CoinDenomination,
}

impl PublicCoin {
    pub fn new(params: Arc<AccumulatorParams>, value: BigUint, denomination: CoinDenomination) -> Self {
        PublicCoin {
            params,
            value,
            denomination,
        }
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn denomination(&self) -> CoinDenomination {
        self.denomination
    }

    pub fn params(&self) -> &Arc<AccumulatorParams> {
        &self.params
    }

    /// Checks that the commitment lies strictly between the configured coin
    /// bounds and is a probable prime.
    pub fn validate(&self) -> bool {
        if self.value <= self.params.min_coin_value {
            return false;
        }
        if self.value >= self.params.max_coin_value {
            return false;
        }
        num_prime::nt_funcs::is_prime(&self.value, None).probably()
    }
}

impl PartialEq for PublicCoin {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.denomination == other.denomination
    }
}

impl Eq for PublicCoin {}

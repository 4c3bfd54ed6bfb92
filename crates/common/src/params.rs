//! Trusted-setup parameters consumed by the accumulator.
//!
//! The parameter object is produced once by an external setup ceremony and then
//! shared read-only (usually behind an `Arc`) by every accumulator and witness.

use crate::bigint_serde;
use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParamsError {
    #[error("modulus set must contain at least one modulus")]
    EmptyModulusSet,

    #[error("expected {expected} {what}, found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("modulus {index} must be greater than 2")]
    InvalidModulus { index: usize },

    #[error("base {index} must lie in [2, modulus)")]
    InvalidBase { index: usize },

    #[error("coin bounds are empty: min must be below max")]
    InvalidCoinBounds,

    #[error("malformed integer: {0}")]
    MalformedInteger(String),
}

/// Accumulator parameters: one `(modulus, base)` lane per independent group.
///
/// `Default` yields an uninitialized, empty parameter set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulatorParams {
    /// Set by the setup ceremony once every field below is populated.
    pub initialized: bool,
    /// Configured number of moduli in the set.
    pub modulus_count: usize,
    #[serde(with = "bigint_serde::seq")]
    pub accumulator_moduli: Vec<BigUint>,
    #[serde(with = "bigint_serde::seq")]
    pub accumulator_bases: Vec<BigUint>,
    /// Exclusive lower bound on a coin commitment.
    #[serde(with = "bigint_serde")]
    pub min_coin_value: BigUint,
    /// Exclusive upper bound on a coin commitment.
    #[serde(with = "bigint_serde")]
    pub max_coin_value: BigUint,
}

impl AccumulatorParams {
    /// Builds an initialized parameter set whose modulus count is taken from
    /// `moduli`, then checks its shape.
    pub fn new(
        moduli: Vec<BigUint>,
        bases: Vec<BigUint>,
        min_coin_value: BigUint,
        max_coin_value: BigUint,
    ) -> Result<Self, ParamsError> {
        let params = AccumulatorParams {
            initialized: true,
            modulus_count: moduli.len(),
            accumulator_moduli: moduli,
            accumulator_bases: bases,
            min_coin_value,
            max_coin_value,
        };
        params.validate_shape()?;
        Ok(params)
    }

    /// Checks lane counts against `modulus_count` and the range of every
    /// modulus and base.
    pub fn validate_shape(&self) -> Result<(), ParamsError> {
        if self.modulus_count == 0 {
            return Err(ParamsError::EmptyModulusSet);
        }
        if self.accumulator_moduli.len() != self.modulus_count {
            return Err(ParamsError::LengthMismatch {
                what: "moduli",
                expected: self.modulus_count,
                found: self.accumulator_moduli.len(),
            });
        }
        if self.accumulator_bases.len() != self.modulus_count {
            return Err(ParamsError::LengthMismatch {
                what: "bases",
                expected: self.modulus_count,
                found: self.accumulator_bases.len(),
            });
        }

        let two = BigUint::from(2u32);
        for (index, (modulus, base)) in self.lanes().enumerate() {
            if *modulus <= two {
                return Err(ParamsError::InvalidModulus { index });
            }
            if *base < two || base >= modulus {
                return Err(ParamsError::InvalidBase { index });
            }
        }

        if self.min_coin_value >= self.max_coin_value {
            return Err(ParamsError::InvalidCoinBounds);
        }
        Ok(())
    }

    /// Iterates the `(modulus, base)` pairs in lane order.
    pub fn lanes(&self) -> impl Iterator<Item = (&BigUint, &BigUint)> {
        self.accumulator_moduli.iter().zip(self.accumulator_bases.iter())
    }

    pub fn modulus(&self, index: usize) -> Option<&BigUint> {
        self.accumulator_moduli.get(index)
    }

    /// Hex SHA-256 over the modulus count, moduli and bases.
    ///
    /// Identifies the group an accumulator value lives in, so a saved value can
    /// be matched back to the parameters it was computed under.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.modulus_count as u64).to_le_bytes());
        for n in self.accumulator_moduli.iter().chain(self.accumulator_bases.iter()) {
            let bytes = n.to_bytes_be();
            hasher.update((bytes.len() as u64).to_le_bytes());
            hasher.update(&bytes);
        }
        hex::encode(hasher.finalize())
    }

    /// Whether `value` is a usable accumulator value for lane `index`.
    pub fn is_lane_value(&self, index: usize, value: &BigUint) -> bool {
        match self.modulus(index) {
            Some(modulus) => *value >= BigUint::one() && value < modulus,
            None => false,
        }
    }
}

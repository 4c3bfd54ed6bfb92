//! RSA-style accumulator over a set of one or more moduli.
//!
//! Every lane `i` holds `base_i^(c_1 * c_2 * ... * c_k) mod N_i` for the coins
//! accumulated so far. A single-modulus parameter set is just the one-lane case.

use crate::coin::Coin;
use crate::error::{AccumulatorError, Result};
use crate::observer::{AccumulateEvent, AccumulateObserver};
use common::{AccumulatorParams, CoinDenomination};
use num_bigint::BigUint;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;

/// Accumulated value for one denomination.
///
/// Mutation goes through `&mut self`, so concurrent accumulation into one
/// instance is ruled out at compile time; share behind a lock if needed.
#[derive(Debug, Clone)]
pub struct Accumulator {
    params: Arc<AccumulatorParams>,
    denomination: CoinDenomination,
    /// One entry per modulus, in lane order.
    value: Vec<BigUint>,
}

impl Accumulator {
    /// Creates an empty accumulator whose lanes start at the parameter bases.
    pub fn new(params: Arc<AccumulatorParams>, denomination: CoinDenomination) -> Result<Self> {
        Self::check_params(&params)?;

        let value = params.accumulator_bases.clone();
        if value.len() != params.modulus_count {
            return Err(AccumulatorError::InvalidParameters(format!(
                "number of elements in accumulator ({}) must match modulus count ({})",
                value.len(),
                params.modulus_count
            )));
        }

        Ok(Accumulator {
            params,
            denomination,
            value,
        })
    }

    /// Creates an accumulator at a known state, e.g. a published checkpoint.
    ///
    /// Each lane value must lie in `[1, N_i)`.
    pub fn with_value(
        params: Arc<AccumulatorParams>,
        denomination: CoinDenomination,
        value: Vec<BigUint>,
    ) -> Result<Self> {
        Self::check_params(&params)?;

        if value.len() != params.modulus_count {
            return Err(AccumulatorError::InvalidParameters(format!(
                "expected {} accumulator values, got {}",
                params.modulus_count,
                value.len()
            )));
        }
        if let Some(index) = (0..value.len()).find(|&i| !params.is_lane_value(i, &value[i])) {
            return Err(AccumulatorError::InvalidParameters(format!(
                "accumulator value {} is outside its modulus",
                index
            )));
        }

        Ok(Accumulator {
            params,
            denomination,
            value,
        })
    }

    fn check_params(params: &AccumulatorParams) -> Result<()> {
        if !params.initialized {
            return Err(AccumulatorError::InvalidParameters(
                "parameters are not initialized".to_string(),
            ));
        }
        params
            .validate_shape()
            .map_err(|e| AccumulatorError::InvalidParameters(e.to_string()))
    }

    /// Folds `coin` into every lane: `value_i = value_i^coin mod N_i`.
    ///
    /// Checks run in a fixed order (initialized, denomination, validity) and
    /// the value is only replaced once every lane has been computed.
    pub fn accumulate<C: Coin + ?Sized>(&mut self, coin: &C) -> Result<()> {
        self.check_coin(coin)?;
        self.value = self.fold(coin.value());
        trace!(
            "accumulated coin into denomination {} ({} lanes)",
            self.denomination,
            self.value.len()
        );
        Ok(())
    }

    /// Folds several coins at once. Every coin is checked before any lane is
    /// touched, so either all of them are accumulated or none.
    ///
    /// Returns the number of coins folded in.
    pub fn accumulate_all<'a, C, I>(&mut self, coins: I) -> Result<usize>
    where
        C: Coin + 'a,
        I: IntoIterator<Item = &'a C>,
    {
        let coins: Vec<&C> = coins.into_iter().collect();
        if self.value.is_empty() {
            return Err(AccumulatorError::NotInitialized);
        }
        for coin in &coins {
            self.check_coin(*coin)?;
        }
        if coins.is_empty() {
            return Ok(0);
        }

        let exponent: BigUint = coins.iter().map(|c| c.value()).product();
        self.value = self.fold(&exponent);
        debug!(
            "accumulated {} coins into denomination {}",
            coins.len(),
            self.denomination
        );
        Ok(coins.len())
    }

    /// Same as [`accumulate`](Self::accumulate), reporting the outcome and
    /// elapsed time to `observer`.
    pub fn accumulate_observed<C: Coin + ?Sized>(
        &mut self,
        coin: &C,
        observer: &dyn AccumulateObserver,
    ) -> Result<()> {
        let start = Instant::now();
        let result = self.accumulate(coin);
        observer.on_accumulate(&AccumulateEvent {
            denomination: self.denomination,
            lanes: self.value.len(),
            elapsed: start.elapsed(),
            succeeded: result.is_ok(),
        });
        result
    }

    /// Chainable form of [`accumulate`](Self::accumulate).
    pub fn fold_in<C: Coin + ?Sized>(&mut self, coin: &C) -> Result<&mut Self> {
        self.accumulate(coin)?;
        Ok(self)
    }

    fn check_coin<C: Coin + ?Sized>(&self, coin: &C) -> Result<()> {
        if self.value.is_empty() {
            return Err(AccumulatorError::NotInitialized);
        }
        if coin.denomination() != self.denomination {
            return Err(AccumulatorError::DenominationMismatch {
                expected: self.denomination,
                got: coin.denomination(),
            });
        }
        if !coin.validate() {
            return Err(AccumulatorError::InvalidCoin);
        }
        Ok(())
    }

    /// Raises every lane to `exponent` under its own modulus. Lanes are
    /// independent and run on the rayon pool.
    fn fold(&self, exponent: &BigUint) -> Vec<BigUint> {
        self.value
            .par_iter()
            .zip(self.params.accumulator_moduli.par_iter())
            .map(|(v, modulus)| v.modpow(exponent, modulus))
            .collect()
    }

    pub fn denomination(&self) -> CoinDenomination {
        self.denomination
    }

    pub fn value(&self) -> &[BigUint] {
        &self.value
    }

    pub fn value_at(&self, index: usize) -> Result<&BigUint> {
        self.value.get(index).ok_or(AccumulatorError::IndexOutOfRange {
            index,
            len: self.value.len(),
        })
    }

    pub fn params(&self) -> &Arc<AccumulatorParams> {
        &self.params
    }
}

/// An accumulator with no parameters and no lanes; every fold on it fails
/// with `NotInitialized`.
impl Default for Accumulator {
    fn default() -> Self {
        Accumulator {
            params: Arc::default(),
            denomination: CoinDenomination::One,
            value: Vec::new(),
        }
    }
}

/// Accumulators compare by value only; the denomination is not part of the
/// numeric state.
impl PartialEq for Accumulator {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Accumulator {}

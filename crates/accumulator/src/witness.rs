//! Membership witness for one accumulated coin.
//!
//! A witness is an accumulator over every coin except its own `element`.
//! Folding `element` back in must reproduce the public accumulator.

use crate::accumulator::Accumulator;
use crate::coin::Coin;
use crate::error::Result;
use common::AccumulatorParams;
use num_bigint::BigUint;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AccumulatorWitness<C> {
    params: Arc<AccumulatorParams>,
    witness: Accumulator,
    element: C,
}

impl<C: Coin + Clone + PartialEq> AccumulatorWitness<C> {
    /// Starts a witness for `coin` from `checkpoint`, an accumulator state that
    /// does not contain `coin`. No validation happens here; `coin` is the
    /// holder's own, already-validated element.
    pub fn new(params: Arc<AccumulatorParams>, checkpoint: &Accumulator, coin: C) -> Self {
        AccumulatorWitness {
            params,
            witness: checkpoint.clone(),
            element: coin,
        }
    }

    /// Re-points this witness at a new checkpoint and element.
    pub fn reset(&mut self, checkpoint: &Accumulator, coin: C) {
        self.witness = checkpoint.clone();
        self.element = coin;
    }

    /// Folds another coin into the witness. The witness's own element is
    /// silently skipped.
    pub fn add_element(&mut self, coin: &C) -> Result<()> {
        if *coin == self.element {
            trace!("skipping witness element");
            return Ok(());
        }
        self.witness.accumulate(coin)
    }

    /// Folds every coin in order, stopping at the first failure. Coins folded
    /// before the failure stay folded.
    pub fn add_elements<'a, I>(&mut self, coins: I) -> Result<()>
    where
        C: 'a,
        I: IntoIterator<Item = &'a C>,
    {
        for coin in coins {
            self.add_element(coin)?;
        }
        Ok(())
    }

    /// Chainable form of [`add_element`](Self::add_element).
    pub fn fold_in(&mut self, coin: &C) -> Result<&mut Self> {
        self.add_element(coin)?;
        Ok(self)
    }

    /// Checks that `public_coin` is this witness's element and that folding the
    /// element into the witness yields `accumulator`.
    ///
    /// Works on a copy, so it can be called repeatedly as `accumulator` grows.
    pub fn verify_witness(&self, accumulator: &Accumulator, public_coin: &C) -> bool {
        let mut temp = self.witness.clone();
        if let Err(e) = temp.accumulate(&self.element) {
            debug!("witness element could not be folded: {}", e);
            return false;
        }
        temp == *accumulator && self.element == *public_coin
    }

    pub fn value(&self) -> &[BigUint] {
        self.witness.value()
    }

    pub fn value_at(&self, index: usize) -> Result<&BigUint> {
        self.witness.value_at(index)
    }

    pub fn element(&self) -> &C {
        &self.element
    }

    pub fn params(&self) -> &Arc<AccumulatorParams> {
        &self.params
    }
}

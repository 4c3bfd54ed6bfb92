//! Serializable snapshot of an accumulator.
//!
//! Lane values, denomination and the parameter fingerprint are enough to
//! rebuild the accumulator later. Where the snapshot is stored is up to the
//! caller.

use crate::accumulator::Accumulator;
use crate::error::{AccumulatorError, Result};
use common::{bigint_serde, AccumulatorParams, CoinDenomination};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulatorCheckpoint {
    pub denomination: CoinDenomination,
    /// `AccumulatorParams::fingerprint` of the parameters the value lives under.
    pub params_fingerprint: String,
    #[serde(with = "bigint_serde::seq")]
    pub value: Vec<BigUint>,
}

impl Accumulator {
    pub fn checkpoint(&self) -> AccumulatorCheckpoint {
        AccumulatorCheckpoint {
            denomination: self.denomination(),
            params_fingerprint: self.params().fingerprint(),
            value: self.value().to_vec(),
        }
    }

    /// Rebuilds an accumulator from `checkpoint`. The checkpoint must have been
    /// taken under the same modulus set as `params`.
    pub fn restore(params: Arc<AccumulatorParams>, checkpoint: &AccumulatorCheckpoint) -> Result<Self> {
        let fingerprint = params.fingerprint();
        if fingerprint != checkpoint.params_fingerprint {
            return Err(AccumulatorError::InvalidParameters(format!(
                "checkpoint was taken under parameters {}, not {}",
                checkpoint.params_fingerprint, fingerprint
            )));
        }
        debug!(
            "restoring denomination {} accumulator from checkpoint",
            checkpoint.denomination
        );
        Accumulator::with_value(params, checkpoint.denomination, checkpoint.value.clone())
    }
}

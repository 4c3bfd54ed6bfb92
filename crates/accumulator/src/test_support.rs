use common::{AccumulatorParams, CoinDenomination};
use num_bigint::BigUint;
use std::cell::Cell;
use std::sync::Arc;

use crate::coin::Coin;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn single_params(base: u32, modulus: u32) -> Arc<AccumulatorParams> {
    lane_params(&[(base, modulus)])
}

pub(crate) fn lane_params(lanes: &[(u32, u32)]) -> Arc<AccumulatorParams> {
    let (bases, moduli): (Vec<_>, Vec<_>) = lanes
        .iter()
        .map(|&(b, m)| (BigUint::from(b), BigUint::from(m)))
        .unzip();
    Arc::new(
        AccumulatorParams::new(moduli, bases, BigUint::from(1u32), BigUint::from(u32::MAX)).unwrap(),
    )
}

/// Coin whose validity is fixed at construction; counts how often it was
/// asked to validate.
#[derive(Debug, Clone)]
pub(crate) struct MockCoin {
    value: BigUint,
    denomination: CoinDenomination,
    valid: bool,
    validations: Cell<usize>,
}

impl MockCoin {
    pub(crate) fn new(value: u32, denomination: CoinDenomination) -> Self {
        MockCoin {
            value: BigUint::from(value),
            denomination,
            valid: true,
            validations: Cell::new(0),
        }
    }

    pub(crate) fn invalid(value: u32, denomination: CoinDenomination) -> Self {
        MockCoin {
            valid: false,
            ..Self::new(value, denomination)
        }
    }

    pub(crate) fn validations(&self) -> usize {
        self.validations.get()
    }
}

impl PartialEq for MockCoin {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.denomination == other.denomination
    }
}

impl Coin for MockCoin {
    fn value(&self) -> &BigUint {
        &self.value
    }

    fn denomination(&self) -> CoinDenomination {
        self.denomination
    }

    fn validate(&self) -> bool {
        self.validations.set(self.validations.get() + 1);
        self.valid
    }
}

//! The element seam: anything with a commitment value, a denomination and a
//! validity check can be folded into an accumulator.

use common::{CoinDenomination, PublicCoin};
use num_bigint::BigUint;

pub trait Coin {
    /// The exponent folded into every lane.
    fn value(&self) -> &BigUint;

    fn denomination(&self) -> CoinDenomination;

    /// External correctness check; may be expensive. Coins failing it are
    /// never exponentiated.
    fn validate(&self) -> bool;
}

impl Coin for PublicCoin {
    fn value(&self) -> &BigUint {
        PublicCoin::value(self)
    }

    fn denomination(&self) -> CoinDenomination {
        PublicCoin::denomination(self)
    }

    fn validate(&self) -> bool {
        PublicCoin::validate(self)
    }
}

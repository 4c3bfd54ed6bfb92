//! Collaborator types shared by the accumulator crates.
//!
//! - `AccumulatorParams`: trusted-setup moduli and bases
//! - `PublicCoin` / `CoinDenomination`: the elements being accumulated

pub mod bigint_serde;
pub mod params;
pub mod types;

// Re-export commonly used types
pub use params::{AccumulatorParams, ParamsError};
pub use types::{CoinDenomination, PublicCoin};

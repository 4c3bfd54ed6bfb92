//! Zerocoin Accumulator Library
//!
//! RSA-style accumulators for zero-knowledge coin spending, batched over one
//! or more independent moduli.
//!
//! ## 主要组件
//! - `Accumulator`: the accumulated value of every coin minted in a denomination
//! - `AccumulatorWitness`: an accumulator over every coin except one, used to
//!   prove that coin's membership
//! - `AccumulatorCheckpoint`: snapshot for restoring an accumulator later
//! - `AccumulateObserver`: optional timing hook around accumulation

#[macro_use]
extern crate log;

pub mod accumulator;
pub mod checkpoint;
pub mod coin;
pub mod error;
pub mod observer;
pub mod witness;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use accumulator::Accumulator;
pub use checkpoint::AccumulatorCheckpoint;
pub use coin::Coin;
pub use error::{AccumulatorError, Result};
pub use observer::{AccumulateEvent, AccumulateObserver, LogObserver, NoopObserver};
pub use witness::AccumulatorWitness;

//! Optional instrumentation around accumulation.
//!
//! `Accumulator::accumulate` performs no I/O. Callers that want timings wrap the
//! call with [`Accumulator::accumulate_observed`] and an observer of their choice.
//!
//! [`Accumulator::accumulate_observed`]: crate::Accumulator::accumulate_observed

use common::CoinDenomination;
use std::time::Duration;

/// What happened during one observed accumulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccumulateEvent {
    pub denomination: CoinDenomination,
    /// Number of modulus lanes that were (or would have been) updated.
    pub lanes: usize,
    pub elapsed: Duration,
    pub succeeded: bool,
}

pub trait AccumulateObserver: Send + Sync {
    fn on_accumulate(&self, event: &AccumulateEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AccumulateObserver for NoopObserver {
    fn on_accumulate(&self, _event: &AccumulateEvent) {}
}

/// Reports accumulation timings through the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl AccumulateObserver for LogObserver {
    fn on_accumulate(&self, event: &AccumulateEvent) {
        if event.succeeded {
            debug!(
                "accumulate time: {:?} (denomination {}, {} lanes)",
                event.elapsed, event.denomination, event.lanes
            );
        } else {
            debug!(
                "accumulate rejected after {:?} (denomination {})",
                event.elapsed, event.denomination
            );
        }
    }
}

impl<F> AccumulateObserver for F
where
    F: Fn(&AccumulateEvent) + Send + Sync,
{
    fn on_accumulate(&self, event: &AccumulateEvent) {
        self(event)
    }
}

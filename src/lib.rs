#[macro_use]
extern crate log;

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::sync::Arc;

pub use common::{AccumulatorParams, CoinDenomination, ParamsError, PublicCoin};
pub use zerocoin_accumulator::{
    AccumulateEvent, AccumulateObserver, Accumulator, AccumulatorCheckpoint, AccumulatorError,
    AccumulatorWitness, Coin, LogObserver, NoopObserver,
};

/// Load accumulator parameters from a JSON file
///
/// The file holds the output of the trusted setup: moduli and bases as hex
/// strings, the configured modulus count and the coin bounds. Parameters that
/// are not marked initialized or whose shape is inconsistent are rejected here
/// rather than at the first accumulator construction.
///
/// # Arguments
/// * `path` - Path of the JSON parameter file
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<Arc<AccumulatorParams>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading parameter file {}", path.display()))?;
    let params: AccumulatorParams = serde_json::from_str(&content)
        .with_context(|| format!("parsing parameter file {}", path.display()))?;

    if !params.initialized {
        bail!("parameter file {} is not initialized", path.display());
    }
    params
        .validate_shape()
        .with_context(|| format!("parameter file {} is malformed", path.display()))?;

    info!(
        "loaded accumulator parameters {} ({} moduli) from {}",
        params.fingerprint(),
        params.modulus_count,
        path.display()
    );
    Ok(Arc::new(params))
}

/// Save accumulator parameters to a JSON file
pub fn save_params<P: AsRef<Path>>(params: &AccumulatorParams, path: P) -> Result<()> {
    let path = path.as_ref();
    let content = serde_json::to_string_pretty(params)?;
    std::fs::write(path, content)
        .with_context(|| format!("writing parameter file {}", path.display()))?;
    Ok(())
}

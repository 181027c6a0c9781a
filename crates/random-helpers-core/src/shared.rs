//! The process-wide generator behind `random_int` and `random_bool`.

use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::{debug, info, instrument};

use crate::config::RngConfig;
use crate::error::HelperError;
use crate::rng::{DeterministicRng, StdRngSource};

static SHARED_RNG: OnceLock<Mutex<StdRngSource>> = OnceLock::new();

/// Installs the shared generator built from `config`.
///
/// Must run before the first `random_int` or `random_bool` call; otherwise
/// the generator has already been seeded from the OS.
///
/// # Errors
///
/// Returns `HelperError::Config` if the shared generator already exists.
#[instrument]
pub fn install_shared_rng(config: RngConfig) -> Result<(), HelperError> {
    SHARED_RNG
        .set(Mutex::new(StdRngSource::from_config(&config)))
        .map_err(|_| HelperError::Config("shared generator already initialized".to_owned()))?;
    info!("installed shared generator");
    Ok(())
}

/// Runs `f` with exclusive access to the shared generator, creating it from
/// OS entropy on first use.
pub(crate) fn with_shared_rng<T>(f: impl FnOnce(&mut dyn DeterministicRng) -> T) -> T {
    let rng = SHARED_RNG.get_or_init(|| {
        debug!("seeding shared generator from the OS");
        Mutex::new(StdRngSource::from_config(&RngConfig::default()))
    });

    // Every draw is a single call, so a poisoned guard still holds a valid generator.
    let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut *guard)
}

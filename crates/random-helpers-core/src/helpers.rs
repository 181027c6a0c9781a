//! The helper operations.
//!
//! Each operation comes in two forms: a convenience function using the
//! process-wide generator or stdout, and a `_with`/`write_` form taking the
//! generator or writer explicitly.

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::error::HelperError;
use crate::rng::DeterministicRng;
use crate::shared::with_shared_rng;

/// Returns a pseudo-random integer in `[min, max]` using the shared generator.
///
/// # Errors
///
/// Returns `HelperError::InvalidArgument` if `min > max`, or
/// `HelperError::RangeOverflow` if the range holds more than `i32::MAX`
/// values.
pub fn random_int(min: i32, max: i32) -> Result<i32, HelperError> {
    with_shared_rng(|rng| random_int_with(rng, min, max))
}

/// Returns a pseudo-random integer in `[min, max]` drawn from `rng`.
///
/// The range is validated before `rng` is touched, so a rejected call leaves
/// the generator where it was.
///
/// # Errors
///
/// Returns `HelperError::InvalidArgument` if `min > max`, or
/// `HelperError::RangeOverflow` if the range holds more than `i32::MAX`
/// values.
pub fn random_int_with(
    rng: &mut dyn DeterministicRng,
    min: i32,
    max: i32,
) -> Result<i32, HelperError> {
    validate_range(min, max)?;
    let value = rng.next_i32_range(min, max);
    debug!(min, max, value, "drew random int");
    Ok(value)
}

/// Returns a pseudo-random boolean using the shared generator.
#[must_use]
pub fn random_bool() -> bool {
    with_shared_rng(random_bool_with)
}

/// Returns a pseudo-random boolean drawn from `rng`.
pub fn random_bool_with(rng: &mut dyn DeterministicRng) -> bool {
    let value = rng.next_bool();
    debug!(value, "drew random bool");
    value
}

/// Writes `text` and a newline to standard output.
///
/// # Errors
///
/// Returns `HelperError::Io` if stdout is closed or broken.
pub fn print_message(text: &str) -> Result<(), HelperError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_message(&mut handle, text)
}

/// Writes `text` and a newline to `out`, then flushes it.
///
/// # Errors
///
/// Returns `HelperError::Io` if writing or flushing fails.
pub fn write_message(out: &mut dyn Write, text: &str) -> Result<(), HelperError> {
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

fn validate_range(min: i32, max: i32) -> Result<(), HelperError> {
    if min > max {
        warn!(min, max, "rejected range: min exceeds max");
        return Err(HelperError::InvalidArgument(format!(
            "min ({min}) must not exceed max ({max})"
        )));
    }

    // The value count (max - min) + 1 must itself fit in an i32.
    if i64::from(max) - i64::from(min) >= i64::from(i32::MAX) {
        warn!(min, max, "rejected range: width overflows i32");
        return Err(HelperError::RangeOverflow { min, max });
    }

    Ok(())
}

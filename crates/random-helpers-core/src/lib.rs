//! Random Helpers Core — small stateless utilities.
//!
//! Bounded random integers, fair random booleans, and line-terminated
//! messages on standard output. Randomness flows through the
//! [`rng::DeterministicRng`] abstraction so callers can inject a seeded or
//! scripted generator; the convenience functions share one process-wide
//! generator.

pub mod config;
pub mod error;
pub mod helpers;
pub mod rng;
pub mod shared;

pub use config::RngConfig;
pub use error::HelperError;
pub use helpers::{
    print_message, random_bool, random_bool_with, random_int, random_int_with, write_message,
};
pub use rng::{DeterministicRng, StdRngSource};
pub use shared::install_shared_rng;

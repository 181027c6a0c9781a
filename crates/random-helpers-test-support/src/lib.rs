//! Shared test doubles for the random helpers.

mod output;
mod rng;

pub use output::FailingWriter;
pub use rng::{MockRng, SequenceRng};

#[allow(clippy::module_inception)]
mod rank;

pub use rank::{RankedWords, Word};

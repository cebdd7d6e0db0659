pub mod aggregate;
mod analyzer;
pub mod count;
mod error;
mod filtering;
pub mod generate;
pub mod io;
pub mod partition;
pub mod rank;
pub mod trie;

pub use analyzer::{Analysis, Analyzer, AnalyzerBuilder};
pub use count::FrequencyMap;
pub use error::{Error, Result};
pub use filtering::*;
pub use partition::Boundary;
pub use rank::{RankedWords, Word};
pub use trie::FrequencyTrie;

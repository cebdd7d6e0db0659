use crate::aggregate::Aggregator;
use crate::count::FrequencyMap;
use crate::error::{Error, Result};
use crate::filtering::Punctuation;
use crate::partition::{split_with, Boundary};
use crate::rank::RankedWords;
use crate::trie::FrequencyTrie;
use std::thread::available_parallelism;

const DEFAULT_CHUNK_SIZE: usize = 100;
const FALLBACK_THREADS: usize = 4;

pub struct AnalyzerBuilder {
    chunk_size: usize,
    punctuation: Punctuation,
    threads: Option<usize>,
    boundary: Boundary,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        AnalyzerBuilder {
            chunk_size: DEFAULT_CHUNK_SIZE,
            punctuation: Punctuation::default(),
            threads: None,
            boundary: Boundary::default(),
        }
    }

    /// Characters per chunk.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn punctuation(mut self, punctuation: Punctuation) -> Self {
        self.punctuation = punctuation;
        self
    }

    /// Size of the counting pool. Defaults to the available parallelism.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn build(self) -> Result<Analyzer> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidArgument("chunk size must be positive"));
        }

        let threads = match self.threads {
            Some(t) => t,
            None => match available_parallelism() {
                Ok(par) => usize::from(par),
                Err(_) => FALLBACK_THREADS,
            },
        };

        Ok(Analyzer {
            chunk_size: self.chunk_size,
            boundary: self.boundary,
            aggregator: Aggregator::new(threads, self.punctuation)?,
        })
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        AnalyzerBuilder::new()
    }
}

/**
    Runs the whole pipeline: partition, parallel count, merge, rank and
    finally the lookup trie.
*/
pub struct Analyzer {
    chunk_size: usize,
    boundary: Boundary,
    aggregator: Aggregator,
}

impl Analyzer {
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn threads(&self) -> usize {
        self.aggregator.threads()
    }

    pub fn punctuation(&self) -> &Punctuation {
        self.aggregator.punctuation()
    }

    pub fn frequencies(&self, text: &str) -> Result<FrequencyMap> {
        let chunks = split_with(text, self.chunk_size, self.boundary)?;
        self.aggregator.aggregate(&chunks)
    }

    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        let frequencies = self.frequencies(text)?;
        let ranked = RankedWords::rank(frequencies.clone());
        let trie = FrequencyTrie::from(&ranked);

        log::info!(
            "analyzed {} characters: {} distinct words",
            text.chars().count(),
            ranked.len()
        );

        Ok(Analysis {
            frequencies,
            ranked,
            trie,
        })
    }
}

pub struct Analysis {
    frequencies: FrequencyMap,
    ranked: RankedWords,
    trie: FrequencyTrie,
}

impl Analysis {
    pub fn frequencies(&self) -> &FrequencyMap {
        &self.frequencies
    }

    pub fn ranked(&self) -> &RankedWords {
        &self.ranked
    }

    pub fn trie(&self) -> &FrequencyTrie {
        &self.trie
    }

    pub fn lookup(&self, word: &str) -> u64 {
        self.trie.lookup(word)
    }

    pub fn into_parts(self) -> (FrequencyMap, RankedWords, FrequencyTrie) {
        (self.frequencies, self.ranked, self.trie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_reject_zero_chunk_size() {
        assert!(matches!(
            AnalyzerBuilder::new().chunk_size(0).build(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn it_should_reject_zero_threads() {
        assert!(matches!(
            AnalyzerBuilder::new().threads(0).build(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn it_should_apply_configuration() {
        let analyzer = AnalyzerBuilder::new()
            .chunk_size(7)
            .threads(3)
            .boundary(Boundary::Whitespace)
            .punctuation(Punctuation::from("."))
            .build()
            .unwrap();

        assert_eq!(analyzer.chunk_size(), 7);
        assert_eq!(analyzer.threads(), 3);
        assert_eq!(analyzer.boundary(), Boundary::Whitespace);
        assert_eq!(analyzer.punctuation(), &Punctuation::from("."));
    }

    #[test]
    fn it_should_default_to_available_parallelism() {
        let analyzer = AnalyzerBuilder::default().build().unwrap();

        assert!(analyzer.threads() >= 1);
        assert_eq!(analyzer.chunk_size(), 100);
        assert_eq!(analyzer.boundary(), Boundary::Exact);
    }

    #[test]
    fn it_should_analyze_empty_text() {
        let analysis = AnalyzerBuilder::new().threads(2).build().unwrap().analyze("").unwrap();

        assert!(analysis.frequencies().is_empty());
        assert!(analysis.ranked().is_empty());
        assert!(analysis.trie().is_empty());
        assert_eq!(analysis.lookup("anything"), 0);
    }
}

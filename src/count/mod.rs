use crate::filtering::Punctuation;
use std::collections::HashMap;

/// Lower-cased word to number of occurrences.
pub type FrequencyMap = HashMap<String, u64>;

/**
    Counts the words of a single chunk.

    Characters in `punctuation` are removed first, the remainder is split on
    whitespace and every token is lower-cased.
*/
pub fn count_chunk(chunk: &str, punctuation: &Punctuation) -> FrequencyMap {
    let mut counts = FrequencyMap::new();

    for word in punctuation.strip(chunk).split_whitespace() {
        *counts.entry(word.to_lowercase()).or_default() += 1;
    }

    counts
}

/// Adds every count of `partial` into `global`.
pub fn merge(global: &mut FrequencyMap, partial: FrequencyMap) {
    for (word, count) in partial {
        *global.entry(word).or_default() += count;
    }
}

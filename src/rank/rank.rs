use crate::count::FrequencyMap;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use rayon::slice::ParallelSliceMut;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub content: String,
    pub count: u64,
}

impl Word {
    pub fn new(content: impl Into<String>, count: u64) -> Self {
        Self {
            content: content.into(),
            count,
        }
    }

    /// Higher counts first, equal counts in ascending word order.
    fn rank_order(&self, other: &Word) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.content.cmp(&other.content))
    }
}

impl From<(String, u64)> for Word {
    fn from((content, count): (String, u64)) -> Self {
        Word { content, count }
    }
}

/**
    Every distinct word of a frequency mapping, most frequent first.
*/
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankedWords(Vec<Word>);

impl RankedWords {
    pub fn rank(frequencies: FrequencyMap) -> RankedWords {
        let mut n = frequencies
            .into_par_iter()
            .map(Word::from)
            .collect::<Vec<Word>>();

        n.par_sort_unstable_by(Word::rank_order);

        log::debug!("ranked {} distinct words", n.len());

        RankedWords(n)
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn top(&self, n: usize) -> &[Word] {
        &self.0[..n.min(self.0.len())]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.0.iter()
    }
}

impl IntoIterator for RankedWords {
    type Item = Word;
    type IntoIter = std::vec::IntoIter<Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RankedWords {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

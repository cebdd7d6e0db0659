use crate::rank::{RankedWords, Word};
use std::collections::HashMap;

const ROOT: usize = 0;

#[derive(Clone, Debug, Default)]
struct Node {
    children: HashMap<char, usize>,
    count: u64,
}

/**
    Prefix tree storing the cumulative count of every inserted word.

    Nodes live in one arena and refer to their children by index. The root
    stands for the empty prefix and never holds a count. Both `insert` and
    `lookup` touch one node per character of the word.
*/
#[derive(Clone, Debug)]
pub struct FrequencyTrie {
    nodes: Vec<Node>,
}

impl FrequencyTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Adds `count` to the stored count of `word`. Inserting an empty word does nothing.
    pub fn insert(&mut self, word: &str, count: u64) {
        if word.is_empty() {
            return;
        }

        let mut node_idx = ROOT;
        for ch in word.chars() {
            node_idx = match self.nodes[node_idx].children.get(&ch) {
                Some(&id) => id,
                None => {
                    let new_node_id = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node_idx].children.insert(ch, new_node_id);
                    new_node_id
                }
            };
        }

        self.nodes[node_idx].count += count;
    }

    /// Cumulative count of `word`, zero if it was never inserted as a whole word.
    pub fn lookup(&self, word: &str) -> u64 {
        if word.is_empty() {
            return 0;
        }

        let mut node_idx = ROOT;
        for ch in word.chars() {
            match self.nodes[node_idx].children.get(&ch) {
                Some(&next_idx) => node_idx = next_idx,
                None => return 0,
            }
        }

        self.nodes[node_idx].count
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

impl Default for FrequencyTrie {
    fn default() -> Self {
        FrequencyTrie::new()
    }
}

impl<S: AsRef<str>> Extend<(S, u64)> for FrequencyTrie {
    fn extend<T: IntoIterator<Item = (S, u64)>>(&mut self, iter: T) {
        for (word, count) in iter {
            self.insert(word.as_ref(), count);
        }
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for FrequencyTrie {
    fn from_iter<T: IntoIterator<Item = (S, u64)>>(iter: T) -> Self {
        let mut trie = FrequencyTrie::new();
        trie.extend(iter);
        trie
    }
}

impl From<&RankedWords> for FrequencyTrie {
    fn from(ranked: &RankedWords) -> Self {
        let trie = ranked
            .iter()
            .map(|Word { content, count }| (content, *count))
            .collect::<FrequencyTrie>();

        log::debug!(
            "built trie of {} nodes from {} words",
            trie.node_count(),
            ranked.len()
        );

        trie
    }
}

use crate::error::{Error, Result};
use itertools::Itertools;
use std::iter::once;

/// Where a chunk is allowed to end.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Boundary {
    /// Cut after exactly `chunk_size` characters. A word crossing the cut is
    /// counted as two shorter words.
    #[default]
    Exact,
    /// Move the cut back to just after the last whitespace inside the chunk
    /// so no word is split. A chunk without any whitespace is cut exactly.
    Whitespace,
}

/**
    Splits `text` into consecutive chunks of at most `chunk_size` characters.

    Chunks borrow from `text` and concatenate back to it.
*/
pub fn split(text: &str, chunk_size: usize) -> Result<Vec<&str>> {
    split_with(text, chunk_size, Boundary::Exact)
}

pub fn split_with(text: &str, chunk_size: usize, boundary: Boundary) -> Result<Vec<&str>> {
    if chunk_size == 0 {
        return Err(Error::InvalidArgument("chunk size must be positive"));
    }

    let chunks = match boundary {
        Boundary::Exact => text
            .char_indices()
            .map(|(i, _)| i)
            .step_by(chunk_size)
            .chain(once(text.len()))
            .tuple_windows()
            .map(|(start, end)| &text[start..end])
            .collect::<Vec<&str>>(),
        Boundary::Whitespace => split_on_whitespace(text, chunk_size),
    };

    log::debug!(
        "split {} bytes into {} chunks (chunk_size={}, boundary={:?})",
        text.len(),
        chunks.len(),
        chunk_size,
        boundary
    );

    Ok(chunks)
}

fn split_on_whitespace(text: &str, chunk_size: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let rest = &text[start..];
        let end = match rest.char_indices().nth(chunk_size) {
            None => text.len(),
            Some((offset, next)) => {
                let window = &rest[..offset];
                let splits_word = !next.is_whitespace()
                    && window.chars().next_back().map_or(false, |c| !c.is_whitespace());

                if splits_word {
                    window
                        .char_indices()
                        .rev()
                        .find(|(_, c)| c.is_whitespace())
                        .map_or(start + offset, |(i, c)| start + i + c.len_utf8())
                } else {
                    start + offset
                }
            }
        };

        chunks.push(&text[start..end]);
        start = end;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_split_by_characters() {
        let chunks = split("abcdefg", 3).unwrap();
        assert_eq!(chunks, vec!["abc", "def", "g"]);
    }

    #[test]
    fn it_should_not_split_multibyte_characters() {
        let text = "héllo wörld 日本語";
        let chunks = split(text, 4).unwrap();

        assert!(chunks.iter().all(|c| c.chars().count() <= 4));
        assert_eq!(chunks[0], "héll");
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn it_should_reject_zero_chunk_size() {
        assert!(matches!(split("abc", 0), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            split_with("abc", 0, Boundary::Whitespace),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn it_should_yield_nothing_for_empty_text() {
        assert!(split("", 5).unwrap().is_empty());
        assert!(split_with("", 5, Boundary::Whitespace).unwrap().is_empty());
    }

    #[test]
    fn it_should_keep_a_short_text_whole() {
        assert_eq!(split("the cat", 100).unwrap(), vec!["the cat"]);
    }

    #[test]
    fn it_should_split_words_on_exact_boundaries() {
        assert_eq!(split("hello world", 3).unwrap(), vec!["hel", "lo ", "wor", "ld"]);
    }

    #[test]
    fn it_should_move_cuts_back_to_whitespace() {
        let chunks = split_with("the cat sat on the mat", 9, Boundary::Whitespace).unwrap();

        assert_eq!(chunks, vec!["the cat ", "sat on ", "the mat"]);
    }

    #[test]
    fn it_should_cut_exactly_when_no_whitespace_is_available() {
        let chunks = split_with("abcdefgh ij", 3, Boundary::Whitespace).unwrap();

        assert_eq!(chunks, vec!["abc", "def", "gh ", "ij"]);
    }

    #[test]
    fn it_should_keep_exact_cut_that_lands_on_whitespace() {
        let chunks = split_with("ab cd", 2, Boundary::Whitespace).unwrap();

        assert_eq!(chunks, vec!["ab", " ", "cd"]);
    }

    #[test]
    fn it_should_round_trip_for_many_sizes() {
        let text = "Ünïcödé text, with punctuation! and\nnewlines\t\ttabs 日本語のテキスト.";

        for size in 1..=text.chars().count() + 2 {
            for boundary in [Boundary::Exact, Boundary::Whitespace] {
                let chunks = split_with(text, size, boundary).unwrap();
                assert_eq!(chunks.concat(), text, "size {size} {boundary:?}");
                assert!(chunks.iter().all(|c| !c.is_empty()));
                assert!(chunks.iter().all(|c| c.chars().count() <= size));
            }
        }
    }
}

use crate::error::{Error, Result};
use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const DEFAULT_VOCABULARY: &[&str] = &[
    "Hello",
    "world",
    "this",
    "is",
    "a",
    "simple",
    "example",
    "of",
    "automatic",
    "text",
    "generation",
    "with",
    "Go",
    "language",
    "programming",
    "fun",
    "easy",
];

/**
    Produces short random sentences from a fixed vocabulary.

    Words are separated by a space or, now and then, a sentence break. Every
    word is capitalised and the text ends with a period.
*/
pub struct TextGenerator {
    vocabulary: Vec<String>,
    random: Mutex<SmallRng>,
}

impl TextGenerator {
    pub fn new(vocabulary: Vec<String>, random: SmallRng) -> Self {
        TextGenerator {
            vocabulary,
            random: Mutex::new(random),
        }
    }

    pub fn from_entropy() -> Self {
        TextGenerator::new(Self::default_vocabulary(), SmallRng::from_entropy())
    }

    pub fn from_seed(seed: u64) -> Self {
        TextGenerator::new(Self::default_vocabulary(), SmallRng::seed_from_u64(seed))
    }

    pub fn default_vocabulary() -> Vec<String> {
        DEFAULT_VOCABULARY.iter().map(|w| w.to_string()).collect()
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Generates at most `max_words` words; may stop early after the second word.
    pub fn generate(&self, max_words: usize) -> Result<String> {
        if max_words == 0 {
            return Err(Error::InvalidArgument("word count must be positive"));
        }
        if self.vocabulary.is_empty() {
            return Err(Error::InvalidArgument("vocabulary is empty"));
        }

        let mut rng = self.random.lock();
        let mut text = String::new();
        let mut used = 0;

        while used < max_words {
            let Some(word) = self.vocabulary.choose(&mut *rng) else {
                break;
            };

            if used > 0 && !rng.gen_bool(0.5) && rng.gen_ratio(1, 3) {
                text.push_str(". ");
            } else {
                text.push(' ');
            }
            text.push_str(word);
            used += 1;

            if used > 2 && rng.gen_ratio(1, 5) {
                break;
            }
        }
        drop(rng);

        let mut sentence = title_case(text.trim_matches(|c| c == ' ' || c == '.'));
        sentence.push('.');

        Ok(sentence)
    }
}

impl Default for TextGenerator {
    fn default() -> Self {
        TextGenerator::from_entropy()
    }
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if at_word_start && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_respect_the_word_limit() {
        let generator = TextGenerator::from_seed(7);

        for _ in 0..200 {
            let text = generator.generate(6).unwrap();
            let words = text.split_whitespace().count();
            assert!((1..=6).contains(&words), "{text}");
            assert!(text.ends_with('.'));
        }
    }

    #[test]
    fn it_should_be_reproducible_from_a_seed() {
        let a = TextGenerator::from_seed(42);
        let b = TextGenerator::from_seed(42);

        for _ in 0..10 {
            assert_eq!(a.generate(20).unwrap(), b.generate(20).unwrap());
        }
    }

    #[test]
    fn it_should_capitalise_every_word() {
        let generator = TextGenerator::new(vec!["word".to_string()], SmallRng::seed_from_u64(1));
        let text = generator.generate(1).unwrap();

        assert_eq!(text, "Word.");
    }

    #[test]
    fn it_should_only_use_vocabulary_words() {
        let generator = TextGenerator::from_seed(3);
        let vocabulary: Vec<String> = generator
            .vocabulary()
            .iter()
            .map(|w| w.to_lowercase())
            .collect();

        for _ in 0..50 {
            let text = generator.generate(30).unwrap();
            for token in text.split_whitespace() {
                let word = token.trim_end_matches('.').to_lowercase();
                assert!(vocabulary.contains(&word), "{word}");
            }
        }
    }

    #[test]
    fn it_should_reject_bad_arguments() {
        assert!(matches!(
            TextGenerator::from_seed(0).generate(0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            TextGenerator::new(Vec::new(), SmallRng::seed_from_u64(0)).generate(3),
            Err(Error::InvalidArgument(_))
        ));
    }
}

use std::collections::HashSet;

const DEFAULT_PUNCTUATION: &[char] = &[',', '.', '?', '!', '#', '$', '%', '^', '&', '*', '(', '~'];

/**
    Set of characters removed from a chunk before it is split into words.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Punctuation {
    chars: HashSet<char>,
}

impl Punctuation {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// A drop set that keeps every character.
    pub fn none() -> Self {
        Self {
            chars: HashSet::new(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn strip(&self, s: &str) -> String {
        if self.chars.is_empty() {
            return s.to_string();
        }
        s.chars().filter(|c| !self.contains(*c)).collect()
    }
}

impl Default for Punctuation {
    fn default() -> Self {
        Punctuation::new(DEFAULT_PUNCTUATION.iter().copied())
    }
}

impl FromIterator<char> for Punctuation {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Punctuation::new(iter)
    }
}

impl From<&str> for Punctuation {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

#[test]
fn test_default_strips_reference_set() {
    let p = Punctuation::default();

    assert_eq!(p.len(), 12);
    assert_eq!(p.strip("a,b.c?d!e#f$g%h^i&j*k(l~m"), "abcdefghijklm");
    // only the opening parenthesis is part of the set
    assert_eq!(p.strip("(x)"), "x)");
}

#[test]
fn test_custom_set() {
    let p = Punctuation::from(".!");

    assert!(p.contains('!'));
    assert!(!p.contains(','));
    assert_eq!(p.strip("hi, there. you!"), "hi, there you");
}

#[test]
fn test_none_keeps_everything() {
    let p = Punctuation::none();

    assert!(p.is_empty());
    assert_eq!(p.strip("a.b,c"), "a.b,c");
}

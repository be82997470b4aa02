use std::collections::HashSet;

/// Characters stripped from the end of a raw word before the keyword test.
pub const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

/// Words that are never indexed. Stored lower-cased.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_ascii_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl<S: AsRef<str>> FromIterator<S> for NoiseWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut noise = NoiseWords::new();
        for w in iter {
            noise.insert(w.as_ref());
        }
        noise
    }
}

/// Strip trailing punctuation from `word`, one character at a time.
///
/// Stops at the first alphabetic character, at any character outside
/// [`TRAILING_PUNCTUATION`], or when a single character is left.
pub fn strip_trailing_punctuation(word: &str) -> &str {
    let mut word = word;
    while let Some(last) = word.chars().next_back() {
        if last.is_ascii_alphabetic() || !TRAILING_PUNCTUATION.contains(&last) || word.len() == 1 {
            break;
        }
        // punctuation is ASCII, so dropping one byte drops one char
        word = &word[..word.len() - 1];
    }
    word
}

/// Turn a raw whitespace-delimited word into a keyword.
///
/// Returns `None` when the word, after stripping trailing punctuation, still
/// contains a non-letter, or when its lower-cased form is a noise word.
pub fn normalize(raw: &str, noise: &NoiseWords) -> Option<String> {
    let word = strip_trailing_punctuation(raw);
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let keyword = word.to_ascii_lowercase();
    if noise.contains(&keyword) { return None; }
    Some(keyword)
}

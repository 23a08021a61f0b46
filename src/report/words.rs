//! Corpus-wide content word frequencies.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

/// Function words dropped before counting, plus "committee".
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "will",
    "would", "committee",
];

/// Words of this many characters or fewer are not content words.
pub const MAX_SHORT_WORD_LEN: usize = 3;

pub const TOP_WORD_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

pub fn is_content_word(word: &str) -> bool {
    word.chars().count() > MAX_SHORT_WORD_LEN && !STOP_WORDS.contains(&word)
}

/// Lowercased content words of `text` in reading order.
pub fn content_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD
        .replace_all(&lowered, " ")
        .split_whitespace()
        .filter(|w| is_content_word(w))
        .map(str::to_string)
        .collect()
}

/// The `limit` most frequent content words across `texts`.
///
/// Ties keep the order in which words were first encountered.
pub fn top_content_words<'a, I>(texts: I, limit: usize) -> Vec<WordCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<WordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for text in texts {
        for word in content_words(text) {
            match index.get(&word) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(word.clone(), counts.len());
                    counts.push(WordCount { word, count: 1 });
                }
            }
        }
    }

    // Stable sort keeps first-encountered order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

//! Pluggable sentiment scoring.
//!
//! Sentiment is optional: the metrics pass only scores statements when it is
//! handed a [`SentimentScorer`]. [`LexiconScorer`] is the built-in scorer, a
//! valence lexicon tuned for monetary policy language with intensity
//! modifiers and a short negation window.

use std::collections::HashMap;

/// Produces a compound sentiment score in `[-1, 1]` for a statement.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> f64;
}

/// Normalization constant for mapping a raw valence sum into `[-1, 1]`.
const COMPOUND_ALPHA: f64 = 15.0;

/// Negated valences are flipped and damped by this factor.
const NEGATION_DAMPING: f64 = 0.74;

const DEFAULT_NEGATION_WINDOW: usize = 3;

const POSITIVE_TERMS: &[(&str, f64)] = &[
    ("strong", 2.3),
    ("stronger", 2.1),
    ("strengthened", 2.0),
    ("solid", 1.9),
    ("robust", 2.0),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improving", 1.8),
    ("improvement", 2.0),
    ("recovery", 1.6),
    ("recovered", 1.5),
    ("gains", 1.6),
    ("expansion", 1.2),
    ("expanding", 1.2),
    ("stable", 1.3),
    ("stability", 1.4),
    ("confidence", 1.9),
    ("confident", 2.0),
    ("healthy", 1.8),
    ("favorable", 1.9),
    ("favourable", 1.9),
    ("support", 1.4),
    ("supportive", 1.5),
    ("resilient", 1.8),
    ("progress", 1.6),
    ("positive", 2.0),
    ("optimistic", 2.2),
    ("balanced", 1.1),
];

const NEGATIVE_TERMS: &[(&str, f64)] = &[
    ("weak", -1.9),
    ("weaker", -1.8),
    ("weakened", -1.9),
    ("weakness", -1.8),
    ("decline", -1.5),
    ("declined", -1.5),
    ("declining", -1.6),
    ("slow", -0.9),
    ("slowed", -1.1),
    ("slowing", -1.1),
    ("slowdown", -1.5),
    ("downturn", -1.8),
    ("recession", -2.3),
    ("crisis", -2.9),
    ("risk", -1.1),
    ("risks", -1.1),
    ("uncertainty", -1.4),
    ("uncertain", -1.2),
    ("concern", -1.4),
    ("concerns", -1.4),
    ("deteriorated", -2.0),
    ("deterioration", -2.0),
    ("losses", -1.9),
    ("unemployment", -1.6),
    ("volatility", -0.9),
    ("volatile", -1.0),
    ("stress", -1.8),
    ("strains", -1.5),
    ("pressures", -1.0),
    ("disruption", -1.7),
    ("contraction", -1.6),
    ("negative", -2.0),
];

const MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("significantly", 1.3),
    ("substantially", 1.3),
    ("considerably", 1.25),
    ("highly", 1.25),
    ("further", 1.1),
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("modestly", 0.75),
    ("moderately", 0.85),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "without", "cannot", "isn't", "wasn't", "aren't",
    "don't", "doesn't", "didn't",
];

/// Valence-lexicon sentiment scorer.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    valences: HashMap<String, f64>,
    modifiers: HashMap<String, f64>,
    negation_window: usize,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Scorer loaded with the built-in policy lexicon.
    pub fn new() -> Self {
        let valences = POSITIVE_TERMS
            .iter()
            .chain(NEGATIVE_TERMS)
            .map(|(word, valence)| (word.to_string(), *valence))
            .collect();
        let modifiers = MODIFIERS
            .iter()
            .map(|(word, factor)| (word.to_string(), *factor))
            .collect();

        Self {
            valences,
            modifiers,
            negation_window: DEFAULT_NEGATION_WINDOW,
        }
    }

    /// Add or replace valences. Words are matched lowercase.
    pub fn with_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        for (word, valence) in terms {
            self.valences.insert(word.into().to_lowercase(), valence);
        }
        self
    }

    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    /// Sum of token valences after modifiers and negation.
    pub fn raw_valence(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut modifier = 1.0;
        let mut words_since_negation: Option<usize> = None;

        for token in tokenize(text) {
            if NEGATIONS.contains(&token.as_str()) {
                words_since_negation = Some(0);
                continue;
            }

            if let Some(factor) = self.modifiers.get(&token) {
                modifier = *factor;
                continue;
            }

            if let Some(valence) = self.valences.get(&token) {
                let mut score = valence * modifier;
                if words_since_negation.is_some_and(|n| n < self.negation_window) {
                    score *= -NEGATION_DAMPING;
                }
                total += score;
                modifier = 1.0;
            }

            words_since_negation = match words_since_negation {
                Some(n) if n + 1 < self.negation_window => Some(n + 1),
                _ => None,
            };
        }

        total
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        normalize_compound(self.raw_valence(text))
    }
}

/// Map an unbounded valence sum into `(-1, 1)`.
pub fn normalize_compound(raw: f64) -> f64 {
    if raw == 0.0 {
        return 0.0;
    }
    (raw / (raw * raw + COMPOUND_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
}

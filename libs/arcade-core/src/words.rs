//! Word-level transforms: scrambling, blank masking, sequencing and hints.

use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Placeholder rendered in place of a blanked word.
pub const BLANK: &str = "___________";

/// Share of an answer's words that are blanked.
pub const BLANK_RATIO: f64 = 0.4;

/// Minimum word count for sequence-reordering games.
pub const MIN_SEQUENCE_WORDS: usize = 3;

/// Words never preferred for blanking.
const STOPWORDS: [&str; 14] = [
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Scramble the letters inside each word of `answer`.
///
/// The answer is lowercased and split on single spaces; words of two
/// characters or fewer are left alone and word order is kept.
pub fn scramble<R: Rng + ?Sized>(answer: &str, rng: &mut R) -> String {
    answer
        .to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars: Vec<char> = word.chars().collect();
            if chars.len() > 2 {
                chars.shuffle(&mut *rng);
            }
            chars.into_iter().collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// An answer with some words replaced by [`BLANK`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankedAnswer {
    pub text: String,
    /// Removed words, left to right.
    pub blanks: Vec<String>,
}

impl BlankedAnswer {
    /// Compare the player's fills to the removed words, ignoring case and padding.
    pub fn check(&self, fills: &[String]) -> Vec<bool> {
        self.blanks
            .iter()
            .enumerate()
            .map(|(i, expected)| {
                fills
                    .get(i)
                    .is_some_and(|f| f.trim().to_lowercase() == expected.trim().to_lowercase())
            })
            .collect()
    }
}

/// Number of blanks for an answer of `word_count` words (at least one).
pub fn blank_count(word_count: usize) -> usize {
    ((word_count as f64 * BLANK_RATIO).floor() as usize).max(1)
}

fn is_content_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    !STOPWORDS.contains(&lower.as_str()) && lower.chars().count() > 2
}

/// Blank out roughly 40% of the answer's words, preferring content words.
pub fn generate_blanks<R: Rng + ?Sized>(answer: &str, rng: &mut R) -> BlankedAnswer {
    let words: Vec<&str> = answer.split_whitespace().collect();
    let wanted = blank_count(words.len());

    let content: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|(_, w)| is_content_word(w))
        .map(|(i, _)| i)
        .collect();

    let chosen: BTreeSet<usize> = if content.is_empty() {
        (0..words.len()).choose_multiple(rng, wanted).into_iter().collect()
    } else {
        content
            .choose_multiple(rng, wanted.min(content.len()))
            .copied()
            .collect()
    };

    let mut blanks = Vec::with_capacity(chosen.len());
    let text = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if chosen.contains(&i) {
                blanks.push(word.to_string());
                BLANK
            } else {
                *word
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    BlankedAnswer { text, blanks }
}

/// Whitespace-delimited words of an answer.
pub fn tokenize(answer: &str) -> Vec<String> {
    answer.split_whitespace().map(str::to_string).collect()
}

/// Whether an answer is long enough to be reordered.
pub fn is_sequence_eligible(answer: &str) -> bool {
    answer.split_whitespace().count() >= MIN_SEQUENCE_WORDS
}

/// Letter-pattern hint for typed answers.
///
/// Multi-word answers show each word's first letter; a single word shows its
/// first and last letter when it is longer than two characters.
pub fn letter_hint(answer: &str) -> String {
    let answer = answer.to_lowercase();
    let words: Vec<&str> = answer.split(' ').collect();

    if words.len() > 1 {
        return words
            .iter()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => format!("{first}{}", "_".repeat(chars.count())),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
    }

    let chars: Vec<char> = answer.chars().collect();
    match chars.as_slice() {
        [first, middle @ .., last] if chars.len() > 2 => {
            format!("{first}{}{last}", "_".repeat(middle.len()))
        }
        _ => "_".repeat(chars.len()),
    }
}

/// The three escalating hints offered by Hint Master.
pub fn hint_ladder(answer: &str) -> Vec<String> {
    let word_count = answer.split_whitespace().count();
    let chars: Vec<char> = answer.chars().collect();
    let char_count = chars.len();

    let counts = format!(
        "This answer has {word_count} word{} and {char_count} characters.",
        if word_count > 1 { "s" } else { "" }
    );

    let first = chars.first().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
    let last = chars.last().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
    let ends = format!("It starts with \"{first}\" and ends with \"{last}\".");

    let pattern: String = chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if c == ' ' || i == 0 || i + 1 == char_count || i % 3 == 0 {
                c
            } else {
                '_'
            }
        })
        .collect();

    vec![counts, ends, format!("Pattern: {pattern}")]
}

//! Answer matching for typed games.

use crate::types::MatchingMode;
use serde::{Deserialize, Serialize};

/// Minimum similarity for a fuzzy match to be accepted.
pub const FUZZY_THRESHOLD: f64 = 0.8;

/// Result of comparing a typed answer to the correct answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Similarity score between 0.0 and 1.0.
    pub similarity: f64,
    /// The matching mode used.
    pub matching_mode: MatchingMode,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized correct answer (for display).
    pub correct_normalized: String,
}

/// Compare a typed answer to the correct answer.
pub fn compare_answers(typed: &str, correct: &str, mode: MatchingMode) -> MatchResult {
    match mode {
        MatchingMode::Exact => {
            let typed_normalized = typed.trim().to_string();
            let correct_normalized = correct.trim().to_string();
            let is_correct = typed_normalized == correct_normalized;
            MatchResult {
                is_correct,
                similarity: if is_correct { 1.0 } else { 0.0 },
                matching_mode: mode,
                typed_normalized,
                correct_normalized,
            }
        }
        MatchingMode::CaseInsensitive => {
            let typed_normalized = typed.trim().to_lowercase();
            let correct_normalized = correct.trim().to_lowercase();
            let is_correct = typed_normalized == correct_normalized;
            MatchResult {
                is_correct,
                similarity: if is_correct { 1.0 } else { 0.0 },
                matching_mode: mode,
                typed_normalized,
                correct_normalized,
            }
        }
        MatchingMode::Fuzzy => {
            let typed_normalized = normalize(typed);
            let correct_normalized = normalize(correct);
            let similarity = normalized_similarity(&typed_normalized, &correct_normalized);
            let is_correct =
                typed_normalized == correct_normalized || similarity >= FUZZY_THRESHOLD;
            MatchResult {
                is_correct,
                similarity,
                matching_mode: mode,
                typed_normalized,
                correct_normalized,
            }
        }
    }
}

/// Accept `typed` if it equals `correct` after normalization or is close enough.
pub fn fuzzy_match(typed: &str, correct: &str) -> bool {
    compare_answers(typed, correct, MatchingMode::Fuzzy).is_correct
}

/// Lowercase, trim, and drop everything that is not a word character or whitespace.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity in `[0.0, 1.0]`: `(max_len - distance) / max_len`, in chars.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}

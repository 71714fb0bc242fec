//! Wrong-answer selection for choice games.

use crate::random::shuffle_tracking;
use crate::types::StudyCard;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Options for one choice question, already shuffled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl OptionSet {
    pub fn correct(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// Up to `n` values from other cards, in pool order.
///
/// Cards with the target's id are skipped, as is any value equal to the
/// target's or to one already taken, so the result never repeats.
pub fn pick_distractors<F>(target: &StudyCard, pool: &[StudyCard], n: usize, value: F) -> Vec<String>
where
    F: Fn(&StudyCard) -> &str,
{
    let target_value = value(target);
    let mut seen: HashSet<&str> = HashSet::from([target_value]);

    pool.iter()
        .filter(|c| c.id != target.id)
        .map(&value)
        .filter(|v| seen.insert(*v))
        .take(n)
        .map(str::to_string)
        .collect()
}

/// Build a shuffled option set of the target's value plus up to `n` distractors.
pub fn build_options<F, R>(
    target: &StudyCard,
    pool: &[StudyCard],
    n: usize,
    value: F,
    rng: &mut R,
) -> OptionSet
where
    F: Fn(&StudyCard) -> &str,
    R: Rng + ?Sized,
{
    let mut options = vec![value(target).to_string()];
    options.extend(pick_distractors(target, pool, n, &value));

    let (options, correct_index) = shuffle_tracking(options, 0, rng);
    OptionSet {
        options,
        correct_index,
    }
}

/// Answer options drawn from card answers.
pub fn answer_options<R: Rng + ?Sized>(
    target: &StudyCard,
    pool: &[StudyCard],
    n: usize,
    rng: &mut R,
) -> OptionSet {
    build_options(target, pool, n, |c| c.answer.as_str(), rng)
}

/// Whether two or more cards in the pool share an identical answer.
pub fn has_duplicate_answers(pool: &[StudyCard]) -> bool {
    let mut seen = HashSet::new();
    pool.iter().any(|c| !seen.insert(c.answer.as_str()))
}

//! Ordering games: rebuild an answer's word order, or sort cards into a
//! category.

use super::{take_limit, Availability, Round, Unavailable};
use crate::types::{GameType, StudyCard};
use crate::words::{is_sequence_eligible, tokenize, MIN_SEQUENCE_WORDS};
use rand::seq::SliceRandom;
use rand::Rng;

/// Cards needed in a category before it can be sorted.
pub const MIN_CATEGORY_CARDS: usize = 2;
/// Rounds per category-sort session.
pub const MAX_CATEGORY_ROUNDS: usize = 5;
/// Cards drawn from the target category per round.
const TARGET_CARDS: usize = 3;
/// Cards drawn from other categories per round.
const DECOY_CARDS: usize = 4;

pub fn has_sequence_cards(cards: &[StudyCard]) -> bool {
    cards.iter().any(|c| is_sequence_eligible(&c.answer))
}

/// Categories with enough cards, in order of first appearance.
pub fn sortable_categories(cards: &[StudyCard]) -> Vec<&str> {
    let mut order: Vec<&str> = Vec::new();
    for category in cards.iter().filter_map(|c| c.category.as_deref()) {
        if !order.contains(&category) {
            order.push(category);
        }
    }
    order.retain(|category| {
        cards
            .iter()
            .filter(|c| c.category.as_deref() == Some(*category))
            .count()
            >= MIN_CATEGORY_CARDS
    });
    order
}

pub fn sequence_rounds<R: Rng + ?Sized>(
    cards: &[StudyCard],
    rng: &mut R,
) -> Availability<Vec<Round>> {
    let eligible: Vec<StudyCard> = cards
        .iter()
        .filter(|c| is_sequence_eligible(&c.answer))
        .cloned()
        .collect();
    if eligible.is_empty() {
        return Availability::Unavailable(Unavailable::NoLongAnswers {
            min_words: MIN_SEQUENCE_WORDS,
        });
    }

    let rounds = take_limit(&eligible, GameType::SequenceMatch.card_limit())
        .iter()
        .map(|card| {
            let answer_words = tokenize(&card.answer);
            let mut words = answer_words.clone();
            words.shuffle(&mut *rng);
            Round::Sequence {
                card_id: card.id.clone(),
                question: card.question.clone(),
                words,
                answer_words,
            }
        })
        .collect();
    Availability::Ready(rounds)
}

pub fn category_rounds<R: Rng + ?Sized>(
    cards: &[StudyCard],
    rng: &mut R,
) -> Availability<Vec<Round>> {
    let categories = sortable_categories(cards);
    if categories.is_empty() {
        return Availability::Unavailable(Unavailable::NoCategories);
    }

    let rounds = categories
        .into_iter()
        .take(MAX_CATEGORY_ROUNDS)
        .map(|category| {
            let in_category = |c: &&StudyCard| c.category.as_deref() == Some(category);
            let targets: Vec<StudyCard> = cards
                .iter()
                .filter(in_category)
                .take(TARGET_CARDS)
                .cloned()
                .collect();
            let decoys = cards
                .iter()
                .filter(|c| c.category.is_some() && !in_category(c))
                .take(DECOY_CARDS)
                .cloned();

            let correct_ids = targets.iter().map(|c| c.id.clone()).collect();
            let mut shown: Vec<StudyCard> = targets.into_iter().chain(decoys).collect();
            shown.shuffle(&mut *rng);

            Round::CategorySort {
                category: category.to_string(),
                cards: shown,
                correct_ids,
            }
        })
        .collect();
    Availability::Ready(rounds)
}

//! Games answered by typing: scramble, type-the-answer, fill-in-the-blanks
//! and hint master.

use super::{take_limit, Round};
use crate::types::{GameType, StudyCard};
use crate::words::{generate_blanks, hint_ladder, letter_hint, scramble};
use rand::Rng;

pub fn scramble_rounds<R: Rng + ?Sized>(cards: &[StudyCard], rng: &mut R) -> Vec<Round> {
    take_limit(cards, GameType::Scramble.card_limit())
        .iter()
        .map(|card| Round::Scramble {
            card_id: card.id.clone(),
            question: card.question.clone(),
            scrambled: scramble(&card.answer, &mut *rng),
            answer: card.answer.clone(),
        })
        .collect()
}

pub fn type_answer_rounds(cards: &[StudyCard]) -> Vec<Round> {
    take_limit(cards, GameType::TypeAnswer.card_limit())
        .iter()
        .map(|card| Round::TypeAnswer {
            card_id: card.id.clone(),
            question: card.question.clone(),
            answer: card.answer.clone(),
            hint: letter_hint(&card.answer),
        })
        .collect()
}

pub fn fill_blank_rounds<R: Rng + ?Sized>(cards: &[StudyCard], rng: &mut R) -> Vec<Round> {
    take_limit(cards, GameType::FillBlanks.card_limit())
        .iter()
        .map(|card| Round::FillBlanks {
            card_id: card.id.clone(),
            question: card.question.clone(),
            blanked: generate_blanks(&card.answer, &mut *rng),
            answer: card.answer.clone(),
        })
        .collect()
}

/// Rounds whose hints are revealed one at a time at a point cost.
pub fn hint_rounds(cards: &[StudyCard]) -> Vec<Round> {
    take_limit(cards, GameType::HintMaster.card_limit())
        .iter()
        .map(|card| Round::HintLadder {
            card_id: card.id.clone(),
            question: card.question.clone(),
            answer: card.answer.clone(),
            hints: hint_ladder(&card.answer),
        })
        .collect()
}

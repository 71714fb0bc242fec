//! Choice games: quick quiz, speed round, splat, reverse quiz and true/false.

use super::{take_limit, Round};
use crate::distractors::{answer_options, build_options, pick_distractors};
use crate::types::{GameType, QuizQuestion, StudyCard};
use rand::Rng;

/// Stand-in used for a false statement when no other answer exists.
pub const FALLBACK_WRONG_ANSWER: &str = "incorrect answer";

/// Questions whose options are card answers.
pub fn answer_rounds<R: Rng + ?Sized>(
    game: GameType,
    cards: &[StudyCard],
    rng: &mut R,
) -> Vec<Round> {
    take_limit(cards, game.card_limit())
        .iter()
        .map(|card| {
            let set = answer_options(card, cards, game.distractor_count(), &mut *rng);
            let explanation = (game == GameType::Quiz)
                .then(|| format!("The correct answer is \"{}\"", card.answer));
            Round::Choice {
                question: QuizQuestion {
                    id: card.id.clone(),
                    question: card.question.clone(),
                    options: set.options,
                    correct_answer: set.correct_index,
                    explanation,
                },
            }
        })
        .collect()
}

/// Show the answer, pick the question it belongs to.
pub fn reverse_rounds<R: Rng + ?Sized>(cards: &[StudyCard], rng: &mut R) -> Vec<Round> {
    let game = GameType::ReverseQuiz;
    take_limit(cards, game.card_limit())
        .iter()
        .map(|card| {
            let set = build_options(
                card,
                cards,
                game.distractor_count(),
                |c| c.question.as_str(),
                &mut *rng,
            );
            Round::Choice {
                question: QuizQuestion {
                    id: card.id.clone(),
                    question: card.answer.clone(),
                    options: set.options,
                    correct_answer: set.correct_index,
                    explanation: None,
                },
            }
        })
        .collect()
}

/// Statements pairing each question with its own answer or another card's.
pub fn true_false_rounds<R: Rng + ?Sized>(cards: &[StudyCard], rng: &mut R) -> Vec<Round> {
    take_limit(cards, GameType::TrueFalse.card_limit())
        .iter()
        .map(|card| {
            if rng.gen_bool(0.5) {
                return Round::TrueFalse {
                    card_id: card.id.clone(),
                    statement: format!("True or False: {} - {}", card.question, card.answer),
                    is_true: true,
                    explanation: format!(
                        "Correct! {} is the right answer to \"{}\"",
                        card.answer, card.question
                    ),
                };
            }

            let wrong = pick_distractors(card, cards, 1, |c| c.answer.as_str())
                .pop()
                .unwrap_or_else(|| FALLBACK_WRONG_ANSWER.to_string());
            Round::TrueFalse {
                card_id: card.id.clone(),
                statement: format!("True or False: {} - {}", card.question, wrong),
                is_true: false,
                explanation: format!(
                    "False! The correct answer to \"{}\" is \"{}\", not \"{}\"",
                    card.question, card.answer, wrong
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::game_rng;
    use crate::types::sample_deck;
    use pretty_assertions::assert_eq;

    fn questions(rounds: Vec<Round>) -> Vec<QuizQuestion> {
        rounds
            .into_iter()
            .map(|round| match round {
                Round::Choice { question } => question,
                other => panic!("unexpected round {other:?}"),
            })
            .collect()
    }

    #[test]
    fn quiz_uses_five_cards_with_four_options() {
        let deck = sample_deck();
        let mut rng = game_rng(Some(10));
        let qs = questions(answer_rounds(GameType::Quiz, &deck, &mut rng));

        assert_eq!(qs.len(), 5);
        for (q, card) in qs.iter().zip(&deck) {
            assert_eq!(q.options.len(), 4);
            assert_eq!(q.correct_option(), card.answer);
            assert_eq!(
                q.explanation.as_deref(),
                Some(format!("The correct answer is \"{}\"", card.answer).as_str())
            );
        }
    }

    #[test]
    fn splat_offers_every_other_answer() {
        let deck = sample_deck();
        let mut rng = game_rng(Some(12));
        let qs = questions(answer_rounds(GameType::Splat, &deck, &mut rng));

        assert_eq!(qs.len(), 6);
        assert!(qs.iter().all(|q| q.options.len() == 6));
        assert!(qs.iter().all(|q| q.explanation.is_none()));
    }

    #[test]
    fn reverse_quiz_options_are_questions() {
        let deck = sample_deck();
        let mut rng = game_rng(Some(13));
        let qs = questions(reverse_rounds(&deck, &mut rng));

        assert_eq!(qs[0].question, "Paris");
        assert_eq!(qs[0].correct_option(), "What is the capital of France?");
        assert_eq!(qs[0].options.len(), 4);
    }

    #[test]
    fn true_false_statements_are_consistent() {
        let deck = sample_deck();
        let mut rng = game_rng(Some(14));
        let rounds = true_false_rounds(&deck, &mut rng);
        assert_eq!(rounds.len(), 6);

        for (round, card) in rounds.iter().zip(&deck) {
            let Round::TrueFalse {
                statement, is_true, ..
            } = round
            else {
                panic!("unexpected round {round:?}");
            };
            let shown = statement.rsplit(" - ").next().unwrap();
            assert_eq!(*is_true, shown == card.answer, "{statement}");
        }
    }

    #[test]
    fn lone_card_false_statement_uses_fallback() {
        let deck = vec![sample_deck().remove(0)];
        let falses: Vec<Round> = (0..32)
            .flat_map(|seed| true_false_rounds(&deck, &mut game_rng(Some(seed))))
            .filter(|r| matches!(r, Round::TrueFalse { is_true: false, .. }))
            .collect();

        assert!(!falses.is_empty());
        for round in falses {
            let Round::TrueFalse { statement, .. } = round else {
                unreachable!()
            };
            assert!(statement.ends_with(FALLBACK_WRONG_ANSWER));
        }
    }
}

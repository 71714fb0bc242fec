//! Round generation for the fourteen game modes.
//!
//! Each builder turns a card pool into the rounds of one session. When the
//! pool cannot support a game the builder returns
//! [`Availability::Unavailable`]; this is a normal outcome, not an error.

pub mod answer;
pub mod choice;
pub mod memory;
pub mod sorting;
pub mod typed;

use crate::types::{GameType, QuizQuestion, StudyCard};
use crate::words::{BlankedAnswer, MIN_SEQUENCE_WORDS};
use memory::MemoryTile;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use answer::{evaluate, Answer, Outcome};

/// Cards a user needs before any game unlocks.
pub const MIN_CARDS_TO_PLAY: usize = 3;

/// Why a game cannot be played with the current pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Unavailable {
    NotEnoughCards { required: usize, found: usize },
    NoCategories,
    NoLongAnswers { min_words: usize },
}

impl Unavailable {
    /// Text for the "not enough data" view.
    pub fn message(&self) -> String {
        match self {
            Self::NotEnoughCards { required, .. } => {
                format!("You need at least {required} study cards to play games")
            }
            Self::NoCategories => {
                "You need study cards with categories to play this game".to_string()
            }
            Self::NoLongAnswers { min_words } => format!(
                "You need study cards with answers containing at least {min_words} words to play this game"
            ),
        }
    }
}

/// Either the generated rounds or the reason none could be generated.
#[derive(Debug, Clone, PartialEq)]
pub enum Availability<T> {
    Ready(T),
    Unavailable(Unavailable),
}

impl<T> Availability<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Unavailable(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Availability<U> {
        match self {
            Self::Ready(value) => Availability::Ready(f(value)),
            Self::Unavailable(reason) => Availability::Unavailable(reason),
        }
    }
}

/// One unit of play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Round {
    Flashcard {
        card: StudyCard,
    },
    Choice {
        question: QuizQuestion,
    },
    TrueFalse {
        card_id: String,
        statement: String,
        is_true: bool,
        explanation: String,
    },
    Memory {
        tiles: Vec<MemoryTile>,
    },
    Scramble {
        card_id: String,
        question: String,
        scrambled: String,
        answer: String,
    },
    TypeAnswer {
        card_id: String,
        question: String,
        answer: String,
        hint: String,
    },
    FillBlanks {
        card_id: String,
        question: String,
        blanked: BlankedAnswer,
        answer: String,
    },
    Sequence {
        card_id: String,
        question: String,
        words: Vec<String>,
        answer_words: Vec<String>,
    },
    CategorySort {
        category: String,
        cards: Vec<StudyCard>,
        correct_ids: Vec<String>,
    },
    HintLadder {
        card_id: String,
        question: String,
        answer: String,
        hints: Vec<String>,
    },
    Swipe {
        card: StudyCard,
    },
}

impl Round {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Flashcard { .. } => "flashcard",
            Self::Choice { .. } => "choice",
            Self::TrueFalse { .. } => "true_false",
            Self::Memory { .. } => "memory",
            Self::Scramble { .. } => "scramble",
            Self::TypeAnswer { .. } => "type_answer",
            Self::FillBlanks { .. } => "fill_blanks",
            Self::Sequence { .. } => "sequence",
            Self::CategorySort { .. } => "category_sort",
            Self::HintLadder { .. } => "hint_ladder",
            Self::Swipe { .. } => "swipe",
        }
    }
}

/// Reject pools smaller than [`MIN_CARDS_TO_PLAY`].
pub fn check_global_gate(cards: &[StudyCard]) -> Option<Unavailable> {
    (cards.len() < MIN_CARDS_TO_PLAY).then_some(Unavailable::NotEnoughCards {
        required: MIN_CARDS_TO_PLAY,
        found: cards.len(),
    })
}

/// Build the rounds for `game` from `cards`.
///
/// Only the game's own minimum applies here; see [`plan_rounds`] for the
/// global gate as well.
pub fn build_rounds<R: Rng + ?Sized>(
    game: GameType,
    cards: &[StudyCard],
    rng: &mut R,
) -> Availability<Vec<Round>> {
    let rounds = match game {
        GameType::SequenceMatch => return sorting::sequence_rounds(cards, rng),
        GameType::CategorySort => return sorting::category_rounds(cards, rng),
        _ if cards.is_empty() => {
            return Availability::Unavailable(Unavailable::NotEnoughCards {
                required: 1,
                found: 0,
            })
        }
        GameType::Flashcards => cards
            .iter()
            .map(|card| Round::Flashcard { card: card.clone() })
            .collect(),
        GameType::Swipe => cards
            .iter()
            .map(|card| Round::Swipe { card: card.clone() })
            .collect(),
        GameType::Quiz | GameType::SpeedRound | GameType::Splat => {
            choice::answer_rounds(game, cards, rng)
        }
        GameType::ReverseQuiz => choice::reverse_rounds(cards, rng),
        GameType::TrueFalse => choice::true_false_rounds(cards, rng),
        GameType::Memory => vec![memory::board(cards, rng)],
        GameType::Scramble => typed::scramble_rounds(cards, rng),
        GameType::TypeAnswer => typed::type_answer_rounds(cards),
        GameType::FillBlanks => typed::fill_blank_rounds(cards, rng),
        GameType::HintMaster => typed::hint_rounds(cards),
    };

    Availability::Ready(rounds)
}

/// Apply the global gate, then build the rounds for `game`.
pub fn plan_rounds<R: Rng + ?Sized>(
    game: GameType,
    cards: &[StudyCard],
    rng: &mut R,
) -> Availability<Vec<Round>> {
    if let Some(reason) = check_global_gate(cards) {
        tracing::debug!(game = %game, cards = cards.len(), "global gate not met");
        return Availability::Unavailable(reason);
    }

    let planned = build_rounds(game, cards, rng);
    if let Availability::Unavailable(reason) = &planned {
        tracing::debug!(game = %game, ?reason, "game unavailable for pool");
    }
    planned
}

/// Availability of `game` for a pool without keeping the rounds.
pub fn availability(game: GameType, cards: &[StudyCard]) -> Availability<()> {
    if let Some(reason) = check_global_gate(cards) {
        return Availability::Unavailable(reason);
    }
    match game {
        GameType::SequenceMatch if !sorting::has_sequence_cards(cards) => {
            Availability::Unavailable(Unavailable::NoLongAnswers {
                min_words: MIN_SEQUENCE_WORDS,
            })
        }
        GameType::CategorySort if sorting::sortable_categories(cards).is_empty() => {
            Availability::Unavailable(Unavailable::NoCategories)
        }
        _ => Availability::Ready(()),
    }
}

/// The first `limit` cards, or all of them.
pub(crate) fn take_limit(cards: &[StudyCard], limit: Option<usize>) -> &[StudyCard] {
    match limit {
        Some(limit) => &cards[..cards.len().min(limit)],
        None => cards,
    }
}

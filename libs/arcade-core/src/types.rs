//! Core types shared by every game.

use crate::error::CardError;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A question/answer card, optionally tagged with a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyCard {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl StudyCard {
    /// Create a card, trimming every field.
    ///
    /// A blank category is stored as `None`.
    pub fn new(
        id: impl Into<String>,
        question: &str,
        answer: &str,
        category: Option<&str>,
    ) -> Result<Self, CardError> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() {
            return Err(CardError::EmptyQuestion);
        }
        if answer.is_empty() {
            return Err(CardError::EmptyAnswer);
        }

        Ok(Self {
            id: id.into(),
            question: question.to_string(),
            answer: answer.to_string(),
            category: category
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        })
    }

    /// Number of whitespace-delimited words in the answer.
    pub fn answer_word_count(&self) -> usize {
        self.answer.split_whitespace().count()
    }
}

/// Restrict a card pool to one category; `None` keeps every card.
pub fn pool_for_category<'a>(cards: &'a [StudyCard], category: Option<&str>) -> Vec<&'a StudyCard> {
    match category {
        Some(category) => cards
            .iter()
            .filter(|c| c.category.as_deref() == Some(category))
            .collect(),
        None => cards.iter().collect(),
    }
}

/// The built-in starter deck.
pub fn sample_deck() -> Vec<StudyCard> {
    [
        ("1", "What is the capital of France?", "Paris", "Geography"),
        ("2", "What is 2 + 2?", "4", "Math"),
        ("3", "Who wrote Romeo and Juliet?", "William Shakespeare", "Literature"),
        ("4", "What is the largest planet in our solar system?", "Jupiter", "Science"),
        ("5", "In what year did World War II end?", "1945", "History"),
        ("6", "What is the chemical symbol for gold?", "Au", "Chemistry"),
    ]
    .into_iter()
    .map(|(id, question, answer, category)| StudyCard {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        category: Some(category.to_string()),
    })
    .collect()
}

/// Multiple-choice question generated for a single session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer]
    }
}

/// Final result of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameScore {
    pub correct: u32,
    pub total: u32,
    /// Seconds.
    pub time_spent: u32,
}

/// Difficulty label shown in the game catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// How a typed answer is compared to the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingMode {
    /// Trimmed, case-sensitive equality.
    Exact,
    /// Lowercased and trimmed equality.
    CaseInsensitive,
    /// Normalized equality or Levenshtein similarity at the fixed threshold.
    Fuzzy,
}

impl Default for MatchingMode {
    fn default() -> Self {
        Self::Fuzzy
    }
}

/// The fourteen mini-game modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Flashcards,
    Quiz,
    Memory,
    Scramble,
    TrueFalse,
    TypeAnswer,
    SpeedRound,
    FillBlanks,
    ReverseQuiz,
    SequenceMatch,
    CategorySort,
    HintMaster,
    Splat,
    Swipe,
}

impl GameType {
    pub const ALL: [GameType; 14] = [
        Self::Flashcards,
        Self::Quiz,
        Self::Memory,
        Self::Scramble,
        Self::TrueFalse,
        Self::TypeAnswer,
        Self::SpeedRound,
        Self::FillBlanks,
        Self::ReverseQuiz,
        Self::SequenceMatch,
        Self::CategorySort,
        Self::HintMaster,
        Self::Splat,
        Self::Swipe,
    ];

    /// Get the game id as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flashcards => "flashcards",
            Self::Quiz => "quiz",
            Self::Memory => "memory",
            Self::Scramble => "scramble",
            Self::TrueFalse => "truefalse",
            Self::TypeAnswer => "typeanswer",
            Self::SpeedRound => "speedround",
            Self::FillBlanks => "fillblanks",
            Self::ReverseQuiz => "reversequiz",
            Self::SequenceMatch => "sequencematch",
            Self::CategorySort => "categorysort",
            Self::HintMaster => "hintmaster",
            Self::Splat => "splat",
            Self::Swipe => "swipe",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Flashcards => "Flashcards",
            Self::Quiz => "Quick Quiz",
            Self::Memory => "Memory Match",
            Self::Scramble => "Word Scramble",
            Self::TrueFalse => "True or False",
            Self::TypeAnswer => "Type Answer",
            Self::SpeedRound => "Speed Round",
            Self::FillBlanks => "Fill Blanks",
            Self::ReverseQuiz => "Reverse Quiz",
            Self::SequenceMatch => "Sequence Match",
            Self::CategorySort => "Category Sort",
            Self::HintMaster => "Hint Master",
            Self::Splat => "Splat Game",
            Self::Swipe => "Swipe Study",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Flashcards => "Classic flip cards to test your memory.",
            Self::Quiz => "Multiple choice questions with instant feedback.",
            Self::Memory => "Match questions with answers in this memory game.",
            Self::Scramble => "Unscramble the letters to reveal the correct answer.",
            Self::TrueFalse => "Quick true/false questions to test your knowledge rapidly.",
            Self::TypeAnswer => "Type the correct answer directly.",
            Self::SpeedRound => "Fast-paced 60-second challenge.",
            Self::FillBlanks => "Complete the missing words in the answers.",
            Self::ReverseQuiz => "See the answer, pick the question.",
            Self::SequenceMatch => "Put the words of the answer back in order.",
            Self::CategorySort => "Select every card that belongs to a category.",
            Self::HintMaster => "Answer with as few hints as possible.",
            Self::Splat => "Find the right answer in a sea of options.",
            Self::Swipe => "Swipe right if you know it, left if you need practice.",
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        match self {
            Self::Flashcards | Self::TrueFalse | Self::HintMaster | Self::Swipe => Difficulty::Easy,
            Self::Memory | Self::SpeedRound | Self::SequenceMatch | Self::Splat => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    /// Delay before the session moves on by itself after an answer.
    ///
    /// `None` means the player advances explicitly.
    pub fn auto_advance(&self) -> Option<Duration> {
        let millis = match self {
            Self::SpeedRound => 1000,
            Self::Memory | Self::ReverseQuiz | Self::Splat => 1500,
            Self::SequenceMatch => 2000,
            Self::CategorySort | Self::HintMaster => 2500,
            Self::Swipe => 500,
            _ => return None,
        };
        Some(Duration::milliseconds(millis))
    }

    /// Delay before moving on after a question is skipped and its answer shown.
    ///
    /// `None` means the game cannot be skipped.
    pub fn reveal_delay(&self) -> Option<Duration> {
        match self {
            Self::Quiz | Self::TrueFalse => Some(Duration::milliseconds(2000)),
            _ => None,
        }
    }

    /// Wall-clock limit for the whole session.
    pub fn time_limit(&self) -> Option<Duration> {
        match self {
            Self::SpeedRound => Some(Duration::seconds(60)),
            _ => None,
        }
    }

    /// How many cards from the pool a session uses at most.
    pub fn card_limit(&self) -> Option<usize> {
        match self {
            Self::Quiz => Some(5),
            Self::Memory => Some(6),
            Self::TrueFalse | Self::ReverseQuiz | Self::SequenceMatch | Self::HintMaster => Some(10),
            Self::SpeedRound => Some(20),
            _ => None,
        }
    }

    /// Target number of wrong options for choice games.
    pub fn distractor_count(&self) -> usize {
        match self {
            Self::Quiz | Self::SpeedRound | Self::ReverseQuiz => 3,
            Self::Splat => 11,
            Self::TrueFalse => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameType {
    type Err = crate::error::GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| crate::error::GameError::UnknownGame(s.to_string()))
    }
}

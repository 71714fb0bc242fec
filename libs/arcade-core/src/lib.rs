//! Game logic for the study arcade, shared by every front end.
//!
//! Provides:
//! - Distractor selection and word transforms (scramble, blanks, hints)
//! - Answer matching for typed games (Levenshtein similarity)
//! - Round builders for the fourteen game modes
//! - A session state machine driven by a virtual clock
//! - Subscription gating as a capability object

pub mod access;
pub mod distractors;
pub mod error;
pub mod games;
pub mod matching;
pub mod random;
pub mod score;
pub mod session;
pub mod types;
pub mod words;

pub use access::{GameAccess, PlanLimits, Subscription, Tier};
pub use error::{CardError, GameError, Result};
pub use games::{availability, plan_rounds, Answer, Availability, Outcome, Round, Unavailable};
pub use matching::{compare_answers, fuzzy_match, levenshtein_distance, normalized_similarity, MatchResult};
pub use random::game_rng;
pub use score::{Performance, ScoreReport};
pub use session::{Phase, ScheduledAdvance, Session, SessionSnapshot};
pub use types::{sample_deck, GameScore, GameType, MatchingMode, QuizQuestion, StudyCard};

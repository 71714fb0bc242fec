//! Subscription gating.
//!
//! Round builders and sessions never look at the plan. Callers hold a
//! [`GameAccess`] and ask it before starting a game or saving a card.

use crate::types::GameType;
use serde::{Deserialize, Serialize};

/// Games a trial plan may play.
pub const TRIAL_GAMES: [GameType; 5] = [
    GameType::Flashcards,
    GameType::Quiz,
    GameType::TrueFalse,
    GameType::TypeAnswer,
    GameType::HintMaster,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Trial,
    #[default]
    Pro,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trial => "trial",
            Self::Pro => "pro",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "trial" => Some(Self::Trial),
            "pro" => Some(Self::Pro),
            _ => None,
        }
    }

    pub fn limits(&self) -> PlanLimits {
        match self {
            Self::Trial => PlanLimits {
                max_games: Some(5),
                max_cards: Some(10),
                all_games: false,
                unlimited_cards: false,
            },
            Self::Pro => PlanLimits {
                max_games: None,
                max_cards: None,
                all_games: true,
                unlimited_cards: true,
            },
        }
    }
}

/// What a tier allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLimits {
    pub max_games: Option<u32>,
    pub max_cards: Option<u32>,
    pub all_games: bool,
    pub unlimited_cards: bool,
}

/// Lowest tier that includes `game`.
pub fn required_tier(game: GameType) -> Tier {
    if TRIAL_GAMES.contains(&game) {
        Tier::Trial
    } else {
        Tier::Pro
    }
}

/// Capability consulted before play and card creation.
pub trait GameAccess: Send + Sync {
    fn can_play_game(&self, game: GameType) -> bool;
    fn can_create_card(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Subscription {
    pub tier: Tier,
    pub games_played: u32,
    pub cards_created: u32,
}

impl Subscription {
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            ..Self::default()
        }
    }

    pub fn limits(&self) -> PlanLimits {
        self.tier.limits()
    }

    pub fn record_game_played(&mut self) {
        self.games_played += 1;
    }

    pub fn record_card_created(&mut self) {
        self.cards_created += 1;
    }

    pub fn upgrade(&mut self) {
        self.tier = Tier::Pro;
    }

    /// Back to trial; usage counters are kept.
    pub fn downgrade(&mut self) {
        self.tier = Tier::Trial;
    }
}

impl GameAccess for Subscription {
    fn can_play_game(&self, game: GameType) -> bool {
        let limits = self.limits();
        if limits.all_games {
            return true;
        }
        required_tier(game) == Tier::Trial
            && limits.max_games.map_or(true, |max| self.games_played < max)
    }

    fn can_create_card(&self) -> bool {
        let limits = self.limits();
        limits.unlimited_cards || limits.max_cards.map_or(true, |max| self.cards_created < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pro_plays_everything() {
        let sub = Subscription::new(Tier::Pro);
        assert!(GameType::ALL.iter().all(|g| sub.can_play_game(*g)));
        assert!(sub.can_create_card());
    }

    #[test]
    fn trial_is_limited_to_trial_games() {
        let sub = Subscription::new(Tier::Trial);
        assert!(sub.can_play_game(GameType::Quiz));
        assert!(sub.can_play_game(GameType::HintMaster));
        assert!(!sub.can_play_game(GameType::Memory));
        assert!(!sub.can_play_game(GameType::Splat));
    }

    #[test]
    fn trial_runs_out_of_games_and_cards() {
        let mut sub = Subscription::new(Tier::Trial);
        for _ in 0..5 {
            assert!(sub.can_play_game(GameType::Flashcards));
            sub.record_game_played();
        }
        assert!(!sub.can_play_game(GameType::Flashcards));

        for _ in 0..10 {
            assert!(sub.can_create_card());
            sub.record_card_created();
        }
        assert!(!sub.can_create_card());

        sub.upgrade();
        assert!(sub.can_play_game(GameType::Memory));
        assert!(sub.can_create_card());

        sub.downgrade();
        assert_eq!(sub.games_played, 5);
        assert!(!sub.can_play_game(GameType::Quiz));
    }

    #[test]
    fn tier_strings() {
        assert_eq!(Tier::from_str("trial"), Some(Tier::Trial));
        assert_eq!(Tier::from_str("gold"), None);
        assert_eq!(Tier::Pro.as_str(), "pro");
        assert_eq!(required_tier(GameType::Swipe), Tier::Pro);
    }

    #[test]
    fn capability_works_as_trait_object() {
        let access: Box<dyn GameAccess> = Box::new(Subscription::new(Tier::Trial));
        assert!(access.can_play_game(GameType::TypeAnswer));
        assert!(!access.can_play_game(GameType::CategorySort));
    }
}

//! Memory match: find the question and answer tiles that belong together.

use super::{take_limit, Round};
use crate::error::{GameError, Result};
use crate::types::{GameType, StudyCard};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileSide {
    Question,
    Answer,
}

/// One face-down tile on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryTile {
    pub id: String,
    pub content: String,
    pub side: TileSide,
    /// Id of the card both tiles of a pair come from.
    pub match_id: String,
}

/// Lay out a shuffled board of question and answer tiles.
pub fn board<R: Rng + ?Sized>(cards: &[StudyCard], rng: &mut R) -> Round {
    let mut tiles: Vec<MemoryTile> = take_limit(cards, GameType::Memory.card_limit())
        .iter()
        .flat_map(|card| {
            [
                MemoryTile {
                    id: format!("q-{}", card.id),
                    content: card.question.clone(),
                    side: TileSide::Question,
                    match_id: card.id.clone(),
                },
                MemoryTile {
                    id: format!("a-{}", card.id),
                    content: card.answer.clone(),
                    side: TileSide::Answer,
                    match_id: card.id.clone(),
                },
            ]
        })
        .collect();
    tiles.shuffle(rng);

    Round::Memory { tiles }
}

/// Matched-tile bookkeeping for a memory board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryProgress {
    pub matched: Vec<bool>,
    pub attempts: u32,
}

impl MemoryProgress {
    pub fn new(tiles: &[MemoryTile]) -> Self {
        Self {
            matched: vec![false; tiles.len()],
            attempts: 0,
        }
    }

    pub fn pairs(&self) -> u32 {
        (self.matched.len() / 2) as u32
    }

    pub fn pairs_found(&self) -> u32 {
        (self.matched.iter().filter(|m| **m).count() / 2) as u32
    }

    pub fn is_cleared(&self) -> bool {
        self.matched.iter().all(|m| *m)
    }

    /// Turn over two tiles; returns whether they form a pair.
    pub fn flip(&mut self, tiles: &[MemoryTile], first: usize, second: usize) -> Result<bool> {
        for index in [first, second] {
            if index >= tiles.len() || self.matched[index] {
                return Err(GameError::InvalidTile { index });
            }
        }
        if first == second {
            return Err(GameError::InvalidTile { index: second });
        }

        self.attempts += 1;
        let is_pair = tiles[first].match_id == tiles[second].match_id;
        if is_pair {
            self.matched[first] = true;
            self.matched[second] = true;
        }
        Ok(is_pair)
    }
}

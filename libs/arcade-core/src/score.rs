//! Result-screen summary of a finished session.

use crate::types::GameScore;
use serde::{Deserialize, Serialize};

impl GameScore {
    /// Whole-number percentage of correct answers; 0 when nothing was asked.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.correct) / f64::from(self.total) * 100.0).round() as u32
    }

    pub fn performance(&self) -> Performance {
        Performance::from_percentage(self.percentage())
    }

    pub fn report(&self) -> ScoreReport {
        let performance = self.performance();
        ScoreReport {
            score: *self,
            percentage: self.percentage(),
            performance,
            message: performance.message().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Performance {
    Master,
    Advanced,
    Intermediate,
    Beginner,
}

impl Performance {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Self::Master,
            70..=89 => Self::Advanced,
            50..=69 => Self::Intermediate,
            _ => Self::Beginner,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Master => "Excellent! Outstanding performance!",
            Self::Advanced => "Good job! Well done!",
            Self::Intermediate => "Not bad! Keep practicing!",
            Self::Beginner => "Keep studying! You'll get better!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    #[serde(flatten)]
    pub score: GameScore,
    pub percentage: u32,
    pub performance: Performance,
    pub message: String,
}

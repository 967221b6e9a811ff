//! Core data model types for simtrack.
//!
//! A [`SessionRecord`] is one simulated attempt at a training module. Records
//! are immutable once built; the only way to obtain one outside of tests is
//! through the session generator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Complexity at or above which a module counts as complex.
pub const COMPLEX_THRESHOLD: i32 = 4;

/// The metrics of one simulated training-module attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    module: String,
    accuracy: u32,
    duration_secs: u32,
    errors: u32,
    complexity: i32,
    emotional_state: EmotionalState,
}

impl SessionRecord {
    /// Build a record from raw values. No range checks are applied.
    pub fn new(
        module: impl Into<String>,
        accuracy: u32,
        duration_secs: u32,
        errors: u32,
        complexity: i32,
        emotional_state: EmotionalState,
    ) -> Self {
        Self {
            module: module.into(),
            accuracy,
            duration_secs,
            errors,
            complexity,
            emotional_state,
        }
    }

    /// Name of the training module.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Accuracy as an integer percentage.
    pub fn accuracy(&self) -> u32 {
        self.accuracy
    }

    /// Time spent on the module, in seconds.
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Number of errors made.
    pub fn errors(&self) -> u32 {
        self.errors
    }

    /// Caller-supplied difficulty, 1-5 by convention.
    pub fn complexity(&self) -> i32 {
        self.complexity
    }

    pub fn emotional_state(&self) -> EmotionalState {
        self.emotional_state
    }

    /// Qualitative tier for this record's accuracy.
    pub fn tier(&self) -> FeedbackTier {
        FeedbackTier::from_accuracy(self.accuracy)
    }
}

/// Simulated affect during a module attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalState {
    Stressed,
    Anxious,
    Calm,
    Confident,
    Relaxed,
}

impl EmotionalState {
    /// States drawn for modules with complexity >= [`COMPLEX_THRESHOLD`].
    pub const COMPLEX: [EmotionalState; 3] = [
        EmotionalState::Stressed,
        EmotionalState::Anxious,
        EmotionalState::Calm,
    ];

    /// States drawn for every other module.
    pub const ROUTINE: [EmotionalState; 3] = [
        EmotionalState::Confident,
        EmotionalState::Relaxed,
        EmotionalState::Calm,
    ];

    /// Candidate states for a given complexity rating.
    pub fn candidates(complexity: i32) -> &'static [EmotionalState; 3] {
        if complexity >= COMPLEX_THRESHOLD {
            &Self::COMPLEX
        } else {
            &Self::ROUTINE
        }
    }

    /// Lowercase label, as used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionalState::Stressed => "stressed",
            EmotionalState::Anxious => "anxious",
            EmotionalState::Calm => "calm",
            EmotionalState::Confident => "confident",
            EmotionalState::Relaxed => "relaxed",
        }
    }
}

impl fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmotionalState::Stressed => write!(f, "Stressed"),
            EmotionalState::Anxious => write!(f, "Anxious"),
            EmotionalState::Calm => write!(f, "Calm"),
            EmotionalState::Confident => write!(f, "Confident"),
            EmotionalState::Relaxed => write!(f, "Relaxed"),
        }
    }
}

impl FromStr for EmotionalState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stressed" => Ok(EmotionalState::Stressed),
            "anxious" => Ok(EmotionalState::Anxious),
            "calm" => Ok(EmotionalState::Calm),
            "confident" => Ok(EmotionalState::Confident),
            "relaxed" => Ok(EmotionalState::Relaxed),
            other => Err(format!("unknown emotional state: {other}")),
        }
    }
}

/// Qualitative performance tier derived from accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    Excellent,
    Good,
    BelowExpectations,
}

impl FeedbackTier {
    /// Classify an accuracy percentage. Lower bounds are inclusive.
    pub fn from_accuracy(accuracy: u32) -> Self {
        if accuracy >= 90 {
            FeedbackTier::Excellent
        } else if accuracy >= 80 {
            FeedbackTier::Good
        } else {
            FeedbackTier::BelowExpectations
        }
    }

    /// The line printed under a record in the feedback report.
    pub fn message(&self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Excellent performance!",
            FeedbackTier::Good => "Good performance, but there is room for improvement.",
            FeedbackTier::BelowExpectations => {
                "Accuracy below expectations. More practice needed."
            }
        }
    }
}

//! Enumeration types for the Food Chain Simulator.
//!
//! Trophic levels are positional: the discriminant of each
//! [`TrophicLevel`] is its fixed index in a [`Chain`](crate::Chain), with
//! index 0 at the base of energy flow.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::structs::Coefficients;

// ---------------------------------------------------------------------------
// Trophic levels
// ---------------------------------------------------------------------------

/// A position in the four-level food chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrophicLevel {
    /// Plants, algae, and other organisms that capture energy directly.
    Producer,
    /// Herbivores feeding on producers.
    PrimaryConsumer,
    /// Predators feeding on primary consumers.
    SecondaryConsumer,
    /// Top predators feeding on secondary consumers.
    TertiaryConsumer,
}

impl TrophicLevel {
    /// Index of [`TrophicLevel::Producer`].
    pub const PRODUCER: usize = 0;
    /// Index of [`TrophicLevel::PrimaryConsumer`].
    pub const PRIMARY_CONSUMER: usize = 1;
    /// Index of [`TrophicLevel::SecondaryConsumer`].
    pub const SECONDARY_CONSUMER: usize = 2;
    /// Index of [`TrophicLevel::TertiaryConsumer`].
    pub const TERTIARY_CONSUMER: usize = 3;

    /// Number of levels in every chain.
    pub const COUNT: usize = 4;

    /// All levels in energy-flow order, producer first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Producer,
        Self::PrimaryConsumer,
        Self::SecondaryConsumer,
        Self::TertiaryConsumer,
    ];

    /// Fixed position of this level in a chain.
    pub const fn index(self) -> usize {
        match self {
            Self::Producer => Self::PRODUCER,
            Self::PrimaryConsumer => Self::PRIMARY_CONSUMER,
            Self::SecondaryConsumer => Self::SECONDARY_CONSUMER,
            Self::TertiaryConsumer => Self::TERTIARY_CONSUMER,
        }
    }

    /// Look up the level at a chain position. Returns `None` outside `0..4`.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            Self::PRODUCER => Some(Self::Producer),
            Self::PRIMARY_CONSUMER => Some(Self::PrimaryConsumer),
            Self::SECONDARY_CONSUMER => Some(Self::SecondaryConsumer),
            Self::TERTIARY_CONSUMER => Some(Self::TertiaryConsumer),
            _ => None,
        }
    }

    /// The level one step closer to the producer, if any.
    pub const fn below(self) -> Option<Self> {
        match self {
            Self::Producer => None,
            Self::PrimaryConsumer => Some(Self::Producer),
            Self::SecondaryConsumer => Some(Self::PrimaryConsumer),
            Self::TertiaryConsumer => Some(Self::SecondaryConsumer),
        }
    }

    /// The level one step closer to the top predator, if any.
    pub const fn above(self) -> Option<Self> {
        match self {
            Self::Producer => Some(Self::PrimaryConsumer),
            Self::PrimaryConsumer => Some(Self::SecondaryConsumer),
            Self::SecondaryConsumer => Some(Self::TertiaryConsumer),
            Self::TertiaryConsumer => None,
        }
    }

    /// The slot for this level in a per-level array.
    pub const fn pick<T>(self, values: &[T; Self::COUNT]) -> &T {
        let [producer, primary, secondary, tertiary] = values;
        match self {
            Self::Producer => producer,
            Self::PrimaryConsumer => primary,
            Self::SecondaryConsumer => secondary,
            Self::TertiaryConsumer => tertiary,
        }
    }

    /// Mutable slot for this level in a per-level array.
    pub const fn pick_mut<T>(self, values: &mut [T; Self::COUNT]) -> &mut T {
        let [producer, primary, secondary, tertiary] = values;
        match self {
            Self::Producer => producer,
            Self::PrimaryConsumer => primary,
            Self::SecondaryConsumer => secondary,
            Self::TertiaryConsumer => tertiary,
        }
    }

    /// Title-cased label, e.g. `"Primary Consumer"`.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Producer => "Producer",
            Self::PrimaryConsumer => "Primary Consumer",
            Self::SecondaryConsumer => "Secondary Consumer",
            Self::TertiaryConsumer => "Tertiary Consumer",
        }
    }
}

impl fmt::Display for TrophicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Producer => f.write_str("producer"),
            Self::PrimaryConsumer => f.write_str("primary consumer"),
            Self::SecondaryConsumer => f.write_str("secondary consumer"),
            Self::TertiaryConsumer => f.write_str("tertiary consumer"),
        }
    }
}

/// A level token that does not name any trophic level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown trophic level: {0:?} (expected 0-3 or producer/primary/secondary/tertiary)")]
pub struct ParseLevelError(pub String);

impl FromStr for TrophicLevel {
    type Err = ParseLevelError;

    /// Accepts the index digit, the `snake_case` name, the spaced name, or the
    /// short alias (`primary`, `secondary`, `tertiary`). Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "0" | "producer" => Ok(Self::Producer),
            "1" | "primary" | "primary_consumer" => Ok(Self::PrimaryConsumer),
            "2" | "secondary" | "secondary_consumer" => Ok(Self::SecondaryConsumer),
            "3" | "tertiary" | "tertiary_consumer" => Ok(Self::TertiaryConsumer),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Propagation models
// ---------------------------------------------------------------------------

/// Selects the coefficient pair used when a population change spreads
/// along the chain.
///
/// | Model | downward | upward |
/// |-------|----------|--------|
/// | [`Balanced`](Self::Balanced) | 0.5 | 0.5 |
/// | [`PredatorPressure`](Self::PredatorPressure) | 0.8 | 0.3 |
/// | [`BottomUp`](Self::BottomUp) | 0.3 | 0.8 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopulationModel {
    /// Moderate, symmetric influence in both directions.
    #[default]
    Balanced,
    /// Top-down effects dominate.
    PredatorPressure,
    /// Resource effects dominate.
    BottomUp,
}

impl PopulationModel {
    /// All models in menu order.
    pub const ALL: [Self; 3] = [Self::Balanced, Self::PredatorPressure, Self::BottomUp];

    /// Built-in coefficients for this model.
    pub const fn coefficients(self) -> Coefficients {
        match self {
            Self::Balanced => Coefficients::new(Coefficients::tenths(5), Coefficients::tenths(5)),
            Self::PredatorPressure => {
                Coefficients::new(Coefficients::tenths(8), Coefficients::tenths(3))
            }
            Self::BottomUp => Coefficients::new(Coefficients::tenths(3), Coefficients::tenths(8)),
        }
    }

    /// Configuration key, e.g. `"predator_pressure"`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::PredatorPressure => "predator_pressure",
            Self::BottomUp => "bottom_up",
        }
    }

    /// One-line description shown in explanations.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Balanced => "changes spread evenly to predators and prey",
            Self::PredatorPressure => "consumers mostly reshape the levels they feed on",
            Self::BottomUp => "food supply mostly reshapes the levels that feed on it",
        }
    }
}

impl fmt::Display for PopulationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balanced => f.write_str("Balanced"),
            Self::PredatorPressure => f.write_str("Predator Pressure"),
            Self::BottomUp => f.write_str("Bottom-Up"),
        }
    }
}

/// A model token that does not name any propagation model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown population model: {0:?} (expected balanced, predator_pressure, or bottom_up)")]
pub struct ParseModelError(pub String);

impl FromStr for PopulationModel {
    type Err = ParseModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "balanced" => Ok(Self::Balanced),
            "predator_pressure" | "predator" => Ok(Self::PredatorPressure),
            "bottom_up" | "bottomup" => Ok(Self::BottomUp),
            _ => Err(ParseModelError(s.to_owned())),
        }
    }
}

/// Lowercase and fold spaces and hyphens to underscores.
fn normalize_token(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

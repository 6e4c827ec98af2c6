//! Error types for the `foodchain-core` crate.
//!
//! Every error here is recoverable at the presentation boundary: the caller
//! shows the message and keeps its previous session state.

use foodchain_types::TrophicLevel;

/// Why a population field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationProblem {
    /// The field was empty after trimming.
    Missing,
    /// The text is not a whole number.
    NotWholeNumber,
    /// The number is below zero.
    Negative,
}

/// Errors produced while turning raw form text into a chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A name field is blank after trimming.
    #[error("Please enter an organism name for {level}.")]
    EmptyName {
        /// The level whose name is blank.
        level: TrophicLevel,
    },

    /// A population field is not a non-negative whole number.
    #[error("{}", population_message(.level, .problem))]
    InvalidPopulation {
        /// The level whose population was rejected.
        level: TrophicLevel,
        /// What was wrong with the text.
        problem: PopulationProblem,
    },
}

impl ValidationError {
    /// The level that failed validation.
    pub const fn level(&self) -> TrophicLevel {
        match self {
            Self::EmptyName { level } | Self::InvalidPopulation { level, .. } => *level,
        }
    }

    /// Name of the form field that failed: `"name"` or `"population"`.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyName { .. } => "name",
            Self::InvalidPopulation { .. } => "population",
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn population_message(level: &TrophicLevel, problem: &PopulationProblem) -> String {
    match problem {
        PopulationProblem::Missing => format!("Please enter a population for {level}."),
        PopulationProblem::NotWholeNumber => {
            format!("Population for {level} must be a whole number.")
        }
        PopulationProblem::Negative => format!("Population for {level} must be 0 or higher."),
    }
}

/// Errors produced by the propagation engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropagationError {
    /// The changed-level index is outside `0..4`.
    #[error("level index {0} is out of range (expected 0-3)")]
    InvalidLevelIndex(usize),

    /// Decimal arithmetic or the integer conversion overflowed.
    #[error("population arithmetic overflow while updating {level}")]
    ArithmeticOverflow {
        /// The level being recomputed when the overflow happened.
        level: TrophicLevel,
    },
}

/// Errors returned by session handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Form input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The propagation engine rejected the update.
    #[error(transparent)]
    Propagation(#[from] PropagationError),

    /// A dynamic update was requested before any chain was built.
    #[error("Please build the food chain first.")]
    NoChain,

    /// The requested example does not exist.
    #[error("no example chain named {0:?}")]
    UnknownExample(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_level() {
        let err = ValidationError::EmptyName {
            level: TrophicLevel::SecondaryConsumer,
        };
        assert_eq!(
            err.to_string(),
            "Please enter an organism name for secondary consumer."
        );
        assert_eq!(err.field(), "name");

        let err = ValidationError::InvalidPopulation {
            level: TrophicLevel::Producer,
            problem: PopulationProblem::Negative,
        };
        assert_eq!(err.to_string(), "Population for producer must be 0 or higher.");
        assert_eq!(err.level(), TrophicLevel::Producer);
        assert_eq!(err.field(), "population");
    }

    #[test]
    fn session_error_is_transparent() {
        let err = SessionError::from(ValidationError::InvalidPopulation {
            level: TrophicLevel::TertiaryConsumer,
            problem: PopulationProblem::Missing,
        });
        assert_eq!(
            err.to_string(),
            "Please enter a population for tertiary consumer."
        );
    }
}

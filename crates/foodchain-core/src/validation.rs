//! Turning raw form text into a validated [`Chain`].
//!
//! Names and population text are trimmed before they are checked. A chain
//! is only produced when all eight fields pass; the first failing field is
//! reported and nothing else is touched. Names are checked for every level
//! before any population is.

use foodchain_types::{Chain, Level, TrophicLevel};
use tracing::debug;

use crate::error::{PopulationProblem, ValidationError};

/// Populations used by the "default populations" fill, producer first.
///
/// Each level supports roughly a tenth of the level below it.
pub const DEFAULT_POPULATIONS: [u64; TrophicLevel::COUNT] = [1000, 100, 10, 1];

/// The raw text of the chain form: a name and a population per level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawChainInput {
    names: [String; TrophicLevel::COUNT],
    populations: [String; TrophicLevel::COUNT],
}

impl RawChainInput {
    /// Build a form from four (name, population-text) pairs, producer first.
    pub fn new(entries: [(&str, &str); TrophicLevel::COUNT]) -> Self {
        let mut input = Self::default();
        for (level, (name, population)) in TrophicLevel::ALL.into_iter().zip(entries) {
            input.set_name(level, name);
            input.set_population(level, population);
        }
        input
    }

    /// Copy a chain's names and populations back into form text.
    pub fn from_chain(chain: &Chain) -> Self {
        let mut input = Self::default();
        for (level, entry) in chain.iter() {
            input.set_name(level, entry.name.as_str());
            input.set_population(level, entry.population.to_string());
        }
        input
    }

    /// Raw name text for a level.
    pub fn name(&self, level: TrophicLevel) -> &str {
        level.pick(&self.names).as_str()
    }

    /// Raw population text for a level.
    pub fn population(&self, level: TrophicLevel) -> &str {
        level.pick(&self.populations).as_str()
    }

    /// Replace the raw name text for a level.
    pub fn set_name(&mut self, level: TrophicLevel, text: impl Into<String>) {
        *level.pick_mut(&mut self.names) = text.into();
    }

    /// Replace the raw population text for a level.
    pub fn set_population(&mut self, level: TrophicLevel, text: impl Into<String>) {
        *level.pick_mut(&mut self.populations) = text.into();
    }

    /// Overwrite every population field with [`DEFAULT_POPULATIONS`].
    /// Names are left as they are.
    #[must_use]
    pub fn with_default_populations(mut self) -> Self {
        for level in TrophicLevel::ALL {
            let value = *level.pick(&DEFAULT_POPULATIONS);
            self.set_population(level, value.to_string());
        }
        self
    }
}

/// Check one organism name and return it trimmed.
pub fn validate_name(raw: &str, level: TrophicLevel) -> Result<String, ValidationError> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return Err(ValidationError::EmptyName { level });
    }
    Ok(cleaned.to_owned())
}

/// Parse one population field as a non-negative whole number.
///
/// Also used for the "new value" of a dynamic update.
pub fn validate_population_value(raw: &str, level: TrophicLevel) -> Result<u64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidPopulation {
            level,
            problem: PopulationProblem::Missing,
        });
    }

    let problem = match trimmed.parse::<i128>() {
        Ok(n) if n < 0 => PopulationProblem::Negative,
        Ok(n) => match u64::try_from(n) {
            Ok(value) => return Ok(value),
            Err(_too_large) => PopulationProblem::NotWholeNumber,
        },
        Err(_not_integer) => PopulationProblem::NotWholeNumber,
    };
    Err(ValidationError::InvalidPopulation { level, problem })
}

/// Validate the whole form into a chain.
pub fn validate_chain(input: &RawChainInput) -> Result<Chain, ValidationError> {
    let names = try_per_level(|level| validate_name(input.name(level), level))?;
    let populations =
        try_per_level(|level| validate_population_value(input.population(level), level))?;

    let [n0, n1, n2, n3] = names;
    let [p0, p1, p2, p3] = populations;
    let chain = Chain::new([
        Level::new(n0, p0),
        Level::new(n1, p1),
        Level::new(n2, p2),
        Level::new(n3, p3),
    ]);
    debug!(populations = ?chain.populations(), "chain input validated");
    Ok(chain)
}

/// Run a fallible check for each level in order, stopping at the first error.
fn try_per_level<T, F>(mut check: F) -> Result<[T; TrophicLevel::COUNT], ValidationError>
where
    F: FnMut(TrophicLevel) -> Result<T, ValidationError>,
{
    let [l0, l1, l2, l3] = TrophicLevel::ALL;
    Ok([check(l0)?, check(l1)?, check(l2)?, check(l3)?])
}

//! Core entity structs: levels, chains, and propagation coefficients.

use std::ops::Index;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::TrophicLevel;

/// One trophic level of a chain: an organism name and its population.
///
/// The name is expected to be non-empty after trimming. Validation and the
/// example library are the only producers of levels that reach a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Level {
    /// Organism name, e.g. `"Rabbit"`.
    pub name: String,
    /// Number of individuals at this level.
    pub population: u64,
}

impl Level {
    /// Create a level from a name and population.
    pub fn new(name: impl Into<String>, population: u64) -> Self {
        Self {
            name: name.into(),
            population,
        }
    }
}

/// A food chain of exactly four levels in energy-flow order.
///
/// Indexed by [`TrophicLevel`]; position 0 is the producer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Chain {
    levels: [Level; TrophicLevel::COUNT],
}

impl Chain {
    /// Build a chain from four levels, producer first.
    pub const fn new(levels: [Level; TrophicLevel::COUNT]) -> Self {
        Self { levels }
    }

    /// Build a chain from four names and four populations, producer first.
    pub fn from_parts(
        names: [&str; TrophicLevel::COUNT],
        populations: [u64; TrophicLevel::COUNT],
    ) -> Self {
        let [n0, n1, n2, n3] = names;
        let [p0, p1, p2, p3] = populations;
        Self::new([
            Level::new(n0, p0),
            Level::new(n1, p1),
            Level::new(n2, p2),
            Level::new(n3, p3),
        ])
    }

    /// The level at the given position.
    pub const fn level(&self, level: TrophicLevel) -> &Level {
        level.pick(&self.levels)
    }

    /// Organism name at the given position.
    pub fn name(&self, level: TrophicLevel) -> &str {
        &self.level(level).name
    }

    /// Population at the given position.
    pub const fn population(&self, level: TrophicLevel) -> u64 {
        self.level(level).population
    }

    /// Replace the population at the given position.
    pub const fn set_population(&mut self, level: TrophicLevel, population: u64) {
        level.pick_mut(&mut self.levels).population = population;
    }

    /// All four populations, producer first.
    pub fn populations(&self) -> [u64; TrophicLevel::COUNT] {
        TrophicLevel::ALL.map(|level| self.population(level))
    }

    /// Largest population across the chain.
    pub fn max_population(&self) -> u64 {
        self.levels.iter().map(|l| l.population).max().unwrap_or(0)
    }

    /// Iterate levels in energy-flow order with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (TrophicLevel, &Level)> {
        TrophicLevel::ALL.into_iter().zip(self.levels.iter())
    }
}

impl Index<TrophicLevel> for Chain {
    type Output = Level;

    fn index(&self, level: TrophicLevel) -> &Level {
        self.level(level)
    }
}

/// The coefficient pair a propagation model applies to neighboring levels.
///
/// `downward` scales the effect on levels closer to the producer;
/// `upward` scales the effect on levels closer to the top predator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coefficients {
    /// Influence on the level below the changed one.
    pub downward: Decimal,
    /// Influence on the level above the changed one.
    pub upward: Decimal,
}

impl Coefficients {
    /// Create a coefficient pair.
    pub const fn new(downward: Decimal, upward: Decimal) -> Self {
        Self { downward, upward }
    }

    /// `n / 10` as an exact decimal.
    pub const fn tenths(n: u32) -> Decimal {
        Decimal::from_parts(n, 0, 0, false, 1)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn grassland() -> Chain {
        Chain::from_parts(["Grass", "Rabbit", "Snake", "Hawk"], [1000, 100, 10, 1])
    }

    #[test]
    fn positional_access() {
        let chain = grassland();
        assert_eq!(chain.name(TrophicLevel::Producer), "Grass");
        assert_eq!(chain[TrophicLevel::TertiaryConsumer].name, "Hawk");
        assert_eq!(chain.population(TrophicLevel::SecondaryConsumer), 10);
        assert_eq!(chain.populations(), [1000, 100, 10, 1]);
        assert_eq!(chain.max_population(), 1000);
    }

    #[test]
    fn set_population_touches_one_level() {
        let mut chain = grassland();
        chain.set_population(TrophicLevel::PrimaryConsumer, 250);
        assert_eq!(chain.populations(), [1000, 250, 10, 1]);
        assert_eq!(chain.name(TrophicLevel::PrimaryConsumer), "Rabbit");
    }

    #[test]
    fn iter_follows_energy_flow() {
        let chain = grassland();
        let names: Vec<_> = chain.iter().map(|(_, l)| l.name.as_str()).collect();
        assert_eq!(names, ["Grass", "Rabbit", "Snake", "Hawk"]);
        let levels: Vec<_> = chain.iter().map(|(level, _)| level).collect();
        assert_eq!(levels, TrophicLevel::ALL);
    }

    #[test]
    fn chain_serializes_as_four_levels() {
        let value = serde_json::to_value(grassland()).ok();
        let levels = value
            .as_ref()
            .and_then(|v| v.get("levels"))
            .and_then(serde_json::Value::as_array)
            .map(Vec::len);
        assert_eq!(levels, Some(4));
    }

    #[test]
    fn tenths_are_exact() {
        assert_eq!(Coefficients::tenths(3), dec!(0.3));
        assert_eq!(Coefficients::tenths(10), dec!(1));
    }

    #[test]
    fn model_coefficients_are_compile_time_constants() {
        const BOTTOM_UP: Coefficients = crate::enums::PopulationModel::BottomUp.coefficients();
        const HALF: Decimal = Coefficients::tenths(5);
        assert_eq!(BOTTOM_UP, Coefficients::new(dec!(0.3), dec!(0.8)));
        assert_eq!(HALF, dec!(0.5));
    }
}

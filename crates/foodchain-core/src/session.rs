//! Session state and the handlers that drive it.
//!
//! A [`SessionState`] is a plain value: the current chain (if built), the
//! form text, and the user's selections. [`SessionState::apply`] takes a
//! state and an [`Action`] and returns the next state. On error the caller
//! still holds the previous state, so a failed action never leaves a
//! half-applied chain behind.

use foodchain_types::{Chain, PopulationModel, TrophicLevel};
use tracing::{debug, info};

use crate::config::{CoefficientTable, SessionConfig};
use crate::error::SessionError;
use crate::library::{self, ExampleChain, ExampleCursor};
use crate::propagation::propagate_level;
use crate::validation::{RawChainInput, validate_chain, validate_population_value};

/// Which example to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExampleChoice {
    /// The next example in cyclic order.
    Next,
    /// The example with this title.
    Named(String),
    /// The example at this library position.
    Index(usize),
}

/// A user action handled by [`SessionState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the name text of one level.
    EditName {
        /// The level being edited.
        level: TrophicLevel,
        /// New raw text.
        text: String,
    },
    /// Replace the population text of one level.
    EditPopulation {
        /// The level being edited.
        level: TrophicLevel,
        /// New raw text.
        text: String,
    },
    /// Validate the form and make it the current chain.
    Build,
    /// Copy an example into the form and the current chain.
    LoadExample(ExampleChoice),
    /// Fill every population field with the default pyramid.
    FillDefaultPopulations,
    /// Choose the propagation model.
    SelectModel(PopulationModel),
    /// Choose the level that dynamic updates change.
    SelectChangeLevel(TrophicLevel),
    /// Set the selected level to a new value and propagate.
    ApplyChange {
        /// Raw text of the new population.
        raw_value: String,
    },
    /// Discard the chain, the form, and the selections.
    Reset,
}

/// Everything the presentation layer needs between user actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    form: RawChainInput,
    chain: Option<Chain>,
    model: PopulationModel,
    change_level: TrophicLevel,
    cursor: ExampleCursor,
    defaults: SessionConfig,
    coefficients: CoefficientTable,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(SessionConfig::default(), CoefficientTable::default())
    }
}

impl SessionState {
    /// A fresh session with the given initial selections and coefficients.
    pub fn new(defaults: SessionConfig, coefficients: CoefficientTable) -> Self {
        Self {
            form: RawChainInput::default(),
            chain: None,
            model: defaults.default_model,
            change_level: defaults.default_change_level,
            cursor: ExampleCursor::default(),
            defaults,
            coefficients,
        }
    }

    /// The current chain, if one has been built or loaded.
    pub const fn chain(&self) -> Option<&Chain> {
        self.chain.as_ref()
    }

    /// The raw form text.
    pub const fn form(&self) -> &RawChainInput {
        &self.form
    }

    /// The selected propagation model.
    pub const fn model(&self) -> PopulationModel {
        self.model
    }

    /// The level dynamic updates will change.
    pub const fn change_level(&self) -> TrophicLevel {
        self.change_level
    }

    /// Coefficients in effect for each model.
    pub const fn coefficients(&self) -> &CoefficientTable {
        &self.coefficients
    }

    /// Handle one action, returning the next state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when validation, propagation, or example
    /// lookup fails. `self` is never modified.
    pub fn apply(&self, action: Action) -> Result<Self, SessionError> {
        let mut next = self.clone();
        match action {
            Action::EditName { level, text } => next.form.set_name(level, text),
            Action::EditPopulation { level, text } => next.form.set_population(level, text),
            Action::Build => {
                let chain = validate_chain(&next.form)?;
                info!(producer = chain.name(TrophicLevel::Producer), "chain built");
                next.chain = Some(chain);
            }
            Action::LoadExample(choice) => {
                let example = next.resolve_example(choice)?;
                let chain = example.to_chain();
                info!(example = example.title, "example chain loaded");
                next.form = RawChainInput::from_chain(&chain);
                next.chain = Some(chain);
            }
            Action::FillDefaultPopulations => {
                next.form = next.form.with_default_populations();
            }
            Action::SelectModel(model) => next.model = model,
            Action::SelectChangeLevel(level) => next.change_level = level,
            Action::ApplyChange { raw_value } => {
                let current = next.chain.as_ref().ok_or(SessionError::NoChain)?;
                let value = validate_population_value(&raw_value, next.change_level)?;
                let coefficients = next.coefficients.coefficients_for(next.model);
                let updated = propagate_level(current, next.change_level, value, &coefficients)?;
                for (level, entry) in updated.iter() {
                    next.form.set_population(level, entry.population.to_string());
                }
                next.chain = Some(updated);
            }
            Action::Reset => {
                debug!("session reset");
                next = Self::new(self.defaults, self.coefficients);
            }
        }
        Ok(next)
    }

    fn resolve_example(
        &mut self,
        choice: ExampleChoice,
    ) -> Result<&'static ExampleChain, SessionError> {
        match choice {
            ExampleChoice::Next => {
                let (cursor, example) = self.cursor.advance();
                self.cursor = cursor;
                Ok(example)
            }
            ExampleChoice::Named(name) => {
                library::by_name(&name).ok_or(SessionError::UnknownExample(name))
            }
            ExampleChoice::Index(index) => library::by_index(index)
                .ok_or_else(|| SessionError::UnknownExample(index.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PopulationProblem, ValidationError};

    fn loaded() -> SessionState {
        SessionState::default()
            .apply(Action::LoadExample(ExampleChoice::Index(0)))
            .unwrap_or_default()
    }

    #[test]
    fn new_session_is_empty() {
        let state = SessionState::default();
        assert!(state.chain().is_none());
        assert_eq!(state.model(), PopulationModel::Balanced);
        assert_eq!(state.change_level(), TrophicLevel::PrimaryConsumer);
        assert_eq!(state.form(), &RawChainInput::default());
    }

    #[test]
    fn build_from_edited_form() {
        let mut state = SessionState::default();
        let entries = [("Grass", "10"), ("Rabbit", "5"), ("Snake", "2"), ("Hawk", "1")];
        for (level, (name, population)) in TrophicLevel::ALL.into_iter().zip(entries) {
            state = state
                .apply(Action::EditName { level, text: name.to_owned() })
                .unwrap_or_default();
            state = state
                .apply(Action::EditPopulation { level, text: population.to_owned() })
                .unwrap_or_default();
        }
        let built = state.apply(Action::Build);
        assert_eq!(
            built.ok().and_then(|s| s.chain().map(Chain::populations)),
            Some([10, 5, 2, 1])
        );
    }

    #[test]
    fn failed_build_leaves_state_untouched() {
        let state = loaded()
            .apply(Action::EditPopulation {
                level: TrophicLevel::SecondaryConsumer,
                text: "-3".to_owned(),
            })
            .unwrap_or_default();
        let before = state.clone();
        let result = state.apply(Action::Build);
        assert_eq!(
            result,
            Err(SessionError::Validation(ValidationError::InvalidPopulation {
                level: TrophicLevel::SecondaryConsumer,
                problem: PopulationProblem::Negative,
            }))
        );
        assert_eq!(state, before);
        assert_eq!(
            state.chain().map(Chain::populations),
            Some([1000, 100, 10, 1])
        );
    }

    #[test]
    fn example_fills_form_and_chain() {
        let state = SessionState::default()
            .apply(Action::LoadExample(ExampleChoice::Named("ocean".to_owned())))
            .unwrap_or_default();
        assert_eq!(
            state.chain().map(|c| c.name(TrophicLevel::TertiaryConsumer)),
            Some("Tuna")
        );
        assert_eq!(state.form().name(TrophicLevel::Producer), "Phytoplankton");
        assert_eq!(state.form().population(TrophicLevel::Producer), "1000");
    }

    #[test]
    fn next_example_cycles() {
        let mut state = SessionState::default();
        let mut titles = Vec::new();
        for _ in 0..4 {
            state = state
                .apply(Action::LoadExample(ExampleChoice::Next))
                .unwrap_or_default();
            titles.push(
                state
                    .chain()
                    .map(|c| c.name(TrophicLevel::Producer).to_owned())
                    .unwrap_or_default(),
            );
        }
        assert_eq!(titles, ["Grass", "Phytoplankton", "Oak Tree", "Grass"]);
    }

    #[test]
    fn unknown_example_is_an_error() {
        let result = SessionState::default()
            .apply(Action::LoadExample(ExampleChoice::Named("tundra".to_owned())));
        assert_eq!(result, Err(SessionError::UnknownExample("tundra".to_owned())));
        let result = SessionState::default().apply(Action::LoadExample(ExampleChoice::Index(9)));
        assert_eq!(result, Err(SessionError::UnknownExample("9".to_owned())));
    }

    #[test]
    fn default_populations_fill_form_only() {
        let state = SessionState::default()
            .apply(Action::FillDefaultPopulations)
            .unwrap_or_default();
        assert!(state.chain().is_none());
        assert_eq!(state.form().population(TrophicLevel::Producer), "1000");
        assert_eq!(state.form().population(TrophicLevel::TertiaryConsumer), "1");
        assert_eq!(state.form().name(TrophicLevel::Producer), "");
    }

    #[test]
    fn change_requires_a_chain() {
        let result = SessionState::default().apply(Action::ApplyChange {
            raw_value: "10".to_owned(),
        });
        assert_eq!(result, Err(SessionError::NoChain));
    }

    #[test]
    fn change_uses_selected_model_and_level() {
        let state = loaded()
            .apply(Action::SelectModel(PopulationModel::BottomUp))
            .and_then(|s| s.apply(Action::SelectChangeLevel(TrophicLevel::PrimaryConsumer)))
            .and_then(|s| s.apply(Action::ApplyChange { raw_value: " 200 ".to_owned() }))
            .unwrap_or_default();
        assert_eq!(
            state.chain().map(Chain::populations),
            Some([1300, 200, 18, 2])
        );
        assert_eq!(state.form().population(TrophicLevel::SecondaryConsumer), "18");
    }

    #[test]
    fn invalid_change_value_keeps_chain() {
        let state = loaded();
        let result = state.apply(Action::ApplyChange {
            raw_value: "many".to_owned(),
        });
        assert!(matches!(result, Err(SessionError::Validation(_))));
        assert_eq!(
            state.chain().map(Chain::populations),
            Some([1000, 100, 10, 1])
        );
    }

    #[test]
    fn reset_restores_defaults() {
        let state = loaded()
            .apply(Action::SelectModel(PopulationModel::PredatorPressure))
            .and_then(|s| s.apply(Action::Reset))
            .unwrap_or_default();
        assert!(state.chain().is_none());
        assert_eq!(state.model(), PopulationModel::Balanced);
        assert_eq!(state.form(), &RawChainInput::default());
    }

    #[test]
    fn reset_keeps_configured_defaults() {
        let defaults = SessionConfig {
            default_model: PopulationModel::BottomUp,
            default_change_level: TrophicLevel::Producer,
        };
        let state = SessionState::new(defaults, CoefficientTable::default())
            .apply(Action::SelectModel(PopulationModel::Balanced))
            .and_then(|s| s.apply(Action::Reset))
            .unwrap_or_default();
        assert_eq!(state.model(), PopulationModel::BottomUp);
        assert_eq!(state.change_level(), TrophicLevel::Producer);
    }
}

//! Validation, example chains, population propagation, and session state
//! for the Food Chain Simulator.
//!
//! The presentation layer never touches a [`Chain`] directly: it feeds user
//! actions to a [`SessionState`] and renders whatever state comes back.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `foodchain-config.yaml` into
//!   strongly-typed structs.
//! - [`error`] -- Validation, propagation, and session error types.
//! - [`explain`] -- Classroom explanation text for a chain.
//! - [`library`] -- The built-in example chains and cyclic/random selection.
//! - [`propagation`] -- The what-if engine spreading a population change.
//! - [`scale`] -- Population-to-dot scaling for the diagram.
//! - [`session`] -- [`SessionState`] and the [`Action`] handlers.
//! - [`validation`] -- Raw form text to validated chain.
//!
//! [`Chain`]: foodchain_types::Chain
//! [`SessionState`]: session::SessionState
//! [`Action`]: session::Action

pub mod config;
pub mod error;
pub mod explain;
pub mod library;
pub mod propagation;
pub mod scale;
pub mod session;
pub mod validation;

// Re-export primary types at crate root.
pub use config::{AppConfig, CoefficientTable, ConfigError, ExampleSelection};
pub use error::{PopulationProblem, PropagationError, SessionError, ValidationError};
pub use explain::{explain, explain_change};
pub use propagation::{propagate, propagate_level};
pub use scale::PopulationScale;
pub use session::{Action, ExampleChoice, SessionState};
pub use validation::{DEFAULT_POPULATIONS, RawChainInput, validate_chain};

//! Shared type definitions for the Food Chain Simulator.
//!
//! This crate is the single source of truth for the chain model used across
//! the workspace: the fixed four-level [`Chain`], its positional
//! [`TrophicLevel`] index, and the [`PopulationModel`] coefficient pairs.
//!
//! # Modules
//!
//! - [`enums`] -- Trophic levels and propagation models, with token parsing
//! - [`structs`] -- Levels, chains, and coefficient pairs

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{ParseLevelError, ParseModelError, PopulationModel, TrophicLevel};
pub use structs::{Chain, Coefficients, Level};

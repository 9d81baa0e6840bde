//! Core value types and the fixed rules of the contest.
//!
//! This module holds the small building blocks everything else shares:
//! signed grid positions, jump displacements and the rule constants.

pub mod position;
pub mod rules;

pub use position::{Jump, Position};

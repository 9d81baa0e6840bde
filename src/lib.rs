//! # dig-contest
//!
//! A turn-based archaeological dig contest engine.
//!
//! Teams of players take turns jumping across a grid of plots. Landing on a
//! plot digs it: the player pays an overdig penalty for every earlier dig of
//! that plot, then collects whatever treasure is left. Jumping off the grid
//! costs the player their license, and their merit is struck from the team
//! score. A team with nobody licensed is out.
//!
//! ## Design Principles
//!
//! 1. **Explicit turn pointer**: teams rotate turns with an index into an
//!    append-only roster and a bounded cyclic scan over licensed players.
//!
//! 2. **One rule set**: every numeric rule lives in [`crate::core::rules`].
//!
//! 3. **Errors for misuse, outcomes for play**: a zero jump or an unknown
//!    team is an error; jumping off the grid is a [`DigOutcome`].
//!
//! ## Modules
//!
//! - `core`: positions, jumps and rule constants
//! - `terrain`: plots, the grid and treasure maps
//! - `roster`: players, teams, turn rotation and ranking
//! - `contest`: the composition root and the dig protocol
//! - `session`: text front end (setup header, commands, roster file)
//! - `error`: error types

pub mod contest;
pub mod core;
pub mod error;
pub mod roster;
pub mod session;
pub mod terrain;

// Re-export commonly used types
pub use crate::core::{Jump, Position};

pub use crate::terrain::{Grid, Plot, TreasureMap};

pub use crate::roster::{Player, Ranked, Team, TeamStanding};

pub use crate::contest::{Contest, DigOutcome, DigRecord};

pub use crate::error::{ContestError, ContestResult, SessionError, SetupError};

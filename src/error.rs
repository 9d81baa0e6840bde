//! Error types for the crate.
//!
//! Fallible setup operations return [`SetupError`]; everything reachable from
//! a dig or a query returns [`ContestError`]. Out-of-bounds jumps are not
//! errors: they disqualify the player and surface as
//! [`DigOutcome::Disqualified`](crate::contest::DigOutcome::Disqualified).
//! The text front end wraps both in [`SessionError`].

use crate::core::Jump;

/// Setup misuse. Always a caller bug; setup should be aborted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// `rows × cols` does not fit in a `usize`.
    #[error("grid of {rows}x{cols} cells is too large")]
    GridTooLarge {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// More plots were placed than the grid holds.
    #[error("grid is full: all {capacity} plots are already placed")]
    GridFull {
        /// Number of cells in the grid.
        capacity: usize,
    },

    /// A dig was attempted before every plot was placed.
    #[error("grid is incomplete: {placed} of {capacity} plots placed")]
    GridIncomplete {
        /// Plots placed so far.
        placed: usize,
        /// Number of cells in the grid.
        capacity: usize,
    },

    /// More players were added than the roster was sized for.
    #[error("roster of team {team} is full ({capacity} players)")]
    RosterFull {
        /// The team being built.
        team: String,
        /// Roster capacity fixed at creation.
        capacity: usize,
    },
}

/// Errors returned by contest operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContestError {
    /// Setup was not completed correctly.
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// The jump does not move the player. State is unchanged.
    #[error("invalid jump {jump}: displacement must be non-zero")]
    InvalidMove {
        /// The rejected jump.
        jump: Jump,
    },

    /// No registered team has this name. State is unchanged.
    #[error("unknown team: {0}")]
    UnknownTeam(String),

    /// The team has nobody to send digging.
    #[error("team {0} has an empty roster")]
    EmptyRoster(String),
}

/// Result alias for contest operations.
pub type ContestResult<T> = Result<T, ContestError>;

/// Errors raised while driving a contest from text input.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while a value was still expected.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof {
        /// What was being read.
        expected: &'static str,
    },

    /// A token that should be a number was not.
    #[error("expected a number for {expected}, found {token:?}")]
    InvalidNumber {
        /// What was being read.
        expected: &'static str,
        /// The offending token.
        token: String,
    },

    /// The roster file does not exist.
    #[error("roster file not found: {}", .path.display())]
    RosterMissing {
        /// Path that was tried.
        path: std::path::PathBuf,
    },

    /// The roster file does not follow the count / name / players layout.
    #[error("malformed roster at line {line}: {reason}")]
    MalformedRoster {
        /// 1-based line number.
        line: usize,
        /// What was wrong.
        reason: String,
    },

    /// The setup picked a roster entry that does not exist.
    #[error("roster entry {index} does not exist ({available} available)")]
    UnknownRosterEntry {
        /// 1-based index requested.
        index: usize,
        /// Number of entries in the roster file.
        available: usize,
    },

    /// The contest rejected an operation the session cannot recover from.
    #[error(transparent)]
    Contest(#[from] ContestError),
}

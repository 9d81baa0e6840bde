//! Record of resolved digs.
//!
//! Every dig that reaches a team is appended to the contest history. The
//! history is a persistent vector, so cloning a contest for a snapshot is
//! O(1).

use serde::{Deserialize, Serialize};

use crate::core::{Jump, Position};

/// What a single dig did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigOutcome {
    /// The jump left the grid. The player lost their license and
    /// `struck_merit` was removed from the team score.
    Disqualified {
        /// Merit the player had accumulated, now struck from the team.
        struck_merit: i64,
    },

    /// The player dug inside the grid.
    Excavated {
        /// Overdig penalty applied (zero or negative).
        penalty: i64,
        /// Treasure found (possibly zero).
        worth: u32,
    },

    /// The due player was already unlicensed and moved without digging.
    Idle,
}

impl DigOutcome {
    /// Net change to the team score.
    #[must_use]
    pub fn score_delta(&self) -> i64 {
        match *self {
            DigOutcome::Disqualified { struck_merit } => -struck_merit,
            DigOutcome::Excavated { penalty, worth } => penalty + i64::from(worth),
            DigOutcome::Idle => 0,
        }
    }

    /// True if this dig cost the player their license.
    #[must_use]
    pub const fn is_disqualification(&self) -> bool {
        matches!(self, DigOutcome::Disqualified { .. })
    }
}

/// A dig as it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigRecord {
    /// Sequence number, starting at 1.
    pub sequence: usize,
    /// Team that dug.
    pub team: String,
    /// Player who was due.
    pub player: String,
    /// Requested jump.
    pub jump: Jump,
    /// Position the jump aimed at; `None` past the coordinate range.
    pub destination: Option<Position>,
    /// Result.
    pub outcome: DigOutcome,
}

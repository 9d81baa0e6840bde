//! Teams and turn rotation.
//!
//! A team owns an ordered roster and a turn pointer: the index of the player
//! due to dig next. After each dig the pointer moves forward cyclically,
//! skipping players whose license was revoked.
//!
//! ## States
//!
//! - **Active**: at least one roster member is licensed.
//! - **Inactive**: nobody is licensed. Terminal; the contest stops sending
//!   this team digging and the session drops it.
//!
//! The pointer is a plain index into an append-only roster, so there is no
//! aliasing between "the current player" and the roster itself.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Player;
use super::ranking::{rank_descending, Ranked, TeamStanding};
use crate::core::{Jump, Position};
use crate::error::SetupError;

/// An ordered, fixed-capacity roster with a turn pointer and a score.
///
/// ## Example
///
/// ```
/// use dig_contest::core::Jump;
/// use dig_contest::roster::Team;
///
/// let mut team = Team::from_roster("Diggers", ["Bo", "Cy"]);
/// assert_eq!(team.due_player().map(|p| p.name()), Some("Bo"));
///
/// team.resolve_dig(Jump::new(1, 1), true);
/// team.award_merit(10);
/// team.advance_turn();
///
/// assert_eq!(team.score(), 10);
/// assert_eq!(team.due_player().map(|p| p.name()), Some("Cy"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    name: String,
    roster: SmallVec<[Player; 4]>,
    capacity: usize,
    score: i64,
    due: usize,
    active: bool,
}

impl Team {
    /// Create an empty team that will hold up to `capacity` players.
    ///
    /// An empty team has nobody licensed, so it starts inactive.
    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            roster: SmallVec::with_capacity(capacity),
            capacity,
            score: 0,
            due: 0,
            active: false,
        }
    }

    /// Create a team whose roster is exactly `names`, in order.
    pub fn from_roster<I, S>(name: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roster: SmallVec<[Player; 4]> = names.into_iter().map(Player::new).collect();
        let mut team = Self {
            name: name.into(),
            capacity: roster.len(),
            roster,
            score: 0,
            due: 0,
            active: false,
        };
        team.recompute_active();
        team
    }

    /// Append a player to the roster.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), SetupError> {
        if self.roster.len() >= self.capacity {
            return Err(SetupError::RosterFull {
                team: self.name.clone(),
                capacity: self.capacity,
            });
        }
        self.roster.push(Player::new(name));
        self.recompute_active();
        Ok(())
    }

    /// Team name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Aggregate score.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Roster capacity fixed at creation.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Roster in insertion order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.roster
    }

    /// True if the roster has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// True while at least one player was licensed at the last recompute.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Roster index of the player due to dig.
    #[must_use]
    pub const fn due_index(&self) -> usize {
        self.due
    }

    /// The player due to dig, or `None` for an empty roster.
    #[must_use]
    pub fn due_player(&self) -> Option<&Player> {
        self.roster.get(self.due)
    }

    /// Position of the player due to dig.
    #[must_use]
    pub fn due_position(&self) -> Option<Position> {
        self.due_player().map(Player::position)
    }

    /// Apply a jump to the due player.
    ///
    /// Outside the grid the player loses their license and their whole merit
    /// is struck from the team score; the player keeps the merit on record.
    /// Returns the struck merit in that case, `None` if the player moved.
    /// Does nothing on an empty roster.
    pub fn resolve_dig(&mut self, jump: Jump, within_bounds: bool) -> Option<i64> {
        let player = self.roster.get_mut(self.due)?;
        if within_bounds {
            player.move_by(jump);
            None
        } else {
            player.revoke_license();
            let struck = player.merit();
            self.score -= struck;
            Some(struck)
        }
    }

    /// Credit `delta` to the due player and to the team score.
    pub fn award_merit(&mut self, delta: i64) {
        if let Some(player) = self.roster.get_mut(self.due) {
            player.apply_merit_delta(delta);
            self.score += delta;
        }
    }

    /// Re-derive the active flag from the roster.
    pub fn recompute_active(&mut self) {
        self.active = self.roster.iter().any(Player::is_licensed);
    }

    /// Move the turn pointer to the next licensed player.
    ///
    /// Scans at most one full cycle. If nobody is licensed the pointer still
    /// lands on some index; check [`is_active`](Self::is_active) for that.
    pub fn advance_turn(&mut self) {
        if self.is_empty() {
            return;
        }
        let len = self.roster.len();
        let mut next = (self.due + 1) % len;
        let mut steps = 0;
        while !self.roster[next].is_licensed() && steps < len {
            next = (next + 1) % len;
            steps += 1;
        }
        self.due = next;
    }

    /// Players whose license was revoked.
    #[must_use]
    pub fn disqualified_count(&self) -> usize {
        self.roster.iter().filter(|p| !p.is_licensed()).count()
    }

    /// Players still licensed.
    #[must_use]
    pub fn licensed_count(&self) -> usize {
        self.roster.iter().filter(|p| p.is_licensed()).count()
    }

    /// Licensed players, highest-ranked first.
    #[must_use]
    pub fn ranked_licensed_players(&self) -> Vec<&Player> {
        rank_descending(self.roster.iter().filter(|p| p.is_licensed()))
    }

    /// Summary row for the standings.
    #[must_use]
    pub fn standing(&self) -> TeamStanding {
        TeamStanding {
            name: self.name.clone(),
            score: self.score,
            disqualified: self.disqualified_count(),
            licensed: self.licensed_count(),
        }
    }
}

impl Ranked for Team {
    /// Higher score, then fewer disqualified, then fewer licensed, then the
    /// inverted name comparison.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.disqualified_count().cmp(&self.disqualified_count()))
            .then_with(|| other.licensed_count().cmp(&self.licensed_count()))
            .then_with(|| other.name.cmp(&self.name))
    }
}

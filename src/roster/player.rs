//! A single contestant.
//!
//! Players are owned by their [`Team`](super::Team) and only mutated by it
//! while resolving a dig.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::ranking::Ranked;
use crate::core::rules::START_POSITION;
use crate::core::{Jump, Position};

/// One contestant: merit, penalties, license and position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    merit: i64,
    penalties: u32,
    licensed: bool,
    position: Position,
}

impl Player {
    /// Create a licensed player standing at the start position.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            merit: 0,
            penalties: 0,
            licensed: true,
            position: START_POSITION,
        }
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accumulated merit. May be negative.
    #[must_use]
    pub const fn merit(&self) -> i64 {
        self.merit
    }

    /// Number of merit-reducing events.
    #[must_use]
    pub const fn penalties(&self) -> u32 {
        self.penalties
    }

    /// True until the license is revoked.
    #[must_use]
    pub const fn is_licensed(&self) -> bool {
        self.licensed
    }

    /// Current position; [`START_POSITION`] before the first jump.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Move by `jump`. Bounds are the caller's concern; a jump past the
    /// coordinate range leaves the player where they are.
    pub fn move_by(&mut self, jump: Jump) {
        if let Some(position) = self.position.offset(jump) {
            self.position = position;
        }
    }

    /// Add `delta` to merit. Negative deltas count as a penalty.
    pub fn apply_merit_delta(&mut self, delta: i64) {
        self.merit += delta;
        if delta < 0 {
            self.penalties += 1;
        }
    }

    /// Revoke the license. There is no way back.
    pub fn revoke_license(&mut self) {
        self.licensed = false;
    }
}

impl Ranked for Player {
    /// More merit, then fewer penalties, then the inverted name comparison.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.merit
            .cmp(&other.merit)
            .then_with(|| other.penalties.cmp(&self.penalties))
            .then_with(|| other.name.cmp(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let p = Player::new("Amy");
        assert_eq!(p.name(), "Amy");
        assert_eq!(p.merit(), 0);
        assert_eq!(p.penalties(), 0);
        assert!(p.is_licensed());
        assert_eq!(p.position(), START_POSITION);
    }

    #[test]
    fn test_move_by_is_unconditional() {
        let mut p = Player::new("Amy");
        p.move_by(Jump::new(1, 1));
        assert_eq!(p.position(), Position::new(0, 0));
        p.move_by(Jump::new(-5, 3));
        assert_eq!(p.position(), Position::new(-5, 3));
        p.move_by(Jump::new(i64::MIN, 0));
        assert_eq!(p.position(), Position::new(-5, 3));
    }

    #[test]
    fn test_merit_delta_counts_penalties() {
        let mut p = Player::new("Amy");
        p.apply_merit_delta(15);
        p.apply_merit_delta(0);
        assert_eq!(p.penalties(), 0);

        p.apply_merit_delta(-20);
        assert_eq!(p.merit(), -5);
        assert_eq!(p.penalties(), 1);
    }

    #[test]
    fn test_revoke_license() {
        let mut p = Player::new("Amy");
        p.apply_merit_delta(30);
        p.revoke_license();
        assert!(!p.is_licensed());
        assert_eq!(p.merit(), 30);
    }

    #[test]
    fn test_rank_by_merit_then_penalties() {
        let mut rich = Player::new("Zed");
        rich.apply_merit_delta(50);

        let mut clean = Player::new("Bo");
        clean.apply_merit_delta(20);

        let mut penalised = Player::new("Al");
        penalised.apply_merit_delta(30);
        penalised.apply_merit_delta(-10);

        assert_eq!(rich.rank_cmp(&clean), Ordering::Greater);
        assert_eq!(clean.rank_cmp(&penalised), Ordering::Greater);
    }

    #[test]
    fn test_rank_name_comparison_is_inverted() {
        let a = Player::new("Amy");
        let b = Player::new("Bo");
        assert_eq!(a.rank_cmp(&b), Ordering::Greater);
        assert_eq!(b.rank_cmp(&a), Ordering::Less);
        assert_eq!(a.rank_cmp(&a.clone()), Ordering::Equal);
    }
}

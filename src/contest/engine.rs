//! The contest: grid, teams and the dig protocol.
//!
//! ## Dig protocol
//!
//! One call to [`Contest::dig`] runs the whole transaction:
//!
//! 1. Reject a (0, 0) jump before touching state.
//! 2. Resolve the team by name.
//! 3. Aim the due player's jump and bounds-check the destination.
//! 4. Outside the grid: revoke the license and strike the player's merit.
//!    Inside: move the player.
//! 5. If the player still holds a license, apply the overdig penalty for the
//!    plot's previous digs, award its treasure, then remove the treasure.
//! 6. Recompute whether the team is still active.
//! 7. Advance the turn pointer, whatever happened above.
//!
//! Every operation takes `&mut self` or `&self`, so a dig is atomic to any
//! observer. Hosts that share a contest wrap it in a single lock.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::history::{DigOutcome, DigRecord};
use crate::core::{rules, Jump};
use crate::error::{ContestError, ContestResult, SetupError};
use crate::roster::{rank_descending, Player, Team, TeamStanding};
use crate::terrain::{Grid, TreasureMap};

/// Composition root: owns the grid, the teams and the dig history.
///
/// ## Example
///
/// ```
/// use dig_contest::contest::{Contest, DigOutcome};
/// use dig_contest::core::Jump;
///
/// let mut contest = Contest::new(2, 2).unwrap();
/// for worth in [10, 0, 5, 0] {
///     contest.place_plot(worth).unwrap();
/// }
/// contest.register_team("Y", ["Bo", "Cy"]);
///
/// let outcome = contest.dig("Y", Jump::new(1, 1)).unwrap();
/// assert_eq!(outcome, DigOutcome::Excavated { penalty: 0, worth: 10 });
/// assert_eq!(contest.total_wealth(), 5);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Contest {
    grid: Grid,
    /// Teams in registration order.
    teams: Vec<Team>,
    /// Team name -> index into `teams`.
    index: FxHashMap<String, usize>,
    history: Vector<DigRecord>,
}

impl Contest {
    /// Create a contest on an empty `rows × cols` grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, SetupError> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            teams: Vec::new(),
            index: FxHashMap::default(),
            history: Vector::new(),
        })
    }

    // === Setup ===

    /// Place the next plot in row-major order.
    pub fn place_plot(&mut self, worth: u32) -> Result<(), SetupError> {
        self.grid.place_next(worth)?;
        if self.grid.is_complete() {
            debug!(
                rows = self.grid.rows(),
                cols = self.grid.cols(),
                wealth = self.grid.total_wealth(),
                "grid complete"
            );
        }
        Ok(())
    }

    /// Register a team with the given players, in turn order.
    ///
    /// Team names are expected to be unique; a duplicate shadows the earlier
    /// team for every lookup by name.
    pub fn register_team<I, S>(&mut self, name: impl Into<String>, players: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_team(Team::from_roster(name, players));
    }

    /// Register a team that was built separately.
    pub fn add_team(&mut self, team: Team) {
        debug!(team = team.name(), players = team.players().len(), "team registered");
        self.index.insert(team.name().to_string(), self.teams.len());
        self.teams.push(team);
    }

    // === Turn commands ===

    /// True if a team with this exact name is registered.
    #[must_use]
    pub fn team_exists(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Run one dig for the named team's due player.
    pub fn dig(&mut self, team_name: &str, jump: Jump) -> ContestResult<DigOutcome> {
        if jump.is_zero() {
            return Err(ContestError::InvalidMove { jump });
        }
        self.grid.ensure_complete()?;
        let slot = self.slot(team_name)?;
        let team = &mut self.teams[slot];

        let due = team
            .due_player()
            .ok_or_else(|| ContestError::EmptyRoster(team_name.to_string()))?;
        let player = due.name().to_string();
        // A destination past the coordinate range is off every grid.
        let destination = due.position().offset(jump);
        let cell = destination.and_then(|d| self.grid.locate(d));

        let outcome = match (team.resolve_dig(jump, cell.is_some()), cell) {
            (Some(struck_merit), _) => {
                info!(team = team_name, %player, ?destination, struck_merit, "player disqualified");
                DigOutcome::Disqualified { struck_merit }
            }
            (None, Some((row, col))) if team.due_player().is_some_and(Player::is_licensed) => {
                let penalty = rules::overdig_penalty(self.grid.dig_count(row, col));
                let worth = self.grid.treasure_worth(row, col);
                team.award_merit(penalty);
                team.award_merit(i64::from(worth));
                self.grid.remove_treasure(row, col);
                debug!(team = team_name, %player, row, col, penalty, worth, "plot excavated");
                DigOutcome::Excavated { penalty, worth }
            }
            _ => DigOutcome::Idle,
        };

        team.recompute_active();
        team.advance_turn();
        if !team.is_active() {
            info!(team = team_name, score = team.score(), "team has no licensed players left");
        }

        self.history.push_back(DigRecord {
            sequence: self.history.len() + 1,
            team: team_name.to_string(),
            player,
            jump,
            destination,
            outcome,
        });
        Ok(outcome)
    }

    /// True while the named team has a licensed player.
    pub fn is_team_active(&self, name: &str) -> ContestResult<bool> {
        Ok(self.team_by_name(name)?.is_active())
    }

    /// Drop a team from the contest, returning it.
    pub fn remove_team(&mut self, name: &str) -> ContestResult<Team> {
        let slot = self.slot(name).inspect_err(|_| {
            warn!(team = name, "attempt to remove unknown team");
        })?;
        let team = self.teams.remove(slot);
        self.reindex();
        debug!(team = name, remaining = self.teams.len(), "team removed");
        Ok(team)
    }

    // === Queries ===

    /// Sum of every treasure still buried.
    #[must_use]
    pub fn total_wealth(&self) -> u64 {
        self.grid.total_wealth()
    }

    /// Where treasure remains.
    #[must_use]
    pub fn treasure_map(&self) -> TreasureMap {
        self.grid.treasure_map()
    }

    /// Number of teams still in the contest.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Teams in registration order.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    /// Look up a team by name.
    #[must_use]
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.index.get(name).map(|&slot| &self.teams[slot])
    }

    /// The grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Every dig resolved so far, oldest first.
    #[must_use]
    pub const fn history(&self) -> &Vector<DigRecord> {
        &self.history
    }

    /// Standings, best team first.
    #[must_use]
    pub fn ranked_teams(&self) -> Vec<TeamStanding> {
        rank_descending(&self.teams)
            .into_iter()
            .map(Team::standing)
            .collect()
    }

    /// Licensed players of a team, best first.
    pub fn ranked_players(&self, name: &str) -> ContestResult<Vec<String>> {
        Ok(self
            .team_by_name(name)?
            .ranked_licensed_players()
            .into_iter()
            .map(|p| p.name().to_string())
            .collect())
    }

    /// The team's best licensed player, if it has one.
    pub fn star_player(&self, name: &str) -> ContestResult<Option<String>> {
        Ok(self
            .team_by_name(name)?
            .ranked_licensed_players()
            .first()
            .map(|p| p.name().to_string()))
    }

    fn slot(&self, name: &str) -> ContestResult<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| ContestError::UnknownTeam(name.to_string()))
    }

    fn team_by_name(&self, name: &str) -> ContestResult<&Team> {
        self.slot(name).map(|slot| &self.teams[slot])
    }

    /// Rebuild the name index after a removal shifted positions.
    fn reindex(&mut self) {
        self.index.clear();
        for (slot, team) in self.teams.iter().enumerate() {
            self.index.insert(team.name().to_string(), slot);
        }
    }
}

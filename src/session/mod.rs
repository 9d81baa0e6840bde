//! Text front end: drives a contest from a setup header and a command stream.
//!
//! ## Input
//!
//! ```text
//! 2 2            rows cols
//! 10 0 5 0       rows*cols worths, row-major
//! 2              number of teams
//! 1 2            1-based roster entries
//! escavacao 1 1 Os Cavadores
//! classificacao
//! sair
//! ```
//!
//! Team rosters come from a [`RosterBook`]. Output lines are written to the
//! session's writer; diagnostics go through `tracing`.
//!
//! ## Example
//!
//! ```
//! use dig_contest::session::{RosterBook, Session};
//!
//! let roster = RosterBook::parse("1\nSolo\nAmy\n").unwrap();
//! let input = "1 1\n7\n1\n1\nriqueza\nescavacao 1 1 Solo\nriqueza\nsair\n";
//! let mut output = Vec::new();
//!
//! Session::new(input.as_bytes(), &mut output).run(&roster).unwrap();
//!
//! let text = String::from_utf8(output).unwrap();
//! assert_eq!(
//!     text,
//!     "Riqueza enterrada: 7\nRiqueza enterrada: 0\nTodos os tesouros foram descobertos!\n"
//! );
//! ```

mod command;
mod roster_book;
mod scanner;

pub use command::Command;
pub use roster_book::{RosterBook, RosterEntry};
pub use scanner::Scanner;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::contest::Contest;
use crate::core::Jump;
use crate::error::{ContestError, SessionError};

/// A command session over one contest.
#[derive(Debug)]
pub struct Session<R, W> {
    scanner: Scanner<R>,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session reading from `input` and writing to `out`.
    pub fn new(input: R, out: W) -> Self {
        Self {
            scanner: Scanner::new(input),
            out,
        }
    }

    /// Read the setup, run commands until `sair` or end of input, print the
    /// closing line and hand back the final contest.
    pub fn run(mut self, roster: &RosterBook) -> Result<Contest, SessionError> {
        let mut contest = self.read_setup(roster)?;

        while let Some(word) = self.scanner.next_token()? {
            let parsed = Command::parse(&word);
            debug!(command = ?parsed, "command");
            match parsed {
                Command::Terrain => self.terrain(&contest)?,
                Command::Ranking => self.ranking(&contest)?,
                Command::Dig => self.dig(&mut contest)?,
                Command::Wealth => self.wealth(&contest)?,
                Command::Star => self.star(&contest)?,
                Command::Exit => break,
                Command::Unknown => {
                    self.scanner.rest_of_line();
                    writeln!(self.out, "{}", command::INVALID_COMMAND)?;
                }
            }
        }

        self.farewell(&contest)?;
        self.out.flush()?;
        Ok(contest)
    }

    fn read_setup(&mut self, roster: &RosterBook) -> Result<Contest, SessionError> {
        let rows: usize = self.scanner.next_number("grid rows")?;
        let cols: usize = self.scanner.next_number("grid columns")?;
        let mut contest = Contest::new(rows, cols).map_err(ContestError::from)?;
        for _ in 0..contest.grid().capacity() {
            let worth: u32 = self.scanner.next_number("plot worth")?;
            contest.place_plot(worth).map_err(ContestError::from)?;
        }

        let team_count: usize = self.scanner.next_number("team count")?;
        for _ in 0..team_count {
            let index: usize = self.scanner.next_number("roster entry")?;
            let entry = roster.get(index)?;
            contest.register_team(entry.name.clone(), entry.players.iter().cloned());
        }
        debug!(rows, cols, teams = team_count, "setup complete");
        Ok(contest)
    }

    fn terrain(&mut self, contest: &Contest) -> Result<(), SessionError> {
        write!(self.out, "{}", contest.treasure_map())?;
        Ok(())
    }

    fn ranking(&mut self, contest: &Contest) -> Result<(), SessionError> {
        if contest.team_count() == 0 {
            writeln!(self.out, "{}", command::ALL_EXPELLED)?;
            return Ok(());
        }
        for standing in contest.ranked_teams() {
            writeln!(self.out, "{standing}")?;
        }
        Ok(())
    }

    fn dig(&mut self, contest: &mut Contest) -> Result<(), SessionError> {
        let rows: i64 = self.scanner.next_number("jump rows")?;
        let cols: i64 = self.scanner.next_number("jump columns")?;
        let team = self.scanner.rest_of_line();

        match contest.dig(&team, Jump::new(rows, cols)) {
            Ok(_) => {
                if !contest.is_team_active(&team)? {
                    self.expel(contest, &team)?;
                }
            }
            Err(ContestError::InvalidMove { .. }) => {
                writeln!(self.out, "{}", command::INVALID_JUMP)?;
            }
            Err(ContestError::UnknownTeam(_)) => {
                writeln!(self.out, "{}", command::INVALID_TEAM)?;
            }
            // Nobody on the roster can ever dig; treat it like losing the last license.
            Err(ContestError::EmptyRoster(_)) => self.expel(contest, &team)?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn expel(&mut self, contest: &mut Contest, team: &str) -> Result<(), SessionError> {
        contest.remove_team(team)?;
        writeln!(self.out, "{team} {}", command::EXPELLED)?;
        Ok(())
    }

    fn wealth(&mut self, contest: &Contest) -> Result<(), SessionError> {
        writeln!(self.out, "{} {}", command::BURIED_WEALTH, contest.total_wealth())?;
        Ok(())
    }

    fn star(&mut self, contest: &Contest) -> Result<(), SessionError> {
        let team = self.scanner.rest_of_line();
        match contest.star_player(&team) {
            Ok(Some(player)) => writeln!(self.out, "{} {team}: {player}", command::STAR_OF)?,
            Ok(None) => {}
            Err(ContestError::UnknownTeam(_)) => writeln!(self.out, "{}", command::INVALID_TEAM)?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn farewell(&mut self, contest: &Contest) -> Result<(), SessionError> {
        let line = if contest.team_count() == 0 {
            command::ALL_EXPELLED
        } else if contest.treasure_map().any() {
            command::TREASURE_LEFT
        } else {
            command::ALL_FOUND
        };
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

//! Team rosters read from a text file.
//!
//! The file is a sequence of blocks:
//!
//! ```text
//! 2
//! Os Cavadores
//! Amy
//! Bo
//! ```
//!
//! A player count, the team name, then one player name per line. Blank
//! lines between blocks are ignored. The setup header picks entries by
//! 1-based index.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::SessionError;

/// One team as listed in the roster file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    /// Team name.
    pub name: String,
    /// Player names in turn order.
    pub players: Vec<String>,
}

/// Every team listed in a roster file, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterBook {
    entries: Vec<RosterEntry>,
}

impl RosterBook {
    /// Read and parse a roster file.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SessionError::RosterMissing {
                path: path.to_path_buf(),
            },
            _ => SessionError::Io(e),
        })?;
        let book = Self::parse(&text)?;
        if book.is_empty() {
            warn!(path = %path.display(), "roster file lists no teams");
        } else {
            debug!(path = %path.display(), teams = book.len(), "roster loaded");
        }
        Ok(book)
    }

    /// Parse roster blocks from text.
    pub fn parse(text: &str) -> Result<Self, SessionError> {
        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));
        let mut entries = Vec::new();

        while let Some((line, count)) = lines.by_ref().find(|(_, l)| !l.is_empty()) {
            let count: usize = count.parse().map_err(|_| SessionError::MalformedRoster {
                line,
                reason: format!("expected a player count, found {count:?}"),
            })?;
            let (_, name) = lines.next().ok_or_else(|| SessionError::MalformedRoster {
                line,
                reason: "missing team name".into(),
            })?;

            // The count is untrusted; players are collected as the lines arrive.
            let mut players = Vec::new();
            for n in 0..count {
                let (_, player) = lines.next().ok_or_else(|| SessionError::MalformedRoster {
                    line,
                    reason: format!("team {name:?} lists {count} players but only {n} follow"),
                })?;
                players.push(player.to_string());
            }
            entries.push(RosterEntry {
                name: name.to_string(),
                players,
            });
        }

        Ok(Self { entries })
    }

    /// Number of teams listed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no team is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by 1-based index.
    pub fn get(&self, index: usize) -> Result<&RosterEntry, SessionError> {
        index
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .ok_or(SessionError::UnknownRosterEntry {
                index,
                available: self.entries.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = "2\nOs Cavadores\nAmy\nBo\n\n1\nSolo\nCy\n";

    #[test]
    fn test_parse_blocks() {
        let book = RosterBook::parse(ROSTER).unwrap();
        assert_eq!(book.len(), 2);

        let first = book.get(1).unwrap();
        assert_eq!(first.name, "Os Cavadores");
        assert_eq!(first.players, ["Amy", "Bo"]);

        let second = book.get(2).unwrap();
        assert_eq!(second.name, "Solo");
        assert_eq!(second.players, ["Cy"]);
    }

    #[test]
    fn test_get_is_one_based() {
        let book = RosterBook::parse(ROSTER).unwrap();
        assert!(matches!(
            book.get(0),
            Err(SessionError::UnknownRosterEntry { index: 0, available: 2 })
        ));
        assert!(matches!(
            book.get(3),
            Err(SessionError::UnknownRosterEntry { index: 3, available: 2 })
        ));
    }

    #[test]
    fn test_empty_team_block() {
        let book = RosterBook::parse("0\nGhosts\n").unwrap();
        assert!(book.get(1).unwrap().players.is_empty());
    }

    #[test]
    fn test_bad_count() {
        let err = RosterBook::parse("two\nTeam\n").unwrap_err();
        assert!(matches!(err, SessionError::MalformedRoster { line: 1, .. }));
    }

    #[test]
    fn test_truncated_block() {
        let err = RosterBook::parse("\n3\nTeam\nAmy\n").unwrap_err();
        assert!(matches!(err, SessionError::MalformedRoster { line: 2, .. }));
    }

    #[test]
    fn test_huge_count_is_malformed() {
        let err = RosterBook::parse("18446744073709551615\nTeam\nAmy\n").unwrap_err();
        assert!(matches!(err, SessionError::MalformedRoster { line: 1, .. }));
    }

    #[test]
    fn test_blank_text_is_empty() {
        let book = RosterBook::parse("\n\n").unwrap();
        assert!(book.is_empty());
        assert_eq!(book.len(), 0);
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir()
            .join(format!("dig-contest-roster-{}.txt", std::process::id()));
        std::fs::write(&path, ROSTER).unwrap();
        let book = RosterBook::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.get(2).unwrap().name, "Solo");
    }

    #[test]
    fn test_missing_file() {
        let err = RosterBook::load(Path::new("/definitely/not/here/teams.txt")).unwrap_err();
        assert!(matches!(err, SessionError::RosterMissing { .. }));
    }
}

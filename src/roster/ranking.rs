//! Ordering shared by player and team standings.
//!
//! Both comparators end with a name comparison that is inverted
//! (`other.name.cmp(&self.name)`). Combined with the descending sort below,
//! entries that tie on every other key list in ascending name order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A total order where `Greater` means "ranks higher".
pub trait Ranked {
    /// Compare two entries; `Greater` ranks first.
    fn rank_cmp(&self, other: &Self) -> Ordering;
}

/// Sort entries so the highest-ranked comes first.
///
/// The sort is stable, so exact ties keep their input order.
pub fn rank_descending<'a, T, I>(entries: I) -> Vec<&'a T>
where
    T: Ranked + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut ranked: Vec<&T> = entries.into_iter().collect();
    ranked.sort_by(|a, b| b.rank_cmp(a));
    ranked
}

/// One row of the team standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    /// Team name.
    pub name: String,
    /// Team score.
    pub score: i64,
    /// Players whose license was revoked.
    pub disqualified: usize,
    /// Players still licensed.
    pub licensed: usize,
}

impl std::fmt::Display for TeamStanding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} pts; {} descl.; {} com lic.",
            self.name, self.score, self.disqualified, self.licensed
        )
    }
}

//! Players, teams and standings.
//!
//! - `Player`: merit, penalties, license and position of one contestant
//! - `Team`: ordered roster with turn rotation over licensed players
//! - `ranking`: the shared "highest first" ordering and standings rows

mod player;
mod ranking;
mod team;

pub use player::Player;
pub use ranking::{rank_descending, Ranked, TeamStanding};
pub use team::Team;

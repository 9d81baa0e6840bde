//! The contest: composition root and dig protocol.
//!
//! - `Contest`: owns the grid and the teams, runs digs, answers standings
//! - `history`: what each dig did, kept in an append-only log

mod engine;
mod history;

pub use engine::Contest;
pub use history::{DigOutcome, DigRecord};

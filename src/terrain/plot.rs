//! A single cell of the dig site.

use serde::{Deserialize, Serialize};

/// One grid cell: a buried treasure value and how often it was dug.
///
/// Once the treasure is removed the worth stays at zero; every removal still
/// counts as a dig.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plot {
    worth: u32,
    times_dug: u32,
}

impl Plot {
    /// Create an undug plot holding `worth`.
    #[must_use]
    pub const fn new(worth: u32) -> Self {
        Self {
            worth,
            times_dug: 0,
        }
    }

    /// Value of the treasure still buried here.
    #[must_use]
    pub const fn worth(&self) -> u32 {
        self.worth
    }

    /// Number of times this plot has been dug.
    #[must_use]
    pub const fn times_dug(&self) -> u32 {
        self.times_dug
    }

    /// True while treasure remains.
    #[must_use]
    pub const fn has_treasure(&self) -> bool {
        self.worth > 0
    }

    /// Take the treasure and count the dig.
    pub fn remove_treasure(&mut self) {
        self.worth = 0;
        self.times_dug += 1;
    }
}

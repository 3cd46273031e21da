//! Simulation cycle counter.
//!
//! A cycle is one full pass of evaluation, relocation, and reporting.  Cycle
//! 0 reports the raw initial placement; relocation starts at cycle 1.

use std::fmt;

/// An absolute cycle index.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Cycle(pub u64);

impl Cycle {
    pub const ZERO: Cycle = Cycle(0);

    /// The cycle after `self`.
    #[inline]
    pub fn next(self) -> Cycle {
        Cycle(self.0 + 1)
    }

    /// `true` for cycle 0, which never relocates agents.
    #[inline]
    pub fn is_initial(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

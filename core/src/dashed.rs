//! # Dashed Range Notation
//!
//! Each of the four octets is either a single value or an inclusive range:
//!
//! | Written | Low | High |
//! |---------|-----|------|
//! | `N`     | N   | N    |
//! | `N-M`   | N   | M    |
//! | `-M`    | 0   | M    |
//! | `N-`    | N   | 255  |
//! | `-`     | 0   | 255  |
//!
//! A range whose low value is above its high value wraps through 255 to 0.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

pub mod cursor;
pub mod expand;
pub mod parser;
pub mod sink;
pub mod state;
pub mod token;

pub use expand::{AddressIter, OctetRange};

/// A parsed dashed expression such as `10.0.1-2.254-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DashedRange {
    ranges: [OctetRange; 4],
}

impl DashedRange {
    pub fn new(ranges: [OctetRange; 4]) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[OctetRange; 4] {
        &self.ranges
    }

    /// Number of addresses covered: the product of the four octet lengths.
    pub fn len(&self) -> u64 {
        self.ranges.iter().map(|range| u64::from(range.len())).product()
    }

    /// Always `false`: every octet range covers at least one value.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> AddressIter {
        AddressIter::new(self.ranges)
    }
}

impl FromStr for DashedRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_ranges(s).map(Self::new)
    }
}

impl fmt::Display for DashedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = &self.ranges;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

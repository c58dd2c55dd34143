use thiserror::Error;

use super::expand::OctetRange;

const VALUES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("all four octet ranges are already filled")]
pub struct SinkFull;

/// Bounded store for the eight validated values (low and high for each octet).
#[derive(Debug, Default, Clone)]
pub struct OctetSink {
    values: [u8; VALUES],
    filled: usize,
}

impl OctetSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: u8) -> Result<(), SinkFull> {
        let slot = self.values.get_mut(self.filled).ok_or(SinkFull)?;
        *slot = value;
        self.filled += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub fn is_full(&self) -> bool {
        self.filled == VALUES
    }

    /// The four octet ranges, or `None` while values are still missing.
    pub fn finish(&self) -> Option<[OctetRange; 4]> {
        if !self.is_full() {
            return None;
        }
        let v = &self.values;
        Some([
            OctetRange::new(v[0], v[1]),
            OctetRange::new(v[2], v[3]),
            OctetRange::new(v[4], v[5]),
            OctetRange::new(v[6], v[7]),
        ])
    }
}

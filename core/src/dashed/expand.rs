//! Enumeration of the addresses covered by four octet ranges.

use std::fmt;
use std::iter::FusedIterator;
use std::net::Ipv4Addr;

/// Inclusive range of values for one octet.
///
/// When `low > high` the range wraps around: `254-2` covers
/// `254, 255, 0, 1, 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OctetRange {
    pub low: u8,
    pub high: u8,
}

impl OctetRange {
    pub const FULL: Self = Self::new(0, u8::MAX);

    pub const fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    pub const fn single(value: u8) -> Self {
        Self::new(value, value)
    }

    pub fn wraps(&self) -> bool {
        self.low > self.high
    }

    /// Number of values covered, between 1 and 256.
    pub fn len(&self) -> u16 {
        let (low, high) = (u16::from(self.low), u16::from(self.high));
        if self.wraps() {
            (255 - low) + high + 2
        } else {
            high - low + 1
        }
    }

    /// Value at `offset` from `low`, counting through the wrap.
    fn nth_value(&self, offset: u64) -> u8 {
        // offset < len() <= 256, so the truncation only drops the wrap.
        self.low.wrapping_add(offset as u8)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = u8> + use<> {
        let range = *self;
        (0..range.len()).map(move |offset| range.nth_value(u64::from(offset)))
    }
}

impl fmt::Display for OctetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

/// Lazy cartesian product of four octet ranges.
///
/// The first octet is the outermost loop and the fourth the innermost. The
/// sequence is neither sorted nor deduplicated beyond that order.
#[derive(Debug, Clone)]
pub struct AddressIter {
    ranges: [OctetRange; 4],
    lens: [u64; 4],
    position: u64,
    total: u64,
}

impl AddressIter {
    pub fn new(ranges: [OctetRange; 4]) -> Self {
        let lens = ranges.map(|range| u64::from(range.len()));
        let total = lens.iter().product();
        Self {
            ranges,
            lens,
            position: 0,
            total,
        }
    }

    /// Total number of addresses, up to 256⁴.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Addresses not yet yielded.
    pub fn remaining(&self) -> u64 {
        self.total - self.position
    }

    fn address_at(&self, mut position: u64) -> Ipv4Addr {
        let mut octets = [0u8; 4];
        for i in (0..4).rev() {
            octets[i] = self.ranges[i].nth_value(position % self.lens[i]);
            position /= self.lens[i];
        }
        Ipv4Addr::from(octets)
    }
}

impl Iterator for AddressIter {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        if self.position >= self.total {
            return None;
        }
        let address = self.address_at(self.position);
        self.position += 1;
        Some(address)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Ipv4Addr> {
        let skip = u64::try_from(n).unwrap_or(u64::MAX);
        self.position = self.position.saturating_add(skip).min(self.total);
        self.next()
    }
}

impl FusedIterator for AddressIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octet_range_plain() {
        let range = OctetRange::new(1, 4);
        assert!(!range.wraps());
        assert_eq!(range.len(), 4);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);

        assert_eq!(OctetRange::single(9).iter().collect::<Vec<_>>(), vec![9]);
        assert_eq!(OctetRange::FULL.len(), 256);
        assert_eq!(OctetRange::FULL.iter().last(), Some(255));
    }

    #[test]
    fn test_octet_range_wraps() {
        let range = OctetRange::new(254, 2);
        assert!(range.wraps());
        assert_eq!(range.len(), 5);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![254, 255, 0, 1, 2]);

        // 255-0 is the shortest wrap, 1-0 the longest.
        assert_eq!(OctetRange::new(255, 0).iter().collect::<Vec<_>>(), vec![255, 0]);
        assert_eq!(OctetRange::new(1, 0).len(), 256);
        assert_eq!(OctetRange::new(1, 0).iter().last(), Some(0));
    }

    #[test]
    fn test_octet_range_len_formula() {
        for low in 0..=u8::MAX {
            for high in [0u8, 1, 127, 254, 255] {
                let range = OctetRange::new(low, high);
                assert_eq!(usize::from(range.len()), range.iter().count());
            }
        }
    }

    #[test]
    fn test_octet_range_display() {
        assert_eq!(OctetRange::single(10).to_string(), "10");
        assert_eq!(OctetRange::new(254, 2).to_string(), "254-2");
        assert_eq!(OctetRange::FULL.to_string(), "0-255");
    }

    #[test]
    fn test_address_iter_order() {
        let iter = AddressIter::new([
            OctetRange::single(10),
            OctetRange::single(0),
            OctetRange::new(1, 2),
            OctetRange::new(254, 255),
        ]);
        assert_eq!(iter.total(), 4);
        assert_eq!(iter.size_hint(), (4, Some(4)));
        assert_eq!(
            iter.collect::<Vec<_>>(),
            vec![
                Ipv4Addr::new(10, 0, 1, 254),
                Ipv4Addr::new(10, 0, 1, 255),
                Ipv4Addr::new(10, 0, 2, 254),
                Ipv4Addr::new(10, 0, 2, 255),
            ]
        );
    }

    #[test]
    fn test_address_iter_wrapping_octet() {
        let ips: Vec<_> = AddressIter::new([
            OctetRange::single(10),
            OctetRange::single(0),
            OctetRange::single(0),
            OctetRange::new(255, 1),
        ])
        .collect();
        assert_eq!(
            ips,
            vec![
                Ipv4Addr::new(10, 0, 0, 255),
                Ipv4Addr::new(10, 0, 0, 0),
                Ipv4Addr::new(10, 0, 0, 1),
            ]
        );
    }

    #[test]
    fn test_address_iter_full_space_is_lazy() {
        let mut iter = AddressIter::new([OctetRange::FULL; 4]);
        assert_eq!(iter.total(), 1 << 32);
        assert_eq!(iter.next(), Some(Ipv4Addr::new(0, 0, 0, 0)));
        assert_eq!(iter.next(), Some(Ipv4Addr::new(0, 0, 0, 1)));

        assert_eq!(iter.nth(254), Some(Ipv4Addr::new(0, 0, 1, 0)));
        assert_eq!(iter.remaining(), (1 << 32) - 257);

        let mut tail = AddressIter::new([OctetRange::FULL; 4]);
        assert_eq!(tail.nth((1usize << 32) - 1), Some(Ipv4Addr::BROADCAST));
        assert_eq!(tail.next(), None);
        assert_eq!(tail.next(), None);
    }
}

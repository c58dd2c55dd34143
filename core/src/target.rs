//! # Expansion Target
//!
//! Classifies a user supplied range string:
//! * **CIDR**: anything containing `/`, e.g. `192.168.1.0/24`.
//! * **Dashed**: everything else, e.g. `10.0.1-2.254-` or a plain `10.0.0.1`.

use std::fmt;
use std::iter::FusedIterator;
use std::net::Ipv4Addr;
use std::str::FromStr;

use ipexpand_common::network::range::{self, Ipv4Range};
use thiserror::Error;

use crate::dashed::DashedRange;
use crate::error::ParseError;

#[derive(Debug, Error)]
pub enum TargetError {
    #[error(transparent)]
    Dashed(#[from] ParseError),
    #[error(transparent)]
    Cidr(#[from] anyhow::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Dashed(DashedRange),
    Cidr(Ipv4Range),
}

impl FromStr for Target {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('/') {
            return Ok(Target::Cidr(range::parse_cidr(s)?));
        }

        Ok(Target::Dashed(s.parse()?))
    }
}

impl Target {
    /// Number of addresses the target expands to.
    pub fn len(&self) -> u64 {
        match self {
            Target::Dashed(dashed) => dashed.len(),
            Target::Cidr(ipv4_range) => ipv4_range.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazily yields every address of the target.
    pub fn addresses(&self) -> Addresses {
        let inner: Box<dyn Iterator<Item = Ipv4Addr> + Send> = match self {
            Target::Dashed(dashed) => Box::new(dashed.iter()),
            Target::Cidr(ipv4_range) => Box::new(ipv4_range.iter()),
        };
        Addresses {
            inner,
            total: self.len(),
            yielded: 0,
        }
    }
}

/// Addresses of a [`Target`], with the exact size known before iterating.
pub struct Addresses {
    inner: Box<dyn Iterator<Item = Ipv4Addr> + Send>,
    total: u64,
    yielded: u64,
}

impl Addresses {
    /// Total number of addresses, up to 2³².
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Addresses not yet yielded.
    pub fn remaining(&self) -> u64 {
        self.total - self.yielded
    }
}

impl Iterator for Addresses {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        let address = self.inner.next()?;
        self.yielded += 1;
        Some(address)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Addresses {}

impl fmt::Debug for Addresses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Addresses")
            .field("total", &self.total)
            .field("yielded", &self.yielded)
            .finish()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Dashed(dashed) => write!(f, "{dashed}"),
            Target::Cidr(ipv4_range) => {
                write!(f, "{}-{}", ipv4_range.start_addr, ipv4_range.end_addr)
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

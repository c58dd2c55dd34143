//! # IPv4 Range Model
//!
//! Continuous, inclusive ranges of IPv4 addresses.
//!
//! CIDR blocks such as `192.168.1.0/24` are resolved into an [`Ipv4Range`]
//! covering every address of the block, network and broadcast included.

use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;
use tracing::debug;

/// Represents a continuous range of IPv4 addresses, inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone + use<> {
        let start: u32 = u32::from(self.start_addr);
        let end: u32 = u32::from(self.end_addr);
        (start..=end).map(Ipv4Addr::from)
    }

    /// Number of addresses in the range; zero when `start_addr > end_addr`.
    pub fn len(&self) -> u64 {
        let start: u64 = u64::from(u32::from(self.start_addr));
        let end: u64 = u64::from(u32::from(self.end_addr));
        if start > end { 0 } else { end - start + 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Creates a range from an IP and a CIDR prefix (e.g., 192.168.1.0/24).
///
/// Host bits of `ip` are masked off, so `10.0.0.7/30` covers `10.0.0.4` to `10.0.0.7`.
pub fn cidr_range(ip: Ipv4Addr, prefix: u8) -> anyhow::Result<Ipv4Range> {
    if prefix > 32 {
        anyhow::bail!("Invalid prefix: {prefix} > 32");
    }
    let network = Ipv4Network::new(ip, prefix)?;
    debug!("{ip}/{prefix} covers {} to {}", network.network(), network.broadcast());

    Ok(Ipv4Range::new(network.network(), network.broadcast()))
}

/// Parses CIDR notation like "192.168.1.0/24".
pub fn parse_cidr(s: &str) -> anyhow::Result<Ipv4Range> {
    let Some((ip_str, prefix_str)) = s.split_once('/') else {
        anyhow::bail!("Missing prefix in CIDR '{s}'");
    };

    let ip: Ipv4Addr = ip_str
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid IP in CIDR '{ip_str}': {e}"))?;

    let prefix: u8 = prefix_str
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid prefix in CIDR '{prefix_str}': {e}"))?;

    cidr_range(ip, prefix)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

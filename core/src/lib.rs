//! # ipexpand core
//!
//! Expands compact IPv4 range notations into the concrete addresses they cover.
//!
//! * **[`dashed`]**: the dashed notation (`10.0.1-2.254-`), where every octet is a
//!   single value or an inclusive `low-high` range with optional bounds.
//! * **[`target`]**: classifies user input as dashed or CIDR and resolves it.
//! * **[`error`]**: the typed failures of the dashed parser.
//!
//! ```
//! let ips: Vec<_> = ipexpand_core::parse_dashed("10.0.0.1-2").unwrap().collect();
//! assert_eq!(ips.len(), 2);
//! ```

pub mod dashed;
pub mod error;
pub mod target;

pub use dashed::{AddressIter, DashedRange, OctetRange};
pub use error::ParseError;
pub use target::{Addresses, Target, TargetError};

/// Parses a dashed range expression and returns the lazy sequence of addresses it covers.
///
/// Addresses are produced with the first octet as the outermost loop and the
/// fourth as the innermost. Nothing is materialized up front, so `-.-.-.-`
/// is cheap to call even though it yields 256⁴ addresses.
pub fn parse_dashed(expression: &str) -> Result<AddressIter, ParseError> {
    let range: DashedRange = expression.parse()?;
    Ok(range.iter())
}

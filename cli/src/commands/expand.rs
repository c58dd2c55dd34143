use std::io::Write;

use ipexpand_common::config::Config;
use ipexpand_core::Target;
use tracing::{error, warn};

use crate::terminal::print;

/// Tally of one run over the command line ranges.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub expanded: usize,
    pub failed: usize,
    pub addresses: u64,
}

impl Summary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Expands every range in order and writes the addresses to `out`, one per line.
///
/// A range that fails to parse or exceeds the configured limit is reported
/// and skipped; the remaining ranges are still processed. Only write errors
/// abort the run.
pub fn expand<W: Write>(ranges: &[String], cfg: &Config, out: &mut W) -> std::io::Result<Summary> {
    let mut summary = Summary::default();

    for range in ranges {
        if cfg.quiet == 0 {
            print::print_status(format!("Now printing {range}"));
        }

        let target: Target = match range.parse() {
            Ok(target) => target,
            Err(e) => {
                error!("{range}: {e}");
                summary.failed += 1;
                continue;
            }
        };

        let count = target.len();
        if !cfg.within_limit(count) {
            warn!(
                "{range}: {count} addresses exceed the limit of {}",
                cfg.limit.unwrap_or_default()
            );
            summary.failed += 1;
            continue;
        }

        if cfg.count_only {
            writeln!(out, "{range} {count}")?;
        } else {
            for ip in target.addresses() {
                writeln!(out, "{ip}")?;
            }
        }

        summary.expanded += 1;
        summary.addresses += count;
    }

    out.flush()?;
    Ok(summary)
}

pub fn print_summary(summary: &Summary, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    const KEY_WIDTH: usize = 9;
    print::header("summary");
    print::aligned_line("Expanded", KEY_WIDTH, summary.expanded);
    print::aligned_line("Failed", KEY_WIDTH, summary.failed);
    print::aligned_line("Addresses", KEY_WIDTH, summary.addresses);
}

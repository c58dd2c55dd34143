mod commands;
mod terminal;

use std::io::{self, BufWriter, ErrorKind, Write};
use std::process::ExitCode;

use commands::{CommandLine, expand};
use tracing::error;

const EXIT_SUCCESS: u8 = 0;
/// Exit code when no range was given.
const EXIT_USAGE: u8 = 1;
/// Exit code when at least one range could not be expanded.
const EXIT_RANGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    terminal::logging::init_logging(commands.verbose);

    let mut out = BufWriter::new(io::stdout().lock());
    ExitCode::from(run(&commands, &mut out))
}

/// Expands the ranges of `commands` into `out` and returns the process exit code.
fn run<W: Write>(commands: &CommandLine, out: &mut W) -> u8 {
    let cfg = commands.config();

    if commands.ranges.is_empty() {
        error!(
            "Please provide at least an ip range in CIDR (10.0.0.0/24) or dashed (10.0.0-3.1-) form"
        );
        return EXIT_USAGE;
    }

    let summary = match expand::expand(&commands.ranges, &cfg, out) {
        Ok(summary) => summary,
        // The reader went away (e.g. `| head`), nothing left to report.
        Err(e) if e.kind() == ErrorKind::BrokenPipe => return EXIT_SUCCESS,
        Err(e) => {
            error!("Failed to write addresses: {e}");
            return EXIT_RANGE_ERROR;
        }
    };

    expand::print_summary(&summary, &cfg);

    if summary.has_failures() {
        EXIT_RANGE_ERROR
    } else {
        EXIT_SUCCESS
    }
}

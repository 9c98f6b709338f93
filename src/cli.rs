//! Command line arguments and CIDR input.

use crate::error::{ExpandError, ParseError};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Expand a CIDR block into its host addresses, one per line.
///
/// The network and broadcast addresses are left out.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    version,
    after_help = "Example:\n  cidr-expand 192.168.0.0/24 /tmp/output.txt"
)]
pub struct Cli {
    /// CIDR block such as 192.168.0.0/24; read from stdin when omitted
    pub cidr: Option<String>,
    /// Also write the addresses to this file (truncated if it exists)
    pub output_path: Option<PathBuf>,
}

impl Cli {
    /// Parse arguments, keeping `--help`/`--version` apart from usage errors.
    pub fn try_from_args<I, T>(args: I) -> Result<Cli, CliOutcome>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Cli::try_parse_from(args).map_err(|e| match e.kind() {
            clap::error::ErrorKind::DisplayHelp
            | clap::error::ErrorKind::DisplayVersion
            | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                CliOutcome::Info(e)
            }
            _ => CliOutcome::Usage(e),
        })
    }
}

/// Why argument parsing did not produce a [`Cli`].
#[derive(Debug)]
pub enum CliOutcome {
    /// Help or version text was requested.
    Info(clap::Error),
    /// Bad arguments; carries clap's usage message.
    Usage(clap::Error),
}

impl From<CliOutcome> for ExpandError {
    fn from(outcome: CliOutcome) -> Self {
        match outcome {
            CliOutcome::Info(e) | CliOutcome::Usage(e) => {
                ExpandError::Usage(e.render().to_string())
            }
        }
    }
}

/// Read a single CIDR from the first line of `input`.
pub fn read_cidr<R: BufRead>(input: &mut R) -> Result<String, ExpandError> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| ExpandError::io("Error reading CIDR input", e))?;
    let cidr = line.trim();
    if cidr.is_empty() {
        return Err(ParseError::Empty.into());
    }
    log::debug!("read_cidr() got {cidr:?}");
    Ok(cidr.to_string())
}

//! Expand a CIDR block into the host addresses it contains.
//!
//! - [`models`] - [`Cidr`] parsing and mask/increment arithmetic
//! - [`processing`] - ascending host enumeration without network and broadcast
//! - [`output`] - console and file sinks
//! - [`cli`] / [`config`] - argument parsing, stdin input, logger setup

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use std::io::{BufRead, Write};

pub use cli::Cli;
pub use error::{ExpandError, ParseError};
pub use models::Cidr;
pub use output::Destination;
pub use processing::{expand_cidr, hosts, Hosts};

/// Run one invocation: resolve the CIDR, expand it and write it out.
///
/// The CIDR comes from `cli` or, when absent, the first line of `stdin`.
/// The output file (if any) is only created once the CIDR has parsed.
///
/// # Returns
/// * `Ok(count)` - Number of host addresses written
/// * `Err` - Parse or I/O failure, nothing further is written
pub fn run<R, W>(cli: &Cli, stdin: &mut R, stdout: &mut W) -> Result<usize, ExpandError>
where
    R: BufRead,
    W: Write,
{
    let input = match &cli.cidr {
        Some(cidr) => cidr.clone(),
        None => cli::read_cidr(stdin)?,
    };
    let cidr = Cidr::new(&input)?;
    log::info!(
        "#Start expand {cidr} network={} broadcast={} hosts={}",
        cidr.network(),
        cidr.broadcast(),
        cidr.host_count()
    );
    if cidr.host_count() == 0 {
        log::warn!("{cidr} has no addresses between network and broadcast");
    }

    let destination = Destination::from_path(cli.output_path.clone());
    let count = output::write_hosts(hosts(&cidr), &destination, stdout)?;
    log::info!("#End expand {cidr} wrote {count} addresses to {destination:?}");
    Ok(count)
}

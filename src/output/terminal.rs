//! Console output.

use crate::error::ExpandError;
use std::io::Write;
use std::net::IpAddr;

/// Write each address as its own line to `out`.
///
/// # Returns
/// The number of addresses written
pub fn print_hosts<I, W>(hosts: I, out: &mut W) -> Result<usize, ExpandError>
where
    I: IntoIterator<Item = IpAddr>,
    W: Write,
{
    let mut count = 0;
    for ip in hosts {
        writeln!(out, "{ip}").map_err(|e| ExpandError::io("Error writing to stdout", e))?;
        count += 1;
    }
    out.flush()
        .map_err(|e| ExpandError::io("Error flushing stdout", e))?;
    log::debug!("print_hosts() wrote {count} lines");
    Ok(count)
}

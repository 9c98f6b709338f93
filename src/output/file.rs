//! File output: every address goes to the console and to a new file.

use crate::error::ExpandError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::net::IpAddr;
use std::path::Path;

/// Print each address to `out` and append it as a line to a file at `file_path`.
///
/// The file is created (or truncated) before the first address is written and
/// closed before returning, on success and on error. A failure partway leaves
/// whatever was already written in place.
///
/// # Returns
/// * `Ok(count)` - Number of addresses written
/// * `Err` - If the file can't be created or a write fails
pub fn print_and_save_to_file<I, W>(
    file_path: &Path,
    hosts: I,
    out: &mut W,
) -> Result<usize, ExpandError>
where
    I: IntoIterator<Item = IpAddr>,
    W: Write,
{
    let file = File::create(file_path).map_err(|e| {
        ExpandError::io(format!("Error creating {}", file_path.display()), e)
    })?;
    log::info!("Writing hosts to {}", file_path.display());
    let mut writer = BufWriter::new(file);

    let mut count = 0;
    for ip in hosts {
        writeln!(out, "{ip}").map_err(|e| ExpandError::io("Error writing to stdout", e))?;
        writeln!(writer, "{ip}").map_err(|e| {
            ExpandError::io(format!("Error writing to {}", file_path.display()), e)
        })?;
        count += 1;
    }

    out.flush()
        .map_err(|e| ExpandError::io("Error flushing stdout", e))?;
    writer.flush().map_err(|e| {
        ExpandError::io(format!("Error flushing {}", file_path.display()), e)
    })?;
    log::info!("Wrote {count} hosts to {}", file_path.display());
    Ok(count)
}

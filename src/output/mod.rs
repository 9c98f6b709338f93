//! Output sinks for expanded host lists.
//!
//! - [`terminal`] - one address per line on the console stream
//! - [`file`] - console output mirrored into a newly created file

mod file;
mod terminal;

pub use file::print_and_save_to_file;
pub use terminal::print_hosts;

use crate::error::ExpandError;
use std::io::Write;
use std::net::IpAddr;
use std::path::PathBuf;

/// Where an expanded host list goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Console,
    /// Console plus a truncated file at this path.
    File(PathBuf),
}

impl Destination {
    pub fn from_path(path: Option<PathBuf>) -> Destination {
        path.map_or(Destination::Console, Destination::File)
    }
}

/// Send `hosts` to `destination`, returning how many lines were written.
pub fn write_hosts<I, W>(
    hosts: I,
    destination: &Destination,
    out: &mut W,
) -> Result<usize, ExpandError>
where
    I: IntoIterator<Item = IpAddr>,
    W: Write,
{
    match destination {
        Destination::Console => print_hosts(hosts, out),
        Destination::File(path) => print_and_save_to_file(path, hosts, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_from_path() {
        assert_eq!(Destination::from_path(None), Destination::Console);
        assert_eq!(
            Destination::from_path(Some(PathBuf::from("/tmp/out.txt"))),
            Destination::File(PathBuf::from("/tmp/out.txt"))
        );
    }
}

//! Output artifact writing
//!
//! The final set is sorted and written one address per line, fully
//! replacing any previous artifact. Sorting is plain string order on the
//! dotted-decimal text ("10.0.0.1" sorts before "9.0.0.1"), matching the
//! published format consumers of the file already expect.

use crate::error::Result;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Sort the address set and persist it to `path`, replacing any prior
/// version. Returns the number of addresses written.
///
/// A stale artifact is deleted first (a missing one is not an error), then
/// the file is created and written in full. Any I/O failure here is fatal
/// for the run and surfaces to the caller.
pub fn write_addresses(addresses: &HashSet<String>, path: &Path) -> Result<usize> {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }

    let mut sorted: Vec<&String> = addresses.iter().collect();
    sorted.sort();

    let mut contents = String::new();
    for address in &sorted {
        debug!("writing {}", address);
        contents.push_str(address);
        contents.push('\n');
    }
    fs::write(path, contents)?;

    info!("wrote {} addresses to {}", sorted.len(), path.display());
    Ok(sorted.len())
}

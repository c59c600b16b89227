use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::OrderedCollection;

/// Reads every line from `reader` into a new collection.
///
/// # Errors
/// Returns any I/O error produced by `reader`, including [`io::ErrorKind::InvalidData`] for lines
/// that aren't valid UTF-8.
///
/// # Examples
/// ```
/// # use core_list::fs::read_lines;
/// let lines = read_lines("alpha\nbeta\r\ngamma".as_bytes()).unwrap();
/// assert_eq!(lines.to_vec(), ["alpha", "beta", "gamma"]);
/// ```
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<OrderedCollection<String>> {
    let mut list = OrderedCollection::new();
    for line in reader.lines() {
        list.add(line?);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(lines = list.len(), "read lines into ordered collection");

    Ok(list)
}

/// Opens the file at `path` and reads every line of it into a new collection.
///
/// # Errors
/// Returns an error if the file can't be opened or read.
pub fn read_lines_from<P: AsRef<Path>>(path: P) -> io::Result<OrderedCollection<String>> {
    let file = File::open(path.as_ref())?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.as_ref().display(), "opened file for line loading");

    read_lines(BufReader::new(file))
}

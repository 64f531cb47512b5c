//! Line-oriented input reading.
//!
//! Input consists of a count line followed by that many domain lines:
//!
//! ```text
//! 3
//! ru
//! com
//! hawk.ru
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::domain::Domain;
use crate::error::{CheckerError, Result};

/// Upper bound on domain slots reserved ahead of reading
const MAX_PREALLOCATED_DOMAINS: usize = 1024;

/// Open a buffered reader over `path`, or over standard input when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| CheckerError::OpenInput {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Read a count line.
///
/// The first whitespace-separated token is parsed as the count. A missing or
/// unparsable count line is treated as 0.
pub fn read_count<R: BufRead + ?Sized>(reader: &mut R) -> Result<usize> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        log::warn!("count line missing at end of input, assuming 0");
        return Ok(0);
    }

    let line = String::from_utf8_lossy(&line);
    let token = line.split_whitespace().next().unwrap_or("");
    match token.parse() {
        Ok(count) => Ok(count),
        Err(_) => {
            log::warn!("invalid count line {:?}, assuming 0", line.trim_end());
            Ok(0)
        }
    }
}

/// Read exactly `count` domain lines.
///
/// Each line is taken verbatim apart from its line terminator; bytes need not
/// be valid UTF-8.
pub fn read_domains<R: BufRead + ?Sized>(reader: &mut R, count: usize) -> Result<Vec<Domain>> {
    // count is untrusted, grow past this as lines actually arrive
    let mut domains = Vec::with_capacity(count.min(MAX_PREALLOCATED_DOMAINS));
    let mut line = Vec::new();

    for found in 0..count {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Err(CheckerError::InsufficientInput {
                expected: count,
                found,
            });
        }
        domains.push(Domain::new(strip_line_ending(&line)));
    }

    Ok(domains)
}

/// Read a count line followed by that many domain lines.
pub fn read_domain_list<R: BufRead + ?Sized>(reader: &mut R) -> Result<Vec<Domain>> {
    let count = read_count(reader)?;
    read_domains(reader, count)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

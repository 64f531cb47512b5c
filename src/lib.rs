//! Domain Checker - classifies domain names against a list of forbidden domains
//!
//! A domain is forbidden when it equals a forbidden domain or is one of its
//! subdomains. Matching is label-aware: `black_hawk.ru` is not a subdomain of
//! `hawk.ru`.
//!
//! # Example
//!
//! ```rust
//! use domain_checker::{Domain, DomainChecker, Verdict};
//!
//! let forbidden = ["kz", "com", "hawk.ru"].into_iter().map(Domain::from);
//! let checker = DomainChecker::new(forbidden);
//!
//! assert_eq!(checker.check(&Domain::new("tickets.hawk.ru")), Verdict::Bad);
//! assert_eq!(checker.check(&Domain::new("black_hawk.ru")), Verdict::Good);
//! assert_eq!(checker.check(&Domain::new("ru")), Verdict::Good);
//! ```
//!
//! # Input Format
//!
//! [`classify`] reads a forbidden list and a query list, each as a count line
//! followed by that many domain lines, and writes one `Bad` or `Good` line per
//! query:
//!
//! ```text
//! 3          # forbidden domains
//! kz
//! com
//! hawk.ru
//! 2          # queries
//! tickets.hawk.ru
//! ru
//! ```
//!
//! (comments shown for illustration only)

pub mod checker;
pub mod domain;
pub mod error;
pub mod input;
pub mod types;

use std::io::{BufRead, Write};

// Re-export commonly used items
pub use checker::DomainChecker;
pub use domain::Domain;
pub use error::{CheckerError, Result};
pub use input::{open_input, read_count, read_domain_list, read_domains};
pub use types::Verdict;

/// Classify every query of `input` and write one verdict line per query to `output`.
///
/// All input is read before anything is written, so malformed input produces no
/// partial output.
pub fn classify<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let forbidden = read_domain_list(&mut input)?;
    let checker = DomainChecker::new(forbidden);

    let queries = read_domain_list(&mut input)?;
    log::debug!("classifying {} queries", queries.len());

    for query in &queries {
        writeln!(output, "{}", checker.check(query))?;
    }
    output.flush()?;

    Ok(())
}

//! Domain names in canonical, subdomain-comparable form.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Label separator
const SEPARATOR: u8 = b'.';

/// A DNS-style domain name.
///
/// The name is stored with its labels in reverse order and a trailing separator,
/// e.g. `tickets.hawk.ru` becomes `ru.hawk.tickets.`. With that encoding
/// "A is a subdomain of B" is the same as "canonical(A) starts with canonical(B)",
/// and sorting by canonical form places every domain right after its ancestors.
///
/// Only label order is reversed, characters inside a label keep their order, so
/// [`Domain::canonical`] is not the raw character reversal of the name.
///
/// No validation or case folding is performed; any byte string is accepted
/// verbatim, including bytes that are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Domain {
    canonical: Vec<u8>,
}

impl Domain {
    /// Create a domain from a dotted name such as `hawk.ru`.
    pub fn new(name: impl AsRef<[u8]>) -> Self {
        let name = name.as_ref();
        let mut canonical = Vec::with_capacity(name.len() + 1);
        for (i, label) in name.rsplit(|b| *b == SEPARATOR).enumerate() {
            if i > 0 {
                canonical.push(SEPARATOR);
            }
            canonical.extend_from_slice(label);
        }
        canonical.push(SEPARATOR);
        Self { canonical }
    }

    /// Canonical (reversed-label) form used for ordering and prefix checks.
    pub fn canonical(&self) -> &[u8] {
        &self.canonical
    }

    /// Check if this domain equals `other` or lies underneath it.
    pub fn is_subdomain_of(&self, other: &Domain) -> bool {
        self.canonical.starts_with(&other.canonical)
    }

    /// Check if `other` equals this domain or lies underneath it.
    pub fn is_ancestor_of(&self, other: &Domain) -> bool {
        other.is_subdomain_of(self)
    }

    /// Dotted name with labels back in left-to-right order
    pub fn to_name_bytes(&self) -> Vec<u8> {
        let body = self
            .canonical
            .strip_suffix(&[SEPARATOR])
            .unwrap_or(&self.canonical[..]);
        let mut name = Vec::with_capacity(body.len());
        for (i, label) in body.rsplit(|b| *b == SEPARATOR).enumerate() {
            if i > 0 {
                name.push(SEPARATOR);
            }
            name.extend_from_slice(label);
        }
        name
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_name_bytes()))
    }
}

impl FromStr for Domain {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Domain {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Domain {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&[u8]> for Domain {
    fn from(name: &[u8]) -> Self {
        Self::new(name)
    }
}

use std::fmt;

/// Classification of a queried domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The domain is forbidden or a subdomain of a forbidden domain
    Bad,
    /// The domain is not covered by any forbidden domain
    Good,
}

impl Verdict {
    /// Build a verdict from a forbidden flag
    pub fn from_forbidden(forbidden: bool) -> Self {
        if forbidden {
            Verdict::Bad
        } else {
            Verdict::Good
        }
    }

    /// Output token for this verdict
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Bad => "Bad",
            Verdict::Good => "Good",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

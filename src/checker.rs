//! Forbidden domain set with subdomain-aware lookup.
//!
//! ## Example
//!
//! ```
//! use domain_checker::{Domain, DomainChecker};
//!
//! let checker: DomainChecker = ["ru", "com", "hawk.ru"].into_iter().map(Domain::from).collect();
//!
//! assert_eq!(checker.len(), 2); // hawk.ru is covered by ru
//! assert!(checker.is_forbidden(&Domain::new("tickets.hawk.ru")));
//! assert!(!checker.is_forbidden(&Domain::new("ru.com.kz")));
//! ```

use crate::domain::Domain;
use crate::types::Verdict;

/// Sorted set of forbidden domains.
///
/// Only the most general domain of every ancestor chain is retained, so no
/// retained domain is a subdomain of another. Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct DomainChecker {
    /// Sorted by canonical form, no element is a subdomain of another
    domains: Vec<Domain>,
}

impl DomainChecker {
    /// Build a checker from a list of forbidden domains.
    ///
    /// Duplicates and domains already covered by a forbidden ancestor are dropped.
    pub fn new(domains: impl IntoIterator<Item = Domain>) -> Self {
        let mut domains: Vec<Domain> = domains.into_iter().collect();
        let supplied = domains.len();

        domains.sort_unstable();
        // After sorting every domain follows its ancestors, so comparing against the
        // last retained element is enough.
        domains.dedup_by(|candidate, retained| retained.is_ancestor_of(candidate));

        log::debug!(
            "domain checker built: {} supplied, {} retained",
            supplied,
            domains.len()
        );

        Self { domains }
    }

    /// Check if the domain is forbidden or a subdomain of a forbidden domain.
    pub fn is_forbidden(&self, domain: &Domain) -> bool {
        // Index of the first stored domain strictly greater than the query
        let upper = self.domains.partition_point(|d| d <= domain);
        upper > 0 && domain.is_subdomain_of(&self.domains[upper - 1])
    }

    /// Classify the domain as `Bad` (forbidden) or `Good`.
    pub fn check(&self, domain: &Domain) -> Verdict {
        Verdict::from_forbidden(self.is_forbidden(domain))
    }

    /// Retained forbidden domains, sorted by canonical form
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Number of retained forbidden domains
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Check if the checker forbids nothing
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl FromIterator<Domain> for DomainChecker {
    fn from_iter<I: IntoIterator<Item = Domain>>(iter: I) -> Self {
        Self::new(iter)
    }
}

//! Identity resolution: per-row canonical email and the total name map.
//!
//! The resolver owns the identity derivation rule. The document builder
//! replays the same rule per row (through [`IdentityResolver::resolve_row`])
//! rather than reading a cached value, so the identity used for building a
//! record can never drift from the identity used for manager lookups.

use tracing::debug;

use crate::synthesis::synthesize_email;
use crate::types::{CanonicalEmail, IdentityMap, NameKey, RosterRow};

/// Derives canonical email identities for roster rows.
///
/// Holds the run-wide synthesis domain and the shared placeholder identity
/// used when a name yields no email at all.
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    domain: String,
    placeholder: CanonicalEmail,
}

impl IdentityResolver {
    /// Create a resolver for a fixed synthesis domain.
    pub fn new(domain: impl Into<String>) -> Self {
        let domain = domain.into();
        let placeholder = CanonicalEmail::placeholder(&domain);
        Self { domain, placeholder }
    }

    /// The synthesis domain for this run.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Resolve one row's canonical email.
    ///
    /// Precedence: a supplied email containing "@" wins verbatim (trimmed,
    /// lower-cased); otherwise the email is synthesized from the name; if
    /// synthesis yields nothing, the shared placeholder identity is used.
    pub fn resolve_row(&self, row: &RosterRow) -> CanonicalEmail {
        if let Some(email) = row.email.as_deref().and_then(CanonicalEmail::from_supplied) {
            return email;
        }

        let name = row.name.as_deref().unwrap_or("");
        synthesize_email(name, &self.domain).unwrap_or_else(|| self.placeholder.clone())
    }

    /// Build the total name → email map over the full row sequence.
    ///
    /// Processes rows in input order; a repeated name key overwrites the
    /// earlier mapping (last-write-wins). The empty name key is recorded
    /// like any other, so the map is total over all names seen.
    pub fn resolve_all(&self, rows: &[RosterRow]) -> IdentityMap {
        let mut map = IdentityMap::new();
        for row in rows {
            let key = NameKey::from_display(row.name.as_deref().unwrap_or(""));
            let email = self.resolve_row(row);
            debug!(name = %key, email = %email, "identity resolved");
            map.insert(key, email);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> IdentityResolver {
        IdentityResolver::new("jpmc.com")
    }

    #[test]
    fn test_supplied_email_wins_over_name() {
        let row = RosterRow {
            name: Some("Ada Lovelace".to_string()),
            email: Some("Ada@X.COM".to_string()),
            ..RosterRow::default()
        };
        assert_eq!(resolver().resolve_row(&row).as_str(), "ada@x.com");
    }

    #[test]
    fn test_supplied_email_without_separator_is_ignored() {
        let row = RosterRow {
            name: Some("Ada Lovelace".to_string()),
            email: Some("not-an-email".to_string()),
            ..RosterRow::default()
        };
        assert_eq!(resolver().resolve_row(&row).as_str(), "ada.lovelace@jpmc.com");
    }

    #[test]
    fn test_unusable_name_falls_back_to_placeholder() {
        let row = RosterRow::named("4077");
        assert_eq!(resolver().resolve_row(&row).as_str(), "unknown@jpmc.com");

        let nameless = RosterRow::default();
        assert_eq!(resolver().resolve_row(&nameless).as_str(), "unknown@jpmc.com");
    }

    #[test]
    fn test_map_is_total_and_last_write_wins() {
        let rows = vec![
            RosterRow {
                name: Some("Grace Hopper".to_string()),
                email: Some("grace@navy.mil".to_string()),
                ..RosterRow::default()
            },
            RosterRow::named("Grace Hopper"),
            RosterRow::default(),
        ];

        let map = resolver().resolve_all(&rows);
        assert_eq!(map.len(), 2);

        // Second Grace Hopper row overwrote the supplied-email mapping.
        let grace = map.lookup(&NameKey::from_display("grace hopper")).unwrap();
        assert_eq!(grace.as_str(), "grace.hopper@jpmc.com");

        // Nameless row lands on the empty key with the placeholder identity.
        let empty = map.lookup(&NameKey::from_display("")).unwrap();
        assert_eq!(empty.as_str(), "unknown@jpmc.com");
    }

    #[test]
    fn test_case_insensitive_name_keys_collapse() {
        let rows = vec![
            RosterRow::named("BOB JONES"),
            RosterRow::named("bob jones"),
        ];
        let map = resolver().resolve_all(&rows);
        assert_eq!(map.len(), 1);
    }
}

//! Identity types: name keys, canonical emails, and the name → email map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Normalized lookup key for a person's display name.
///
/// Case-folded and whitespace-trimmed. The empty string is a valid key and
/// represents "no name supplied".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameKey(String);

impl NameKey {
    /// Build a key from a display-form name.
    pub fn from_display(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// The normalized key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty-name key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical email identity: the lower-cased email string used as the
/// unique join key for a person across the whole record set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalEmail(String);

impl CanonicalEmail {
    /// Canonicalize a raw email string (trim + lower-case).
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self(raw.trim().to_lowercase())
    }

    /// Accept a supplied email field.
    ///
    /// The only validation performed: non-blank after trimming and contains
    /// an "@" character. Anything else is rejected so the caller falls back
    /// to synthesis.
    pub fn from_supplied(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.contains('@') {
            return None;
        }
        Some(Self::new(trimmed))
    }

    /// The shared fallback identity for rows whose name yields no email.
    pub fn placeholder(domain: &str) -> Self {
        Self::new(format!("unknown@{domain}"))
    }

    /// The canonical email string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Total mapping from normalized name to canonical email.
///
/// Built once by the resolver over the full row sequence, then treated as
/// read-only input by every later phase. Uses a BTreeMap for deterministic
/// iteration order.
#[derive(Debug, Clone, Default)]
pub struct IdentityMap {
    entries: BTreeMap<NameKey, CanonicalEmail>,
}

impl IdentityMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a name → email mapping.
    ///
    /// A repeated key overwrites the earlier entry (last-write-wins).
    pub fn insert(&mut self, key: NameKey, email: CanonicalEmail) {
        self.entries.insert(key, email);
    }

    /// Look up the canonical email for a name key.
    pub fn lookup(&self, key: &NameKey) -> Option<&CanonicalEmail> {
        self.entries.get(key)
    }

    /// Number of distinct name keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_key_folds_case_and_whitespace() {
        assert_eq!(NameKey::from_display("  Grace Hopper "), NameKey::from_display("grace hopper"));
        assert!(NameKey::from_display("   ").is_empty());
    }

    #[test]
    fn test_supplied_email_requires_separator() {
        assert_eq!(
            CanonicalEmail::from_supplied(" Ada@X.COM "),
            Some(CanonicalEmail::new("ada@x.com"))
        );
        assert_eq!(CanonicalEmail::from_supplied("not-an-email"), None);
        assert_eq!(CanonicalEmail::from_supplied("   "), None);
    }

    #[test]
    fn test_identity_map_last_write_wins() {
        let mut map = IdentityMap::new();
        let key = NameKey::from_display("Ada Lovelace");
        map.insert(key.clone(), CanonicalEmail::new("first@x.com"));
        map.insert(key.clone(), CanonicalEmail::new("second@x.com"));

        assert_eq!(map.len(), 1);
        assert_eq!(map.lookup(&key).unwrap().as_str(), "second@x.com");
    }

    #[test]
    fn test_empty_name_is_a_valid_key() {
        let mut map = IdentityMap::new();
        map.insert(NameKey::from_display(""), CanonicalEmail::placeholder("jpmc.com"));
        assert_eq!(
            map.lookup(&NameKey::from_display("  ")).unwrap().as_str(),
            "unknown@jpmc.com"
        );
    }
}

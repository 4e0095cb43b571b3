//! Deterministic email synthesis from display names.
//!
//! When a row supplies no usable email, the canonical identity is derived
//! from the person's name. The derivation is a pure function: same name →
//! same email, for any run over any input.
//!
//! ## Synthesis rule
//!
//! ```text
//! synthesize(name) = local_part(clean(name)) ++ "@" ++ domain
//! ```
//!
//! Where `clean` strips every character that is not an ASCII letter or a
//! plain space, trims, and lower-cases. The local part depends on how many
//! whitespace-separated tokens survive cleaning:
//!
//! - one token → `token`
//! - two tokens → `first.last`
//! - three or more → `first.<initial of second>.<last>` (further middle
//!   tokens are ignored)
//!
//! A name that cleans to nothing (blank, digits-only, punctuation-only)
//! yields no email; the caller falls back to the placeholder identity.

use crate::types::CanonicalEmail;

/// Strip a display name down to ASCII letters and spaces, trimmed and
/// lower-cased. Returns an empty string when nothing survives.
fn clean_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// Synthesize a canonical email from a display name.
///
/// Returns `None` when the name is blank or contains no alphabetic
/// characters.
pub fn synthesize_email(name: &str, domain: &str) -> Option<CanonicalEmail> {
    if name.trim().is_empty() {
        return None;
    }

    let cleaned = clean_name(name);
    if cleaned.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    let local = match tokens.as_slice() {
        [single] => single.to_string(),
        [first, last] => format!("{first}.{last}"),
        [first, second, .., last] => {
            // Only the first letter of the second token is kept.
            let initial = second.chars().next().unwrap_or_default();
            format!("{first}.{initial}.{last}")
        }
        [] => return None,
    };

    Some(CanonicalEmail::new(format!("{local}@{domain}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &str = "jpmc.com";

    fn synth(name: &str) -> Option<String> {
        synthesize_email(name, DOMAIN).map(|e| e.as_str().to_string())
    }

    #[test]
    fn test_two_token_name() {
        assert_eq!(synth("Ada Lovelace").as_deref(), Some("ada.lovelace@jpmc.com"));
    }

    #[test]
    fn test_three_token_name_keeps_middle_initial() {
        assert_eq!(
            synth("Grace Brewster Hopper").as_deref(),
            Some("grace.b.hopper@jpmc.com")
        );
    }

    #[test]
    fn test_four_token_name_ignores_later_middles() {
        assert_eq!(
            synth("Anna Maria Luisa Medici").as_deref(),
            Some("anna.m.medici@jpmc.com")
        );
    }

    #[test]
    fn test_single_token_name() {
        assert_eq!(synth("Plato").as_deref(), Some("plato@jpmc.com"));
    }

    #[test]
    fn test_blank_name_yields_none() {
        assert_eq!(synth(""), None);
        assert_eq!(synth("   "), None);
    }

    #[test]
    fn test_non_alphabetic_name_yields_none() {
        assert_eq!(synth("123"), None);
        assert_eq!(synth("!!! ###"), None);
    }

    #[test]
    fn test_symbols_are_stripped_before_tokenizing() {
        assert_eq!(synth("O'Brien, Conor"), Some("obrien.conor@jpmc.com".to_string()));
        assert_eq!(synth("Jean-Luc Picard"), Some("jeanluc.picard@jpmc.com".to_string()));
    }

    #[test]
    fn test_extra_whitespace_is_collapsed() {
        assert_eq!(synth("  Ada   Lovelace  ").as_deref(), Some("ada.lovelace@jpmc.com"));
    }

    #[test]
    fn test_determinism() {
        assert_eq!(synth("Grace Brewster Hopper"), synth("Grace Brewster Hopper"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn synthesized_email_is_lowercase_and_well_formed(name in ".{0,48}") {
                if let Some(email) = synth(&name) {
                    prop_assert_eq!(email.matches('@').count(), 1);
                    prop_assert_eq!(email.clone(), email.to_lowercase());
                    prop_assert!(email.ends_with("@jpmc.com"));
                    prop_assert!(!email.starts_with('@'));
                }
            }

            #[test]
            fn synthesis_is_deterministic(name in ".{0,48}") {
                prop_assert_eq!(synth(&name), synth(&name));
            }

            #[test]
            fn alphabetic_names_always_synthesize(name in "[a-z]{1,12}( [a-z]{1,12}){0,4}") {
                prop_assert!(synth(&name).is_some());
            }
        }
    }
}

//! Document builder: one roster row → one person record.

use crate::resolver::IdentityResolver;
use crate::types::{CanonicalEmail, IdentityMap, NameKey, PersonRecord, RecordTemplate, RosterRow};

/// Builds person records from rows against a completed identity map.
///
/// The builder never fails: every row, however malformed, yields a record
/// with empty-string/empty-sequence fallbacks. Manager names that resolve
/// to no known identity are dropped without comment.
#[derive(Debug)]
pub struct DocumentBuilder<'a> {
    resolver: &'a IdentityResolver,
    identities: &'a IdentityMap,
    template: &'a RecordTemplate,
}

impl<'a> DocumentBuilder<'a> {
    /// Create a builder over a completed identity map.
    pub fn new(
        resolver: &'a IdentityResolver,
        identities: &'a IdentityMap,
        template: &'a RecordTemplate,
    ) -> Self {
        Self {
            resolver,
            identities,
            template,
        }
    }

    /// Build the person record for one row.
    ///
    /// The canonical email is recomputed from the row itself (same rule the
    /// resolver applied), not looked up by name, so a later row that
    /// overwrote this name's mapping cannot change this record's identity.
    pub fn build(&self, row: &RosterRow) -> PersonRecord {
        let mut record = self.template.instantiate();

        record.name = trimmed(row.name.as_deref());
        record.designation = trimmed(row.designation.as_deref());
        record.location = trimmed(row.location.as_deref());
        record.business_unit = split_business_unit(row.business_unit.as_deref());
        record.email = self.resolver.resolve_row(row);
        record.reporting_to = self.manager_ref(row.reports_to.as_deref());

        record
    }

    /// Rewrite a manager display name into an email reference.
    ///
    /// A blank manager cell means "no manager" and is never looked up, so
    /// it cannot alias the empty-name sentinel entry of the identity map.
    fn manager_ref(&self, manager_name: Option<&str>) -> Vec<CanonicalEmail> {
        let key = NameKey::from_display(manager_name.unwrap_or(""));
        if key.is_empty() {
            return Vec::new();
        }
        match self.identities.lookup(&key) {
            Some(email) => vec![email.clone()],
            None => Vec::new(),
        }
    }
}

fn trimmed(field: Option<&str>) -> String {
    field.unwrap_or("").trim().to_string()
}

/// Split the comma-joined business-unit cell into trimmed tokens.
///
/// Quoted commas inside a sub-value are not handled; the cell is split on
/// every comma.
fn split_business_unit(cell: Option<&str>) -> Vec<String> {
    match cell {
        Some(cell) if !cell.is_empty() => {
            cell.split(',').map(|token| token.trim().to_string()).collect()
        }
        _ => Vec::new(),
    }
}

//! Hierarchy inversion: derive reportees from manager references.

use crate::document_set::DocumentSet;
use crate::types::CanonicalEmail;

/// Compute every record's `reportees` list from the set's manager
/// references.
///
/// Single pass over the records in set order: for each record, each manager
/// email that keys a record in the set receives the record's email in its
/// `reportees`, deduplicated, in first-encounter order. Manager emails with
/// no record in the set are dangling references and contribute nothing.
///
/// This is a one-hop inversion, not a traversal: reporting cycles are
/// represented faithfully and cannot loop, and `reportees` never contains
/// transitive descendants.
pub fn invert_hierarchy(documents: &mut DocumentSet) {
    for record in documents.iter_mut() {
        record.reportees.clear();
    }

    let edges: Vec<(CanonicalEmail, CanonicalEmail)> = documents
        .iter()
        .flat_map(|record| {
            record
                .reporting_to
                .iter()
                .map(|manager| (manager.clone(), record.email.clone()))
        })
        .collect();

    for (manager, report) in edges {
        if let Some(manager_record) = documents.get_mut(&manager) {
            if !manager_record.reportees.contains(&report) {
                manager_record.reportees.push(report);
            }
        }
    }
}

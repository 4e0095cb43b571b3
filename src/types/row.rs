//! Raw roster row as read from the delimited input.

use serde::Deserialize;

/// One input record, one per line of the roster source.
///
/// Every field is optional at the type level: a missing recognized column
/// leaves the field `None` for every row, and downstream phases degrade
/// absent values to empty-string/empty-sequence defaults. Column names
/// match the source header verbatim, including the `Reportsto` spelling.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RosterRow {
    /// Display-form person name.
    pub name: Option<String>,
    /// Supplied email, if any.
    pub email: Option<String>,
    /// Job designation.
    pub designation: Option<String>,
    /// Office location.
    pub location: Option<String>,
    /// Comma-joined business unit cell.
    #[serde(rename = "businessUnit")]
    pub business_unit: Option<String>,
    /// Manager's display name.
    #[serde(rename = "Reportsto")]
    pub reports_to: Option<String>,
}

impl RosterRow {
    /// Convenience constructor for a row carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

//! Person record types and the fixed default bundle.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::identity::CanonicalEmail;

/// Default cost string carried by every record.
pub const ZERO_COST: &str = "$ 0.00";

/// Sentiment toward the engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Strongly positive.
    High,
    /// Neutral-positive.
    Medium,
    /// Negative.
    Low,
    /// Not yet assessed.
    Unknown,
}

impl Sentiment {
    /// Parse sentiment from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Awareness level of the contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Awareness {
    /// On hold.
    Hold,
    /// Reachable by email only.
    #[serde(rename = "Email only")]
    EmailOnly,
    /// Low awareness.
    Low,
    /// Cleared to proceed.
    #[serde(rename = "Go Ahead")]
    GoAhead,
    /// Not yet assessed.
    Unknown,
}

impl Awareness {
    /// Parse awareness from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hold" => Some(Self::Hold),
            "email only" => Some(Self::EmailOnly),
            "low" => Some(Self::Low),
            "go ahead" => Some(Self::GoAhead),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl Default for Awareness {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for Awareness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hold => write!(f, "Hold"),
            Self::EmailOnly => write!(f, "Email only"),
            Self::Low => write!(f, "Low"),
            Self::GoAhead => write!(f, "Go Ahead"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Role classification of the contact within the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactType {
    /// Technical champion.
    TechChampion,
    /// Business champion.
    BusinessChampion,
    /// Economic buyer.
    EconomicBuyer,
    /// Internal coach.
    Coach,
    /// No purchasing power.
    NoPower,
    /// Influential stakeholder.
    Influential,
    /// Unclassified.
    Unknown,
    /// Active detractor.
    Detractor,
}

impl ContactType {
    /// Parse contact type from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "techchampion" => Some(Self::TechChampion),
            "businesschampion" => Some(Self::BusinessChampion),
            "economicbuyer" => Some(Self::EconomicBuyer),
            "coach" => Some(Self::Coach),
            "nopower" => Some(Self::NoPower),
            "influential" => Some(Self::Influential),
            "unknown" => Some(Self::Unknown),
            "detractor" => Some(Self::Detractor),
            _ => None,
        }
    }
}

impl Default for ContactType {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TechChampion => write!(f, "techChampion"),
            Self::BusinessChampion => write!(f, "businessChampion"),
            Self::EconomicBuyer => write!(f, "economicBuyer"),
            Self::Coach => write!(f, "coach"),
            Self::NoPower => write!(f, "noPower"),
            Self::Influential => write!(f, "influential"),
            Self::Unknown => write!(f, "unknown"),
            Self::Detractor => write!(f, "detractor"),
        }
    }
}

/// Document-database object-id reference, serialized in extended JSON form:
/// `{ "$oid": "<24-hex id>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectIdRef {
    /// Hex object id.
    #[serde(rename = "$oid")]
    pub oid: String,
}

impl ObjectIdRef {
    /// Wrap a hex object id.
    pub fn new(oid: impl Into<String>) -> Self {
        Self { oid: oid.into() }
    }
}

/// Document-database UTC date reference, serialized in extended JSON form:
/// `{ "$date": "<ISO-8601 UTC>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcDateRef {
    /// ISO-8601 UTC timestamp.
    #[serde(rename = "$date")]
    pub date: String,
}

impl UtcDateRef {
    /// Capture a datetime as an extended-JSON date reference.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self {
            date: dt.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// One interaction log entry.
///
/// The normalizer always emits an empty log history; the type exists so the
/// output schema is fully described for downstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the interaction happened.
    pub timestamp: UtcDateRef,
    /// Free-text summary.
    pub summary: String,
    /// Email of the contact involved.
    pub email: CanonicalEmail,
    /// Sentiment recorded for the interaction.
    pub sentiment: Sentiment,
    /// Awareness recorded for the interaction.
    pub awareness: Awareness,
}

/// Immutable bundle of row-independent defaults applied to every record.
///
/// Constructed once per run so the long list of constant fields stays out
/// of the builder's algorithmic logic. The generation timestamp is captured
/// here and shared by all records of the run.
#[derive(Debug, Clone)]
pub struct RecordTemplate {
    account_id: ObjectIdRef,
    updated_at: UtcDateRef,
}

impl RecordTemplate {
    /// Create a template bound to an account and a generation time.
    pub fn new(account_id: ObjectIdRef, generated_at: DateTime<Utc>) -> Self {
        Self {
            account_id,
            updated_at: UtcDateRef::from_datetime(generated_at),
        }
    }

    /// Instantiate a blank record carrying only the fixed defaults.
    pub fn instantiate(&self) -> PersonRecord {
        PersonRecord {
            name: String::new(),
            email: CanonicalEmail::new(""),
            designation: String::new(),
            location: String::new(),
            sentiment: Sentiment::Unknown,
            awareness: Awareness::Unknown,
            decision_maker: false,
            contact_type: ContactType::TechChampion,
            reporting_to: Vec::new(),
            reportees: Vec::new(),
            log_history: Vec::new(),
            account_id: self.account_id.clone(),
            annual_cost: ZERO_COST.to_string(),
            annual_mdb_cost: ZERO_COST.to_string(),
            ao: String::new(),
            app_names: Vec::new(),
            business_unit: Vec::new(),
            cto: String::new(),
            monthly_mdb_cost: ZERO_COST.to_string(),
            stage: String::new(),
            tgo: String::new(),
            updated_at: self.updated_at.clone(),
        }
    }
}

/// Normalized person document, one per unique resolved email.
///
/// Field order matches the output wire shape. `reporting_to` holds at most
/// one manager email; `reportees` is its inverse view, filled in by the
/// hierarchy inverter in encounter order, deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    /// Display-form name, as given.
    pub name: String,
    /// Canonical email identity (join key).
    pub email: CanonicalEmail,
    /// Job designation.
    pub designation: String,
    /// Office location.
    pub location: String,
    /// Sentiment (fixed default).
    pub sentiment: Sentiment,
    /// Awareness (fixed default).
    pub awareness: Awareness,
    /// Decision-maker flag (fixed default).
    pub decision_maker: bool,
    /// Role classification (fixed default).
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    /// Manager reference by email: zero or one entry.
    pub reporting_to: Vec<CanonicalEmail>,
    /// Direct reports by email, encounter-ordered, deduplicated.
    pub reportees: Vec<CanonicalEmail>,
    /// Interaction log (always empty on output).
    pub log_history: Vec<LogEntry>,
    /// Owning account reference.
    pub account_id: ObjectIdRef,
    /// Annual cost (fixed default).
    pub annual_cost: String,
    /// Annual MDB cost (fixed default).
    #[serde(rename = "annualMDBCost")]
    pub annual_mdb_cost: String,
    /// Account owner (fixed default).
    pub ao: String,
    /// Associated application names (fixed default).
    pub app_names: Vec<String>,
    /// Business units, split from the comma-joined input cell.
    pub business_unit: Vec<String>,
    /// CTO reference (fixed default).
    pub cto: String,
    /// Monthly MDB cost (fixed default).
    #[serde(rename = "monthlyMDBCost")]
    pub monthly_mdb_cost: String,
    /// Engagement stage (fixed default).
    pub stage: String,
    /// TGO reference (fixed default).
    pub tgo: String,
    /// Generation-time timestamp, shared by every record of a run.
    pub updated_at: UtcDateRef,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_awareness_wire_strings() {
        assert_eq!(serde_json::to_string(&Awareness::GoAhead).unwrap(), "\"Go Ahead\"");
        assert_eq!(serde_json::to_string(&Awareness::EmailOnly).unwrap(), "\"Email only\"");
        assert_eq!(
            serde_json::from_str::<Awareness>("\"Go Ahead\"").unwrap(),
            Awareness::GoAhead
        );
    }

    #[test]
    fn test_contact_type_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ContactType::TechChampion).unwrap(),
            "\"techChampion\""
        );
        assert_eq!(
            serde_json::to_string(&ContactType::NoPower).unwrap(),
            "\"noPower\""
        );
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!(Sentiment::from_str("HIGH"), Some(Sentiment::High));
        assert_eq!(Awareness::from_str("go ahead"), Some(Awareness::GoAhead));
        assert_eq!(ContactType::from_str("techchampion"), Some(ContactType::TechChampion));
        assert_eq!(ContactType::from_str("other"), None);
    }

    #[test]
    fn test_extended_json_wrappers() {
        let oid = ObjectIdRef::new("691601e82c9db1f168e850d4");
        assert_eq!(
            serde_json::to_string(&oid).unwrap(),
            "{\"$oid\":\"691601e82c9db1f168e850d4\"}"
        );

        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let date = UtcDateRef::from_datetime(dt);
        assert_eq!(
            serde_json::to_string(&date).unwrap(),
            "{\"$date\":\"2024-03-01T12:00:00.000000Z\"}"
        );
    }

    #[test]
    fn test_template_instantiates_fixed_defaults() {
        let template = RecordTemplate::new(
            ObjectIdRef::new("691601e82c9db1f168e850d4"),
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        );
        let record = template.instantiate();

        assert_eq!(record.sentiment, Sentiment::Unknown);
        assert_eq!(record.awareness, Awareness::Unknown);
        assert!(!record.decision_maker);
        assert_eq!(record.contact_type, ContactType::TechChampion);
        assert_eq!(record.annual_cost, ZERO_COST);
        assert_eq!(record.annual_mdb_cost, ZERO_COST);
        assert_eq!(record.monthly_mdb_cost, ZERO_COST);
        assert!(record.reporting_to.is_empty());
        assert!(record.reportees.is_empty());
        assert!(record.log_history.is_empty());
        assert_eq!(record.account_id.oid, "691601e82c9db1f168e850d4");
    }
}

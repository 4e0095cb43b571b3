//! Run configuration: fixed constants with environment overrides.
//!
//! The normalizer takes no command-line arguments. Input/output paths are
//! constants overridable through `ROSTER_INPUT` / `ROSTER_OUTPUT`; the
//! synthesis domain and the account identity are fixed for the run.

use std::path::PathBuf;

/// Default roster input path.
pub const DEFAULT_INPUT_PATH: &str = "input.csv";

/// Default document collection output path.
pub const DEFAULT_OUTPUT_PATH: &str = "output.json";

/// Fixed domain for synthesized email identities.
pub const EMAIL_DOMAIN: &str = "jpmc.com";

/// Fixed account object id attached to every record.
pub const ACCOUNT_OBJECT_ID: &str = "691601e82c9db1f168e850d4";

/// Resolved configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Roster input path.
    pub input: PathBuf,
    /// Document collection output path.
    pub output: PathBuf,
    /// Synthesis domain for derived emails.
    pub domain: String,
    /// Account object id attached to every record.
    pub account_id: String,
}

impl RunConfig {
    /// Build the configuration from constants and environment overrides.
    pub fn from_env() -> Self {
        let input = std::env::var("ROSTER_INPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_INPUT_PATH));
        let output = std::env::var("ROSTER_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_PATH));

        Self {
            input,
            output,
            domain: EMAIL_DOMAIN.to_string(),
            account_id: ACCOUNT_OBJECT_ID.to_string(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            domain: EMAIL_DOMAIN.to_string(),
            account_id: ACCOUNT_OBJECT_ID.to_string(),
        }
    }
}

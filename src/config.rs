//! Configuration types for the ACTES file-drop transmitter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the drop transmitter.
///
/// Every recognized option is enumerated here with its default; a partial
/// YAML file fills in the rest through `#[serde(default)]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DropConfig {
    /// Act type and classification settings
    pub act: ActTypeConfig,

    /// Department and sender organization settings
    pub organization: OrganizationConfig,

    /// Transaction codes for the two drop kinds
    pub transactions: TransactionConfig,

    /// Webservice envelope settings
    pub envelope: EnvelopeConfig,

    /// Staging and final drop directories
    pub paths: PathConfig,

    /// Free-text normalization settings
    pub text: TextConfig,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            act: ActTypeConfig::default(),
            organization: OrganizationConfig::default(),
            transactions: TransactionConfig::default(),
            envelope: EnvelopeConfig::default(),
            paths: PathConfig::default(),
            text: TextConfig::default(),
        }
    }
}

/// Act type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActTypeConfig {
    /// Numeric code for the act nature
    pub nature_code: u32,

    /// Act type label used in file names (e.g. "DE" for deliberations)
    pub label: String,

    /// Classification nomenclature date, fixed per deployment
    pub classification_date: NaiveDate,
}

impl Default for ActTypeConfig {
    fn default() -> Self {
        Self {
            nature_code: 1,
            label: "DE".to_string(),
            classification_date: NaiveDate::from_ymd_opt(2009, 1, 1)
                .expect("valid default classification date"),
        }
    }
}

/// Department and organization identity settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    /// Department code (e.g. "075")
    pub department: String,

    /// Identity used when the council formation is municipal
    pub municipal: OrgProfile,

    /// Identity used when the council formation is departmental
    pub departmental: OrgProfile,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            department: "075".to_string(),
            municipal: OrgProfile::default(),
            departmental: OrgProfile::default(),
        }
    }
}

impl OrganizationConfig {
    /// Resolve the organization profile for one call.
    ///
    /// File naming, the cancellation identifier, and the envelope routing
    /// fields must all select from the same municipal/departmental branch;
    /// resolving once here keeps the three consistent.
    pub fn profile(&self, is_municipal: bool) -> &OrgProfile {
        if is_municipal {
            &self.municipal
        } else {
            &self.departmental
        }
    }
}

/// The pair of identifiers tied to one council formation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgProfile {
    /// Organization SIREN, used in file names and act identifiers
    pub siren: String,

    /// Routing user DN, used in the webservice envelope
    pub routing_user: String,
}

/// Transaction codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionConfig {
    /// Code appended to transmission file names
    pub transmission: String,

    /// Code appended to cancellation file names (distinct from transmission)
    pub cancellation: String,
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            transmission: "T1".to_string(),
            cancellation: "T2".to_string(),
        }
    }
}

/// Webservice envelope settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeConfig {
    /// Processing-type code substituted into the envelope
    pub processing_type: String,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            processing_type: "1".to_string(),
        }
    }
}

/// Filesystem roots for the drop protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Root under which per-call staging directories are created
    pub staging_root: PathBuf,

    /// Final drop root watched by the downstream agent
    pub final_root: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            staging_root: PathBuf::from("staging"),
            final_root: PathBuf::from("drop"),
        }
    }
}

/// Free-text normalization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Maximum object-text length; longer text is truncated with an ellipsis
    pub max_length: usize,

    /// Comma-separated substrings replaced before transmission
    pub forbidden: String,

    /// Output character encoding for the business document
    pub encoding: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            max_length: 400,
            forbidden: String::new(),
            encoding: "ISO-8859-1".to_string(),
        }
    }
}

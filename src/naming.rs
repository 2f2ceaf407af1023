//! Canonical identifiers and file names for the drop protocol.
//!
//! All names derive from a fixed component order:
//! `department-siren-YYYYMMDD-internalNumber-actTypeLabel`. Transmission and
//! cancellation file names append a transaction code plus a numeric suffix;
//! the cancellation *identifier* never carries the transaction code (this
//! asymmetry is part of the downstream contract).

use chrono::{DateTime, Utc};

/// Business document extension.
pub const EXTENSION_XML: &str = ".xml";
/// Webservice envelope extension.
pub const EXTENSION_WS: &str = ".ws";
/// Sentinel (completion marker) extension.
pub const EXTENSION_OK: &str = ".OK";
/// Signed document / annex extension.
pub const EXTENSION_DOCUMENT: &str = ".pdf";

/// Numeric suffix reserved for the business document.
pub const SUFFIX_BUSINESS: usize = 0;
/// Numeric suffix reserved for the main signed document.
pub const SUFFIX_MAIN_DOCUMENT: usize = 1;
/// Numeric suffix of the first annex; annexes continue contiguously.
pub const SUFFIX_FIRST_ANNEX: usize = 2;

const NAME_SEPARATOR: &str = "-";
const SUFFIX_SEPARATOR: &str = "_";
const DATE_COMPACT: &str = "%Y%m%d";

/// The identity components of one act.
#[derive(Debug, Clone)]
pub struct ActName {
    pub department: String,
    pub siren: String,
    pub decision_date: DateTime<Utc>,
    pub internal_number: String,
    pub act_type_label: String,
}

impl ActName {
    /// Canonical act identifier, e.g. `075-217500055-20090707-ODS000000000074-DE`.
    ///
    /// Used verbatim as the `IDActe` of a cancellation document. Contains no
    /// transaction code.
    pub fn act_id(&self) -> String {
        [
            self.department.as_str(),
            self.siren.as_str(),
            &self.decision_date.format(DATE_COMPACT).to_string(),
            self.internal_number.as_str(),
            self.act_type_label.as_str(),
        ]
        .join(NAME_SEPARATOR)
    }
}

/// File names for one transmission or cancellation attempt.
///
/// Built from an [`ActName`] and a transaction code; every file in the set
/// shares the stem `<act_id>-<transaction>_` followed by its numeric suffix.
#[derive(Debug, Clone)]
pub struct FileSet {
    stem: String,
}

impl FileSet {
    pub fn new(name: &ActName, transaction_code: &str) -> Self {
        Self {
            stem: format!(
                "{}{}{}{}",
                name.act_id(),
                NAME_SEPARATOR,
                transaction_code,
                SUFFIX_SEPARATOR
            ),
        }
    }

    /// Base name with suffix `0`, shared by the business and envelope files.
    /// Also names the destination subdirectory and the sentinel.
    pub fn base(&self) -> String {
        format!("{}{}", self.stem, SUFFIX_BUSINESS)
    }

    /// Business document file name (`..._0.xml`).
    pub fn business_file(&self) -> String {
        format!("{}{}", self.base(), EXTENSION_XML)
    }

    /// Webservice envelope file name (`..._0.ws`).
    pub fn envelope_file(&self) -> String {
        format!("{}{}", self.base(), EXTENSION_WS)
    }

    /// Main signed document file name (`..._1.pdf`).
    pub fn main_document_file(&self) -> String {
        format!(
            "{}{}{}",
            self.stem, SUFFIX_MAIN_DOCUMENT, EXTENSION_DOCUMENT
        )
    }

    /// Annex file name for a zero-based annex index (`..._2.pdf` onward).
    pub fn annex_file(&self, index: usize) -> String {
        format!(
            "{}{}{}",
            self.stem,
            SUFFIX_FIRST_ANNEX + index,
            EXTENSION_DOCUMENT
        )
    }

    /// Destination subdirectory name under the final drop root.
    pub fn destination_dir(&self) -> String {
        self.base()
    }

    /// Sentinel file name, written as a sibling of the destination directory.
    pub fn sentinel_file(&self) -> String {
        format!("{}{}", self.base(), EXTENSION_OK)
    }
}

//! Error types for the ACTES file-drop transmitter.

use thiserror::Error;

/// Errors raised while staging or publishing a drop.
///
/// A staging-directory creation conflict is deliberately *not* represented
/// here: per the drop contract it is reported as a plain `false` result with
/// nothing written anywhere.
#[derive(Error, Debug)]
pub enum DropError {
    #[error("XML serialization error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("serialized document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("unknown output encoding label: {0}")]
    Encoding(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

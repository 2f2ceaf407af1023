//! ACTES file-drop transmitter.
//!
//! Transmits legal-act documents (deliberations with their attachments, or
//! cancellation notices) to a downstream processing agent through a file-drop
//! protocol: a strictly-named file set is assembled in an isolated staging
//! directory, published into a watched drop directory, and completed with an
//! empty `.OK` sentinel file that the consumer polls for.
//!
//! # Features
//!
//! - Canonical file naming (department, SIREN, date, number, act type,
//!   transaction code, contiguous numeric suffixes)
//! - ACTES v1 business document serialization with configurable legacy
//!   output encoding
//! - Fixed-template webservice envelope generation
//! - All-or-nothing publication with sentinel-last ordering
//! - Unconditional staging cleanup
//!
//! # Example
//!
//! ```ignore
//! use actes_drop::{ActSubmission, DropConfig, DropService};
//!
//! let service = DropService::new(DropConfig::default());
//! let sent = service.send_act(&submission)?;
//! ```

pub mod config;
pub mod document;
pub mod drop;
pub mod envelope;
pub mod error;
pub mod naming;
pub mod sanitize;
pub mod service;

pub use config::{DropConfig, OrgProfile};
pub use error::DropError;
pub use service::{ActSubmission, CancellationRequest, DropService};

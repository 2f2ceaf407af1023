//! Transmission and cancellation orchestration.
//!
//! Ties the sanitizer, filename builder, serializer, envelope builder, and
//! the drop protocol together for one synchronous call. Each call either
//! publishes its complete file set (payload copied, sentinel written) or
//! leaves the final root untouched; the staging directory is destroyed on
//! every path that created one.

use crate::config::DropConfig;
use crate::document::{self, ActRecord, CancellationRecord};
use crate::drop::{self, StagingDir};
use crate::envelope;
use crate::error::DropError;
use crate::naming::{ActName, FileSet};
use crate::sanitize;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// One act submission, as handed over by the upstream caller.
#[derive(Debug, Clone)]
pub struct ActSubmission {
    /// Deliberation number, used verbatim in file names
    pub internal_number: String,

    /// Free-text description; sanitized before serialization
    pub object_text: String,

    /// Classification codes
    pub matiere1: u32,
    pub matiere2: u32,

    /// Municipal vs. departmental council formation
    pub is_municipal: bool,

    /// Date the act was voted
    pub decision_date: DateTime<Utc>,

    /// Signed final deliberation bytes
    pub main_document: Vec<u8>,

    /// Annex bytes, order drives the on-disk numbering
    pub annexes: Vec<Vec<u8>>,
}

/// One cancellation request.
#[derive(Debug, Clone)]
pub struct CancellationRequest {
    pub internal_number: String,
    pub is_municipal: bool,
    pub decision_date: DateTime<Utc>,
}

/// The drop transmitter.
///
/// Single-threaded, synchronous, blocking I/O throughout: each call runs to
/// completion before returning and is not designed for concurrent use
/// against the same staging root.
pub struct DropService {
    config: DropConfig,
}

impl DropService {
    pub fn new(config: DropConfig) -> Self {
        Self { config }
    }

    /// Transmit one act.
    ///
    /// Returns `Ok(true)` on full publish, `Ok(false)` when the staging
    /// directory could not be created (nothing written anywhere), and an
    /// error on any other filesystem failure. The staging directory is
    /// cleaned up on every path past its creation.
    pub fn send_act(&self, submission: &ActSubmission) -> Result<bool, DropError> {
        let name = self.act_name(
            &submission.internal_number,
            submission.is_municipal,
            submission.decision_date,
        );
        let files = FileSet::new(&name, &self.config.transactions.transmission);

        info!(
            internal_number = %submission.internal_number,
            destination = %files.destination_dir(),
            annexes = submission.annexes.len(),
            "transmitting act"
        );

        let Some(staging) = StagingDir::create(&self.config.paths.staging_root) else {
            return Ok(false);
        };

        let outcome = self.stage_and_publish_act(&staging, submission, &files);
        drop::cleanup(staging.path());
        outcome?;

        info!(destination = %files.destination_dir(), "act transmitted");
        Ok(true)
    }

    /// Transmit one cancellation notice.
    ///
    /// Same result contract as [`send_act`](Self::send_act). A serialization
    /// failure does not abort the call: it is logged and the drop proceeds
    /// with whatever document text was produced.
    pub fn send_cancellation(&self, request: &CancellationRequest) -> Result<bool, DropError> {
        let name = self.act_name(
            &request.internal_number,
            request.is_municipal,
            request.decision_date,
        );
        let files = FileSet::new(&name, &self.config.transactions.cancellation);

        info!(
            act_id = %name.act_id(),
            destination = %files.destination_dir(),
            "transmitting cancellation"
        );

        let Some(staging) = StagingDir::create(&self.config.paths.staging_root) else {
            return Ok(false);
        };

        let outcome = self.stage_and_publish_cancellation(&staging, &name, &files, request.is_municipal);
        drop::cleanup(staging.path());
        outcome?;

        info!(destination = %files.destination_dir(), "cancellation transmitted");
        Ok(true)
    }

    fn stage_and_publish_act(
        &self,
        staging: &StagingDir,
        submission: &ActSubmission,
        files: &FileSet,
    ) -> Result<(), DropError> {
        staging.write_file(&files.main_document_file(), &submission.main_document)?;

        let mut annex_names = Vec::with_capacity(submission.annexes.len());
        for (index, bytes) in submission.annexes.iter().enumerate() {
            let annex_name = files.annex_file(index);
            staging.write_file(&annex_name, bytes)?;
            annex_names.push(annex_name);
        }

        let record = ActRecord {
            nature_code: self.config.act.nature_code,
            object_text: sanitize::sanitize(
                &submission.object_text,
                &self.config.text.forbidden,
                self.config.text.max_length,
            ),
            internal_number: submission.internal_number.clone(),
            classification_date: self.config.act.classification_date,
            decision_date: submission.decision_date,
            matiere1: submission.matiere1,
            matiere2: submission.matiere2,
            main_document: files.main_document_file(),
            annexes: annex_names,
        };

        let business = document::serialize_act(&record, &self.config.text.encoding)?;
        staging.write_file(&files.business_file(), &business)?;

        self.write_envelope(staging, files, submission.is_municipal)?;

        drop::publish(
            staging.path(),
            &self.config.paths.final_root,
            &files.destination_dir(),
        )
    }

    fn stage_and_publish_cancellation(
        &self,
        staging: &StagingDir,
        name: &ActName,
        files: &FileSet,
        is_municipal: bool,
    ) -> Result<(), DropError> {
        let record = CancellationRecord { act_id: name.act_id() };

        // Serialization failure is logged, not raised: the drop continues
        // with the partial document so the downstream agent still sees the
        // transaction. Flagged as a known-risky path in the test suite.
        let business = match document::serialize_cancellation(&record, &self.config.text.encoding)
        {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(act_id = %record.act_id, error = %e, "cancellation document serialization failed, continuing with partial output");
                Vec::new()
            }
        };
        staging.write_file(&files.business_file(), &business)?;

        self.write_envelope(staging, files, is_municipal)?;

        drop::publish(
            staging.path(),
            &self.config.paths.final_root,
            &files.destination_dir(),
        )
    }

    fn write_envelope(
        &self,
        staging: &StagingDir,
        files: &FileSet,
        is_municipal: bool,
    ) -> Result<(), DropError> {
        let profile = self.config.organization.profile(is_municipal);
        let envelope = envelope::build_envelope(
            &self.config.envelope.processing_type,
            &profile.routing_user,
            &profile.siren,
            &files.business_file(),
        );
        staging.write_file(&files.envelope_file(), envelope.as_bytes())
    }

    fn act_name(
        &self,
        internal_number: &str,
        is_municipal: bool,
        decision_date: DateTime<Utc>,
    ) -> ActName {
        let profile = self.config.organization.profile(is_municipal);
        ActName {
            department: self.config.organization.department.clone(),
            siren: profile.siren.clone(),
            decision_date,
            internal_number: internal_number.to_string(),
            act_type_label: self.config.act.label.clone(),
        }
    }
}

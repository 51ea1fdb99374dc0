//! Claim evidence staging
//!
//! Files picked or dropped on the claim form are checked one at a time and
//! appended to a session-local list. A rejected file is reported and skipped;
//! the rest of the batch is still processed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notify::Notification;
use crate::validation::{Form, ValidationError};

/// Most files a single claim can carry
pub const MAX_FILES: usize = 5;

/// Per-file size limit (10 MB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Accepted MIME types: JPEG, PNG, PDF and Word documents
pub const ALLOWED_MIME_TYPES: [&str; 6] = [
    "image/jpeg",
    "image/png",
    "image/jpg",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Metadata of a file offered for upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl StagedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.contains("image")
    }
}

/// Why a file was not staged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StagingRejection {
    #[error("Maximum {max} files allowed")]
    LimitReached { file: String, max: usize },

    #[error("{file} is not a supported file type")]
    UnsupportedType { file: String, mime: String },

    #[error("{file} exceeds 10MB limit")]
    TooLarge { file: String, size: u64 },
}

impl StagingRejection {
    pub fn file(&self) -> &str {
        match self {
            Self::LimitReached { file, .. }
            | Self::UnsupportedType { file, .. }
            | Self::TooLarge { file, .. } => file,
        }
    }

    pub fn notification(&self) -> Notification {
        let title = match self {
            Self::LimitReached { .. } => "File Limit",
            Self::UnsupportedType { .. } => "Invalid File Type",
            Self::TooLarge { .. } => "File Too Large",
        };
        Notification::error(title, self.to_string())
    }
}

/// Result of offering a batch of files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageOutcome {
    pub accepted: Vec<StagedFile>,
    pub rejected: Vec<StagingRejection>,
}

/// Ordered list of files staged for the current claim
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvidenceStaging {
    files: Vec<StagedFile>,
}

impl EvidenceStaging {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Check a single file against count, type and size, in that order
    pub fn check(&self, file: &StagedFile) -> Result<(), StagingRejection> {
        if self.files.len() >= MAX_FILES {
            return Err(StagingRejection::LimitReached {
                file: file.name.clone(),
                max: MAX_FILES,
            });
        }
        if !ALLOWED_MIME_TYPES.contains(&file.mime.as_str()) {
            return Err(StagingRejection::UnsupportedType {
                file: file.name.clone(),
                mime: file.mime.clone(),
            });
        }
        if file.size > MAX_FILE_SIZE {
            return Err(StagingRejection::TooLarge {
                file: file.name.clone(),
                size: file.size,
            });
        }
        Ok(())
    }

    /// Offer a batch; each file is staged or rejected independently
    pub fn stage<I>(&mut self, batch: I) -> StageOutcome
    where
        I: IntoIterator<Item = StagedFile>,
    {
        let mut outcome = StageOutcome::default();

        for file in batch {
            match self.check(&file) {
                Ok(()) => {
                    tracing::debug!(file = %file.name, size = file.size, "staged evidence file");
                    self.files.push(file.clone());
                    outcome.accepted.push(file);
                }
                Err(rejection) => {
                    tracing::debug!(file = %file.name, %rejection, "rejected evidence file");
                    outcome.rejected.push(rejection);
                }
            }
        }

        outcome
    }

    /// Drop every staged file with this name. Returns whether any was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.name != name);
        self.files.len() != before
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// File names, in staging order
    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|f| f.name.clone()).collect()
    }
}

/// The claim submit control is enabled only for a complete form with evidence
pub fn claim_submit_enabled(form: &Form, staging: &EvidenceStaging) -> bool {
    form.is_complete() && !staging.is_empty()
}

/// Full pre-submission check: fields first, then evidence
pub fn validate_claim(form: &Form, staging: &EvidenceStaging) -> Result<(), ValidationError> {
    form.validate()?;
    if staging.is_empty() {
        return Err(ValidationError::MissingEvidence);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg(name: &str) -> StagedFile {
        StagedFile::new(name, "image/jpeg", 200 * 1024)
    }

    #[test]
    fn test_accepts_allowed_types() {
        let mut staging = EvidenceStaging::new();
        let outcome = staging.stage(vec![
            jpeg("photo.jpg"),
            StagedFile::new("quote.pdf", "application/pdf", 1024),
            StagedFile::new(
                "report.docx",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                2048,
            ),
        ]);

        assert_eq!(outcome.accepted.len(), 3);
        assert!(outcome.rejected.is_empty());
        assert_eq!(staging.names(), ["photo.jpg", "quote.pdf", "report.docx"]);
    }

    #[test]
    fn test_rejects_type_and_keeps_going() {
        let mut staging = EvidenceStaging::new();
        let outcome = staging.stage(vec![
            StagedFile::new("clip.mp4", "video/mp4", 1024),
            jpeg("after.jpg"),
        ]);

        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].file(), "clip.mp4");
        assert_eq!(
            outcome.rejected[0].notification().message,
            "clip.mp4 is not a supported file type"
        );
        assert_eq!(staging.names(), ["after.jpg"]);
    }

    #[test]
    fn test_rejects_oversized_file() {
        let mut staging = EvidenceStaging::new();
        let big = StagedFile::new("scan.pdf", "application/pdf", MAX_FILE_SIZE + 1);
        let exact = StagedFile::new("edge.pdf", "application/pdf", MAX_FILE_SIZE);

        let outcome = staging.stage(vec![big, exact]);

        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].notification().title, "File Too Large");
        assert_eq!(
            outcome.rejected[0].to_string(),
            "scan.pdf exceeds 10MB limit"
        );
        assert_eq!(staging.names(), ["edge.pdf"]);
    }

    #[test]
    fn test_never_exceeds_limit() {
        let mut staging = EvidenceStaging::new();
        let batch: Vec<_> = (0..8).map(|i| jpeg(&format!("{}.jpg", i))).collect();

        let outcome = staging.stage(batch);

        assert_eq!(staging.len(), MAX_FILES);
        assert_eq!(outcome.accepted.len(), 5);
        assert_eq!(outcome.rejected.len(), 3);
        assert!(outcome
            .rejected
            .iter()
            .all(|r| matches!(r, StagingRejection::LimitReached { max: 5, .. })));
        assert_eq!(outcome.rejected[0].notification().message, "Maximum 5 files allowed");
    }

    #[test]
    fn test_limit_applies_across_batches() {
        let mut staging = EvidenceStaging::new();
        staging.stage((0..4).map(|i| jpeg(&format!("a{}.jpg", i))));
        let outcome = staging.stage(vec![jpeg("b0.jpg"), jpeg("b1.jpg")]);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(staging.len(), 5);
    }

    #[test]
    fn test_remove_by_name() {
        let mut staging = EvidenceStaging::new();
        staging.stage(vec![jpeg("a.jpg"), jpeg("b.jpg")]);

        assert!(staging.remove("a.jpg"));
        assert!(!staging.remove("missing.jpg"));
        assert_eq!(staging.names(), ["b.jpg"]);

        staging.clear();
        assert!(staging.is_empty());
    }

    #[test]
    fn test_submit_enabled_needs_fields_and_files() {
        let complete = Form::new()
            .required("pool", "1")
            .required("amount", "12000")
            .required("reason", "Cracked screen");
        let incomplete = Form::new().required("pool", "1").required("amount", " ");

        let mut staging = EvidenceStaging::new();
        assert!(!claim_submit_enabled(&complete, &staging));

        staging.stage(vec![jpeg("damage.jpg")]);
        assert!(claim_submit_enabled(&complete, &staging));
        assert!(!claim_submit_enabled(&incomplete, &staging));
    }

    #[test]
    fn test_validate_claim_order() {
        let blank = Form::new().required("reason", "");
        let filled = Form::new().required("reason", "Theft");
        let empty = EvidenceStaging::new();

        assert!(matches!(
            validate_claim(&blank, &empty),
            Err(ValidationError::MissingFields(_))
        ));
        assert_eq!(
            validate_claim(&filled, &empty),
            Err(ValidationError::MissingEvidence)
        );
    }

    #[test]
    fn test_is_image() {
        assert!(jpeg("x.jpg").is_image());
        assert!(!StagedFile::new("x.pdf", "application/pdf", 1).is_image());
    }
}

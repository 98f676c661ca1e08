//! Train fault-inspection report model and boundary validation.
//!
//! Reports arrive as JSON from the backend (or the built-in mock dataset).
//! Decoding goes through [`decode_collection`] / [`decode_report`], which
//! combine the typed serde decode with the structural checks below so that
//! partially-valid payloads never leave the fetch boundary.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::TrainId;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Fault priority assigned by the inspection team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Label shown on the priority badge.
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            Priority::High => BadgeTone::Critical,
            Priority::Medium => BadgeTone::Warning,
            Priority::Low => BadgeTone::Calm,
        }
    }
}

/// Repair status of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainStatus {
    Solved,
    #[serde(rename = "Under Process")]
    UnderProcess,
    #[serde(rename = "Not Started")]
    NotStarted,
}

impl TrainStatus {
    /// Label shown on the status badge. Matches the wire form.
    pub fn label(self) -> &'static str {
        match self {
            TrainStatus::Solved => "Solved",
            TrainStatus::UnderProcess => "Under Process",
            TrainStatus::NotStarted => "Not Started",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            TrainStatus::Solved => BadgeTone::Calm,
            TrainStatus::UnderProcess => BadgeTone::Warning,
            TrainStatus::NotStarted => BadgeTone::Critical,
        }
    }

    /// Whether the report still needs work (anything but `Solved`).
    pub fn is_active(self) -> bool {
        self != TrainStatus::Solved
    }
}

/// Semantic colour class of a badge. Frontends map this to concrete styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Critical,
    Warning,
    Calm,
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Inspection media attached to a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaLinks {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
}

/// One train's fault-inspection record.
///
/// `fault_locations` and `crack_descriptions` are independent lists; no
/// positional correspondence between them is implied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainReport {
    pub train_id: TrainId,
    pub train_route: String,
    pub priority: Priority,
    pub status: TrainStatus,
    pub fault_locations: Vec<String>,
    pub crack_descriptions: Vec<String>,
    pub media_links: MediaLinks,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check the field-level rules of a single report.
pub fn validate_report(report: &TrainReport) -> Result<(), CoreError> {
    if report.train_id.trim().is_empty() {
        return Err(CoreError::Validation(
            "train_id must not be empty".to_string(),
        ));
    }
    if report.train_route.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "train_route must not be empty (train {})",
            report.train_id
        )));
    }
    Ok(())
}

/// Check every report and reject duplicate identifiers.
pub fn validate_collection(reports: &[TrainReport]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(reports.len());
    for report in reports {
        validate_report(report)?;
        if !seen.insert(report.train_id.as_str()) {
            return Err(CoreError::Conflict(format!(
                "duplicate train_id {} in collection",
                report.train_id
            )));
        }
    }
    Ok(())
}

/// Decode and validate a JSON array of reports.
pub fn decode_collection(bytes: &[u8]) -> Result<Vec<TrainReport>, CoreError> {
    let reports: Vec<TrainReport> = serde_json::from_slice(bytes)?;
    validate_collection(&reports)?;
    Ok(reports)
}

/// Decode and validate a single JSON report.
pub fn decode_report(bytes: &[u8]) -> Result<TrainReport, CoreError> {
    let report: TrainReport = serde_json::from_slice(bytes)?;
    validate_report(&report)?;
    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

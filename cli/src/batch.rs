//! Batch checking of lexical values listed in a YAML file.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! cases:
//!   - type: date
//!     value: "2001-10-26+02:00"
//!   - type: byte
//!     value: "1524"
//!     expect: invalid
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::kind::XsdKind;

/// Errors that can occur while loading or saving a batch file.
#[derive(Debug, Error)]
pub enum BatchError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Whether a case's value is expected to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expectation {
    #[default]
    Valid,
    Invalid,
}

/// One value to check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCase {
    /// XSD type to decode the value as.
    #[serde(rename = "type")]
    pub kind: XsdKind,
    /// Lexical text under test.
    pub value: String,
    /// Expected outcome (defaults to `valid`).
    #[serde(default)]
    pub expect: Expectation,
}

/// Top-level batch file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFile {
    /// File format version (e.g. `"1.0"`).
    pub version: String,
    /// Values to check, in order.
    pub cases: Vec<BatchCase>,
}

impl BatchFile {
    /// Example cases for a new batch file.
    pub fn starter() -> Self {
        let case = |kind: XsdKind, value: &str, expect: Expectation| BatchCase {
            kind,
            value: value.to_string(),
            expect,
        };
        Self {
            version: "1.0".to_string(),
            cases: vec![
                case(XsdKind::Date, "2001-10-26+02:00", Expectation::Valid),
                case(XsdKind::DateTime, "2001-10-26T21:32:52Z", Expectation::Valid),
                case(XsdKind::Byte, "1524", Expectation::Invalid),
                case(XsdKind::Base64Binary, "cXdlcnR5dWlvcA==", Expectation::Valid),
            ],
        }
    }

    /// Loads a batch file from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::IoError`] if the file cannot be read, or
    /// [`BatchError::YamlError`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BatchError> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let batch = serde_yaml::from_reader(reader)?;
        Ok(batch)
    }

    /// Saves the batch file as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::IoError`] if the file cannot be written, or
    /// [`BatchError::YamlError`] if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BatchError> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}

/// Result of checking one case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    #[serde(rename = "type")]
    pub kind: XsdKind,
    pub value: String,
    pub expect: Expectation,
    /// Canonical re-encoding when the value decoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    /// Decode error message when the value was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Whether the outcome matched the expectation.
    pub passed: bool,
}

/// Summary of a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<CaseOutcome>,
}

impl BatchReport {
    /// Returns `true` when every case met its expectation.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Decodes every case and compares the result with its expectation.
pub fn run_batch(batch: &BatchFile) -> BatchReport {
    let outcomes: Vec<CaseOutcome> = batch.cases.iter().map(check_case).collect();
    let passed = outcomes.iter().filter(|o| o.passed).count();
    BatchReport {
        total: outcomes.len(),
        passed,
        failed: outcomes.len() - passed,
        outcomes,
    }
}

fn check_case(case: &BatchCase) -> CaseOutcome {
    let (canonical, error) = match case.kind.canonicalize(&case.value) {
        Ok(text) => (Some(text), None),
        Err(err) => (None, Some(err.to_string())),
    };
    let passed = match case.expect {
        Expectation::Valid => canonical.is_some(),
        Expectation::Invalid => error.is_some(),
    };
    debug!(kind = %case.kind, value = %case.value, passed, "Checked batch case");
    CaseOutcome {
        kind: case.kind,
        value: case.value.clone(),
        expect: case.expect,
        canonical,
        error,
        passed,
    }
}

/// Renders a report as human-readable lines.
pub fn format_report_text(report: &BatchReport) -> String {
    let mut out = String::new();
    for outcome in &report.outcomes {
        let status = if outcome.passed { "PASS" } else { "FAIL" };
        let detail = match (&outcome.canonical, &outcome.error) {
            (Some(canonical), _) => format!("-> {canonical}"),
            (None, Some(error)) => format!("rejected: {error}"),
            (None, None) => String::new(),
        };
        out.push_str(&format!(
            "{status} {} {:?} {detail}\n",
            outcome.kind, outcome.value
        ));
    }
    out.push_str(&format!(
        "{} case(s): {} passed, {} failed\n",
        report.total, report.passed, report.failed
    ));
    out
}

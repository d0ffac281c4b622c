//! Per-file probe results for display.

use std::path::Path;

use serde::Serialize;

use crate::error::ProbeError;
use crate::format::ImageInfo;

/// Outcome of probing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Path as given by the caller
    pub path: String,

    /// Header information, when the probe succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<ImageInfo>,

    /// Error message, when the probe failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeReport {
    /// Build a report from a probe result.
    pub fn new(path: &Path, result: Result<ImageInfo, ProbeError>) -> Self {
        match result {
            Ok(info) => Self::succeeded(path, info),
            Err(e) => Self::failed(path, e.to_string()),
        }
    }

    pub fn succeeded(path: &Path, info: ImageInfo) -> Self {
        Self {
            path: path.display().to_string(),
            info: Some(info),
            error: None,
        }
    }

    pub fn failed(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.display().to_string(),
            info: None,
            error: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.info.is_some()
    }

    /// One-line text rendering.
    pub fn to_text(&self) -> String {
        match (&self.info, &self.error) {
            (Some(info), _) => format!("{}: {}", self.path, info),
            (None, Some(error)) => format!("{}: error: {}", self.path, error),
            (None, None) => format!("{}: error: no result", self.path),
        }
    }
}

/// Render reports as a pretty-printed JSON array.
pub fn render_json(reports: &[ProbeReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

/// Render reports one per line.
pub fn render_text(reports: &[ProbeReport]) -> String {
    reports
        .iter()
        .map(ProbeReport::to_text)
        .collect::<Vec<_>>()
        .join("\n")
}

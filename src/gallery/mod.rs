// SPDX-License-Identifier: MPL-2.0
//! Remote model gallery: record types and the HTTP client.
//!
//! The gallery lists a fixed set of built-in sample models followed by the
//! models reported by the remote API. The two lists are rendered one after the
//! other and never merged.

pub mod client;

pub use client::GalleryClient;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One downloadable model as reported by the gallery API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryModelRecord {
    pub id: u64,
    pub name: String,
    pub format: String,
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
}

impl GalleryModelRecord {
    fn new(id: u64, name: &str, format: &str, download_url: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            format: format.to_string(),
            download_url: download_url.to_string(),
        }
    }
}

/// Body of `GET generate_report/`. A missing `report` means no models.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportResponse {
    #[serde(default)]
    pub report: Option<Vec<GalleryModelRecord>>,
}

impl ReportResponse {
    #[must_use]
    pub fn into_records(self) -> Vec<GalleryModelRecord> {
        self.report.unwrap_or_default()
    }
}

/// Sample models shipped with the gallery.
#[must_use]
pub fn builtin_records() -> Vec<GalleryModelRecord> {
    vec![
        GalleryModelRecord::new(1, "Low Poly Tree", "glb", "/models/tree.glb"),
        GalleryModelRecord::new(2, "Modern Chair", "glb", "/models/chair.glb"),
        GalleryModelRecord::new(3, "Geometric Sculpture", "glb", "/models/sculpture.glb"),
    ]
}

/// Why a gallery request failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// The request never produced a response (connection, TLS, timeout).
    Http(String),

    /// The server answered with a non-2xx status.
    Status { code: u16, reason: String },

    /// The response body or URL could not be interpreted.
    Decode(String),
}

impl GalleryError {
    /// Transport and decoding failures, as opposed to an HTTP error status.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        !matches!(self, GalleryError::Status { .. })
    }
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Http(msg) => write!(f, "request failed: {}", msg),
            GalleryError::Status { code, reason } => write!(f, "HTTP {} {}", code, reason),
            GalleryError::Decode(msg) => write!(f, "invalid response: {}", msg),
        }
    }
}

impl std::error::Error for GalleryError {}

impl From<reqwest::Error> for GalleryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GalleryError::Decode(err.to_string())
        } else {
            GalleryError::Http(err.to_string())
        }
    }
}

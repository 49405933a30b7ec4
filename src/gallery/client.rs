// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the gallery API.
//!
//! Contract:
//! - `GET <base>generate_report/` answers `{ "report": [record, ...] }`
//! - `POST <base>` takes a multipart form with a single `file` field
//!
//! Relative `downloadUrl` values are resolved against the asset base URL.

use super::{GalleryError, GalleryModelRecord, ReportResponse};
use crate::error::{Error, Result};
use crate::model::ModelFormat;
use reqwest::{multipart, StatusCode, Url};
use std::path::{Path, PathBuf};

const REPORT_PATH: &str = "generate_report/";
const UPLOAD_FIELD: &str = "file";
const FALLBACK_DOWNLOAD_NAME: &str = "model.glb";

#[derive(Debug, Clone)]
pub struct GalleryClient {
    http: reqwest::Client,
    base_url: Url,
    asset_base_url: Url,
}

impl GalleryClient {
    /// Builds a client for the API at `base_url`.
    ///
    /// Both URLs are treated as directories: a missing trailing slash is
    /// added so relative paths are appended instead of replacing the last
    /// segment.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Decode`] for an unparsable URL and
    /// [`GalleryError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, asset_base_url: &str) -> std::result::Result<Self, GalleryError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("ModelLens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GalleryError::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: parse_directory_url(base_url)?,
            asset_base_url: parse_directory_url(asset_base_url)?,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint listing the uploaded models.
    #[must_use]
    pub fn report_url(&self) -> Url {
        // REPORT_PATH is a plain relative segment, so joining cannot fail.
        self.base_url
            .join(REPORT_PATH)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    /// Absolute URL for a record's `downloadUrl`.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Decode`] when the value is not a valid URL
    /// reference.
    pub fn resolve_download_url(
        &self,
        download_url: &str,
    ) -> std::result::Result<Url, GalleryError> {
        if let Ok(url) = Url::parse(download_url) {
            return Ok(url);
        }
        // Root-relative paths stay under the asset base path.
        self.asset_base_url
            .join(download_url.trim_start_matches('/'))
            .map_err(|e| GalleryError::Decode(format!("{download_url}: {e}")))
    }

    /// Fetches the remote model list.
    ///
    /// # Errors
    ///
    /// [`GalleryError::Status`] for a non-2xx answer, [`GalleryError::Http`]
    /// when no answer arrives and [`GalleryError::Decode`] for a malformed
    /// body.
    pub async fn fetch_models(&self) -> std::result::Result<Vec<GalleryModelRecord>, GalleryError> {
        let response = self.http.get(self.report_url()).send().await?;
        check_status(response.status())?;
        let body = response.bytes().await?;
        decode_report(&body)
    }

    /// Uploads `path` as the `file` field of a multipart form.
    ///
    /// # Errors
    ///
    /// [`GalleryError::Status`] for a non-2xx answer; any other failure,
    /// including an unreadable file, is [`GalleryError::Http`].
    pub async fn upload(&self, path: PathBuf) -> std::result::Result<(), GalleryError> {
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| GalleryError::Http(format!("cannot read {}: {}", path.display(), e)))?;
        let mut part = multipart::Part::bytes(bytes).file_name(upload_file_name(&path));
        if let Some(mime) = upload_mime_type(&path) {
            part = part.mime_str(mime)?;
        }
        let form = multipart::Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .http
            .post(self.base_url.clone())
            .multipart(form)
            .send()
            .await?;
        check_status(response.status())
    }

    /// Streams the record's file into `directory`, keeping the URL's file
    /// name. Returns the written path.
    ///
    /// # Errors
    ///
    /// [`Error::Gallery`] for request failures and [`Error::Io`] when the
    /// file cannot be written. A partial file is removed.
    pub async fn download(&self, download_url: &str, directory: &Path) -> Result<PathBuf> {
        use futures_util::StreamExt;
        use std::io::Write;

        let url = self.resolve_download_url(download_url)?;
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(GalleryError::from)?;
        check_status(response.status())?;

        std::fs::create_dir_all(directory)?;
        let target = directory.join(download_file_name(&url));
        let mut file = std::fs::File::create(&target)?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let written = chunk
                .map_err(|e| Error::from(GalleryError::from(e)))
                .and_then(|chunk| file.write_all(&chunk).map_err(Error::from));
            if let Err(e) = written {
                drop(file);
                let _ = std::fs::remove_file(&target);
                return Err(e);
            }
        }
        Ok(target)
    }
}

fn parse_directory_url(raw: &str) -> std::result::Result<Url, GalleryError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| GalleryError::Decode(format!("{raw}: {e}")))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Maps a non-2xx status to [`GalleryError::Status`] with its reason phrase.
///
/// # Errors
///
/// Returns the status error for anything outside 200-299.
pub fn check_status(status: StatusCode) -> std::result::Result<(), GalleryError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(GalleryError::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }
}

/// Decodes a `generate_report/` body into its records.
///
/// # Errors
///
/// Returns [`GalleryError::Decode`] when the body is not the expected JSON.
pub fn decode_report(body: &[u8]) -> std::result::Result<Vec<GalleryModelRecord>, GalleryError> {
    serde_json::from_slice::<ReportResponse>(body)
        .map(ReportResponse::into_records)
        .map_err(|e| GalleryError::Decode(e.to_string()))
}

/// Last path segment of `url`, or a generic name when it has none.
#[must_use]
pub fn download_file_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_DOWNLOAD_NAME.to_string())
}

fn upload_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| UPLOAD_FIELD.to_string())
}

/// Content type for the upload part. Unknown files go without one.
fn upload_mime_type(path: &Path) -> Option<&'static str> {
    ModelFormat::from_path(path).ok().map(ModelFormat::mime_type)
}

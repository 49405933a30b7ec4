// SPDX-License-Identifier: MPL-2.0
//! Gallery component: remote list, upload and download handling.
//!
//! The remote list is fetched when the component is created and once more
//! after every successful upload. Fetch and upload outcomes share a single
//! status slot; the latest outcome overwrites the previous one.
//!
//! Without a client (the configured URL did not parse) the gallery still
//! lists the built-in samples, but issues no requests and offers no upload.

use crate::diagnostics::{AppStateEvent, DiagnosticsHandle, UserAction};
use crate::error::Error;
use crate::gallery::{builtin_records, GalleryClient, GalleryError, GalleryModelRecord};
use crate::i18n::fluent::I18n;
use crate::ui::gallery::view;
use iced::{Element, Task};
use std::path::PathBuf;

const NO_SERVER: &str = "no gallery server configured";

/// Messages handled by the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    FetchFinished(Result<Vec<GalleryModelRecord>, GalleryError>),
    /// The upload button was pressed.
    UploadRequested,
    /// Result of the upload file dialog.
    UploadFileChosen(Option<PathBuf>),
    UploadFinished(Result<(), GalleryError>),
    Download {
        id: u64,
        download_url: String,
    },
    DownloadFinished(Result<PathBuf, Error>),
}

/// Side effects the application performs on behalf of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show a file picker and answer with [`Message::UploadFileChosen`].
    PickUploadFile,
}

/// Content of the shared status slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    UploadSucceeded,
    /// The server answered with a non-2xx status.
    UploadRejected,
    /// The request never completed.
    UploadError,
    FetchRejected { reason: String },
    FetchError,
    Downloaded { path: PathBuf },
    DownloadFailed { reason: String },
}

impl Status {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Status::UploadSucceeded | Status::Downloaded { .. })
    }

    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        match self {
            Status::UploadSucceeded => i18n.tr("gallery-upload-success"),
            Status::UploadRejected => i18n.tr("gallery-upload-failed"),
            Status::UploadError => i18n.tr("gallery-upload-error"),
            Status::FetchRejected { reason } => {
                i18n.tr_with_args("gallery-fetch-failed", &[("reason", reason.as_str())])
            }
            Status::FetchError => i18n.tr("gallery-fetch-error"),
            Status::Downloaded { path } => {
                let path = path.display().to_string();
                i18n.tr_with_args("gallery-download-success", &[("path", path.as_str())])
            }
            Status::DownloadFailed { reason } => {
                i18n.tr_with_args("gallery-download-failed", &[("reason", reason.as_str())])
            }
        }
    }
}

/// Environment information required to render the gallery.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub is_dark: bool,
}

/// Settings the gallery is created with.
#[derive(Debug, Clone)]
pub struct StateConfig {
    pub client: Option<GalleryClient>,
    pub download_dir: PathBuf,
    pub diagnostics: DiagnosticsHandle,
}

/// Complete gallery component state.
#[derive(Debug)]
pub struct State {
    client: Option<GalleryClient>,
    builtin: Vec<GalleryModelRecord>,
    fetched: Vec<GalleryModelRecord>,
    pending_file: Option<PathBuf>,
    status: Option<Status>,
    download_dir: PathBuf,
    fetches_started: u64,
    diagnostics: DiagnosticsHandle,
}

impl State {
    /// Creates the gallery and starts the initial fetch, if there is a client.
    pub fn new(config: StateConfig) -> (Self, Task<Message>) {
        let mut state = Self {
            client: config.client,
            builtin: builtin_records(),
            fetched: Vec::new(),
            pending_file: None,
            status: None,
            download_dir: config.download_dir,
            fetches_started: 0,
            diagnostics: config.diagnostics,
        };
        let task = state.fetch();
        (state, task)
    }

    /// Built-in samples followed by the fetched records.
    pub fn list_models(&self) -> impl Iterator<Item = &GalleryModelRecord> {
        self.builtin.iter().chain(self.fetched.iter())
    }

    #[must_use]
    pub fn builtin(&self) -> &[GalleryModelRecord] {
        &self.builtin
    }

    #[must_use]
    pub fn fetched(&self) -> &[GalleryModelRecord] {
        &self.fetched
    }

    #[must_use]
    pub fn pending_file(&self) -> Option<&PathBuf> {
        self.pending_file.as_ref()
    }

    #[must_use]
    pub fn can_upload(&self) -> bool {
        self.client.is_some()
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.pending_file.is_some()
    }

    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Number of list fetches issued so far.
    #[must_use]
    pub fn fetches_started(&self) -> u64 {
        self.fetches_started
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::FetchFinished(result) => {
                self.finish_fetch(result);
                (Effect::None, Task::none())
            }
            Message::UploadRequested => {
                if self.is_uploading() || !self.can_upload() {
                    return (Effect::None, Task::none());
                }
                (Effect::PickUploadFile, Task::none())
            }
            Message::UploadFileChosen(path) => {
                let task = path.map_or_else(Task::none, |path| self.submit_upload(path));
                (Effect::None, task)
            }
            Message::UploadFinished(result) => (Effect::None, self.finish_upload(result)),
            Message::Download { id, download_url } => {
                self.diagnostics.log_action(UserAction::DownloadModel { id });
                let Some(client) = self.client.clone() else {
                    self.status = Some(Status::DownloadFailed {
                        reason: NO_SERVER.to_string(),
                    });
                    return (Effect::None, Task::none());
                };
                let directory = self.download_dir.clone();
                let task = Task::perform(
                    async move { client.download(&download_url, &directory).await },
                    Message::DownloadFinished,
                );
                (Effect::None, task)
            }
            Message::DownloadFinished(result) => {
                self.status = Some(match result {
                    Ok(path) => Status::Downloaded { path },
                    Err(error) => {
                        eprintln!("Failed to download model: {}", error);
                        self.diagnostics
                            .log_error(format!("Failed to download model: {}", error));
                        Status::DownloadFailed {
                            reason: error.to_string(),
                        }
                    }
                });
                (Effect::None, Task::none())
            }
        }
    }

    fn fetch(&mut self) -> Task<Message> {
        let Some(client) = self.client.clone() else {
            self.status = Some(Status::FetchError);
            return Task::none();
        };
        self.fetches_started += 1;
        Task::perform(
            async move { client.fetch_models().await },
            Message::FetchFinished,
        )
    }

    fn finish_fetch(&mut self, result: Result<Vec<GalleryModelRecord>, GalleryError>) {
        match result {
            Ok(records) => {
                self.diagnostics.log_state(AppStateEvent::GalleryRefreshed {
                    count: records.len(),
                });
                self.fetched = records;
            }
            Err(error) => {
                eprintln!("Failed to fetch gallery: {}", error);
                self.diagnostics
                    .log_error(format!("Failed to fetch gallery: {}", error));
                self.status = Some(match error {
                    GalleryError::Status { reason, .. } => Status::FetchRejected { reason },
                    GalleryError::Http(_) | GalleryError::Decode(_) => Status::FetchError,
                });
            }
        }
    }

    /// Submits `path` right away. Ignored while another upload is pending.
    fn submit_upload(&mut self, path: PathBuf) -> Task<Message> {
        if self.is_uploading() {
            return Task::none();
        }
        let Some(client) = self.client.clone() else {
            return Task::none();
        };
        self.diagnostics.log_action(UserAction::UploadModel);
        self.pending_file = Some(path.clone());
        Task::perform(
            async move { client.upload(path).await },
            Message::UploadFinished,
        )
    }

    fn finish_upload(&mut self, result: Result<(), GalleryError>) -> Task<Message> {
        self.pending_file = None;
        match result {
            Ok(()) => {
                self.status = Some(Status::UploadSucceeded);
                self.fetch()
            }
            Err(error) => {
                eprintln!("Failed to upload model: {}", error);
                self.diagnostics
                    .log_error(format!("Failed to upload model: {}", error));
                self.status = Some(if error.is_transport() {
                    Status::UploadError
                } else {
                    Status::UploadRejected
                });
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        view::view(view::ViewContext {
            i18n: env.i18n,
            is_dark: env.is_dark,
            builtin: &self.builtin,
            fetched: &self.fetched,
            uploading: self.is_uploading(),
            can_upload: self.can_upload(),
            status: self.status.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};

    fn new_state() -> (State, DiagnosticsCollector) {
        let client = GalleryClient::new("http://127.0.0.1:9/api/models/", "http://127.0.0.1:9/")
            .expect("valid urls");
        state_with(Some(client))
    }

    fn state_with(client: Option<GalleryClient>) -> (State, DiagnosticsCollector) {
        let collector = DiagnosticsCollector::new(BufferCapacity::default());
        let (state, _task) = State::new(StateConfig {
            client,
            download_dir: std::env::temp_dir(),
            diagnostics: collector.handle(),
        });
        (state, collector)
    }

    /// Delivers `message` and returns the effect, dropping the follow-up task.
    fn send(state: &mut State, message: Message) -> Effect {
        let (effect, _task) = state.handle_message(message);
        effect
    }

    fn english() -> I18n {
        I18n::new(Some("en-US".into()), &crate::config::Config::default())
    }

    fn record(id: u64) -> GalleryModelRecord {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("Model {id}"),
            "format": "obj",
            "downloadUrl": format!("/media/{id}.obj"),
        }))
        .expect("valid record")
    }

    #[test]
    fn mount_starts_one_fetch_and_lists_builtins_first() {
        let (mut state, _collector) = new_state();
        assert_eq!(state.fetches_started(), 1);
        assert!(state.fetched().is_empty());

        send(&mut state, Message::FetchFinished(Ok(vec![record(7)])));

        let ids: Vec<u64> = state.list_models().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 7]);
    }

    #[test]
    fn fetch_status_failure_reports_reason() {
        let (mut state, _collector) = new_state();
        send(&mut state, Message::FetchFinished(Err(GalleryError::Status {
            code: 500,
            reason: "Internal Server Error".into(),
        })));

        assert_eq!(
            state.status(),
            Some(&Status::FetchRejected {
                reason: "Internal Server Error".into()
            })
        );
        let i18n = english();
        assert_eq!(
            state.status().expect("status").text(&i18n),
            "Failed to fetch data: Internal Server Error"
        );
    }

    #[test]
    fn fetch_transport_failure_uses_generic_message() {
        let (mut state, _collector) = new_state();
        send(&mut state, Message::FetchFinished(Err(GalleryError::Decode(
            "expected value".into(),
        ))));
        assert_eq!(state.status(), Some(&Status::FetchError));
    }

    #[test]
    fn upload_success_clears_pending_and_refetches_once() {
        let (mut state, _collector) = new_state();
        send(&mut state, Message::FetchFinished(Ok(vec![record(7)])));

        let effect = send(&mut state, Message::UploadRequested);
        assert_eq!(effect, Effect::PickUploadFile);
        send(&mut state, Message::UploadFileChosen(Some(PathBuf::from("model.obj"))));
        assert!(state.is_uploading());

        send(&mut state, Message::UploadFinished(Ok(())));

        assert!(state.pending_file().is_none());
        assert_eq!(state.status(), Some(&Status::UploadSucceeded));
        assert_eq!(state.fetches_started(), 2);
    }

    #[test]
    fn upload_failure_clears_pending_and_keeps_list() {
        let (mut state, _collector) = new_state();
        send(&mut state, Message::FetchFinished(Ok(vec![record(7)])));
        send(&mut state, Message::UploadFileChosen(Some(PathBuf::from("model.obj"))));

        send(&mut state, Message::UploadFinished(Err(GalleryError::Status {
            code: 413,
            reason: "Payload Too Large".into(),
        })));

        assert!(state.pending_file().is_none());
        assert_eq!(state.status(), Some(&Status::UploadRejected));
        assert_eq!(state.fetched().len(), 1);
        assert_eq!(state.fetches_started(), 1);
    }

    #[test]
    fn upload_transport_error_uses_error_message() {
        let (mut state, _collector) = new_state();
        send(&mut state, Message::UploadFileChosen(Some(PathBuf::from("model.obj"))));
        send(&mut state, Message::UploadFinished(Err(GalleryError::Http(
            "connection refused".into(),
        ))));

        let i18n = english();
        assert_eq!(
            state.status().expect("status").text(&i18n),
            "An error occurred during upload."
        );
    }

    #[test]
    fn concurrent_uploads_are_blocked() {
        let (mut state, _collector) = new_state();
        send(&mut state, Message::UploadFileChosen(Some(PathBuf::from("a.obj"))));

        let effect = send(&mut state, Message::UploadRequested);
        assert_eq!(effect, Effect::None);

        send(&mut state, Message::UploadFileChosen(Some(PathBuf::from("b.obj"))));
        assert_eq!(state.pending_file(), Some(&PathBuf::from("a.obj")));
    }

    #[test]
    fn cancelled_dialog_changes_nothing() {
        let (mut state, _collector) = new_state();
        send(&mut state, Message::UploadFileChosen(None));
        assert!(!state.is_uploading());
        assert!(state.status().is_none());
    }

    #[test]
    fn status_slot_is_overwritten() {
        let (mut state, _collector) = new_state();
        send(&mut state, Message::FetchFinished(Err(GalleryError::Http("down".into()))));
        send(&mut state, Message::UploadFileChosen(Some(PathBuf::from("a.obj"))));
        send(&mut state, Message::UploadFinished(Ok(())));

        assert_eq!(state.status(), Some(&Status::UploadSucceeded));
        assert!(state.status().expect("status").is_success());
    }

    #[test]
    fn download_outcomes_fill_status() {
        let (mut state, _collector) = new_state();
        send(&mut state, Message::DownloadFinished(Ok(PathBuf::from("/tmp/tree.glb"))));
        assert!(state.status().expect("status").is_success());

        send(&mut state, Message::DownloadFinished(Err(Error::Io("denied".into()))));
        assert!(matches!(
            state.status(),
            Some(Status::DownloadFailed { reason }) if reason.contains("denied")
        ));
    }

    #[test]
    fn refresh_is_recorded_in_diagnostics() {
        let (mut state, mut collector) = new_state();
        send(&mut state, Message::FetchFinished(Ok(vec![record(1), record(2)])));
        collector.process_pending();

        assert!(collector.iter().any(|event| matches!(
            &event.kind,
            crate::diagnostics::DiagnosticEventKind::AppState {
                state: AppStateEvent::GalleryRefreshed { count: 2 }
            }
        )));
    }

    #[test]
    fn missing_client_still_lists_builtins() {
        let (mut state, _collector) = state_with(None);

        let ids: Vec<u64> = state.list_models().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(state.fetches_started(), 0);
        assert_eq!(state.status(), Some(&Status::FetchError));
        assert!(!state.can_upload());

        assert_eq!(send(&mut state, Message::UploadRequested), Effect::None);
        send(&mut state, Message::UploadFileChosen(Some(PathBuf::from("a.obj"))));
        assert!(!state.is_uploading());

        send(
            &mut state,
            Message::Download {
                id: 1,
                download_url: "/media/1.obj".into(),
            },
        );
        assert!(matches!(state.status(), Some(Status::DownloadFailed { .. })));
    }
}

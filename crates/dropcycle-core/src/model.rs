//! State-reducer model.
//!
//! Every input event becomes a [`Modification`], a pure transition
//! `UploadState -> UploadState`. [`crate::Session`] folds them over the
//! initial state in arrival order. Drop intents additionally produce one
//! outgoing [`UploadRequest`] each ([`Model::request`]), derived from the
//! intent alone.
//!
//! | Event               | `has_new_file` | `maybe_current_file` | `last_outcome`        |
//! |---------------------|----------------|----------------------|-----------------------|
//! | drag enter          | `true`         | unchanged            | unchanged             |
//! | drag leave          | `false`        | unchanged            | unchanged             |
//! | drop(file)          | `false`        | `Some(file)`         | unchanged             |
//! | response ok         | `false`        | `None`               | `Succeeded(current)`  |
//! | response failed     | `false`        | `None`               | `Failed(status)`      |

use tracing::debug;

use crate::config::SessionConfig;
use crate::file::FileDescriptor;
use crate::intent::Intent;
use crate::outcome::Outcome;
use crate::request::{HttpResponse, Method, UploadRequest};

/// The session's single source of truth.
///
/// `Default` is the initial state: nothing dragged, nothing uploading,
/// no outcome yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadState {
    /// A drag is hovering over the drop zone. UI hint only.
    pub has_new_file: bool,
    /// The file currently being uploaded. Set on drop, cleared on response.
    pub maybe_current_file: Option<FileDescriptor>,
    /// Result of the most recent completed upload. A success carries the
    /// file that was uploading when the response arrived, if any was.
    pub last_outcome: Outcome<Option<FileDescriptor>>,
}

impl UploadState {
    /// The state every session starts from.
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }
}

/// A pure state transition, one per input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modification {
    DragEnter,
    DragLeave,
    Drop(FileDescriptor),
    /// An upload response addressed to the upload endpoint.
    Response { ok: bool, status: u16 },
}

impl From<Intent> for Modification {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::DragEnter => Self::DragEnter,
            Intent::DragLeave => Self::DragLeave,
            Intent::Drop(file) => Self::Drop(file),
        }
    }
}

impl Modification {
    /// Apply the transition.
    #[must_use]
    pub fn apply(self, state: UploadState) -> UploadState {
        let next = match self {
            Self::DragEnter => UploadState {
                has_new_file: true,
                ..state
            },
            Self::DragLeave => UploadState {
                has_new_file: false,
                ..state
            },
            Self::Drop(file) => UploadState {
                has_new_file: false,
                maybe_current_file: Some(file),
                last_outcome: state.last_outcome,
            },
            Self::Response { ok: true, .. } => UploadState {
                has_new_file: false,
                maybe_current_file: None,
                last_outcome: Outcome::Succeeded(state.maybe_current_file),
            },
            Self::Response { ok: false, status } => UploadState {
                has_new_file: false,
                maybe_current_file: None,
                // Only the status is kept; the projector adds the
                // "Upload failed with status" prefix.
                last_outcome: Outcome::Failed(status.to_string()),
            },
        };
        debug!(
            has_new_file = next.has_new_file,
            uploading = next.maybe_current_file.is_some(),
            outcome = next.last_outcome.fold(|| "pending", |_| "failed", |_| "succeeded"),
            "state transition"
        );
        next
    }
}

/// Routes events to modifications and requests for one upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    upload_url: String,
}

impl Model {
    /// Create a model for the configured endpoint.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            upload_url: config.upload_url.clone(),
        }
    }

    /// The endpoint uploads go to.
    #[must_use]
    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// Whether `response` belongs to the upload endpoint (exact URL match).
    #[must_use]
    pub fn accepts(&self, response: &HttpResponse) -> bool {
        response.request_url == self.upload_url
    }

    /// The modification for `response`, or `None` if it is addressed to
    /// some other URL.
    #[must_use]
    pub fn response_modification(&self, response: &HttpResponse) -> Option<Modification> {
        self.accepts(response).then_some(Modification::Response {
            ok: response.ok,
            status: response.status,
        })
    }

    /// The outgoing request for `intent`: exactly one per drop, none
    /// otherwise.
    #[must_use]
    pub fn request(&self, intent: &Intent) -> Option<UploadRequest> {
        intent
            .dropped_file()
            .map(|file| UploadRequest::for_file(&self.upload_url, Method::Post, file))
    }
}

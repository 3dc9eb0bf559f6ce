//! Presentation projector: upload state to display text.

use crate::model::UploadState;

/// Shown before any upload has completed.
pub const NOTHING_UPLOADED: &str = "You haven't uploaded anything yet";
/// Shown while no file is uploading.
pub const WAITING_FOR_FILE: &str = "Waiting for file...";
/// Drop-zone label while a drag hovers over it.
pub const DROP_HERE: &str = "Drop here!";
/// Drop-zone label otherwise.
pub const DRAG_AND_DROP_HERE: &str = "Drag-and-drop the file here";
/// Stand-in for a missing last-modified time.
pub const UNKNOWN_TIMESTAMP: &str = "unknown";
/// Stand-in for the file name of a success that arrived while nothing
/// was uploading.
pub const UNKNOWN_FILE: &str = "(unknown)";

/// Human-readable fields derived from an [`UploadState`].
///
/// Recomputed on every state change; has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    pub outcome_message: String,
    pub status_message: String,
    pub drop_zone_label: String,
}

impl DisplayModel {
    /// Project `state` into display text. Total over every state.
    #[must_use]
    pub fn project(state: &UploadState) -> Self {
        let outcome_message = state.last_outcome.fold(
            || NOTHING_UPLOADED.to_owned(),
            |status| format!("Upload failed with status {status}"),
            |maybe_file| {
                let name = maybe_file.as_ref().map_or(UNKNOWN_FILE, |file| file.name.as_str());
                format!("Upload succeeded for file {name}")
            },
        );

        let status_message = state.maybe_current_file.as_ref().map_or_else(
            || WAITING_FOR_FILE.to_owned(),
            |file| {
                let modified = file
                    .maybe_timestamp
                    .map_or_else(|| UNKNOWN_TIMESTAMP.to_owned(), |ts| ts.to_string());
                format!("Currently uploading {} with last modify {modified}", file.name)
            },
        );

        let drop_zone_label = if state.has_new_file {
            DROP_HERE
        } else {
            DRAG_AND_DROP_HERE
        }
        .to_owned();

        Self {
            outcome_message,
            status_message,
            drop_zone_label,
        }
    }
}

impl From<&UploadState> for DisplayModel {
    fn from(state: &UploadState) -> Self {
        Self::project(state)
    }
}

//! dropcycle-core: Pure upload-session state machine (sans-IO).
//!
//! Turns drag-and-drop intents and upload responses into a single
//! ordered stream of [`UploadState`] values:
//! DOM drag events -> intents -> modifications -> folded state ->
//! display model.
//!
//! This crate has **no browser dependencies** -- DOM events reach it
//! through the [`DomDragEvent`] trait and HTTP traffic is described by
//! plain [`UploadRequest`] / [`HttpResponse`] values. All
//! browser interaction lives in `dropcycle-io`.

pub mod config;
pub mod display;
pub mod file;
pub mod intent;
pub mod latest;
pub mod model;
pub mod outcome;
pub mod request;
pub mod session;

pub use config::SessionConfig;
pub use display::DisplayModel;
pub use file::{FileContents, FileDescriptor, FileHandle, InMemoryContents, Timestamp};
pub use intent::{DomDragEvent, DragEventKind, DropEffect, Intent, IntentError};
pub use latest::LatestUpload;
pub use model::{Model, Modification, UploadState};
pub use outcome::Outcome;
pub use request::{HttpResponse, Method, UploadBody, UploadRequest};
pub use session::{Session, SessionError, SessionEvent, SessionOutput};

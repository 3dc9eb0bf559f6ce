//! Intent layer: raw DOM drag events to semantic intents.
//!
//! The browser side implements [`DomDragEvent`] for whatever event
//! object it receives. [`from_event`] performs the browser-required side
//! effects (suppress default handling, stop propagation, request a copy
//! cursor) and decodes the event into an [`Intent`].
//!
//! The three intents (enter, leave, drop) are variants of one enum and
//! travel on one ordered channel, so arrival order survives into the
//! model without a merge step.

use std::fmt;

use tracing::{debug, trace};

use crate::file::FileDescriptor;

/// The DOM drag events the intent layer subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    /// `dragenter`
    Enter,
    /// `dragleave`
    Leave,
    /// `drop`
    Drop,
}

impl DragEventKind {
    /// Every subscribed event kind.
    pub const ALL: [Self; 3] = [Self::Enter, Self::Leave, Self::Drop];

    /// DOM event name.
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Enter => "dragenter",
            Self::Leave => "dragleave",
            Self::Drop => "drop",
        }
    }

    /// Parse a DOM event name. Returns `None` for events the intent layer
    /// does not handle.
    #[must_use]
    pub fn from_event_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.event_name() == name)
    }
}

impl fmt::Display for DragEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// Value for `DataTransfer.dropEffect`. The drop zone only ever asks
/// for a copy cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    Copy,
}

impl DropEffect {
    /// The string the DOM expects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Copy => "copy",
        }
    }
}

/// A raw drag event as delivered by the DOM event source.
pub trait DomDragEvent {
    /// DOM event name (`"dragenter"`, `"drop"`, ...).
    fn event_name(&self) -> String;

    /// Descriptor for the first attached file, if the event carries one.
    fn first_file(&self) -> Option<FileDescriptor>;

    /// `Event.preventDefault()`.
    fn prevent_default(&self);

    /// `Event.stopPropagation()`.
    fn stop_propagation(&self);

    /// Set `DataTransfer.dropEffect`. A no-op when the event has no
    /// data transfer.
    fn set_drop_effect(&self, effect: DropEffect);
}

/// A semantic drag-and-drop event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Something is being dragged over the drop zone.
    DragEnter,
    /// The drag left the drop zone.
    DragLeave,
    /// A file was dropped on the drop zone.
    Drop(FileDescriptor),
}

impl Intent {
    /// The DOM event kind this intent came from.
    #[must_use]
    pub const fn kind(&self) -> DragEventKind {
        match self {
            Self::DragEnter => DragEventKind::Enter,
            Self::DragLeave => DragEventKind::Leave,
            Self::Drop(_) => DragEventKind::Drop,
        }
    }

    /// The dropped file, for drop intents.
    #[must_use]
    pub const fn dropped_file(&self) -> Option<&FileDescriptor> {
        match self {
            Self::Drop(file) => Some(file),
            Self::DragEnter | Self::DragLeave => None,
        }
    }
}

/// Why a raw event produced no intent. Never fatal: the event is
/// dropped and the session carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntentError {
    /// The event is not one the intent layer subscribes to.
    #[error("unhandled drag event: {0}")]
    UnknownEvent(String),

    /// The event should carry a file but does not.
    #[error("{0} event carried no file")]
    MissingFile(DragEventKind),
}

/// Stop the browser from handling the event itself and ask for a copy
/// cursor.
pub fn suppress_default<E: DomDragEvent + ?Sized>(event: &E) {
    event.prevent_default();
    event.stop_propagation();
    event.set_drop_effect(DropEffect::Copy);
}

/// Decode one raw event.
///
/// Side effects from [`suppress_default`] run for every handled event,
/// including a drop that turns out to carry no file.
///
/// # Errors
///
/// Returns [`IntentError::UnknownEvent`] for events outside
/// [`DragEventKind::ALL`] (no side effects are applied to those), and
/// [`IntentError::MissingFile`] for a drop without an attached file.
pub fn from_event<E: DomDragEvent + ?Sized>(event: &E) -> Result<Intent, IntentError> {
    let name = event.event_name();
    let kind = DragEventKind::from_event_name(&name).ok_or(IntentError::UnknownEvent(name))?;

    suppress_default(event);

    match kind {
        DragEventKind::Enter => Ok(Intent::DragEnter),
        DragEventKind::Leave => Ok(Intent::DragLeave),
        DragEventKind::Drop => event
            .first_file()
            .map(Intent::Drop)
            .ok_or(IntentError::MissingFile(kind)),
    }
}

/// [`from_event`], logging and discarding failures.
pub fn decode_or_skip<E: DomDragEvent + ?Sized>(event: &E) -> Option<Intent> {
    match from_event(event) {
        Ok(intent) => {
            trace!(kind = %intent.kind(), "drag intent");
            Some(intent)
        }
        Err(e) => {
            debug!(error = %e, "ignoring drag event");
            None
        }
    }
}

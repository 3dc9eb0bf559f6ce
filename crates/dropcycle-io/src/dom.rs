//! Dioxus drag events seen through the intent layer's interface.
//!
//! The drop zone's `ondragenter`/`ondragleave`/`ondragover`/`ondrop`
//! handlers wrap their event in a [`BrowserDragEvent`] and hand it to
//! [`dropcycle_core::intent`]. Because the handlers sit on the drop-zone
//! element itself, `stop_propagation` keeps the event from reaching any
//! handler further up the tree.

use std::fmt;

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::DragEvent;
use dropcycle_core::intent::{DomDragEvent, DropEffect};
use dropcycle_core::{FileContents, FileDescriptor, FileHandle};

/// Name of the event whose default must be suppressed for `drop` to fire
/// at all. It never becomes an intent.
pub const DRAG_OVER: &str = "dragover";

/// Contents handle backed by a Dioxus [`FileData`].
pub struct BrowserFile(FileData);

impl fmt::Debug for BrowserFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BrowserFile").field(&self.0.name()).finish()
    }
}

impl FileContents for BrowserFile {}

/// A Dioxus drag event, tagged with the DOM event name of the handler
/// that received it.
pub struct BrowserDragEvent {
    name: &'static str,
    event: DragEvent,
}

impl BrowserDragEvent {
    /// Wrap the event a handler for `name` received.
    #[must_use]
    pub const fn new(name: &'static str, event: DragEvent) -> Self {
        Self { name, event }
    }

    /// The underlying browser event, when running on the web renderer.
    fn raw(&self) -> Option<web_sys::DragEvent> {
        self.event.data().downcast::<web_sys::DragEvent>().cloned()
    }

    /// Last-modified time of the first dropped file, read from the raw
    /// browser event. Other renderers do not report one.
    fn first_file_timestamp(&self) -> Option<dropcycle_core::Timestamp> {
        let file = self.raw()?.data_transfer()?.files()?.item(0)?;
        FileDescriptor::timestamp_from_millis(file.last_modified())
    }
}

impl DomDragEvent for BrowserDragEvent {
    fn event_name(&self) -> String {
        self.name.to_owned()
    }

    fn first_file(&self) -> Option<FileDescriptor> {
        let file = self.event.files().into_iter().next()?;
        Some(FileDescriptor::new(
            file.name(),
            self.first_file_timestamp(),
            FileHandle::new(BrowserFile(file)),
        ))
    }

    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn stop_propagation(&self) {
        self.event.stop_propagation();
    }

    fn set_drop_effect(&self, effect: DropEffect) {
        if let Some(transfer) = self.raw().and_then(|raw| raw.data_transfer()) {
            transfer.set_drop_effect(effect.as_str());
        }
    }
}

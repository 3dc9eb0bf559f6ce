//! dropcycle-io: Browser I/O and Dioxus component library.
//!
//! Decodes drag events on the drop zone, sends upload requests over
//! `fetch`, and renders the upload view for the dropcycle web
//! application.

pub mod components;
pub mod dom;
pub mod http;

pub use components::UploadView;
pub use dom::{BrowserDragEvent, BrowserFile};
pub use http::TransportError;

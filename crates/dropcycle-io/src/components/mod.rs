//! Dioxus UI components for dropcycle.

mod upload_view;

pub use upload_view::UploadView;

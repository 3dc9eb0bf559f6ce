//! Outgoing upload requests and incoming HTTP responses.
//!
//! These are plain descriptions: the core builds requests and reads
//! responses, the transport in `dropcycle-io` performs the I/O.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::file::FileDescriptor;

/// HTTP method of an outgoing request. Uploads are always `POST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Post,
}

impl Method {
    /// The method as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON body of an upload request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadBody {
    /// Name of the dropped file.
    pub name: String,
}

/// Description of one outgoing upload request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRequest {
    pub url: String,
    pub method: Method,
    /// Body, serialized as JSON by the transport.
    pub send: UploadBody,
}

impl UploadRequest {
    /// Build the request announcing `file` to `url`.
    #[must_use]
    pub fn for_file(url: &str, method: Method, file: &FileDescriptor) -> Self {
        Self {
            url: url.to_owned(),
            method,
            send: UploadBody {
                name: file.name.clone(),
            },
        }
    }

    /// The body as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body cannot be serialized.
    pub fn body_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.send)
    }
}

/// A completed HTTP response, annotated with the URL of the request
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// URL of the originating request. The model correlates responses
    /// by this value only.
    pub request_url: String,
    /// Whether the status was in the 2xx range.
    pub ok: bool,
    /// Numeric HTTP status. Zero means the request never got a response.
    pub status: u16,
}

impl HttpResponse {
    /// Build a response from a status code, deriving `ok` from it.
    #[must_use]
    pub fn from_status(request_url: impl Into<String>, status: u16) -> Self {
        Self {
            request_url: request_url.into(),
            ok: (200..300).contains(&status),
            status,
        }
    }

    /// A request that failed below HTTP (network error, blocked, aborted).
    ///
    /// Reported as status 0, like `XMLHttpRequest` does.
    #[must_use]
    pub fn network_failure(request_url: impl Into<String>) -> Self {
        Self {
            request_url: request_url.into(),
            ok: false,
            status: 0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::file::{FileHandle, InMemoryContents};

    #[test]
    fn request_body_carries_only_the_name() {
        let file = FileDescriptor::new("a.txt", None, FileHandle::new(InMemoryContents::default()));
        let request = UploadRequest::for_file("/upload", Method::Post, &file);
        assert_eq!(request.url, "/upload");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body_json().unwrap(), r#"{"name":"a.txt"}"#);
    }

    #[test]
    fn method_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Method::Post).unwrap(), r#""POST""#);
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn ok_flag_follows_status_class() {
        assert!(HttpResponse::from_status("/upload", 201).ok);
        assert!(!HttpResponse::from_status("/upload", 500).ok);
        assert!(!HttpResponse::from_status("/upload", 302).ok);
    }

    #[test]
    fn network_failure_is_status_zero() {
        let response = HttpResponse::network_failure("/upload");
        assert!(!response.ok);
        assert_eq!(response.status, 0);
    }
}

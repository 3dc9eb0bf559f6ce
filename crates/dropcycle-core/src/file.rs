//! File descriptors extracted from drop events.

use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};

/// Last-modified time of a dropped file.
pub type Timestamp = DateTime<Utc>;

/// Opaque access to the binary contents of a dropped file.
///
/// The core never reads the bytes; it only carries the handle so the
/// I/O layer can get back at the underlying browser object.
pub trait FileContents: fmt::Debug {}

/// Shared, cheaply cloneable handle to file contents.
///
/// Equality is identity: two handles are equal only if they point at
/// the same contents object.
#[derive(Clone)]
pub struct FileHandle(Rc<dyn FileContents>);

impl FileHandle {
    /// Wrap a contents object.
    #[must_use]
    pub fn new(contents: impl FileContents + 'static) -> Self {
        Self(Rc::new(contents))
    }
}

impl PartialEq for FileHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for FileHandle {}

impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FileHandle").field(&self.0).finish()
    }
}

/// In-memory file contents, for hosts without a browser `File`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryContents(pub Vec<u8>);

impl FileContents for InMemoryContents {}

/// A dropped file: its name, optional last-modified time, and a handle
/// to its contents.
///
/// Read-only once created. Superseded by the next drop or cleared when
/// an upload response arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// File name as reported by the browser (no path).
    pub name: String,
    /// Last-modified time, if the browser reported one.
    pub maybe_timestamp: Option<Timestamp>,
    /// Handle to the file's bytes.
    pub contents: FileHandle,
}

impl FileDescriptor {
    /// Create a descriptor.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        maybe_timestamp: Option<Timestamp>,
        contents: FileHandle,
    ) -> Self {
        Self {
            name: name.into(),
            maybe_timestamp,
            contents,
        }
    }

    /// Convert a browser `lastModified` value (milliseconds since the
    /// Unix epoch) into a [`Timestamp`].
    ///
    /// Returns `None` for non-finite or out-of-range values.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn timestamp_from_millis(millis: f64) -> Option<Timestamp> {
        if !millis.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64)
    }
}

impl fmt::Display for FileDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

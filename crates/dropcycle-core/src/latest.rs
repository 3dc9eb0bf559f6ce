//! Latest-wins gate for in-flight uploads.
//!
//! Every drop starts a new request. Only the response to the most
//! recently started request may reach the session; responses to
//! superseded requests are discarded before they become events.

/// Generation counter over started uploads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatestUpload {
    current: u64,
}

impl LatestUpload {
    /// Record that a new upload started and return its generation.
    ///
    /// Any upload started earlier is stale from now on.
    pub const fn start(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    /// Whether `generation` is still the most recently started upload.
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        self.current == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_started_upload_is_current() {
        let mut latest = LatestUpload::default();
        let first = latest.start();
        assert!(latest.is_current(first));

        let second = latest.start();
        assert!(!latest.is_current(first));
        assert!(latest.is_current(second));
    }

    #[test]
    fn nothing_is_current_before_any_upload() {
        let latest = LatestUpload::default();
        assert!(!latest.is_current(1));
    }
}

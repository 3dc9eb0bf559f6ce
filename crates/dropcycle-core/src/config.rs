//! Session configuration.

use serde::{Deserialize, Serialize};

/// Endpoint the upload requests are sent to, and the only URL whose
/// responses the model consumes.
pub const DEFAULT_UPLOAD_URL: &str = "/upload";

/// CSS class of the drop-zone element.
pub const DROP_ZONE_CLASS: &str = "drop-zone";

/// Configuration for an upload session.
///
/// Everything has a default matching the stock widget; hosts that embed
/// the widget elsewhere can deserialize an override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// URL every upload request targets. Responses are matched against
    /// it exactly.
    pub upload_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            upload_url: DEFAULT_UPLOAD_URL.to_owned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_upload_endpoint() {
        assert_eq!(SessionConfig::default().upload_url, "/upload");
    }

    #[test]
    fn json_overrides_and_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"upload_url":"/files"}"#).unwrap();
        assert_eq!(config.upload_url, "/files");
        let config: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }
}

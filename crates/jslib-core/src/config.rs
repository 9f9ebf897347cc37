//! Export configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a generation pass.
///
/// Controls the artifact file names; both default to the names the WebGL
/// template and the front-end service expect.
///
/// # Examples
///
/// ```
/// use jslib_core::ExportConfig;
///
/// let config = ExportConfig::default();
/// assert_eq!(config.jslib_file_name, "BrowserInteractions.jslib");
/// assert_eq!(config.client_file_name, "unity-jslib-exported.service.ts");
///
/// let custom = ExportConfig {
///     jslib_file_name: "Bridge.jslib".to_string(),
///     ..ExportConfig::default()
/// };
/// assert_eq!(custom.client_file_name, "unity-jslib-exported.service.ts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// File name of the bridge artifact written into the plugins directory.
    pub jslib_file_name: String,
    /// File name of the typed client artifact.
    pub client_file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            jslib_file_name: "BrowserInteractions.jslib".to_string(),
            client_file_name: "unity-jslib-exported.service.ts".to_string(),
        }
    }
}

//! Dashboard Configuration
//!
//! Read once at startup from a JSON `<script>` block rendered by the server:
//!
//! ```html
//! <script type="application/json" id="dashboard-config">
//!   {"search_url": "/cotizaciones/api/search/", "carpetas_disponibles": [...]}
//! </script>
//! ```
//!
//! Every field is optional; missing fields keep their defaults.

use serde::Deserialize;

use crate::models::FolderChoice;

/// Element id of the embedded configuration block
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub search_url: String,
    pub folders_url: String,
    pub quotes_url: String,
    pub debounce_ms: u32,
    pub max_folder_name_len: usize,
    pub toast_ms: u32,
    /// Folder options for the reassignment dropdown before the first listing
    #[serde(alias = "carpetas_disponibles")]
    pub folder_choices: Vec<FolderChoice>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            search_url: "/cotizaciones/api/search/".to_string(),
            folders_url: "/cotizaciones/api/carpetas/".to_string(),
            quotes_url: "/cotizaciones/api/cotizaciones/".to_string(),
            debounce_ms: 300,
            max_folder_name_len: 100,
            toast_ms: 3000,
            folder_choices: Vec::new(),
        }
    }
}

impl DashboardConfig {
    /// Parse the embedded JSON, falling back to defaults on bad input
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("invalid dashboard config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Load from the page, or defaults when the block is absent
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => {
                tracing::debug!("no #{} block, using default config", CONFIG_ELEMENT_ID);
                Self::default()
            }
        }
    }

    pub fn create_folder_url(&self) -> String {
        format!("{}crear/", with_trailing_slash(&self.folders_url))
    }

    pub fn quote_folder_url(&self, quote_id: u64) -> String {
        format!("{}{}/carpeta/", with_trailing_slash(&self.quotes_url), quote_id)
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = DashboardConfig::from_json(
            r#"{"debounce_ms": 150, "carpetas_disponibles": [{"id": 3, "nombre": "Obras"}]}"#,
        );
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.search_url, "/cotizaciones/api/search/");
        assert_eq!(config.folder_choices.len(), 1);
        assert_eq!(config.folder_choices[0].id, "3");
    }

    #[test]
    fn test_invalid_config_falls_back() {
        assert_eq!(DashboardConfig::from_json("{not json"), DashboardConfig::default());
    }

    #[test]
    fn test_write_urls() {
        let config = DashboardConfig {
            folders_url: "/api/carpetas".to_string(),
            ..Default::default()
        };
        assert_eq!(config.create_folder_url(), "/api/carpetas/crear/");
        assert_eq!(
            DashboardConfig::default().quote_folder_url(42),
            "/cotizaciones/api/cotizaciones/42/carpeta/"
        );
    }
}

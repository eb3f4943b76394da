//! Quote Commands
//!
//! Search and folder reassignment.

use serde::Serialize;
use url::form_urlencoded;

use super::{ApiClient, ApiError, LoadingGuard, Method};
use crate::models::{FolderFilter, Notice, SearchResult};

#[derive(Serialize)]
struct QuoteFolderBody<'a> {
    carpeta_id: &'a str,
}

/// Build the search URL; empty parameters are left out entirely
pub fn search_url(base: &str, query: &str, folder: &str) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    if !query.is_empty() {
        params.append_pair("q", query);
    }
    if !folder.is_empty() {
        params.append_pair("carpeta", folder);
    }
    let params = params.finish();

    if params.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, params)
    }
}

impl ApiClient {
    /// Search quotes; any failure yields an empty result
    pub async fn search(&self, query: &str, folder: &FolderFilter) -> SearchResult {
        let url = search_url(&self.config.search_url, query, folder.key());
        let _loading = LoadingGuard::start(self.feedback.as_ref(), &self.searches_in_flight);

        match self.get_json::<SearchResult>(url).await {
            Ok(result) => {
                tracing::debug!("search q={:?} carpeta={:?}: {} results", query, folder.key(), result.count);
                result
            }
            Err(e) => {
                tracing::error!("Error al buscar cotizaciones: {}", e);
                self.feedback.notify(Notice::error(
                    "Error al cargar cotizaciones. Por favor, intente nuevamente.",
                ));
                SearchResult::default()
            }
        }
    }

    /// Move a quote into a folder; an empty `folder_id` unassigns it.
    ///
    /// Does not refresh anything: the caller reloads dependent views.
    pub async fn set_quote_folder(&self, quote_id: u64, folder_id: &str) -> bool {
        let url = self.config.quote_folder_url(quote_id);
        let body = QuoteFolderBody { carpeta_id: folder_id };

        match self.send_json(Method::Patch, url, &body).await {
            Ok(_) => {
                tracing::info!("quote {} moved to carpeta {:?}", quote_id, folder_id);
                true
            }
            Err(e) => {
                tracing::error!("Error al actualizar carpeta de cotización {}: {}", quote_id, e);
                let message = match &e {
                    ApiError::Network(_) => "Error de conexión".to_string(),
                    other => other
                        .server_message()
                        .unwrap_or("Error al actualizar carpeta")
                        .to_string(),
                };
                self.feedback.notify(Notice::error(message));
                false
            }
        }
    }
}

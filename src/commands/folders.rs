//! Folder Commands
//!
//! Folder listing and creation.

use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, CreateFolderError, Method};
use crate::models::{Folder, FolderListResult};

#[derive(Serialize)]
struct CreateFolderBody<'a> {
    nombre: &'a str,
}

/// Trim and check a folder name before it goes anywhere near the network
pub fn validate_folder_name(raw: &str, max_len: usize) -> Result<String, CreateFolderError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CreateFolderError::NameRequired);
    }
    if name.chars().count() > max_len {
        return Err(CreateFolderError::NameTooLong { max: max_len });
    }
    Ok(name.to_string())
}

/// Created folder from the response body, top-level or under `carpeta`
fn created_folder(body: &str, name: &str) -> Folder {
    let value: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    let candidate = match value.get("carpeta") {
        Some(inner) => inner.clone(),
        None => value,
    };
    serde_json::from_value(candidate).unwrap_or_else(|_| Folder {
        id: None,
        nombre: name.to_string(),
        count: 0,
    })
}

impl ApiClient {
    /// Folders with counts; any failure yields an all-zero listing
    pub async fn list_folders(&self) -> FolderListResult {
        match self.get_json::<FolderListResult>(self.config.folders_url.clone()).await {
            Ok(list) => list,
            Err(e) => {
                tracing::error!("Error al obtener carpetas: {}", e);
                FolderListResult::default()
            }
        }
    }

    /// Create a folder. The caller refreshes the folder list afterwards.
    pub async fn create_folder(&self, name: &str) -> Result<Folder, CreateFolderError> {
        let name = validate_folder_name(name, self.config.max_folder_name_len)?;

        let response = self
            .send_json(Method::Post, self.config.create_folder_url(), &CreateFolderBody { nombre: &name })
            .await
            .map_err(|e| {
                tracing::error!("Error al crear carpeta {:?}: {}", name, e);
                CreateFolderError::from(e)
            })?;

        tracing::info!("Carpeta \"{}\" creada exitosamente", name);
        Ok(created_folder(&response.body, &name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{ApiError, CSRF_HEADER};
    use crate::testing::{api_client, ok_json, status, FakeTransport, RecordingFeedback};
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_list_folders() {
        let transport = FakeTransport::new();
        transport.respond_with(|_| {
            ok_json(json!({
                "carpetas": [{"nombre": "Obras", "count": 3, "id": 1}, {"nombre": "Remodelaciones", "count": 0}],
                "sin_carpeta_count": 5,
                "total_count": 8
            }))
        });
        let feedback = RecordingFeedback::new();
        let client = api_client(&transport, &feedback, None);

        let list = block_on(client.list_folders());

        assert_eq!(list.carpetas.len(), 2);
        assert_eq!(list.carpetas[0].id.as_deref(), Some("1"));
        assert_eq!(list.sin_carpeta_count, 5);
        assert_eq!(list.total_count, 8);
        assert_eq!(transport.requests()[0].url, "/cotizaciones/api/carpetas/");
    }

    #[test]
    fn test_list_folders_failure_is_empty_and_silent() {
        let transport = FakeTransport::new();
        transport.respond_with(|_| status(503, ""));
        let feedback = RecordingFeedback::new();
        let client = api_client(&transport, &feedback, None);

        assert_eq!(block_on(client.list_folders()), FolderListResult::default());
        assert!(feedback.notices().is_empty());
    }

    #[test]
    fn test_blank_names_never_reach_the_network() {
        let transport = FakeTransport::new();
        let feedback = RecordingFeedback::new();
        let client = api_client(&transport, &feedback, Some("tok"));

        assert_eq!(block_on(client.create_folder("")), Err(CreateFolderError::NameRequired));
        assert_eq!(block_on(client.create_folder("   ")), Err(CreateFolderError::NameRequired));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_name_length_limit() {
        let transport = FakeTransport::new();
        transport.respond_with(|_| ok_json(json!({"id": 9, "nombre": "x"})));
        let feedback = RecordingFeedback::new();
        let client = api_client(&transport, &feedback, Some("tok"));

        let too_long = "a".repeat(101);
        assert_eq!(
            block_on(client.create_folder(&too_long)),
            Err(CreateFolderError::NameTooLong { max: 100 })
        );
        assert!(transport.requests().is_empty());

        let at_limit = "a".repeat(100);
        assert!(block_on(client.create_folder(&at_limit)).is_ok());
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        assert!(validate_folder_name(&"ñ".repeat(100), 100).is_ok());
        assert_eq!(validate_folder_name("  Obras  ", 100), Ok("Obras".to_string()));
    }

    #[test]
    fn test_astral_names_use_the_full_character_limit() {
        let transport = FakeTransport::new();
        let feedback = RecordingFeedback::new();
        let client = api_client(&transport, &feedback, Some("tok"));

        // 100 chars but 200 UTF-16 units
        let emoji = "📁".repeat(100);
        assert!(block_on(client.create_folder(&emoji)).is_ok());
        assert_eq!(transport.requests().len(), 1);

        assert_eq!(
            block_on(client.create_folder(&"📁".repeat(101))),
            Err(CreateFolderError::NameTooLong { max: 100 })
        );
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_create_folder_request_shape() {
        let transport = FakeTransport::new();
        transport.respond_with(|_| ok_json(json!({"success": true, "carpeta": {"id": 12, "nombre": "Obras"}})));
        let feedback = RecordingFeedback::new();
        let client = api_client(&transport, &feedback, Some("s3cret"));

        let folder = block_on(client.create_folder("  Obras ")).unwrap();

        assert_eq!(folder.id.as_deref(), Some("12"));
        assert_eq!(folder.nombre, "Obras");
        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "/cotizaciones/api/carpetas/crear/");
        assert_eq!(sent.body.as_deref(), Some(r#"{"nombre":"Obras"}"#));
        assert_eq!(sent.header(CSRF_HEADER), Some("s3cret"));
        assert_eq!(sent.header("X-Requested-With"), Some("XMLHttpRequest"));
    }

    #[test]
    fn test_created_folder_falls_back_to_name() {
        let transport = FakeTransport::new();
        transport.respond_with(|_| ok_json(json!({"success": true})));
        let feedback = RecordingFeedback::new();
        let client = api_client(&transport, &feedback, None);

        let folder = block_on(client.create_folder("Nueva")).unwrap();
        assert_eq!(folder, Folder { id: None, nombre: "Nueva".into(), count: 0 });
        // No token: request still goes out, without the header
        assert_eq!(transport.requests()[0].header(CSRF_HEADER), None);
    }

    #[test]
    fn test_create_folder_server_errors() {
        let transport = FakeTransport::new();
        transport.respond_with(|_| status(400, r#"{"error": "Ya existe una carpeta con ese nombre"}"#));
        let feedback = RecordingFeedback::new();
        let client = api_client(&transport, &feedback, Some("tok"));

        assert_eq!(
            block_on(client.create_folder("Obras")),
            Err(CreateFolderError::Rejected("Ya existe una carpeta con ese nombre".into()))
        );

        transport.respond_with(|_| status(500, "<html>"));
        assert_eq!(
            block_on(client.create_folder("Obras")),
            Err(CreateFolderError::Rejected("Error al crear la carpeta".into()))
        );

        transport.respond_with(|_| Err(ApiError::Network("offline".into())));
        assert_eq!(block_on(client.create_folder("Obras")), Err(CreateFolderError::Connection));
    }
}

//! Gateway errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Business error text reported by the server
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Why a folder could not be created; `Display` is the text shown in the modal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateFolderError {
    #[error("Por favor, ingresa un nombre para la carpeta")]
    NameRequired,
    #[error("El nombre de la carpeta es muy largo (máximo {max} caracteres)")]
    NameTooLong { max: usize },
    /// Server-side rejection, message passed through verbatim
    #[error("{0}")]
    Rejected(String),
    #[error("Error de conexión. Intenta nuevamente.")]
    Connection,
}

impl From<ApiError> for CreateFolderError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Status { message, .. } => CreateFolderError::Rejected(
                message.unwrap_or_else(|| "Error al crear la carpeta".to_string()),
            ),
            ApiError::Network(_) | ApiError::Decode(_) | ApiError::Encode(_) => {
                CreateFolderError::Connection
            }
        }
    }
}

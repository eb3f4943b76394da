//! Frontend Models
//!
//! Data structures matching the quotes API payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Quote lifecycle status
///
/// Unknown codes are kept verbatim instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuoteStatus {
    Draft,
    PendingReview,
    Done,
    Cancelled,
    Unknown(String),
}

impl QuoteStatus {
    pub fn code(&self) -> &str {
        match self {
            QuoteStatus::Draft => "BORRADOR",
            QuoteStatus::PendingReview => "POR_REVISAR",
            QuoteStatus::Done => "TERMINADO",
            QuoteStatus::Cancelled => "CANCELADO",
            QuoteStatus::Unknown(raw) => raw,
        }
    }
}

impl Default for QuoteStatus {
    fn default() -> Self {
        QuoteStatus::Unknown(String::new())
    }
}

impl From<String> for QuoteStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "BORRADOR" | "DRAFT" => QuoteStatus::Draft,
            "POR_REVISAR" | "PENDING_REVIEW" => QuoteStatus::PendingReview,
            "TERMINADO" | "DONE" => QuoteStatus::Done,
            "CANCELADO" | "CANCELLED" => QuoteStatus::Cancelled,
            _ => QuoteStatus::Unknown(raw),
        }
    }
}

impl From<QuoteStatus> for String {
    fn from(status: QuoteStatus) -> Self {
        status.code().to_string()
    }
}

/// Server-formatted money amount (JSON string or number)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn value(&self) -> Option<f64> {
        match self {
            Amount::Number(n) => Some(*n),
            Amount::Text(s) => s.trim().parse::<f64>().ok(),
        }
        .filter(|n| n.is_finite())
    }

    pub fn raw(&self) -> String {
        match self {
            Amount::Number(n) => n.to_string(),
            Amount::Text(s) => s.clone(),
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Number(0.0)
    }
}

/// Quote row as returned by the search endpoint
///
/// Missing or null fields fall back to defaults so one incomplete row
/// does not discard the whole page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estado: QuoteStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estado_display: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub proyecto_nombre: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cliente_nombre: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fecha_creacion: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_costo: Amount,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url_detalle: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url_pdf: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url_eliminar: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub carpeta_id: Option<String>,
    #[serde(default)]
    pub carpeta_nombre: Option<String>,
}

/// Folder with its live quote count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    pub nombre: String,
    #[serde(default)]
    pub count: u64,
}

/// Dropdown option for reassigning a quote's folder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderChoice {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub nombre: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub cotizaciones: Vec<QuoteRecord>,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderListResult {
    #[serde(default)]
    pub carpetas: Vec<Folder>,
    #[serde(default)]
    pub sin_carpeta_count: u64,
    #[serde(default)]
    pub total_count: u64,
}

/// Folder filter axis of the view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FolderFilter {
    #[default]
    All,
    Unfiled,
    Named(String),
}

/// Wire key for the "no folder" filter
pub const UNFILED_KEY: &str = "sin_carpeta";

impl FolderFilter {
    /// Parse a `data-folder-key` value
    pub fn from_key(key: &str) -> Self {
        match key {
            "" => FolderFilter::All,
            UNFILED_KEY => FolderFilter::Unfiled,
            name => FolderFilter::Named(name.to_string()),
        }
    }

    /// Value used for both `data-folder-key` and the `carpeta` query param
    pub fn key(&self) -> &str {
        match self {
            FolderFilter::All => "",
            FolderFilter::Unfiled => UNFILED_KEY,
            FolderFilter::Named(name) => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// User-visible toast notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NoticeKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NoticeKind::Error }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NoticeKind::Info }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Int(i64),
    Text(String),
}

impl From<IdRepr> for String {
    fn from(id: IdRepr) -> Self {
        match id {
            IdRepr::Int(n) => n.to_string(),
            IdRepr::Text(s) => s,
        }
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    IdRepr::deserialize(deserializer).map(String::from)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn opt_string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<IdRepr>::deserialize(deserializer)?
        .map(String::from)
        .filter(|s| !s.is_empty()))
}

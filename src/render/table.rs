//! Quote table view model

use crate::models::{Amount, QuoteRecord, QuoteStatus};

/// id, status, project/client, folder, date, total, actions
pub const COLUMN_COUNT: usize = 7;

pub const EMPTY_MESSAGE: &str = "No se encontraron cotizaciones";

/// Tailwind classes for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeColors {
    pub background: &'static str,
    pub text: &'static str,
    pub dot: &'static str,
}

const DRAFT_COLORS: BadgeColors = BadgeColors {
    background: "bg-gray-100",
    text: "text-gray-800",
    dot: "bg-gray-400",
};

/// Status → colors; anything unrecognized looks like a draft
pub fn badge_colors(status: &QuoteStatus) -> BadgeColors {
    match status {
        QuoteStatus::Done => BadgeColors {
            background: "bg-green-100",
            text: "text-green-800",
            dot: "bg-green-500",
        },
        QuoteStatus::Cancelled => BadgeColors {
            background: "bg-red-100",
            text: "text-red-800",
            dot: "bg-red-500",
        },
        QuoteStatus::PendingReview => BadgeColors {
            background: "bg-orange-100",
            text: "text-orange-800",
            dot: "bg-orange-500",
        },
        QuoteStatus::Draft | QuoteStatus::Unknown(_) => DRAFT_COLORS,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub colors: BadgeColors,
}

impl Badge {
    pub fn class(&self) -> String {
        format!(
            "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {} {}",
            self.colors.background, self.colors.text
        )
    }

    pub fn dot_class(&self) -> String {
        format!("w-2 h-2 rounded-full {} mr-1.5", self.colors.dot)
    }
}

/// Label for a row with neither display text nor status code
pub const UNKNOWN_STATUS_LABEL: &str = "Sin estado";

pub fn badge(status: &QuoteStatus, display: &str) -> Badge {
    let label = if !display.trim().is_empty() {
        display.to_string()
    } else if !status.code().trim().is_empty() {
        status.code().to_string()
    } else {
        UNKNOWN_STATUS_LABEL.to_string()
    };
    Badge {
        label,
        colors: badge_colors(status),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRow {
    pub id: u64,
    pub badge: Badge,
    pub project: String,
    pub client: String,
    /// Selected dropdown value; empty when the quote has no folder
    pub folder_id: String,
    pub date: String,
    pub total: String,
    pub detail_url: String,
    pub pdf_url: String,
    pub delete_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Empty { colspan: usize, message: &'static str },
    Rows(Vec<QuoteRow>),
}

/// One row per quote, in server order
pub fn render_table(quotes: &[QuoteRecord]) -> TableView {
    if quotes.is_empty() {
        return TableView::Empty {
            colspan: COLUMN_COUNT,
            message: EMPTY_MESSAGE,
        };
    }

    TableView::Rows(
        quotes
            .iter()
            .map(|q| QuoteRow {
                id: q.id,
                badge: badge(&q.estado, &q.estado_display),
                project: q.proyecto_nombre.clone(),
                client: q.cliente_nombre.clone(),
                folder_id: q.carpeta_id.clone().unwrap_or_default(),
                date: q.fecha_creacion.clone(),
                total: format_currency(&q.total_costo),
                detail_url: q.url_detalle.clone(),
                pdf_url: q.url_pdf.clone(),
                delete_url: q.url_eliminar.clone(),
            })
            .collect(),
    )
}

/// `$ 1.234.567,50`; unparseable amounts are shown as sent
pub fn format_currency(amount: &Amount) -> String {
    match amount.value() {
        Some(value) => format!("$ {}", format_es_cl(value)),
        None => format!("$ {}", amount.raw()),
    }
}

/// Chilean number format with exactly two decimals
pub fn format_es_cl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && cents != 0 { "-" } else { "" };
    format!("{}{},{:02}", sign, grouped, fraction)
}

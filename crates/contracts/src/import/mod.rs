use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Spreadsheet column holding the branch display name.
pub const COL_FILIAL: &str = "Filial";
/// Spreadsheet column holding the unique sale identifier.
pub const COL_VENDA: &str = "Venda #";
/// Spreadsheet column holding the net amount.
pub const COL_LIQUIDO: &str = "Líquido";

// ---------------------------------------------------------------------------
// Raw rows
// ---------------------------------------------------------------------------

/// One raw sales row as produced by the external spreadsheet loader.
///
/// This is the source of truth for the evolution chart. There is no per-row
/// date; month bucketing downstream is synthetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSalesRow {
    /// Branch display name exactly as it appears in the spreadsheet.
    pub filial: String,
    /// Unique sale identifier ("Venda #").
    pub venda_id: String,
    /// Net amount ("Líquido"); absent or unparsable cells stay `None` and
    /// count as zero in aggregations.
    pub liquido: Option<f64>,
}

impl RawSalesRow {
    /// Build a row from a loader field map (column title -> cell text).
    ///
    /// A row without a sale identifier is unusable (the chart counts
    /// distinct sales) and is rejected; everything else degrades softly.
    pub fn from_record(record: &HashMap<String, String>) -> anyhow::Result<Self> {
        let venda_id = record
            .get(COL_VENDA)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .with_context(|| format!("row is missing the \"{}\" field", COL_VENDA))?
            .to_string();

        let filial = record
            .get(COL_FILIAL)
            .map(|v| v.trim().to_string())
            .unwrap_or_default();
        if filial.is_empty() {
            bail!("row {} has no \"{}\" value", venda_id, COL_FILIAL);
        }

        let liquido = record.get(COL_LIQUIDO).and_then(|v| parse_liquido(v));

        Ok(Self {
            filial,
            venda_id,
            liquido,
        })
    }
}

/// Parse a "Líquido" cell. Accepts plain decimals ("1234.56") and pt-BR
/// formatted amounts ("R$ 1.234,56"). Anything else yields `None`.
pub fn parse_liquido(cell: &str) -> Option<f64> {
    let cleaned = cell.trim().trim_start_matches("R$").trim();
    if cleaned.is_empty() {
        return None;
    }
    let normalized = if cleaned.contains(',') {
        // pt-BR convention: '.' groups thousands, ',' is the decimal mark
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned.to_string()
    };
    normalized.parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// Import progress
// ---------------------------------------------------------------------------

/// One loader error, displayed verbatim by the progress widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportError {
    pub message: String,
    /// Month label being processed when the error occurred, if any.
    pub month: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Progress snapshot of the external spreadsheet loader.
///
/// Owned and advanced by the loader; the dashboard only displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportProgress {
    /// Whether a load is currently running. The widget renders nothing
    /// while this is false.
    pub active: bool,
    pub total_months: u32,
    pub completed_months: u32,
    /// Label of the month being processed right now.
    pub current_month: Option<String>,
    pub records_loaded: u32,
    pub errors: Vec<ImportError>,
    pub cancelled: bool,
}

impl ImportProgress {
    pub fn idle() -> Self {
        Self {
            active: false,
            total_months: 0,
            completed_months: 0,
            current_month: None,
            records_loaded: 0,
            errors: Vec::new(),
            cancelled: false,
        }
    }

    pub fn start(total_months: u32) -> Self {
        Self {
            active: true,
            total_months,
            ..Self::idle()
        }
    }

    /// Completion percentage, rounded. A zero month total yields 0 instead
    /// of dividing by zero.
    pub fn percent(&self) -> u32 {
        if self.total_months == 0 {
            return 0;
        }
        ((self.completed_months as f64 / self.total_months as f64) * 100.0).round() as u32
    }

    /// Only the most recent error is surfaced to the user.
    pub fn last_error(&self) -> Option<&ImportError> {
        self.errors.last()
    }

    pub fn add_error(&mut self, message: impl Into<String>, month: Option<String>) {
        self.errors.push(ImportError {
            message: message.into(),
            month,
            occurred_at: Utc::now(),
        });
    }

    /// All months processed and the loader has stopped.
    pub fn is_complete(&self) -> bool {
        !self.active
            && !self.cancelled
            && self.total_months > 0
            && self.completed_months == self.total_months
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(filial: &str, venda: &str, liquido: &str) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert(COL_FILIAL.to_string(), filial.to_string());
        map.insert(COL_VENDA.to_string(), venda.to_string());
        map.insert(COL_LIQUIDO.to_string(), liquido.to_string());
        map
    }

    #[test]
    fn test_parse_liquido_formats() {
        assert_eq!(parse_liquido("1234.56"), Some(1234.56));
        assert_eq!(parse_liquido("1.234,56"), Some(1234.56));
        assert_eq!(parse_liquido("R$ 2.500,00"), Some(2500.0));
        assert_eq!(parse_liquido("890"), Some(890.0));
        assert_eq!(parse_liquido(""), None);
        assert_eq!(parse_liquido("n/d"), None);
    }

    #[test]
    fn test_from_record() {
        let row = RawSalesRow::from_record(&record("Centro", "V-1001", "1.250,00")).unwrap();
        assert_eq!(row.filial, "Centro");
        assert_eq!(row.venda_id, "V-1001");
        assert_eq!(row.liquido, Some(1250.0));
    }

    #[test]
    fn test_from_record_missing_venda_is_rejected() {
        assert!(RawSalesRow::from_record(&record("Centro", "  ", "10")).is_err());
    }

    #[test]
    fn test_from_record_unparsable_liquido_is_none() {
        let row = RawSalesRow::from_record(&record("Centro", "V-1", "-")).unwrap();
        assert_eq!(row.liquido, None);
    }

    #[test]
    fn test_percent_guards_zero_total() {
        let progress = ImportProgress::idle();
        assert_eq!(progress.percent(), 0);

        let mut progress = ImportProgress::start(12);
        progress.completed_months = 3;
        assert_eq!(progress.percent(), 25);
    }

    #[test]
    fn test_last_error() {
        let mut progress = ImportProgress::start(12);
        assert!(progress.last_error().is_none());
        progress.add_error("primeiro", Some("Jan".to_string()));
        progress.add_error("segundo", Some("Fev".to_string()));
        assert_eq!(progress.last_error().unwrap().message, "segundo");
    }
}

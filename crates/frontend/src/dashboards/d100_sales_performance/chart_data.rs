//! Aggregation of raw spreadsheet rows into the 12-month evolution series.
//!
//! The workbook has no per-row date, so the series is a smoothing heuristic:
//! period totals spread over the calendar months with a fixed growth ramp.
//! The exact formula is the display contract; it is deliberately not a real
//! monthly breakdown and must not be "fixed" into one.

use contracts::dashboard::{MonthPoint, FILTER_ALL, MONTH_LABELS};
use contracts::import::RawSalesRow;
use std::collections::HashSet;

/// Growth ramp: month `i` receives `total/12 * (BASE + i * STEP)`.
const GROWTH_BASE: f64 = 0.7;
const GROWTH_STEP: f64 = 0.03;

/// Normalize a branch display name to its comparable slug: lowercase,
/// whitespace runs collapsed to hyphens, anything outside `[a-z0-9-]`
/// stripped.
pub fn normalize_filial(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Build the 12-bucket series for the given branch filter ([`FILTER_ALL`]
/// bypasses filtering). An empty filtered set yields twelve zero buckets,
/// still labeled Jan..Dez in order.
pub fn monthly_series(rows: &[RawSalesRow], filial: &str) -> Vec<MonthPoint> {
    let filtered: Vec<&RawSalesRow> = if filial == FILTER_ALL {
        rows.iter().collect()
    } else {
        rows.iter()
            .filter(|r| normalize_filial(&r.filial) == filial)
            .collect()
    };

    if filtered.is_empty() {
        return MONTH_LABELS
            .iter()
            .map(|m| MonthPoint {
                month: m.to_string(),
                vendas: 0,
                receita: 0.0,
                leads: 0,
            })
            .collect();
    }

    // distinct sales by identifier; missing amounts count as zero
    let total_vendas = filtered
        .iter()
        .map(|r| r.venda_id.as_str())
        .collect::<HashSet<_>>()
        .len() as f64;
    let total_receita: f64 = filtered.iter().map(|r| r.liquido.unwrap_or(0.0)).sum();

    MONTH_LABELS
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let factor = GROWTH_BASE + i as f64 * GROWTH_STEP;
            MonthPoint {
                month: m.to_string(),
                vendas: (total_vendas / 12.0 * factor).round() as u32,
                receita: (total_receita / 12.0 * factor).round(),
                leads: 0,
            }
        })
        .collect()
}

/// Revenue axis label: millions with one decimal, otherwise rounded
/// thousands ("R$ 2.5M", "R$ 45K"; 999 rounds up to "R$ 1K").
pub fn format_receita_axis(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("R$ {:.1}M", value / 1_000_000.0)
    } else {
        format!("R$ {:.0}K", value / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(filial: &str, venda: &str, liquido: Option<f64>) -> RawSalesRow {
        RawSalesRow {
            filial: filial.to_string(),
            venda_id: venda.to_string(),
            liquido,
        }
    }

    #[test]
    fn test_normalize_filial() {
        assert_eq!(normalize_filial("Zona Sul"), "zona-sul");
        assert_eq!(normalize_filial("  Centro  "), "centro");
        assert_eq!(normalize_filial("Loja #3 (Anexo)"), "loja-3-anexo");
    }

    #[test]
    fn test_empty_rows_yield_twelve_zero_buckets() {
        let series = monthly_series(&[], FILTER_ALL);
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].month, "Jan");
        assert_eq!(series[11].month, "Dez");
        assert!(series.iter().all(|p| p.vendas == 0 && p.receita == 0.0));
    }

    #[test]
    fn test_growth_ramp_distribution() {
        // 120 distinct sales, R$ 1.200.000 total
        let rows: Vec<RawSalesRow> = (0..120)
            .map(|i| row("Centro", &format!("V-{i}"), Some(10_000.0)))
            .collect();

        let series = monthly_series(&rows, FILTER_ALL);
        // month 0: round(10 * 0.70) = 7; month 11: round(10 * 1.03) = 10
        assert_eq!(series[0].vendas, 7);
        assert_eq!(series[11].vendas, 10);
        assert_eq!(series[0].receita, 70_000.0);
        assert_eq!(series[11].receita, 103_000.0);
        assert!(series.iter().all(|p| p.leads == 0));
    }

    #[test]
    fn test_branch_filter_and_duplicate_sale_ids() {
        let rows = vec![
            row("Zona Sul", "V-1", Some(100.0)),
            row("Zona Sul", "V-1", Some(50.0)),
            row("Centro", "V-2", Some(999.0)),
        ];

        let series = monthly_series(&rows, "zona-sul");
        // one distinct sale, R$ 150 total
        let total_receita: f64 = series.iter().map(|p| p.receita).sum();
        assert!(total_receita > 0.0);
        assert!(series.iter().all(|p| p.vendas <= 1));

        let none = monthly_series(&rows, "barra");
        assert!(none.iter().all(|p| p.vendas == 0 && p.receita == 0.0));
    }

    #[test]
    fn test_missing_liquido_counts_as_zero() {
        let rows = vec![row("Centro", "V-1", None), row("Centro", "V-2", Some(1200.0))];
        let series = monthly_series(&rows, FILTER_ALL);
        let total: f64 = series.iter().map(|p| p.receita).sum();
        // only the R$ 1.200 row contributes; the ramp keeps it under the raw total
        assert!(total > 0.0 && total <= 1200.0);
    }

    #[test]
    fn test_format_receita_axis() {
        assert_eq!(format_receita_axis(2_500_000.0), "R$ 2.5M");
        assert_eq!(format_receita_axis(45_000.0), "R$ 45K");
        assert_eq!(format_receita_axis(999.0), "R$ 1K");
        assert_eq!(format_receita_axis(1_000_000.0), "R$ 1.0M");
    }
}

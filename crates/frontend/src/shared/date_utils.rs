/// Utilities for date formatting
///
/// Native date inputs exchange `yyyy-mm-dd`; everything shown to the user is
/// `dd/mm/yyyy`.

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2026-03-15" -> "15/03/2026"
pub fn format_date_br(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Human label for a filter period: "01/01/2026 — 07/08/2026"
pub fn format_period(date_from: &str, date_to: &str) -> String {
    format!("{} — {}", format_date_br(date_from), format_date_br(date_to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_br() {
        assert_eq!(format_date_br("2026-03-15"), "15/03/2026");
        assert_eq!(format_date_br("2026-03-15T14:02:26.123Z"), "15/03/2026");
    }

    #[test]
    fn test_invalid_format_passes_through() {
        assert_eq!(format_date_br("invalid"), "invalid");
    }

    #[test]
    fn test_format_period() {
        assert_eq!(
            format_period("2026-01-01", "2026-08-07"),
            "01/01/2026 — 07/08/2026"
        );
    }
}

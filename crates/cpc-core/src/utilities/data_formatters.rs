//! Data formatting helpers.
//!
//! Explanations shown to court users write dates the Swiss way
//! (`01.03.2024`) and spell out day counts in French.

/// Format a date as `dd.mm.yyyy` (e.g. `(2024, 3, 1)` → `"01.03.2024"`).
pub fn format_swiss_date(year: u16, month: u8, day: u8) -> String {
    format!("{day:02}.{month:02}.{year:04}")
}

/// Format a date as ISO 8601 `yyyy-mm-dd`.
pub fn format_iso_date(year: u16, month: u8, day: u8) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Format a number of days in French (`1` → `"1 jour"`, `3` → `"3 jours"`).
pub fn format_day_count(n: u32) -> String {
    if n == 1 {
        "1 jour".to_string()
    } else {
        format!("{n} jours")
    }
}

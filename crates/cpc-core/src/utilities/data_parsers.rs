//! Data parsing helpers.
//!
//! Dates reach the engine as text from the outside world: ISO 8601
//! (`YYYY-MM-DD`, what an HTML date input or a JSON payload carries) or the
//! Swiss written form (`DD.MM.YYYY`).  These functions only split and read
//! the numbers; calendar validity is checked by the date type itself.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 || parts[0].len() != 4 {
        return None;
    }
    let year: u16 = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    let day: u8 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Parse a date string in Swiss `DD.MM.YYYY` format.
///
/// Single-digit days and months (`1.3.2024`) are accepted.
///
/// Returns `(year, month, day)` on success.
pub fn parse_swiss_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 3 || parts[2].len() != 4 {
        return None;
    }
    let day: u8 = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    let year: u16 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Parse a date in either of the supported formats.
pub fn parse_date(s: &str) -> Option<(u16, u8, u8)> {
    parse_iso_date(s).or_else(|| parse_swiss_date(s))
}

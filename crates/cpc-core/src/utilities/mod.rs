//! Parsing and formatting helpers for civil dates and day counts.

/// Formatting helpers (Swiss `dd.mm.yyyy` dates, day counts).
pub mod data_formatters;

/// Parsing helpers (ISO and Swiss date strings).
pub mod data_parsers;

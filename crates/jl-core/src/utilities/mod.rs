/// Digit transliteration to Persian numerals.
pub mod data_formatters;

/// Digit normalization and date-text parsing.
pub mod data_parsers;

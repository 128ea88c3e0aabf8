//! Grammar constants and header-cell parsing.
//!
//! A matrix source is delimited text: one header row followed by data rows.
//! The delimiter is detected per source (tab wins over comma, since titles
//! and option labels routinely contain commas). Header cells name a
//! choice group and may carry an explicit control kind, e.g. `interval Radio`.

use crate::choice::ChoiceKind;

/// Name of the distinguished row-identifier column.
pub const ID_COLUMN: &str = "chartId";

/// Literal used for the affirmative value of boolean choice groups.
pub const BOOLEAN_TRUE: &str = "true";

/// Literal used for the negative value of boolean choice groups.
pub const BOOLEAN_FALSE: &str = "false";

/// Detects the cell delimiter from the header line.
///
/// Tab-separated sources are preferred whenever a tab is present; otherwise
/// the source is treated as comma-separated.
pub fn detect_delimiter(header: &str) -> char {
    if header.contains('\t') {
        '\t'
    } else {
        ','
    }
}

/// Splits a line into trimmed cells on the given delimiter.
pub fn split_cells(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(|cell| cell.trim().to_string()).collect()
}

/// Parses a header cell into a choice-group name and an optional explicit kind.
///
/// The kind is the last whitespace-separated word when it names a known
/// control type; anything else is part of the group name.
///
/// # Example
///
/// ```
/// use choicematrix_core::choice::ChoiceKind;
/// use choicematrix_core::grammar::parse_header_cell;
///
/// assert_eq!(
///     parse_header_cell("interval Radio"),
///     ("interval".to_string(), Some(ChoiceKind::Radio))
/// );
/// assert_eq!(parse_header_cell("Life expectancy"), ("Life expectancy".to_string(), None));
/// ```
pub fn parse_header_cell(cell: &str) -> (String, Option<ChoiceKind>) {
    if let Some((name, last)) = cell.rsplit_once(char::is_whitespace) {
        if let Some(kind) = ChoiceKind::from_keyword(last) {
            return (name.trim().to_string(), Some(kind));
        }
    }
    (cell.trim().to_string(), None)
}

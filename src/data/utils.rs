/// A present, non-blank cell, trimmed. Quoting is already undone by the CSV
/// reader, so quotes inside a value are kept.
pub fn non_blank(cell: Option<&str>) -> Option<&str> {
    cell.map(str::trim).filter(|s| !s.is_empty())
}

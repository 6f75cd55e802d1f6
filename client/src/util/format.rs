//! Display formatting for API timestamps and counters.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Calendar date (`YYYY-MM-DD`) from an ISO 8601 timestamp.
///
/// Returns `None` for missing or malformed values so callers can omit the
/// date line instead of printing garbage.
pub fn display_date(timestamp: Option<&str>) -> Option<String> {
    let raw = timestamp?.trim();
    let date = raw.get(..10)?;
    let bytes = date.as_bytes();
    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    well_formed.then(|| date.to_owned())
}

/// `"1 member"` / `"12 members"` style labels.
pub fn count_label(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 { format!("{count} {singular}") } else { format!("{count} {plural}") }
}

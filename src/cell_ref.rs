//! Column labels and cell references.
//!
//! Columns are labeled with the bijective base-26 alphabetic sequence
//! (A, B, ..., Z, AA, AB, ...); a cell reference pairs a column label with a
//! 1-based row number ("C4").

/// Convert a 0-based column index to its letter label (A, B, ..., Z, AA, AB, ...).
pub fn column_label(col: u32) -> String {
    let mut label = String::new();
    let mut n = col + 1; // bijective base-26 works on 1-based values
    while n > 0 {
        n -= 1;
        let c = char::from(b'A' + u8::try_from(n % 26).unwrap_or(0));
        label.insert(0, c);
        n /= 26;
    }
    label
}

/// Format a cell reference like "C4" from 0-based coordinates.
pub fn cell_label(row: u32, col: u32) -> String {
    format!("{}{}", column_label(col), row + 1)
}

/// Parse a cell reference like "A1" into (row, col), 0-indexed.
///
/// Letters and digits may be mixed with `$` markers, which are skipped.
/// Returns `None` unless at least one letter and one digit are present.
pub fn parse_cell_ref(cell_ref: &str) -> Option<(u32, u32)> {
    let mut col: u32 = 0;
    let mut row: u32 = 0;
    let mut saw_col = false;
    let mut saw_row = false;

    for ch in cell_ref.trim().chars() {
        if ch == '$' {
            continue;
        }
        if ch.is_ascii_alphabetic() {
            let upper = ch.to_ascii_uppercase();
            col = col * 26 + (upper as u32 - 'A' as u32 + 1);
            saw_col = true;
        } else if ch.is_ascii_digit() {
            row = row * 10 + (ch as u32 - '0' as u32);
            saw_row = true;
        } else {
            return None;
        }
    }

    if !saw_col || !saw_row {
        return None;
    }

    Some((row.saturating_sub(1), col.saturating_sub(1)))
}

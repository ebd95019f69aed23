//! A1-style cell addressing. Rows and columns are 1-based throughout.

pub const MAX_ROWS: u32 = 1_048_576;
pub const MAX_COLS: u32 = 16_384;

/// Column number (1-based) to letters: 1 -> "A", 27 -> "AA".
pub fn col_to_letter(col: u32) -> String {
    let mut result = String::new();
    let mut n = col;
    while n > 0 {
        n -= 1;
        let c = char::from(b'A' + (n % 26) as u8);
        result.insert(0, c);
        n /= 26;
    }
    result
}

pub fn cell_ref(row: u32, col: u32) -> String {
    format!("{}{}", col_to_letter(col), row)
}

/// Parse a reference like "B7" into `(row, col)`.
pub fn parse_cell_ref(cell_ref: &str) -> Option<(u32, u32)> {
    let trimmed = cell_ref.trim();
    let split = trimmed.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = trimmed.split_at(split);

    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut col: u32 = 0;
    for ch in letters.chars() {
        let upper = ch.to_ascii_uppercase();
        col = col.checked_mul(26)?.checked_add(upper as u32 - 'A' as u32 + 1)?;
    }

    let row: u32 = digits.parse().ok()?;

    if row == 0 || row > MAX_ROWS || col > MAX_COLS {
        return None;
    }

    Some((row, col))
}

pub fn in_bounds(row: u32, col: u32) -> bool {
    (1..=MAX_ROWS).contains(&row) && (1..=MAX_COLS).contains(&col)
}

// src/export/text.rs

use std::borrow::Cow;

/// Longest description printed as-is in the PDF table.
pub const DESCRIPTION_LIMIT: usize = 30;
pub const ELLIPSIS: &str = "...";

/// Cut descriptions longer than `DESCRIPTION_LIMIT` characters and append
/// the ellipsis. Shorter or equal strings come back borrowed.
pub fn truncate_description(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(DESCRIPTION_LIMIT) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS)),
    }
}

/// Map text to the WinAnsi bytes understood by the standard Type1 fonts.
/// Characters with no WinAnsi slot become '?'.
pub(crate) fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            c if (c as u32) < 0x80 => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

//! Offset conversion between the browser and the composer
//!
//! Textareas report `selectionStart`/`selectionEnd` in UTF-16 code units; the
//! composer counts chars. Every API call converts on the way in and out.

use wasm_bindgen::prelude::*;

use crate::text::SelectionRange;

/// Convert a UTF-16 offset to a char offset
///
/// An offset inside a surrogate pair rounds down to the start of that
/// character; offsets past the end clamp to the char length.
pub fn utf16_to_char(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (index, ch) in text.chars().enumerate() {
        units += ch.len_utf16();
        if units > utf16_offset {
            return index;
        }
    }
    text.chars().count()
}

/// Convert a char offset to a UTF-16 offset
pub fn char_to_utf16(text: &str, char_offset: usize) -> usize {
    text.chars().take(char_offset).map(char::len_utf16).sum()
}

/// Build a char selection from a textarea's UTF-16 selection
pub fn selection_from_utf16(text: &str, start: usize, end: usize) -> SelectionRange {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    SelectionRange::new(utf16_to_char(text, start), utf16_to_char(text, end))
}

/// UTF-16 `(start, end)` for a char selection
pub fn selection_to_utf16(text: &str, selection: SelectionRange) -> (usize, usize) {
    (char_to_utf16(text, selection.start), char_to_utf16(text, selection.end))
}

/// Convert a textarea (UTF-16) offset to a char offset
#[wasm_bindgen(js_name = utf16ToCharOffset)]
pub fn utf16_to_char_offset(text: &str, utf16_offset: usize) -> usize {
    utf16_to_char(text, utf16_offset)
}

/// Convert a char offset to a textarea (UTF-16) offset
#[wasm_bindgen(js_name = charToUtf16Offset)]
pub fn char_to_utf16_offset(text: &str, char_offset: usize) -> usize {
    char_to_utf16(text, char_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets_match() {
        assert_eq!(utf16_to_char("hello", 3), 3);
        assert_eq!(char_to_utf16("hello", 3), 3);
    }

    #[test]
    fn test_surrogate_pairs() {
        // 😊 is two UTF-16 units, one char
        let text = "a😊b";
        assert_eq!(utf16_to_char(text, 1), 1);
        assert_eq!(utf16_to_char(text, 3), 2);
        assert_eq!(utf16_to_char(text, 4), 3);
        assert_eq!(char_to_utf16(text, 2), 3);
        assert_eq!(char_to_utf16(text, 3), 4);
    }

    #[test]
    fn test_inside_surrogate_rounds_down() {
        assert_eq!(utf16_to_char("a😊b", 2), 1);
    }

    #[test]
    fn test_past_end_clamps() {
        assert_eq!(utf16_to_char("ab", 10), 2);
    }

    #[test]
    fn test_selection_round_trip() {
        let text = "👍 hello world";
        let sel = selection_from_utf16(text, 9, 14);
        assert_eq!(sel.slice(text), "world");
        assert_eq!(selection_to_utf16(text, sel), (9, 14));
    }

    #[test]
    fn test_backwards_selection_is_ordered() {
        assert_eq!(selection_from_utf16("abcdef", 4, 1), SelectionRange::new(1, 4));
    }
}

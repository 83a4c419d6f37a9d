//! Utility functions for chatmark

/// Escapes the five HTML significant characters.
///
/// `&` `<` `>` `"` `'` become `&amp;` `&lt;` `&gt;` `&quot;` `&#x27;`.
/// Every other character is copied unchanged.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);

    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}

const PRIVATE_USE_START: u32 = 0xE000;
const PRIVATE_USE_LEN: usize = 0x1900;

/// Picks a private use character that does not occur in text.
///
/// Marks every Basic Multilingual Plane private use character seen in a
/// single pass, then returns the lowest unmarked one. Returns `None` only
/// when the text contains every character of that area.
pub fn free_sentinel(text: &str) -> Option<char> {
    let mut used = [false; PRIVATE_USE_LEN];

    for ch in text.chars() {
        if let Some(offset) = (ch as u32).checked_sub(PRIVATE_USE_START) {
            if let Some(slot) = used.get_mut(offset as usize) {
                *slot = true;
            }
        }
    }

    used.iter()
        .position(|seen| !seen)
        .and_then(|offset| char::from_u32(PRIVATE_USE_START + offset as u32))
}

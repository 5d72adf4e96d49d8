//! Text splitting helpers shared by every parser.

/// Split a property payload on its first `=`, trimming both sides.
///
/// Returns `None` when the payload carries no `=` at all (a malformed
/// property line; the caller turns that into a fatal error).
pub fn split_key_value(payload: &str) -> Option<(&str, &str)> {
    let (key, value) = payload.split_once('=')?;
    Some((key.trim(), value.trim()))
}

/// Split on a separator at nesting depth zero.
///
/// Commas inside `<>`, `()` or `[]` do not split, so parameter types such as
/// `map<int, string>` survive intact. A trailing separator produces no empty
/// tail entry.
pub fn split_top_level(input: &str, sep: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, ch) in input.char_indices() {
        match ch {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            c if c == sep && depth == 0 => {
                pieces.push(&input[start..idx]);
                start = idx + ch.len_utf8();
            }
            _ => {}
        }
    }
    let tail = &input[start..];
    if !tail.trim().is_empty() || pieces.is_empty() {
        pieces.push(tail);
    }
    pieces
}

/// Strip one pair of surrounding double quotes, then trim the interior.
///
/// Text without a full surrounding pair is returned trimmed but otherwise
/// untouched (a single stray quote is kept verbatim).
pub fn strip_quotes(value: &str) -> &str {
    let trimmed = value.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .map(str::trim)
        .unwrap_or(trimmed)
}

//! Balanced-brace span matching.

/// Returns the balanced `{...}` span starting at `open`, braces included.
///
/// `open` must index a `{` in `text`; callers guarantee this by scanning to
/// the first `{` at or after a known start offset. Scans forward keeping a
/// depth counter and returns `None` when the text ends with the block still
/// open.
///
/// Brace characters inside string, comment, and regex literals are counted
/// like any other byte. The plugin's evasion sources tolerate this, and
/// counting naively is what keeps a JavaScript tokenizer out of the picture.
pub fn balanced_block(text: &str, open: usize) -> Option<&str> {
    debug_assert_eq!(text.as_bytes().get(open), Some(&b'{'));

    let mut depth = 0usize;
    for (i, &byte) in text.as_bytes().iter().enumerate().skip(open) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[open..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Index of the `}` closing the object that opens at `start`.
/// String literals (and escapes inside them) are skipped so braces in text do not count.
pub(crate) fn find_matching_brace(s: &str, start: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.get(start).copied()? != b'{' {
        return None;
    }

    let mut depth = 0usize;
    let mut in_str = false;
    let mut j = start;

    while j < bytes.len() {
        let c = bytes[j];

        if in_str {
            if c == b'\\' {
                j += 2;
                continue;
            } else if c == b'"' {
                in_str = false;
            }
            j += 1;
            continue;
        }

        match c {
            b'"' => in_str = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
            }
            _ => {}
        }
        j += 1;
    }
    None
}

/// The object literal starting at `start` (after optional whitespace), if it is balanced.
pub(crate) fn object_literal_at(s: &str, start: usize) -> Option<&str> {
    let rest = s.get(start..)?;
    let open = start + (rest.len() - rest.trim_start().len());
    let close = find_matching_brace(s, open)?;
    Some(&s[open..=close])
}

/// Collapse a body to one line and cap it at `max` chars for log/error output.
pub(crate) fn one_line_snippet(s: &str, max: usize) -> String {
    let one_line: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    match one_line.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &one_line[..cut]),
        None => one_line,
    }
}

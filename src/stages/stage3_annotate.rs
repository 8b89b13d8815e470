/// Full-canvas white rectangle placed behind the traced paths
pub const BACKGROUND_RECT: &str = r#"<rect width="100%" height="100%" fill="white"/>"#;

/// Whether the markup contains at least one vector path element
pub fn has_path(svg: &str) -> bool {
    find_tag(svg, "path").is_some()
}

/// Stage 3: put an opaque white background behind the traced shapes.
///
/// The rectangle goes right after the opening `<svg ...>` tag, so it is drawn
/// before any path. Markup without a path, or without a root tag, comes back
/// unchanged.
pub fn add_background(svg: &str) -> String {
    if !has_path(svg) {
        return svg.to_string();
    }

    let Some(start) = find_tag(svg, "svg") else {
        return svg.to_string();
    };
    let Some(close) = svg[start..].find('>') else {
        return svg.to_string();
    };
    let insert_at = start + close + 1;

    let mut out = String::with_capacity(svg.len() + BACKGROUND_RECT.len() + 3);
    out.push_str(&svg[..insert_at]);
    out.push_str("\n  ");
    out.push_str(BACKGROUND_RECT);
    out.push_str(&svg[insert_at..]);
    out
}

/// Byte offset of the first `<name` that opens an element called exactly `name`
fn find_tag(svg: &str, name: &str) -> Option<usize> {
    let needle = format!("<{}", name);
    let mut pos = 0;
    while let Some(found) = svg[pos..].find(&needle) {
        let at = pos + found;
        let next = svg[at + needle.len()..].chars().next();
        if matches!(next, Some(c) if c.is_whitespace() || c == '>' || c == '/') {
            return Some(at);
        }
        pos = at + needle.len();
    }
    None
}

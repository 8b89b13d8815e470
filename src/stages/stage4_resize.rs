/// Stage 4: declare a square canvas of `size`.
///
/// Every `width` and `height` attribute gets `size` and every `viewBox`
/// becomes `0 0 size size`. This rewrites attribute text only, path
/// coordinates are not rescaled.
pub fn normalize_dimensions(svg: &str, size: u32) -> String {
    let size = size.to_string();
    let view_box = format!("0 0 {} {}", size, size);

    let out = replace_attr(svg, "width", &size);
    let out = replace_attr(&out, "height", &size);
    replace_attr(&out, "viewBox", &view_box)
}

/// Replace the value of every `name="..."` attribute.
///
/// The name must stand alone, so `stroke-width` is not a match for `width`.
/// An unterminated value is left as-is.
pub fn replace_attr(svg: &str, name: &str, value: &str) -> String {
    let needle = format!("{}=\"", name);
    let mut out = String::with_capacity(svg.len());
    let mut rest = svg;

    while let Some(found) = rest.find(&needle) {
        let standalone = rest[..found]
            .chars()
            .next_back()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '-' || c == '_' || c == ':'));
        let value_start = found + needle.len();

        match rest[value_start..].find('"') {
            Some(len) if standalone => {
                out.push_str(&rest[..value_start]);
                out.push_str(value);
                out.push('"');
                rest = &rest[value_start + len + 1..];
            }
            _ => {
                out.push_str(&rest[..value_start]);
                rest = &rest[value_start..];
            }
        }
    }

    out.push_str(rest);
    out
}

//! Export-line template expansion
//!
//! A minimal `{{key}}` substitution engine. This is a pure function over the
//! template text and a field map; it performs no escaping and no I/O. Unknown
//! placeholders expand to the empty string.

/// Render a template, substituting every `{{key}}` placeholder with the
/// matching value from `fields`.
///
/// Whitespace inside the braces is ignored, so `{{ name }}` and `{{name}}`
/// are equivalent. An unterminated `{{` is emitted literally.
pub fn render(template: &str, fields: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                if let Some((_, value)) = fields.iter().find(|(k, _)| *k == key) {
                    out.push_str(value);
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

//! Named-placeholder template rendering for check messages.
//!
//! Placeholders are written `{name}`. A placeholder whose key is not in
//! the supplied context renders as the empty string instead of erroring,
//! so message templates can reference context a check did not provide.

use std::collections::HashMap;

/// Renders `template`, substituting every `{name}` placeholder from `ctx`.
///
/// Unresolved placeholders become the empty string. A `{` with no closing
/// `}` is emitted literally.
pub fn render(template: &str, ctx: &HashMap<&str, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        match rest[start + 1..].find('}') {
            Some(rel) => {
                let key = &rest[start + 1..start + 1 + rel];
                if let Some(value) = ctx.get(key) {
                    out.push_str(value);
                }
                rest = &rest[start + 1 + rel + 1..];
            }
            None => {
                // No closing brace: emit the remainder literally.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

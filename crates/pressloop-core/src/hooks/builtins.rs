//! Named text transforms available to configuration-driven subscriptions

use super::callback::text_transform;
use super::HookRegistry;

/// Names installed by [`HookRegistry::with_builtins`]
pub const BUILTIN_NAMES: &[&str] = &["trim", "uppercase", "lowercase", "paragraphs", "strip-tags"];

pub(super) fn install(hooks: &HookRegistry) {
    hooks.define_function("trim", text_transform(|s| s.trim().to_string()));
    hooks.define_function("uppercase", text_transform(str::to_uppercase));
    hooks.define_function("lowercase", text_transform(str::to_lowercase));
    hooks.define_function("paragraphs", text_transform(paragraphs));
    hooks.define_function("strip-tags", text_transform(strip_tags));
}

/// Wrap blank-line separated blocks in `<p>`; single newlines become `<br />`
fn paragraphs(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");

    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| format!("<p>{}</p>", block.replace('\n', "<br />\n")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop everything between `<` and the next `>`
fn strip_tags(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut in_tag = false;

    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => output.push(c),
            _ => {}
        }
    }

    output
}

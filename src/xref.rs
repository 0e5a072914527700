//! Inline cross-reference substitution.
//!
//! Free text may carry two marker syntaxes: `<ref Name>` pointing at another
//! documented symbol and `<param name>` pointing at one of the enclosing
//! function's own parameters. Both are replaced at render time, after the
//! whole input set has been registered. Resolution never fails; unknown
//! symbols degrade to plain text.

use crate::registry::Registry;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_REF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<ref (.*?)>").unwrap());

static RE_PARAM_REF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<param (.*?)>").unwrap());

static RE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]*)`").unwrap());

/// Wildcard suffix used by enum prefix namespaces (`EV_*`); stripped
/// whenever a reference degrades to plain text.
fn strip_wildcard(name: &str) -> String {
    name.replace("_*", "")
}

/// Replace `<ref X>` with a hyperlink to X's anchor, or with the bare
/// identifier when X was never registered.
pub fn resolve_refs_html(input: &str, registry: &Registry) -> String {
    RE_REF
        .replace_all(input, |caps: &Captures| {
            let name = &caps[1];
            match registry.lookup_anchor(name) {
                Some(anchor) => format!("<a href=\"#{}\">{}</a>", anchor, name),
                None => strip_wildcard(name),
            }
        })
        .into_owned()
}

/// Replace `<ref X>` with a `\ref` textual reference.
pub fn resolve_refs_doxygen(input: &str) -> String {
    RE_REF
        .replace_all(input, |caps: &Captures| {
            format!("\\ref {}", strip_wildcard(&caps[1]))
        })
        .into_owned()
}

/// Replace `<ref X>` with the bare identifier.
pub fn resolve_refs_plain(input: &str) -> String {
    RE_REF
        .replace_all(input, |caps: &Captures| strip_wildcard(&caps[1]))
        .into_owned()
}

/// Replace `<param x>` with inline-code styling. Parameter references are
/// never looked up in the symbol table.
pub fn resolve_param_refs_html(input: &str) -> String {
    RE_PARAM_REF
        .replace_all(input, |caps: &Captures| format!("<code>{}</code>", &caps[1]))
        .into_owned()
}

/// Replace `<param x>` with an `\a` emphasis marker.
pub fn resolve_param_refs_doxygen(input: &str) -> String {
    RE_PARAM_REF
        .replace_all(input, |caps: &Captures| format!("\\a {}", &caps[1]))
        .into_owned()
}

/// Replace backtick-delimited spans with `<code>` tags.
pub fn inline_code_html(input: &str) -> String {
    RE_CODE
        .replace_all(input, |caps: &Captures| format!("<code>{}</code>", &caps[1]))
        .into_owned()
}

/// Run every HTML substitution pass over a block of description text.
pub fn process_description_html(input: &str, registry: &Registry) -> String {
    let output = inline_code_html(input);
    let output = resolve_refs_html(&output, registry);
    resolve_param_refs_html(&output)
}

/// Run every Doxygen substitution pass over a block of description text.
pub fn process_description_doxygen(input: &str) -> String {
    let output = resolve_refs_doxygen(input);
    resolve_param_refs_doxygen(&output)
}

/// A `<ref …>` marker at the very start of `text`. Returns the referenced
/// symbol (wildcard stripped) and the text following the marker.
pub fn leading_ref(text: &str) -> Option<(String, &str)> {
    let caps = RE_REF.captures(text)?;
    let whole = caps.get(0)?;
    if whole.start() != 0 {
        return None;
    }
    Some((strip_wildcard(&caps[1]), &text[whole.end()..]))
}

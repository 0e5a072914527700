//! Marker vocabulary for documentation blocks.
//!
//! A documentation block is delimited by `/***` and `*/`. Inside, every
//! annotation line begins with `* \tag`, optionally followed by a value.
//! Values may span multiple lines: a value ending in a backslash continues
//! on the next line, whose trimmed content is appended in its place.

use crate::model::DefKind;

pub const DEF_START: &str = "/***";
pub const DEF_END: &str = "*/";

pub const METHOD: &str = "* \\method";
pub const CONSTRUCTOR: &str = "* \\constructor";
pub const FIELD: &str = "* \\field";
pub const CLASS_FIELD: &str = "* \\classfield";
pub const ENUM: &str = "* \\enum";
pub const CONSTANT: &str = "* \\constant";
pub const GLOBAL: &str = "* \\global";
pub const CLASS: &str = "* \\class";
pub const NAMESPACE: &str = "* \\namespace";

pub const DESC: &str = "* \\desc";
pub const PARAM: &str = "* \\param";
pub const PARAM_OPT: &str = "* \\paramOpt";
pub const RETURN: &str = "* \\return";
pub const TYPE: &str = "* \\type";
pub const DEFAULT: &str = "* \\default";
pub const DEPRECATED: &str = "* \\deprecated";
pub const NS: &str = "* \\ns";

/// Kind markers in match order. `classfield` must stay ahead of `class`,
/// which is a prefix of it.
pub const KIND_MARKERS: &[(&str, DefKind)] = &[
    (METHOD, DefKind::Method),
    (CONSTRUCTOR, DefKind::Constructor),
    (FIELD, DefKind::Field),
    (CLASS_FIELD, DefKind::ClassField),
    (ENUM, DefKind::Enum),
    (CONSTANT, DefKind::Constant),
    (GLOBAL, DefKind::Global),
    (CLASS, DefKind::Class),
    (NAMESPACE, DefKind::Namespace),
];

/// Extract a marker's value from its introducing line: strip the marker
/// prefix and surrounding whitespace. No continuation handling.
///
/// The caller must have checked that `line` starts with `marker`.
pub fn value(marker: &str, line: &str) -> String {
    line[marker.len()..].trim().to_string()
}

/// Extract a marker value starting at `lines[index]`, following backslash
/// line continuations. Returns the assembled value and the number of
/// *additional* lines consumed beyond the introducing one.
pub fn multiline_value(marker: &str, lines: &[String], index: usize) -> (String, usize) {
    let mut result = value(marker, &lines[index]);
    let mut extra = 0;

    while result.ends_with('\\') {
        let next = index + extra + 1;
        if next == lines.len() {
            break;
        }
        result.pop();
        result.push_str(lines[next].trim());
        extra += 1;
    }

    (result, extra)
}

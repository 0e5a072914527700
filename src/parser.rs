//! Line scanner for isolated documentation blocks, plus the thin block
//! extractor that feeds it.
//!
//! The scanner receives the trimmed lines of exactly one block and produces
//! at most one definition, dispatching on the block's leading kind tag. A
//! block with no recognized kind tag is treated as a bare function title.

use crate::marker;
use crate::model::{enum_prefix, DefKind, Definition, Detail, Param, VOID_TYPE};
use crate::registry::Registry;
use crate::xref;

/// Scan raw file content for `/***` … `*/` blocks and register every
/// definition they produce. Lines outside blocks are ignored; text on the
/// opening delimiter line is discarded.
pub fn extract_blocks(content: &str, registry: &mut Registry) {
    let mut in_block = false;
    let mut block: Vec<String> = Vec::new();

    for raw in content.lines() {
        let line = raw.trim();

        if line.starts_with(marker::DEF_START) {
            in_block = true;
            continue;
        }
        if line.starts_with(marker::DEF_END) {
            if let Some(def) = parse_block(&block) {
                registry.register(def);
            }
            block.clear();
            in_block = false;
            continue;
        }
        if in_block {
            block.push(line.to_string());
        }
    }
}

/// Parse one isolated block into a definition.
///
/// Returns `None` for empty blocks and for blocks whose derived title is
/// empty; partial documentation is expected and dropped silently.
pub fn parse_block(lines: &[String]) -> Option<Definition> {
    let first = lines.first()?;

    for (kind_marker, kind) in marker::KIND_MARKERS {
        if first.starts_with(kind_marker) {
            let title = marker::value(kind_marker, first);
            return parse_def(title, *kind, lines);
        }
    }

    // No kind tag: the first line is a bare function title.
    let title = first.strip_prefix('*').unwrap_or(first).trim().to_string();
    if title.is_empty() {
        return None;
    }
    parse_def(title, DefKind::Function, &lines[1..])
}

fn parse_def(title: String, kind: DefKind, lines: &[String]) -> Option<Definition> {
    let def = if kind.is_function_like() {
        parse_function_def(title, kind, lines)
    } else {
        match kind {
            DefKind::Enum => parse_enum_def(title, lines),
            DefKind::Constant => parse_constant_def(title, lines),
            DefKind::Field | DefKind::ClassField => parse_field_def(title, kind, lines),
            _ => parse_generic_def(title, kind, lines),
        }
    };

    if def.title.is_empty() {
        return None;
    }
    Some(def)
}

/// Dispatch for the fields every kind shares: description, deprecation
/// note and namespace. Returns the number of extra lines consumed, or
/// `None` when the line carries none of the shared tags.
fn scan_common_tag(
    def: &mut Definition,
    line: &str,
    lines: &[String],
    index: usize,
) -> Option<usize> {
    if line.starts_with(marker::DESC) {
        let (text, extra) = marker::multiline_value(marker::DESC, lines, index);
        let text = text.trim().to_string();
        def.description = if text.is_empty() { None } else { Some(text) };
        return Some(extra);
    }
    if line.starts_with(marker::DEPRECATED) {
        let (text, extra) = marker::multiline_value(marker::DEPRECATED, lines, index);
        let text = text.trim().to_string();
        def.deprecated = if text.is_empty() { None } else { Some(text) };
        return Some(extra);
    }
    if line.starts_with(marker::NS) {
        def.namespace = Some(marker::value(marker::NS, line));
        return Some(0);
    }
    None
}

fn parse_function_def(title: String, kind: DefKind, lines: &[String]) -> Definition {
    let mut def = Definition::new(kind, title);
    let mut params: Vec<Param> = Vec::new();
    let mut returns = None;
    let mut return_type = VOID_TYPE.to_string();

    let mut index = 0;
    while index < lines.len() {
        let line = lines[index].trim();
        if line.starts_with(marker::DEF_END) {
            break;
        }
        if let Some(extra) = scan_common_tag(&mut def, line, lines, index) {
            index += extra + 1;
            continue;
        }
        // paramOpt must be tried first; param is a prefix of it.
        if line.starts_with(marker::PARAM_OPT) {
            let (text, extra) = marker::multiline_value(marker::PARAM_OPT, lines, index);
            params.push(Param::parse(&text, true));
            index += extra + 1;
            continue;
        }
        if line.starts_with(marker::PARAM) {
            let (text, extra) = marker::multiline_value(marker::PARAM, lines, index);
            params.push(Param::parse(&text, false));
            index += extra + 1;
            continue;
        }
        if line.starts_with(marker::RETURN) {
            let (text, extra) = marker::multiline_value(marker::RETURN, lines, index);
            let (parsed_type, parsed_returns) = split_return(&text);
            return_type = parsed_type;
            returns = parsed_returns;
            index += extra + 1;
            continue;
        }
        index += 1;
    }

    // Constructors are always titled after the namespace they construct.
    if kind == DefKind::Constructor {
        def.title = def.namespace.clone().unwrap_or_default();
    }
    // A dotted method title doubles as its namespace qualification.
    if kind == DefKind::Method && def.namespace.is_none() {
        if let Some(pos) = def.title.find('.') {
            let namespace = def.title[..pos].to_string();
            def.title = def.title[pos + 1..].to_string();
            def.namespace = Some(namespace);
        }
    }

    def.detail = Detail::Function {
        params,
        returns,
        return_type,
    };
    def
}

/// Split a `\return` value into type and description. A `<ref …>` marker at
/// the very start names the type directly; otherwise the first whitespace
/// run separates the two.
fn split_return(text: &str) -> (String, Option<String>) {
    let text = text.trim();
    if text.is_empty() {
        return (VOID_TYPE.to_string(), None);
    }
    if let Some((symbol, rest)) = xref::leading_ref(text) {
        return (symbol, none_if_empty(rest.trim()));
    }
    match text.split_once(char::is_whitespace) {
        Some((return_type, rest)) => (return_type.to_string(), none_if_empty(rest.trim())),
        None => (text.to_string(), None),
    }
}

fn none_if_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn parse_enum_def(title: String, lines: &[String]) -> Definition {
    let mut def = parse_generic_def(title, DefKind::Enum, lines);
    def.detail = Detail::Enum {
        prefix: enum_prefix(&def.title),
    };
    def
}

fn parse_constant_def(title: String, lines: &[String]) -> Definition {
    let mut def = Definition::new(DefKind::Constant, title);
    let mut value_type = None;

    let mut index = 0;
    while index < lines.len() {
        let line = lines[index].trim();
        if line.starts_with(marker::DEF_END) {
            break;
        }
        if let Some(extra) = scan_common_tag(&mut def, line, lines, index) {
            index += extra + 1;
            continue;
        }
        if line.starts_with(marker::TYPE) {
            value_type = Some(marker::value(marker::TYPE, line));
        }
        index += 1;
    }

    def.detail = Detail::Constant { value_type };
    def
}

fn parse_field_def(title: String, kind: DefKind, lines: &[String]) -> Definition {
    let mut def = Definition::new(kind, title);
    let mut value_type = None;
    let mut default_value = None;

    let mut index = 0;
    while index < lines.len() {
        let line = lines[index].trim();
        if line.starts_with(marker::DEF_END) {
            break;
        }
        if let Some(extra) = scan_common_tag(&mut def, line, lines, index) {
            index += extra + 1;
            continue;
        }
        // Field types may reference other symbols; resolve to display text.
        if line.starts_with(marker::TYPE) {
            value_type = Some(xref::resolve_refs_plain(&marker::value(marker::TYPE, line)));
        } else if line.starts_with(marker::DEFAULT) {
            default_value = Some(marker::value(marker::DEFAULT, line));
        }
        index += 1;
    }

    def.detail = Detail::Field {
        value_type,
        default_value,
    };
    def
}

fn parse_generic_def(title: String, kind: DefKind, lines: &[String]) -> Definition {
    let mut def = Definition::new(kind, title);

    let mut index = 0;
    while index < lines.len() {
        let line = lines[index].trim();
        if line.starts_with(marker::DEF_END) {
            break;
        }
        if let Some(extra) = scan_common_tag(&mut def, line, lines, index) {
            index += extra + 1;
            continue;
        }
        index += 1;
    }

    def
}

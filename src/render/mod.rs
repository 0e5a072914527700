//! Renderer dispatch and the document-shaping rules both renderers share.

pub mod doxygen;
pub mod html;

use crate::model::{DefKind, Param};
use crate::registry::Registry;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Which output the run produces. Exactly one is ever selected.
pub enum Mode {
    /// Single cross-linked HTML document (stdout or a file).
    Html,
    /// Doxygen-compatible stub files written into a directory.
    Doxygen(PathBuf),
}

/// Validate the render-mode configuration. Runs before any parsing; every
/// failure here is a configuration error that aborts the run.
pub fn select_mode(html: bool, doxygen: bool, output: Option<&Path>) -> Result<Mode> {
    if html && doxygen {
        bail!("--html and --doxygen are mutually exclusive");
    }
    if !doxygen {
        return Ok(Mode::Html);
    }
    let dir = match output {
        Some(dir) => dir,
        None => bail!("--doxygen requires --output naming a directory"),
    };
    if dir.is_file() {
        bail!(
            "--doxygen output must be a directory, not a file: {}",
            dir.display()
        );
    }
    Ok(Mode::Doxygen(dir.to_path_buf()))
}

/// Whether a kind gets its own documentation section. Descriptive kinds
/// only annotate namespaces and are never rendered standalone.
pub fn renders_docs(registry: &Registry, kind: DefKind) -> bool {
    !kind.is_descriptive() && registry.group(kind).count() > 0
}

/// Whether a kind contributes to the top-of-page namespace link index.
pub fn renders_namespace_link_list(registry: &Registry, kind: DefKind) -> bool {
    if kind.is_field_like() || kind == DefKind::Constructor || kind.is_descriptive() {
        return false;
    }
    let group = registry.group(kind);
    if matches!(kind, DefKind::Function | DefKind::Method | DefKind::Enum)
        && group.namespace_names.is_empty()
    {
        return false;
    }
    !group.members.is_empty()
}

/// Whether a kind contributes to the namespace contents index. Constants
/// and globals are flat lists with no namespace grouping to expand.
pub fn renders_namespace_contents_list(registry: &Registry, kind: DefKind) -> bool {
    if matches!(kind, DefKind::Constant | DefKind::Global) || kind.is_descriptive() {
        return false;
    }
    renders_namespace_link_list(registry, kind)
}

/// Heading over a kind's namespace link list. Function namespaces are the
/// plain "Namespaces" index; other kinds reuse their section heading.
pub fn namespace_list_title(kind: DefKind) -> &'static str {
    if kind == DefKind::Function {
        "Namespaces"
    } else {
        kind.heading()
    }
}

/// Compact signature fragment listing parameter labels, with the optional
/// tail bracketed: `(a, b[, c, d])`.
pub fn format_parameter_list(params: &[Param]) -> String {
    let mut text = String::from("(");
    let mut bracketed = false;

    for (index, param) in params.iter().enumerate() {
        if param.optional && !bracketed {
            text.push('[');
            bracketed = true;
        }
        if index > 0 {
            text.push_str(", ");
        }
        text.push_str(&param.label);
    }

    if bracketed {
        text.push(']');
    }
    text.push(')');
    text
}

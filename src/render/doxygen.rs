//! Doxygen stub renderer — per-kind `.dox` comment pages.
//!
//! Symbol references become `\ref`, parameter references `\a`. Section
//! labels reuse the registry anchors so links stay stable across modes.

use crate::model::{DefKind, Definition, Detail};
use crate::registry::{DefId, Registry};
use crate::render::format_parameter_list;
use crate::xref;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write one `.dox` file per kind with documentation, plus an index page,
/// into `dir` (created if absent).
pub fn write_files(registry: &Registry, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

    for kind in DefKind::ALL {
        if kind.is_descriptive() || registry.group(kind).count() == 0 {
            continue;
        }
        let path = dir.join(format!("{}.dox", file_token(kind)));
        fs::write(&path, kind_page(registry, kind))
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    let index_path = dir.join("index.dox");
    fs::write(&index_path, index_page(registry))
        .with_context(|| format!("failed to write {}", index_path.display()))?;

    Ok(())
}

fn file_token(kind: DefKind) -> String {
    kind.plural().replace(' ', "_")
}

/// Doxygen section labels allow word characters only.
fn section_label(anchor: &str) -> String {
    anchor
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

fn kind_page(registry: &Registry, kind: DefKind) -> String {
    let group = registry.group(kind);
    let mut out = String::from("/*!\n");
    out.push_str(&format!(
        "\\page Reference_page_{} {}\n",
        file_token(kind),
        kind.heading()
    ));

    let ids: Vec<DefId> = if matches!(kind, DefKind::Constant | DefKind::Global) {
        group.members.clone()
    } else {
        group
            .namespace_names
            .iter()
            .filter_map(|name| registry.namespace_info(name))
            .flat_map(|info| info.per_kind[kind.index()].iter().copied())
            .collect()
    };

    for id in ids {
        out.push_str(&definition_section(registry.def(id)));
    }

    out.push_str("*/\n");
    out
}

fn definition_section(def: &Definition) -> String {
    let mut out = format!(
        "\n\\section {} {}\n",
        section_label(&def.anchor()),
        def.qualified_title()
    );

    match &def.detail {
        Detail::Function {
            params,
            returns,
            return_type,
        } => {
            out.push_str(&format!(
                "<tt>{}{}</tt>\n",
                def.qualified_title(),
                format_parameter_list(params)
            ));
            if let Some(ref description) = def.description {
                out.push_str(&xref::process_description_doxygen(description));
                out.push('\n');
            }
            for param in params {
                let type_name = xref::resolve_refs_doxygen(&param.type_name);
                let description = xref::process_description_doxygen(&param.description);
                out.push_str(&format!(
                    "\\param {} ({}) {}\n",
                    param.label, type_name, description
                ));
            }
            match returns {
                Some(returns) => out.push_str(&format!(
                    "\\return ({}) {}\n",
                    return_type,
                    xref::process_description_doxygen(returns)
                )),
                None => out.push_str(&format!("\\return ({})\n", return_type)),
            }
        }
        Detail::Constant { value_type } | Detail::Field { value_type, .. } => {
            if let Some(value_type) = value_type {
                out.push_str(&format!(
                    "Type: {}\n",
                    xref::resolve_refs_doxygen(value_type)
                ));
            }
            if let Detail::Field {
                default_value: Some(default_value),
                ..
            } = &def.detail
            {
                out.push_str(&format!("Default: <tt>{}</tt>\n", default_value));
            }
            if let Some(ref description) = def.description {
                out.push_str(&xref::process_description_doxygen(description));
                out.push('\n');
            }
        }
        _ => {
            if let Some(ref description) = def.description {
                out.push_str(&xref::process_description_doxygen(description));
                out.push('\n');
            }
        }
    }

    if let Some(ref note) = def.deprecated {
        out.push_str(&format!(
            "\\deprecated {}\n",
            xref::process_description_doxygen(note)
        ));
    }

    out
}

/// Namespace overview: every namespace discovered by the grouped kinds,
/// annotated with the description of its class/namespace block when one
/// was documented.
fn index_page(registry: &Registry) -> String {
    let mut out = String::from("/*!\n\\page Reference_index API Reference\n");

    let mut seen: Vec<&str> = Vec::new();
    for kind in [DefKind::Function, DefKind::Method, DefKind::Enum] {
        for name in &registry.group(kind).namespace_names {
            if !seen.contains(&name.as_str()) {
                seen.push(name.as_str());
            }
        }
    }

    if !seen.is_empty() {
        out.push_str("\n\\par Namespaces\n");
        for name in seen {
            match registry
                .description_of(name)
                .and_then(|def| def.description.as_deref())
            {
                Some(description) => out.push_str(&format!(
                    "- {}: {}\n",
                    name,
                    xref::process_description_doxygen(description)
                )),
                None => out.push_str(&format!("- {}\n", name)),
            }
        }
    }

    for kind in DefKind::ALL {
        if kind.is_descriptive() || registry.group(kind).count() == 0 {
            continue;
        }
        out.push_str(&format!(
            "\n\\par {}\n- \\ref Reference_page_{}\n",
            kind.heading(),
            file_token(kind)
        ));
    }

    out.push_str("*/\n");
    out
}

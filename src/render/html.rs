//! HTML renderer — one self-contained, cross-linked document.
//!
//! Layout: namespace link index, namespace contents index, then the
//! per-definition entries, each anchored by its registry-assigned id.
//! Descriptions may carry raw markup and pass through unescaped.

use crate::model::{DefKind, Definition, Detail};
use crate::registry::{namespace_anchor, DefId, Registry};
use crate::render::{
    format_parameter_list, namespace_list_title, renders_docs, renders_namespace_contents_list,
    renders_namespace_link_list,
};
use crate::xref;

pub fn render(registry: &Registry, title: &str, stylesheet: &str) -> String {
    let mut link_list = String::new();
    let mut contents_list = String::new();
    let mut docs = String::new();

    for kind in DefKind::ALL {
        if renders_namespace_link_list(registry, kind) {
            link_list.push_str(&namespace_link_list(registry, kind));
        }
        if renders_namespace_contents_list(registry, kind) {
            contents_list.push_str(&namespace_contents_list(registry, kind));
        }
        if renders_docs(registry, kind) {
            docs.push_str(&kind_docs(registry, kind));
        }
    }

    format!(
        "<html>
  <head>
    <title>{title}</title>
    <style>
    {stylesheet}
    </style>
  </head>
  <body>
    <div style=\"position: fixed; margin-top: -32px; margin-left: -96px; width: 100%; text-align: right;\">
        <a href=\"#Reference_top\">Back to top</a>
    </div>
    <h1 id=\"Reference_top\">{title}</h1>
{link_list}    <hr/>
{contents_list}    <hr/>
{docs}  </body>
</html>
"
    )
}

/// The top-of-page index: namespaces for the grouped kinds, individual
/// entries for the flat ones.
fn namespace_link_list(registry: &Registry, kind: DefKind) -> String {
    let group = registry.group(kind);
    let mut text = format!("        <h3>{}</h3>\n", namespace_list_title(kind));
    text.push_str("        <ul>\n");

    if matches!(kind, DefKind::Function | DefKind::Method | DefKind::Enum) {
        for name in &group.namespace_names {
            if kind == DefKind::Enum {
                let is_enum_namespace = registry
                    .namespace_info(name)
                    .map(|info| info.is_enum_namespace)
                    .unwrap_or(false);
                if !is_enum_namespace {
                    continue;
                }
            }
            text.push_str(&format!(
                "            <li><a href=\"#{}\">{}</a></li>\n",
                namespace_anchor(name),
                name
            ));
        }
    } else {
        for id in &group.members {
            let def = registry.def(*id);
            text.push_str(&format!(
                "                    <li><a href=\"#{}\">{}</a></li>\n",
                def.anchor(),
                def.qualified_title()
            ));
        }
    }

    text.push_str("        </ul>\n");
    text
}

fn namespace_contents_list(registry: &Registry, kind: DefKind) -> String {
    if kind == DefKind::Enum {
        return enum_namespace_contents_list(registry);
    }

    let group = registry.group(kind);
    let mut text = format!("        <h3>{}</h3>\n", kind.heading());

    for name in &group.namespace_names {
        let info = match registry.namespace_info(name) {
            Some(info) => info,
            None => continue,
        };

        text.push_str(&format!(
            "            <p id=\"{}\">\n",
            namespace_anchor(name)
        ));
        text.push_str(&format!("                <h2>{}</h2>\n", name));

        // A namespace page lists every kind it contains, fields included.
        for member_kind in DefKind::ALL {
            let ids = &info.per_kind[member_kind.index()];
            if ids.is_empty() {
                continue;
            }
            text.push_str(&format!(
                "                <i>{}:</i>\n",
                member_kind.heading()
            ));
            text.push_str("                <ul>\n");
            for id in ids {
                text.push_str(&contents_item(registry, *id));
            }
            text.push_str("                </ul>\n");
        }

        text.push_str("            </p>\n");
    }

    text
}

/// Enum prefix namespaces get their own contents layout: the prefix as
/// code, holding only the enums grouped under it.
fn enum_namespace_contents_list(registry: &Registry) -> String {
    let kind = DefKind::Enum;
    let group = registry.group(kind);
    let mut text = format!("        <h3>{}</h3>\n", namespace_list_title(kind));

    for name in &group.namespace_names {
        let info = match registry.namespace_info(name) {
            Some(info) => info,
            None => continue,
        };
        if !info.is_enum_namespace {
            continue;
        }

        text.push_str(&format!(
            "            <p id=\"{}\">\n",
            namespace_anchor(name)
        ));
        text.push_str(&format!("                <h2><code>{}</code></h2>\n", name));

        let ids = &info.per_kind[kind.index()];
        if !ids.is_empty() {
            text.push_str("                <ul>\n");
            for id in ids {
                text.push_str(&contents_item(registry, *id));
            }
            text.push_str("                </ul>\n");
        }

        text.push_str("            </p>\n");
    }

    text
}

fn contents_item(registry: &Registry, id: DefId) -> String {
    let def = registry.def(id);
    format!(
        "                    <li><a href=\"#{}\">{}</a></li>\n",
        def.anchor(),
        def.qualified_title()
    )
}

/// All documentation entries of one kind, closed by the description tally.
fn kind_docs(registry: &Registry, kind: DefKind) -> String {
    let group = registry.group(kind);
    let mut text = format!("        <h3>{}</h3>\n", kind.heading());
    let mut described = 0;

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
        let def = registry.def(id);
        text.push_str(&definition_entry(registry, def));
        if def.description.is_some() {
            described += 1;
        }
    }

    text.push_str(&format!(
        "        <p>{} out of {} {} have descriptions. </p>\n",
        described,
        group.count(),
        kind.plural()
    ));
    text.push_str("        <hr/>\n");
    text
}

fn definition_entry(registry: &Registry, def: &Definition) -> String {
    let mut text = format!("        <p id=\"{}\">\n", def.anchor());

    if def.kind.is_function_like() {
        text.push_str(&function_entry(registry, def));
    } else {
        match &def.detail {
            Detail::Constant { value_type } => {
                text.push_str(&entry_title(def));
                if let Some(value_type) = value_type {
                    text.push_str(&type_div(value_type));
                }
                text.push_str(&maybe_description(registry, def));
            }
            Detail::Field {
                value_type,
                default_value,
            } => {
                text.push_str(&entry_title(def));
                if let Some(value_type) = value_type {
                    text.push_str(&type_div(value_type));
                }
                if let Some(default_value) = default_value {
                    text.push_str(&format!(
                        "        <div style=\"font-size: 14px;\"><b>Default: </b><code>{}</code></div>\n",
                        default_value
                    ));
                }
                text.push_str(&maybe_description(registry, def));
            }
            _ => {
                text.push_str(&entry_title(def));
                text.push_str(&maybe_description(registry, def));
            }
        }
    }

    if let Some(ref note) = def.deprecated {
        text.push_str(&format!(
            "        <div style=\"font-size: 14px;\"><b>Deprecated: </b>{}</div>\n",
            xref::process_description_html(note, registry)
        ));
    }

    text.push_str("        </p>\n");
    text
}

fn function_entry(registry: &Registry, def: &Definition) -> String {
    let title = def.qualified_title();
    let signature = format_parameter_list(def.params());

    // Undocumented entries are flagged by a red heading.
    let mut text = if def.description.is_some() {
        format!("        <h2 style=\"margin-bottom: 8px;\">{}</h2>\n", title)
    } else {
        format!(
            "        <h2 style=\"margin-bottom: 8px; color: red;\">{}</h2>\n",
            title
        )
    };

    text.push_str(&format!("        <code>{}{}</code>\n", title, signature));
    text.push_str(&maybe_description(registry, def));

    let params = def.params();
    if !params.is_empty() {
        text.push_str(
            "        <div style=\"font-weight: bold; margin-top: 8px;\">Parameters:</div>\n",
        );
        text.push_str("        <ul style=\"margin-top: 0px; font-size: 14px;\">\n");
        for param in params {
            let type_name = xref::resolve_refs_html(&param.type_name, registry);
            let mut description = xref::process_description_html(&param.description, registry);
            if !description.is_empty() {
                description = format!(": {}", description);
            }
            text.push_str(&format!(
                "        <li><b>{} ({})</b>{}</li>\n",
                param.label, type_name, description
            ));
        }
        text.push_str("        </ul>\n");
    }

    if let Detail::Function {
        returns: Some(ref returns),
        ..
    } = def.detail
    {
        let returns = xref::process_description_html(returns, registry);
        if !returns.is_empty() {
            text.push_str(
                "        <div style=\"font-weight: bold; margin-top: 8px;\">Returns:</div>\n",
            );
            text.push_str(&format!(
                "        <div style=\"font-size: 14px;\">{}</div>\n",
                returns
            ));
        }
    }

    text
}

fn entry_title(def: &Definition) -> String {
    format!(
        "        <h3 style=\"margin-bottom: 8px;\"><code>{}</code></h3>\n",
        def.qualified_title()
    )
}

fn type_div(value_type: &str) -> String {
    format!(
        "        <div style=\"font-size: 14px;\"><b>Type: </b>{}</div>\n",
        value_type
    )
}

fn maybe_description(registry: &Registry, def: &Definition) -> String {
    match def.description {
        Some(ref description) => format!(
            "        <div style=\"margin-top: 8px; font-size: 14px;\">{}</div>\n",
            xref::process_description_html(description, registry)
        ),
        None => String::new(),
    }
}

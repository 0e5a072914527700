//! Data model for parsed definitions — format-agnostic.

use regex::Regex;
use std::sync::LazyLock;

/// Return type recorded for functions that never declare one.
pub const VOID_TYPE: &str = "void";

/// How many definition kinds exist; sizes the per-kind index buckets.
pub const KIND_COUNT: usize = 10;

/// The kind of construct a documentation block describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefKind {
    Function,
    Method,
    Constructor,
    Field,
    ClassField,
    Enum,
    Constant,
    Global,
    Class,
    Namespace,
}

impl DefKind {
    pub const ALL: [DefKind; KIND_COUNT] = [
        DefKind::Function,
        DefKind::Method,
        DefKind::Constructor,
        DefKind::Field,
        DefKind::ClassField,
        DefKind::Enum,
        DefKind::Constant,
        DefKind::Global,
        DefKind::Class,
        DefKind::Namespace,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Plural noun used in anchors and the per-kind count lines.
    pub fn plural(self) -> &'static str {
        match self {
            DefKind::Function => "functions",
            DefKind::Method => "methods",
            DefKind::Constructor => "constructors",
            DefKind::Field => "fields",
            DefKind::ClassField => "class fields",
            DefKind::Enum => "enums",
            DefKind::Constant => "constants",
            DefKind::Global => "globals",
            DefKind::Class => "classes",
            DefKind::Namespace => "namespaces",
        }
    }

    /// Section heading used by the renderers.
    pub fn heading(self) -> &'static str {
        match self {
            DefKind::Function => "Class methods",
            DefKind::Method => "Instance methods",
            DefKind::Constructor => "Instance constructors",
            DefKind::Field => "Instance fields",
            DefKind::ClassField => "Class fields",
            DefKind::Enum => "Enums",
            DefKind::Constant => "Constants",
            DefKind::Global => "Globals",
            DefKind::Class => "Classes",
            DefKind::Namespace => "Namespaces",
        }
    }

    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            DefKind::Function | DefKind::Method | DefKind::Constructor
        )
    }

    pub fn is_field_like(self) -> bool {
        matches!(self, DefKind::Field | DefKind::ClassField)
    }

    /// Classes and namespaces only describe a grouping; they are never
    /// rendered as standalone entries.
    pub fn is_descriptive(self) -> bool {
        matches!(self, DefKind::Class | DefKind::Namespace)
    }
}

static RE_PARAM_TYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((.+?)\)").unwrap());

static RE_DEFAULT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(default:\s*`([^`]+)`\)").unwrap());

/// One parameter of a function-like definition.
#[derive(Debug, Clone)]
pub struct Param {
    pub label: String,
    pub type_name: String,
    pub description: String,
    /// Extracted from a ``(default: `...`)`` pattern in the description.
    pub default_value: Option<String>,
    pub optional: bool,
}

impl Param {
    /// Parse `label (Type): description` parameter text.
    ///
    /// Malformed text (missing parenthesis or colon) degrades to a Param
    /// with empty label/type and the raw text kept as the description.
    /// The `(Type) label: description` ordering is also accepted.
    pub fn parse(text: &str, optional: bool) -> Param {
        let paren = text.find('(');
        let colon = text.find(':');

        let mut label = paren
            .map(|pos| text[..pos].trim().to_string())
            .unwrap_or_default();
        let head = colon.map(|pos| &text[..pos]).unwrap_or(text);
        let type_name = RE_PARAM_TYPE
            .captures(head)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default();
        let mut description = colon
            .map(|pos| text[pos + 1..].trim().to_string())
            .unwrap_or_else(|| text.trim().to_string());

        if label.is_empty() {
            if let (Some(close), Some(colon)) = (head.find(')'), colon) {
                label = text[close + 1..colon].trim().to_string();
            }
        }

        let default_value = RE_DEFAULT
            .captures(&description)
            .map(|caps| caps[1].to_string());
        if default_value.is_some() {
            description = RE_DEFAULT.replace(&description, "").trim().to_string();
        }

        Param {
            label,
            type_name,
            description,
            default_value,
            optional,
        }
    }
}

/// Kind-specific payload of a definition.
#[derive(Debug, Clone)]
pub enum Detail {
    Function {
        params: Vec<Param>,
        returns: Option<String>,
        return_type: String,
    },
    Enum {
        prefix: Option<String>,
    },
    Constant {
        value_type: Option<String>,
    },
    Field {
        value_type: Option<String>,
        default_value: Option<String>,
    },
    Plain,
}

/// A parsed documentation block: common header plus kind-specific detail.
#[derive(Debug, Clone)]
pub struct Definition {
    pub kind: DefKind,
    pub title: String,
    pub description: Option<String>,
    pub deprecated: Option<String>,
    pub namespace: Option<String>,
    pub detail: Detail,
}

impl Definition {
    pub fn new(kind: DefKind, title: String) -> Definition {
        let detail = if kind.is_function_like() {
            Detail::Function {
                params: Vec::new(),
                returns: None,
                return_type: VOID_TYPE.to_string(),
            }
        } else {
            match kind {
                DefKind::Enum => Detail::Enum { prefix: None },
                DefKind::Constant => Detail::Constant { value_type: None },
                DefKind::Field | DefKind::ClassField => Detail::Field {
                    value_type: None,
                    default_value: None,
                },
                _ => Detail::Plain,
            }
        };

        Definition {
            kind,
            title,
            description: None,
            deprecated: None,
            namespace: None,
            detail,
        }
    }

    /// The registry lookup key: methods and field-like definitions are
    /// qualified by their namespace, everything else by title alone.
    pub fn qualified_title(&self) -> String {
        if self.kind.is_field_like() || self.kind == DefKind::Method {
            if let Some(ref namespace) = self.namespace {
                return format!("{}.{}", namespace, self.title);
            }
        }
        self.title.clone()
    }

    /// Globally unique anchor, derived from kind and qualified title.
    pub fn anchor(&self) -> String {
        format!(
            "Reference_{}_{}",
            self.kind.plural().replace(' ', "_"),
            self.qualified_title().replace('.', "_")
        )
    }

    pub fn params(&self) -> &[Param] {
        match &self.detail {
            Detail::Function { params, .. } => params,
            _ => &[],
        }
    }
}

/// Derive an enum's prefix namespace from its title: everything up to and
/// including the first underscore, suffixed with the `*` wildcard.
pub fn enum_prefix(title: &str) -> Option<String> {
    title.find('_').map(|pos| format!("{}*", &title[..=pos]))
}

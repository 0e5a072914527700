//! Process-wide symbol registry.
//!
//! The registry owns every parsed definition in an append-only arena; all
//! grouping indices (per-kind lists, namespace buckets, the title→anchor
//! map) store integer ids into that arena. Renderers only ever read.

use crate::model::{DefKind, Definition, Detail, KIND_COUNT};
use std::collections::{HashMap, HashSet};

pub type DefId = usize;

/// Anchor assigned to a namespace (or enum prefix namespace) page entry.
pub fn namespace_anchor(name: &str) -> String {
    format!("Reference_{}", name)
}

/// Per-kind collection: registration-ordered members plus the names of the
/// namespaces its members were grouped under.
#[derive(Default)]
pub struct Group {
    pub members: Vec<DefId>,
    /// Discovery-ordered until `finalize` sorts it (functions, methods and
    /// enums only).
    pub namespace_names: Vec<String>,
    seen: HashSet<String>,
}

impl Group {
    pub fn count(&self) -> usize {
        self.members.len()
    }

    fn note_namespace(&mut self, name: &str) {
        if self.seen.insert(name.to_string()) {
            self.namespace_names.push(name.to_string());
        }
    }
}

/// Everything known about one namespace: which definitions of each kind it
/// holds, and whether it is a synthetic enum prefix namespace.
pub struct NamespaceInfo {
    pub is_enum_namespace: bool,
    pub per_kind: Vec<Vec<DefId>>,
}

impl Default for NamespaceInfo {
    fn default() -> Self {
        NamespaceInfo {
            is_enum_namespace: false,
            per_kind: vec![Vec::new(); KIND_COUNT],
        }
    }
}

pub struct Registry {
    defs: Vec<Definition>,
    groups: Vec<Group>,
    infos: HashMap<String, NamespaceInfo>,
    /// Qualified title → anchor. Duplicate registrations overwrite the
    /// lookup entry; both definitions stay in their kind group.
    anchors: HashMap<String, String>,
    /// Class and namespace definitions indexed by title, so renderers can
    /// attach their descriptions to namespace listings.
    descriptions: HashMap<String, DefId>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry {
            defs: Vec::new(),
            groups: (0..KIND_COUNT).map(|_| Group::default()).collect(),
            infos: HashMap::new(),
            anchors: HashMap::new(),
            descriptions: HashMap::new(),
        }
    }

    pub fn def(&self, id: DefId) -> &Definition {
        &self.defs[id]
    }

    pub fn group(&self, kind: DefKind) -> &Group {
        &self.groups[kind.index()]
    }

    pub fn namespace_info(&self, name: &str) -> Option<&NamespaceInfo> {
        self.infos.get(name)
    }

    pub fn lookup_anchor(&self, title: &str) -> Option<&str> {
        self.anchors.get(title).map(|anchor| anchor.as_str())
    }

    pub fn description_of(&self, title: &str) -> Option<&Definition> {
        self.descriptions.get(title).map(|id| &self.defs[*id])
    }

    /// Record a freshly parsed definition: assign its anchor, append it to
    /// its kind group and group it by namespace. An enum with no explicit
    /// namespace but a derivable prefix groups under the synthetic prefix
    /// namespace instead.
    pub fn register(&mut self, def: Definition) -> DefId {
        let id = self.defs.len();
        let kind = def.kind;

        self.anchors.insert(def.qualified_title(), def.anchor());

        self.groups[kind.index()].members.push(id);

        match def.namespace.clone() {
            Some(namespace) => {
                self.groups[kind.index()].note_namespace(&namespace);
                self.info_mut(&namespace).per_kind[kind.index()].push(id);
            }
            None => {
                if let Detail::Enum {
                    prefix: Some(prefix),
                } = &def.detail
                {
                    let prefix = prefix.clone();
                    self.groups[kind.index()].note_namespace(&prefix);
                    let info = self.info_mut(&prefix);
                    info.is_enum_namespace = true;
                    info.per_kind[kind.index()].push(id);
                }
            }
        }

        // Fields are listed alongside methods on namespace pages, so their
        // namespaces also enter the function group's traversal list.
        if kind.is_field_like() {
            if let Some(namespace) = def.namespace.clone() {
                self.groups[DefKind::Function.index()].note_namespace(&namespace);
            }
        }

        if kind.is_descriptive() {
            self.descriptions.insert(def.title.clone(), id);
        }

        self.defs.push(def);
        id
    }

    /// Post-parse normalization: namespace lists whose grouping key sorts
    /// meaningfully (functions, methods, enums) become lexicographic; every
    /// other group keeps discovery order. Run once, after all input files.
    pub fn finalize(&mut self) {
        for kind in [DefKind::Function, DefKind::Method, DefKind::Enum] {
            self.groups[kind.index()].namespace_names.sort();
        }
    }

    fn info_mut(&mut self, name: &str) -> &mut NamespaceInfo {
        if !self.infos.contains_key(name) {
            self.anchors.insert(name.to_string(), namespace_anchor(name));
        }
        self.infos.entry(name.to_string()).or_default()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

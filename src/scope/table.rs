// src/scope/table.rs

use std::collections::HashMap;

use tracing::trace;

use crate::scope::path::split_path;
use crate::types::{JobId, PropertiesId, ScopeId, WorkflowId};

/// What a name in a scope refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Job(JobId),
    Properties(PropertiesId),
    /// A workflow; lookups may continue into its scope.
    Workflow { id: WorkflowId, scope: ScopeId },
}

impl Binding {
    /// The scope a dotted path continues into, if this binding has one.
    pub fn nested_scope(&self) -> Option<ScopeId> {
        match self {
            Binding::Workflow { scope, .. } => Some(*scope),
            Binding::Job(_) | Binding::Properties(_) => None,
        }
    }

    pub fn as_job(&self) -> Option<JobId> {
        match self {
            Binding::Job(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_properties(&self) -> Option<PropertiesId> {
        match self {
            Binding::Properties(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_workflow(&self) -> Option<WorkflowId> {
        match self {
            Binding::Workflow { id, .. } => Some(*id),
            _ => None,
        }
    }
}

/// One level of names.
///
/// The parent is an index into the owning [`ScopeTable`]; a scope never owns
/// its parent.
#[derive(Debug, Clone)]
pub struct NamedScope {
    level: String,
    parent: Option<ScopeId>,
    bindings: HashMap<String, Binding>,
}

impl NamedScope {
    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Binding for `name` at this level only.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Arena of every scope in a project.
#[derive(Debug, Clone, Default)]
pub struct ScopeTable {
    scopes: Vec<NamedScope>,
}

impl ScopeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scope without a parent.
    pub fn create_root(&mut self, level: &str) -> ScopeId {
        self.push(level, None)
    }

    /// Create a scope whose unresolved names fall through to `parent`.
    pub fn create_child(&mut self, parent: ScopeId, level: &str) -> ScopeId {
        self.push(level, Some(parent))
    }

    fn push(&mut self, level: &str, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(NamedScope {
            level: level.to_string(),
            parent,
            bindings: HashMap::new(),
        });
        id
    }

    pub fn get(&self, id: ScopeId) -> Option<&NamedScope> {
        self.scopes.get(id.0)
    }

    /// Bind `name` at the level `scope`, replacing any previous binding.
    ///
    /// Returns the replaced binding, if any.
    pub fn bind(&mut self, scope: ScopeId, name: &str, binding: Binding) -> Option<Binding> {
        let replaced = self.scopes[scope.0]
            .bindings
            .insert(name.to_string(), binding);
        if replaced.is_some() {
            trace!(scope = %self.scopes[scope.0].level, name, "scope: rebinding name");
        }
        replaced
    }

    pub fn set_level(&mut self, scope: ScopeId, level: &str) {
        self.scopes[scope.0].level = level.to_string();
    }

    /// Copy `scope` into a new scope with the same parent.
    ///
    /// With `keep_bindings == false` the copy starts empty.
    pub fn clone_scope(&mut self, scope: ScopeId, keep_bindings: bool) -> ScopeId {
        let source = &self.scopes[scope.0];
        let copy = NamedScope {
            level: source.level.clone(),
            parent: source.parent,
            bindings: if keep_bindings {
                source.bindings.clone()
            } else {
                HashMap::new()
            },
        };
        let id = ScopeId(self.scopes.len());
        self.scopes.push(copy);
        id
    }

    /// Resolve a dotted `path` starting at `scope`.
    ///
    /// Every segment is resolved at the current level first and then up the
    /// parent chain. After the first segment, resolution continues from the
    /// nested scope of whatever was found; reaching a binding without a
    /// nested scope while segments remain yields `None`.
    pub fn lookup(&self, scope: ScopeId, path: &str) -> Option<&Binding> {
        let segments = split_path(path)?;

        let mut current = scope;
        let mut found: Option<&Binding> = None;

        for segment in segments {
            if let Some(previous) = found {
                current = previous.nested_scope()?;
            }
            found = Some(self.resolve_name(current, segment)?);
        }

        found
    }

    /// Resolve a single name at `scope`, then up its parent chain.
    pub fn resolve_name(&self, scope: ScopeId, name: &str) -> Option<&Binding> {
        let mut next = Some(scope);
        while let Some(id) = next {
            let level = self.scopes.get(id.0)?;
            if let Some(binding) = level.bindings.get(name) {
                return Some(binding);
            }
            next = level.parent;
        }
        None
    }
}

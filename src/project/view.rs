// src/project/view.rs

use crate::arena::Arena;
use crate::job::{Job, Properties};
use crate::scope::Binding;
use crate::types::ScopeId;
use crate::workflow::Workflow;

/// What a successful `lookup_ref` points at.
#[derive(Debug, Clone, Copy)]
pub enum Ref<'a> {
    Job(&'a Job),
    Properties(&'a Properties),
    Workflow(&'a Workflow),
}

impl<'a> Ref<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Ref::Job(job) => job.name(),
            Ref::Properties(properties) => properties.name(),
            Ref::Workflow(workflow) => workflow.name(),
        }
    }

    pub fn as_job(&self) -> Option<&'a Job> {
        match self {
            Ref::Job(job) => Some(job),
            _ => None,
        }
    }
}

/// Read-only view of the project rooted at one scope.
///
/// Passed to configuration callbacks so they can probe what is already
/// declared while they fill in a new job or property bag.
#[derive(Debug, Clone, Copy)]
pub struct ScopeView<'a> {
    arena: &'a Arena,
    workflows: &'a [Workflow],
    scope: ScopeId,
}

impl<'a> ScopeView<'a> {
    pub(crate) fn new(arena: &'a Arena, workflows: &'a [Workflow], scope: ScopeId) -> Self {
        Self {
            arena,
            workflows,
            scope,
        }
    }

    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Raw binding for `path`, or `None`.
    pub fn lookup(&self, path: &str) -> Option<Binding> {
        self.arena.scopes.lookup(self.scope, path).copied()
    }

    /// Entity bound at `path`, or `None` for anything malformed or unbound.
    pub fn lookup_ref(&self, path: &str) -> Option<Ref<'a>> {
        let binding = self.arena.scopes.lookup(self.scope, path)?;
        Some(match *binding {
            Binding::Job(id) => Ref::Job(self.arena.job(id)),
            Binding::Properties(id) => Ref::Properties(self.arena.properties(id)),
            Binding::Workflow { id, .. } => Ref::Workflow(self.workflows.get(id.0)?),
        })
    }
}

// src/project/mod.rs

//! The project: every workflow, plus the arena their jobs, property bags
//! and scopes live in.
//!
//! The project always has a workflow named `default` whose scope is the
//! global scope. Jobs declared outside any workflow go there, and every
//! other workflow's scope falls through to it. Workflows are bound into the
//! global scope by name, so `"daily.report"` resolves from the top.
//!
//! - [`dsl`] provides [`WorkflowBuilder`], the declaration surface used
//!   inside a workflow block.
//! - [`view`] provides the read-only [`ScopeView`] handed to configuration
//!   callbacks.

pub mod dsl;
pub mod view;

use tracing::debug;

use crate::arena::Arena;
use crate::build::Emitter;
use crate::errors::{JobflowError, Result};
use crate::job::{DefaultJobFactory, JobFactory};
use crate::scope::Binding;
use crate::types::{DEFAULT_WORKFLOW, JobId, ScopeId, WorkflowId};
use crate::workflow::Workflow;

pub use dsl::WorkflowBuilder;
pub use view::{Ref, ScopeView};

#[derive(Debug)]
pub struct Project {
    factory: Box<dyn JobFactory>,
    arena: Arena,
    workflows: Vec<Workflow>,
    default_workflow: WorkflowId,
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

impl Project {
    pub fn new() -> Self {
        Self::with_factory(DefaultJobFactory)
    }

    pub fn with_factory(factory: impl JobFactory + 'static) -> Self {
        let mut arena = Arena::new();
        let global = arena.scopes.create_root(DEFAULT_WORKFLOW);
        let launch = arena.add_job(factory.make_launch_job(DEFAULT_WORKFLOW));

        Self {
            factory: Box::new(factory),
            arena,
            workflows: vec![Workflow::new(DEFAULT_WORKFLOW, global, launch)],
            default_workflow: WorkflowId(0),
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn global_scope(&self) -> ScopeId {
        self.default_workflow().scope()
    }

    pub fn default_workflow(&self) -> &Workflow {
        self.get_workflow(self.default_workflow)
    }

    pub fn get_workflow(&self, id: WorkflowId) -> &Workflow {
        &self.workflows[id.0]
    }

    /// Ids of every workflow, `default` first, then in declaration order.
    pub fn workflow_ids(&self) -> impl Iterator<Item = WorkflowId> + '_ {
        (0..self.workflows.len()).map(WorkflowId)
    }

    /// Workflow named `name` at the top level.
    pub fn find_workflow(&self, name: &str) -> Option<WorkflowId> {
        if name == DEFAULT_WORKFLOW {
            return Some(self.default_workflow);
        }
        self.arena
            .scopes
            .get(self.global_scope())
            .and_then(|scope| scope.get(name))
            .and_then(Binding::as_workflow)
    }

    /// Read-only view rooted at `scope`.
    pub fn view(&self, scope: ScopeId) -> ScopeView<'_> {
        ScopeView::new(&self.arena, &self.workflows, scope)
    }

    /// Resolve `path` from the global scope. Never errors: anything
    /// malformed or unbound is `None`.
    pub fn lookup_ref(&self, path: &str) -> Option<Ref<'_>> {
        self.view(self.global_scope()).lookup_ref(path)
    }

    /// Declare jobs and property bags in the `default` workflow.
    pub fn global<F>(&mut self, configure: F) -> Result<()>
    where
        F: FnOnce(&mut WorkflowBuilder<'_>) -> Result<()>,
    {
        let id = self.default_workflow;
        configure(&mut WorkflowBuilder::new(self, id))
    }

    /// Declare (or reopen) the workflow `name` and run `configure` on it.
    ///
    /// Naming the `default` workflow configures the global one.
    pub fn workflow<F>(&mut self, name: &str, configure: F) -> Result<WorkflowId>
    where
        F: FnOnce(&mut WorkflowBuilder<'_>) -> Result<()>,
    {
        let id = match self.find_workflow(name) {
            Some(existing) => existing,
            None => {
                let scope = self.arena.scopes.create_child(self.global_scope(), name);
                let launch = self.arena.add_job(self.factory.make_launch_job(name));
                self.insert_workflow(Workflow::new(name, scope, launch))
            }
        };

        configure(&mut WorkflowBuilder::new(self, id))?;
        Ok(id)
    }

    /// Clone the workflow at `path`, optionally renamed, then configure the
    /// copy. The copy's name must not already be taken by a workflow.
    pub fn add_workflow<F>(
        &mut self,
        path: &str,
        rename: Option<&str>,
        configure: F,
    ) -> Result<WorkflowId>
    where
        F: FnOnce(&mut WorkflowBuilder<'_>) -> Result<()>,
    {
        let source = self
            .arena
            .scopes
            .lookup(self.global_scope(), path)
            .and_then(Binding::as_workflow)
            .ok_or_else(|| JobflowError::EntityNotFound(format!("workflow '{path}'")))?;

        let name = rename.unwrap_or_else(|| self.workflows[source.0].name());
        if self.find_workflow(name).is_some() {
            return Err(JobflowError::ConfigError(format!(
                "cannot add workflow '{name}' from '{path}': a workflow with that name already exists"
            )));
        }
        let name = name.to_string();

        let copy = self.workflows[source.0].clone_as(&mut self.arena, &name);
        let id = self.insert_workflow(copy);
        configure(&mut WorkflowBuilder::new(self, id))?;
        Ok(id)
    }

    fn insert_workflow(&mut self, workflow: Workflow) -> WorkflowId {
        let id = WorkflowId(self.workflows.len());
        let binding = Binding::Workflow {
            id,
            scope: workflow.scope(),
        };
        self.arena
            .scopes
            .bind(self.global_scope(), workflow.name(), binding);
        debug!(workflow = %workflow.name(), "declared workflow");
        self.workflows.push(workflow);
        id
    }

    /// Dependency closure of workflow `id`; see [`Workflow::build_job_list`].
    pub fn build_job_list(&mut self, id: WorkflowId) -> Result<Vec<JobId>> {
        self.workflows[id.0].build_job_list(&mut self.arena)
    }

    /// Resolve every declared job of workflow `id` without computing a
    /// closure. Returns `(job, resolved dependencies)` pairs.
    pub fn resolve_declared(&mut self, id: WorkflowId) -> Result<Vec<(JobId, Vec<JobId>)>> {
        let workflow = &self.workflows[id.0];
        let mut pairs = Vec::with_capacity(workflow.jobs().len());
        for job in workflow.jobs() {
            let resolved = workflow.resolve_dependencies(&self.arena, *job)?;
            self.arena.job_mut(*job).set_resolved(resolved.clone());
            pairs.push((*job, resolved));
        }
        Ok(pairs)
    }

    /// Emit workflows through `emitter`.
    ///
    /// With an empty `only`, every workflow is built (`default` first, and
    /// only when it declares something). Otherwise just the named ones, in
    /// the given order; an unknown name is an error.
    pub fn build(
        &mut self,
        emitter: &mut Emitter<'_>,
        parent_name: Option<&str>,
        only: &[String],
    ) -> Result<()> {
        for id in self.selected_workflows(only)? {
            self.workflows[id.0].build(&mut self.arena, emitter, parent_name)?;
        }
        Ok(())
    }

    /// Workflows [`Project::build`] would emit for `only`, in build order.
    pub fn selected_workflows(&self, only: &[String]) -> Result<Vec<WorkflowId>> {
        if only.is_empty() {
            return Ok(self
                .workflow_ids()
                .filter(|id| {
                    let workflow = self.get_workflow(*id);
                    !workflow.is_default()
                        || !workflow.jobs().is_empty()
                        || !workflow.properties().is_empty()
                })
                .collect());
        }

        only.iter()
            .map(|name| {
                self.find_workflow(name)
                    .ok_or_else(|| JobflowError::EntityNotFound(format!("workflow '{name}'")))
            })
            .collect()
    }
}

// src/workflow/mod.rs

//! Workflows: a scope, the jobs and property bags declared in it, and the
//! launch job whose dependencies are the workflow's `executes` targets.
//!
//! - [`closure`] computes the breadth-first dependency closure.
//! - [`build`] emits the closure (or, for `default`, every declared job).
//! - [`clone`] duplicates a workflow with fresh jobs and a fresh scope.

pub mod build;
pub mod clone;
pub mod closure;

use tracing::warn;

use crate::arena::Arena;
use crate::job::{Job, Properties, union_into};
use crate::scope::Binding;
use crate::types::{DEFAULT_WORKFLOW, JobId, PropertiesId, ScopeId};

#[derive(Debug, Clone)]
pub struct Workflow {
    name: String,
    scope: ScopeId,
    jobs: Vec<JobId>,
    properties: Vec<PropertiesId>,
    launch_job: JobId,
    launch_dependencies: Vec<String>,
}

impl Workflow {
    /// A workflow with no declared jobs. `launch_job` must already be in the
    /// arena; it is not bound in `scope`.
    pub fn new(name: impl Into<String>, scope: ScopeId, launch_job: JobId) -> Self {
        Self {
            name: name.into(),
            scope,
            jobs: Vec::new(),
            properties: Vec::new(),
            launch_job,
            launch_dependencies: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_WORKFLOW
    }

    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Declared jobs, in declaration order.
    pub fn jobs(&self) -> &[JobId] {
        &self.jobs
    }

    pub fn properties(&self) -> &[PropertiesId] {
        &self.properties
    }

    pub fn launch_job(&self) -> JobId {
        self.launch_job
    }

    /// The `executes` targets, duplicate-free, in order of first mention.
    pub fn launch_dependencies(&self) -> &[String] {
        &self.launch_dependencies
    }

    /// Add `job` to the arena, append it to this workflow and bind it by
    /// name. A job already bound under the same name is shadowed.
    pub fn register_job(&mut self, arena: &mut Arena, job: Job) -> JobId {
        let name = job.name().to_string();
        let id = arena.add_job(job);
        self.jobs.push(id);
        arena.scopes.bind(self.scope, &name, Binding::Job(id));
        id
    }

    pub fn register_properties(&mut self, arena: &mut Arena, properties: Properties) -> PropertiesId {
        let name = properties.name().to_string();
        let id = arena.add_properties(properties);
        self.properties.push(id);
        arena.scopes.bind(self.scope, &name, Binding::Properties(id));
        id
    }

    /// Add launch targets. Repeated names are ignored.
    pub fn executes<I, S>(&mut self, arena: &mut Arena, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        union_into(&mut self.launch_dependencies, names);
        arena
            .job_mut(self.launch_job)
            .depends(self.launch_dependencies.iter().cloned());
    }

    /// Deprecated spelling of [`Workflow::executes`].
    pub fn depends<I, S>(&mut self, arena: &mut Arena, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        warn!(workflow = %self.name, "`depends` on a workflow is deprecated; use `executes`");
        self.executes(arena, names);
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn executes_and_depends_accumulate_into_launch_job() {
        let mut arena = Arena::new();
        let mut wf = workflow_in(&mut arena, "daily");

        wf.executes(&mut arena, ["a", "b"]);
        wf.depends(&mut arena, ["b", "c"]);
        wf.executes(&mut arena, ["a"]);

        assert_eq!(wf.launch_dependencies(), ["a", "b", "c"]);
        assert_eq!(arena.job(wf.launch_job()).dependency_names(), ["a", "b", "c"]);
    }

    #[test]
    fn registered_jobs_are_bound_by_name() {
        let mut arena = Arena::new();
        let mut wf = workflow_in(&mut arena, "daily");

        let id = wf.register_job(&mut arena, command("a", &[]));
        assert_eq!(
            arena.scopes.lookup(wf.scope(), "a"),
            Some(&Binding::Job(id))
        );
        assert_eq!(wf.jobs(), [id]);
    }
}

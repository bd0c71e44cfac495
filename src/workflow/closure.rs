// src/workflow/closure.rs

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::arena::Arena;
use crate::errors::{JobflowError, Result};
use crate::types::JobId;
use crate::workflow::Workflow;

impl Workflow {
    /// Dependency closure of the launch job, in breadth-first discovery
    /// order: the launch job first, then each frontier in turn.
    ///
    /// Resolved ids are recorded on every visited job. Any dependency name
    /// that does not resolve to a job in this workflow's scope aborts with
    /// [`JobflowError::UnresolvedDependency`].
    pub fn build_job_list(&self, arena: &mut Arena) -> Result<Vec<JobId>> {
        let mut queue = VecDeque::from([self.launch_job()]);
        let mut seen: HashSet<JobId> = HashSet::new();
        let mut order: Vec<JobId> = Vec::new();

        while let Some(id) = queue.pop_front() {
            let resolved = self.resolve_dependencies(arena, id)?;
            arena.job_mut(id).set_resolved(resolved.clone());

            if seen.insert(id) {
                order.push(id);
            }

            for dep in resolved {
                if !seen.contains(&dep) {
                    queue.push_back(dep);
                }
            }
        }

        debug!(
            workflow = %self.name(),
            jobs = order.len(),
            "computed dependency closure"
        );
        Ok(order)
    }

    /// Resolve the declared dependency names of `job` against this
    /// workflow's scope. The result is duplicate-free and keeps declaration
    /// order.
    pub fn resolve_dependencies(&self, arena: &Arena, job: JobId) -> Result<Vec<JobId>> {
        let declared = arena.job(job);
        let mut resolved = Vec::with_capacity(declared.dependency_names().len());

        for name in declared.dependency_names() {
            let dep = arena
                .scopes
                .lookup(self.scope(), name)
                .and_then(|binding| binding.as_job())
                .ok_or_else(|| JobflowError::UnresolvedDependency {
                    workflow: self.name().to_string(),
                    job: declared.name().to_string(),
                    dependency: name.clone(),
                })?;
            if !resolved.contains(&dep) {
                resolved.push(dep);
            }
        }

        Ok(resolved)
    }
}

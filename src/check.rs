// src/check.rs

//! Static checks run over a fully declared project before anything is
//! emitted.
//!
//! Hard failures:
//! - an unresolved dependency name (same error the build would raise),
//! - a dependency cycle among the jobs a workflow would emit.
//!
//! Warnings (logged and returned, never fatal):
//! - jobs declared in a workflow but unreachable from its launch job,
//! - a workflow without `executes` targets,
//! - `executes` targets on the `default` workflow, which are ignored,
//! - names that dotted lookups or file names will trip over.

use std::sync::LazyLock;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use regex::Regex;
use tracing::warn;

use crate::errors::{JobflowError, Result};
use crate::project::Project;
use crate::types::{JobId, WorkflowId};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("name pattern is valid"));

/// Non-fatal findings of [`check_project`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub warnings: Vec<String>,
}

impl CheckReport {
    fn warn(&mut self, message: String) {
        warn!("{message}");
        self.warnings.push(message);
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Check every workflow of `project`.
pub fn check_project(project: &mut Project) -> Result<CheckReport> {
    let mut report = CheckReport::default();
    let ids: Vec<WorkflowId> = project.workflow_ids().collect();

    for id in ids {
        if project.get_workflow(id).is_default() {
            check_default(project, id, &mut report)?;
        } else {
            check_workflow(project, id, &mut report)?;
        }
        check_names(project, id, &mut report);
    }

    Ok(report)
}

fn check_default(project: &mut Project, id: WorkflowId, report: &mut CheckReport) -> Result<()> {
    let edges = project.resolve_declared(id)?;
    ensure_acyclic(project, id, &edges)?;

    let workflow = project.get_workflow(id);
    if !workflow.launch_dependencies().is_empty() {
        report.warn(format!(
            "`executes` on the default workflow is ignored ({})",
            workflow.launch_dependencies().join(", ")
        ));
    }
    Ok(())
}

fn check_workflow(project: &mut Project, id: WorkflowId, report: &mut CheckReport) -> Result<()> {
    let closure = project.build_job_list(id)?;
    let edges: Vec<(JobId, Vec<JobId>)> = closure
        .iter()
        .map(|job| {
            let resolved = project.arena().job(*job).resolved_dependencies().to_vec();
            (*job, resolved)
        })
        .collect();
    ensure_acyclic(project, id, &edges)?;

    let workflow = project.get_workflow(id);
    if workflow.launch_dependencies().is_empty() {
        report.warn(format!(
            "workflow '{}' has no `executes` targets; only its launch job will be emitted",
            workflow.name()
        ));
    }

    for job in workflow.jobs() {
        if !closure.contains(job) {
            report.warn(format!(
                "job '{}' in workflow '{}' is not reachable from the launch job and will not be emitted",
                project.arena().job(*job).name(),
                workflow.name()
            ));
        }
    }
    Ok(())
}

fn ensure_acyclic(project: &Project, id: WorkflowId, edges: &[(JobId, Vec<JobId>)]) -> Result<()> {
    // Edge direction: dependency -> dependent.
    let mut graph: DiGraphMap<JobId, ()> = DiGraphMap::new();
    for (job, deps) in edges {
        graph.add_node(*job);
        for dep in deps {
            graph.add_edge(*dep, *job, ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(JobflowError::DagCycle(format!(
            "cycle detected in workflow '{}' involving job '{}'",
            project.get_workflow(id).name(),
            project.arena().job(cycle.node_id()).name()
        ))),
    }
}

fn check_names(project: &Project, id: WorkflowId, report: &mut CheckReport) {
    let workflow = project.get_workflow(id);
    let arena = project.arena();

    let mut names: Vec<(&str, &str)> = Vec::new();
    if !workflow.is_default() {
        names.push(("workflow", workflow.name()));
    }
    names.extend(workflow.jobs().iter().map(|j| ("job", arena.job(*j).name())));
    names.extend(
        workflow
            .properties()
            .iter()
            .map(|p| ("property file", arena.properties(*p).name())),
    );

    for (what, name) in names {
        if !NAME_PATTERN.is_match(name) {
            report.warn(format!(
                "{what} name '{name}' in workflow '{}' should only use letters, digits, '_' and '-'",
                workflow.name()
            ));
        }
    }
}

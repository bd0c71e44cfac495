// src/config/apply.rs

use tracing::debug;

use crate::config::model::{ConfigFile, JobConfig, PropertiesConfig};
use crate::errors::{JobflowError, Result};
use crate::job::{Job, Properties};
use crate::project::{Project, ScopeView, WorkflowBuilder};

impl ConfigFile {
    /// Declare everything in this config on a fresh [`Project`].
    pub fn to_project(&self) -> Result<Project> {
        let mut project = Project::new();
        self.apply_to(&mut project)?;
        Ok(project)
    }

    /// Declare everything in this config on `project`.
    ///
    /// Global entries go first, then workflows in file order, so a workflow
    /// can only be cloned from one declared above it.
    pub fn apply_to(&self, project: &mut Project) -> Result<()> {
        project.global(|g| declare_entries(g, &self.job, &self.properties))?;

        for workflow in &self.workflow {
            let configure = |b: &mut WorkflowBuilder<'_>| -> Result<()> {
                declare_entries(b, &workflow.job, &workflow.properties)?;
                if !workflow.executes.is_empty() {
                    b.executes(workflow.executes.iter().cloned());
                }
                if !workflow.depends.is_empty() {
                    b.depends(workflow.depends.iter().cloned());
                }
                Ok(())
            };

            match &workflow.from {
                Some(from) => project.add_workflow(from, Some(&workflow.name), configure)?,
                None => project.workflow(&workflow.name, configure)?,
            };
            debug!(workflow = %workflow.name, "applied workflow config");
        }

        Ok(())
    }
}

fn declare_entries(
    builder: &mut WorkflowBuilder<'_>,
    jobs: &[JobConfig],
    properties: &[PropertiesConfig],
) -> Result<()> {
    for job in jobs {
        let configure = |j: &mut Job, _: &ScopeView<'_>| apply_job_fields(j, job);
        match (&job.from, job.kind) {
            (Some(from), _) => {
                builder.add_job(from, Some(&job.name), configure)?;
            }
            (None, Some(kind)) => {
                builder.job(kind, &job.name, configure);
            }
            (None, None) => {
                return Err(JobflowError::ConfigError(format!(
                    "job '{}' needs either `type` or `from`",
                    job.name
                )));
            }
        }
    }

    for props in properties {
        let configure = |p: &mut Properties, _: &ScopeView<'_>| {
            for (key, value) in &props.properties {
                p.set(key.clone(), value.to_string());
            }
        };
        match &props.from {
            Some(from) => {
                builder.add_property_file(from, Some(&props.name), configure)?;
            }
            None => {
                builder.property_file(&props.name, configure);
            }
        }
    }

    Ok(())
}

fn apply_job_fields(job: &mut Job, config: &JobConfig) {
    job.depends(config.dependencies.iter().cloned());
    for (key, value) in &config.properties {
        job.set(key.clone(), value.to_string());
    }
}

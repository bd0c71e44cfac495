// src/lib.rs

pub mod arena;
pub mod build;
pub mod check;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod job;
pub mod logging;
pub mod project;
pub mod scope;
pub mod types;
pub mod workflow;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::build::{Emitter, JOB_EXTENSION, PROPERTIES_EXTENSION};
use crate::check::check_project;
use crate::cli::CliArgs;
use crate::config::loader::{config_root_dir, load_and_validate};
use crate::fs::RealFileSystem;
use crate::project::Project;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and validation
/// - declaring the config on a [`Project`]
/// - static checks (unresolved names, cycles)
/// - cleaning and emitting into the build directory
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;

    let mut project = cfg.to_project()?;
    let report = check_project(&mut project)?;
    if !report.is_clean() {
        info!(warnings = report.warnings.len(), "checks finished with warnings");
    }

    let prefix = cfg.config.prefix.as_deref();

    if args.dry_run {
        print_dry_run(&mut project, prefix, &args.workflows)?;
        return Ok(());
    }

    let out_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config_root_dir(&config_path).join(&cfg.config.build_dir));

    let fs = RealFileSystem;
    let mut emitter = Emitter::new(&fs, out_dir.clone());

    if args.clean || cfg.config.clean {
        emitter.clean()?;
    }

    project.build(&mut emitter, prefix, &args.workflows)?;
    info!(
        files = emitter.written().len(),
        dir = %out_dir.display(),
        "build finished"
    );
    Ok(())
}

/// Print, per selected workflow, the files a build would write in order.
fn print_dry_run(project: &mut Project, prefix: Option<&str>, only: &[String]) -> Result<()> {
    println!("jobflow dry-run");

    for (heading, files) in dry_run_plan(project, prefix, only)? {
        println!("{heading}:");
        for file in files {
            println!("  - {file}");
        }
    }

    debug!("dry-run complete (nothing written)");
    Ok(())
}

/// `(workflow heading, file names)` for every selected workflow, in the
/// order [`Project::build`] would write them. Property files are included.
fn dry_run_plan(
    project: &mut Project,
    prefix: Option<&str>,
    only: &[String],
) -> Result<Vec<(String, Vec<String>)>> {
    let mut plan = Vec::new();

    for id in project.selected_workflows(only)? {
        let workflow = project.get_workflow(id);
        let (heading, child_prefix, jobs) = if workflow.is_default() {
            (workflow.name().to_string(), None, workflow.jobs().to_vec())
        } else {
            let child_prefix = workflow.child_prefix(prefix);
            let order = project.build_job_list(id)?;
            (child_prefix.clone(), Some(child_prefix), order)
        };

        let arena = project.arena();
        let workflow = project.get_workflow(id);
        let mut files: Vec<String> = jobs
            .iter()
            .map(|job| {
                let job = arena.job(*job);
                match (&child_prefix, job.is_launch()) {
                    (Some(p), true) => format!("{p}.{JOB_EXTENSION}"),
                    (p, _) => format!("{}.{JOB_EXTENSION}", job.build_name(p.as_deref())),
                }
            })
            .collect();
        files.extend(workflow.properties().iter().map(|props| {
            format!(
                "{}.{PROPERTIES_EXTENSION}",
                arena.properties(*props).build_name(child_prefix.as_deref())
            )
        }));

        plan.push((heading, files));
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_plan_lists_jobs_and_property_files() {
        let mut project = Project::new();
        project
            .global(|g| {
                g.command_job("shared", |_, _| {});
                g.property_file("common", |_, _| {});
                Ok(())
            })
            .unwrap();
        project
            .workflow("daily", |wf| {
                wf.command_job("report", |job, _| {
                    job.depends(["shared"]);
                });
                wf.property_file("local", |_, _| {});
                wf.executes(["report"]);
                Ok(())
            })
            .unwrap();

        let plan = dry_run_plan(&mut project, Some("etl"), &[]).unwrap();
        assert_eq!(
            plan,
            vec![
                (
                    "default".to_string(),
                    vec!["shared.job".to_string(), "common.properties".to_string()]
                ),
                (
                    "etl-daily".to_string(),
                    vec![
                        "etl-daily.job".to_string(),
                        "etl-daily-report.job".to_string(),
                        "etl-daily-shared.job".to_string(),
                        "etl-daily-local.properties".to_string(),
                    ]
                ),
            ]
        );
    }
}

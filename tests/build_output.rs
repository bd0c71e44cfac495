// tests/build_output.rs
mod common;
use crate::common::{args_for, init_tracing, write_config};

use std::error::Error;
use std::fs;
use std::path::Path;

use jobflow::run;

type TestResult = Result<(), Box<dyn Error>>;

const CONFIG: &str = r#"
[config]
prefix = "etl"

[[job]]
name = "shared"
type = "command"
properties = { command = "echo shared" }

[[properties]]
name = "common"
properties = { "user.to.proxy" = "etl", "retries" = 2 }

[[workflow]]
name = "daily"
executes = ["report"]

  [[workflow.job]]
  name = "prep"
  type = "command"
  properties = { command = "echo prep" }

  [[workflow.job]]
  name = "report"
  type = "pig"
  dependencies = ["prep", "shared"]
  properties = { "pig.script" = "report.pig" }

  [[workflow.job]]
  name = "unused"
  type = "noop"

[[workflow]]
name = "hourly"
from = "daily"
"#;

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn builds_every_workflow_into_the_default_build_dir() -> TestResult {
    init_tracing();
    let (dir, config) = write_config(CONFIG)?;

    run(args_for(&config))?;

    let out = dir.path().join("azkaban");
    assert_eq!(
        file_names(&out),
        vec![
            "common.properties",
            "etl-daily-prep.job",
            "etl-daily-report.job",
            "etl-daily-shared.job",
            "etl-daily.job",
            "etl-hourly-prep.job",
            "etl-hourly-report.job",
            "etl-hourly-shared.job",
            "etl-hourly.job",
            "shared.job",
        ]
    );

    let launch = fs::read_to_string(out.join("etl-daily.job"))?;
    assert_eq!(
        launch,
        "# This file generated by jobflow. Do not edit by hand.\n\
         type=noop\n\
         dependencies=etl-daily-report\n"
    );

    let report = fs::read_to_string(out.join("etl-daily-report.job"))?;
    assert_eq!(
        report,
        "# This file generated by jobflow. Do not edit by hand.\n\
         type=pig\n\
         dependencies=etl-daily-prep,etl-daily-shared\n\
         pig.script=report.pig\n"
    );

    let common = fs::read_to_string(out.join("common.properties"))?;
    assert!(common.contains("retries=2\n"));
    assert!(common.contains("user.to.proxy=etl\n"));

    // The global job is emitted unprefixed and keeps its own properties.
    let shared = fs::read_to_string(out.join("shared.job"))?;
    assert!(shared.contains("type=command\ncommand=echo shared\n"));
    Ok(())
}

#[test]
fn workflow_selection_output_dir_and_clean() -> TestResult {
    init_tracing();
    let (dir, config) = write_config(CONFIG)?;
    let out = dir.path().join("custom");
    fs::create_dir_all(&out)?;
    fs::write(
        out.join("stale.job"),
        "# This file generated by jobflow. Do not edit by hand.\ntype=noop\n",
    )?;
    fs::write(out.join("manual.job"), "type=command\ncommand=echo by hand\n")?;
    fs::write(out.join("notes.txt"), "keep me")?;

    let mut args = args_for(&config);
    args.output_dir = Some(out.clone());
    args.workflows = vec!["hourly".to_string()];
    args.clean = true;
    run(args)?;

    assert_eq!(
        file_names(&out),
        vec![
            "etl-hourly-prep.job",
            "etl-hourly-report.job",
            "etl-hourly-shared.job",
            "etl-hourly.job",
            "manual.job",
            "notes.txt",
        ]
    );
    assert!(!dir.path().join("azkaban").exists());
    assert_eq!(
        fs::read_to_string(out.join("manual.job"))?,
        "type=command\ncommand=echo by hand\n"
    );
    Ok(())
}

#[test]
fn dry_run_writes_nothing() -> TestResult {
    init_tracing();
    let (dir, config) = write_config(CONFIG)?;

    let mut args = args_for(&config);
    args.dry_run = true;
    run(args)?;

    assert!(!dir.path().join("azkaban").exists());
    Ok(())
}

#[test]
fn unknown_workflow_selection_fails() -> TestResult {
    init_tracing();
    let (_dir, config) = write_config(CONFIG)?;

    let mut args = args_for(&config);
    args.workflows = vec!["weekly".to_string()];
    let err = run(args).unwrap_err();
    assert!(format!("{err:#}").contains("weekly"));
    Ok(())
}

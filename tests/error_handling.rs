// tests/error_handling.rs

use std::io::Write;

use tempfile::NamedTempFile;

use jobflow::check::check_project;
use jobflow::config::load_and_validate;
use jobflow::errors::JobflowError;
use jobflow::project::Project;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

/// Load, declare and check, the way `run` does before emitting anything.
fn load_and_check(contents: &str) -> Result<Project, JobflowError> {
    let file = config_file(contents);
    let cfg = load_and_validate(file.path())?;
    let mut project = cfg.to_project()?;
    check_project(&mut project)?;
    Ok(project)
}

#[test]
fn test_unknown_job_type_is_a_toml_error() {
    let result = load_and_check(
        r#"
[[job]]
name = "a"
type = "mapreduce-ish"
"#,
    );

    match result {
        Err(JobflowError::TomlError(e)) => {
            assert!(e.to_string().contains("invalid job type: mapreduce-ish"));
        }
        Err(e) => panic!("Expected TomlError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_unresolved_dependency_names_the_job_and_workflow() {
    let result = load_and_check(
        r#"
[[workflow]]
name = "daily"
executes = ["report"]

  [[workflow.job]]
  name = "report"
  type = "pig"
  dependencies = ["NonExistent"]
"#,
    );

    match result {
        Err(JobflowError::UnresolvedDependency {
            workflow,
            job,
            dependency,
        }) => {
            assert_eq!(workflow, "daily");
            assert_eq!(job, "report");
            assert_eq!(dependency, "NonExistent");
        }
        Err(e) => panic!("Expected UnresolvedDependency, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_dag_cycle_returns_structured_error() {
    let result = load_and_check(
        r#"
[[workflow]]
name = "loop"
executes = ["A"]

  [[workflow.job]]
  name = "A"
  type = "command"
  dependencies = ["B"]

  [[workflow.job]]
  name = "B"
  type = "command"
  dependencies = ["A"]
"#,
    );

    match result {
        Err(JobflowError::DagCycle(msg)) => {
            assert!(msg.contains("cycle detected"));
            assert!(msg.contains("'A'") || msg.contains("'B'"));
        }
        Err(e) => panic!("Expected DagCycle error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_copy_from_unknown_job_is_entity_not_found() {
    let result = load_and_check(
        r#"
[[workflow]]
name = "daily"

  [[workflow.job]]
  name = "copy"
  from = "elsewhere.original"
"#,
    );

    match result {
        Err(JobflowError::EntityNotFound(msg)) => {
            assert!(msg.contains("elsewhere.original"));
            assert!(msg.contains("daily"));
        }
        Err(e) => panic!("Expected EntityNotFound, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_job_without_type_or_from_is_config_error() {
    let file = config_file("[[job]]\nname = \"bare\"\n");

    match load_and_validate(file.path()) {
        Err(JobflowError::ConfigError(msg)) => assert!(msg.contains("bare")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_and_validate(dir.path().join("nope.toml"));
    assert!(matches!(result, Err(JobflowError::IoError(_))));
}

#[test]
fn test_build_default_rejects_other_workflows() {
    let mut project = Project::new();
    let id = project
        .workflow("daily", |wf| {
            wf.no_op_job("n", |_, _| {});
            Ok(())
        })
        .unwrap();

    let fs = jobflow::fs::mock::MockFileSystem::new();
    let mut emitter = jobflow::build::Emitter::new(&fs, "out");
    let workflow = project.get_workflow(id).clone();
    let mut arena = project.arena().clone();

    match workflow.build_default(&mut arena, &mut emitter) {
        Err(JobflowError::NotDefaultWorkflow(name)) => assert_eq!(name, "daily"),
        other => panic!("Expected NotDefaultWorkflow, got: {:?}", other),
    }
    assert!(emitter.written().is_empty());
}

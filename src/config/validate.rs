// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{ConfigFile, JobConfig, PropertiesConfig, RawConfigFile};
use crate::errors::{JobflowError, Result};
use crate::types::DEFAULT_WORKFLOW;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = JobflowError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

/// Checks that only need the file itself. Dependency resolution and cycle
/// detection happen once the config has been applied to a project (see
/// [`crate::check`]).
pub fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_global_config(cfg)?;
    validate_entries(DEFAULT_WORKFLOW, &cfg.job, &cfg.properties)?;

    for workflow in &cfg.workflow {
        if workflow.name.trim().is_empty() {
            return Err(config_error("workflow name must not be empty"));
        }
        if workflow.name == DEFAULT_WORKFLOW && workflow.from.is_some() {
            return Err(config_error(format!(
                "workflow '{DEFAULT_WORKFLOW}' cannot be cloned from another workflow"
            )));
        }
        validate_entries(&workflow.name, &workflow.job, &workflow.properties)?;
    }

    Ok(())
}

fn validate_global_config(cfg: &RawConfigFile) -> Result<()> {
    if cfg.config.build_dir.trim().is_empty() {
        return Err(config_error("[config].build_dir must not be empty"));
    }
    if let Some(prefix) = &cfg.config.prefix {
        if prefix.trim().is_empty() {
            return Err(config_error("[config].prefix must not be empty when set"));
        }
    }
    Ok(())
}

fn validate_entries(workflow: &str, jobs: &[JobConfig], properties: &[PropertiesConfig]) -> Result<()> {
    let mut seen = HashSet::new();

    for job in jobs {
        if job.name.trim().is_empty() {
            return Err(config_error(format!(
                "workflow '{workflow}' declares a job without a name"
            )));
        }
        if !seen.insert(job.name.as_str()) {
            return Err(config_error(format!(
                "job '{}' is declared twice in workflow '{workflow}'",
                job.name
            )));
        }
        match (&job.kind, &job.from) {
            (None, None) => {
                return Err(config_error(format!(
                    "job '{}' in workflow '{workflow}' needs either `type` or `from`",
                    job.name
                )));
            }
            (Some(_), Some(_)) => {
                return Err(config_error(format!(
                    "job '{}' in workflow '{workflow}' sets both `type` and `from`; a copied job keeps its type",
                    job.name
                )));
            }
            _ => {}
        }
    }

    let mut seen = HashSet::new();
    for props in properties {
        if props.name.trim().is_empty() {
            return Err(config_error(format!(
                "workflow '{workflow}' declares a property file without a name"
            )));
        }
        if !seen.insert(props.name.as_str()) {
            return Err(config_error(format!(
                "property file '{}' is declared twice in workflow '{workflow}'",
                props.name
            )));
        }
    }

    Ok(())
}

fn config_error(message: impl Into<String>) -> JobflowError {
    JobflowError::ConfigError(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<ConfigFile> {
        let raw: RawConfigFile = toml::from_str(text)?;
        ConfigFile::try_from(raw)
    }

    fn expect_config_error(text: &str, needle: &str) {
        match parse(text) {
            Err(JobflowError::ConfigError(msg)) => {
                assert!(msg.contains(needle), "{msg:?} should mention {needle:?}")
            }
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn empty_config_is_valid() {
        let cfg = parse("").unwrap();
        assert!(cfg.workflow.is_empty());
        assert_eq!(cfg.config.build_dir, "azkaban");
    }

    #[test]
    fn job_needs_type_or_from_but_not_both() {
        expect_config_error(
            "[[job]]\nname = \"a\"\n",
            "needs either `type` or `from`",
        );
        expect_config_error(
            "[[job]]\nname = \"a\"\ntype = \"pig\"\nfrom = \"b\"\n",
            "sets both",
        );
    }

    #[test]
    fn duplicate_names_within_a_workflow_are_rejected() {
        expect_config_error(
            r#"
[[workflow]]
name = "w"
  [[workflow.job]]
  name = "a"
  type = "noOp"
  [[workflow.job]]
  name = "a"
  type = "noOp"
"#,
            "declared twice in workflow 'w'",
        );
    }

    #[test]
    fn default_cannot_be_cloned_and_build_dir_must_be_set() {
        expect_config_error(
            "[[workflow]]\nname = \"default\"\nfrom = \"x\"\n",
            "cannot be cloned",
        );
        expect_config_error("[config]\nbuild_dir = \" \"\n", "build_dir");
    }
}

#![allow(dead_code)]

use std::collections::BTreeMap;

use jobflow::config::{
    ConfigFile, ConfigSection, JobConfig, PropertiesConfig, PropertyValue, RawConfigFile,
    WorkflowConfig,
};
use jobflow::types::JobKind;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                job: vec![],
                properties: vec![],
                workflow: vec![],
            },
        }
    }

    pub fn prefix(mut self, prefix: &str) -> Self {
        self.config.config.prefix = Some(prefix.to_string());
        self
    }

    pub fn build_dir(mut self, dir: &str) -> Self {
        self.config.config.build_dir = dir.to_string();
        self
    }

    pub fn with_job(mut self, job: JobConfig) -> Self {
        self.config.job.push(job);
        self
    }

    pub fn with_properties(mut self, properties: PropertiesConfig) -> Self {
        self.config.properties.push(properties);
        self
    }

    pub fn with_workflow(mut self, workflow: WorkflowConfig) -> Self {
        self.config.workflow.push(workflow);
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `WorkflowConfig`.
pub struct WorkflowConfigBuilder {
    workflow: WorkflowConfig,
}

impl WorkflowConfigBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            workflow: WorkflowConfig {
                name: name.to_string(),
                from: None,
                executes: vec![],
                depends: vec![],
                job: vec![],
                properties: vec![],
            },
        }
    }

    pub fn from(mut self, source: &str) -> Self {
        self.workflow.from = Some(source.to_string());
        self
    }

    pub fn executes(mut self, job: &str) -> Self {
        self.workflow.executes.push(job.to_string());
        self
    }

    pub fn job(mut self, job: JobConfig) -> Self {
        self.workflow.job.push(job);
        self
    }

    pub fn properties(mut self, properties: PropertiesConfig) -> Self {
        self.workflow.properties.push(properties);
        self
    }

    pub fn build(self) -> WorkflowConfig {
        self.workflow
    }
}

/// Builder for `JobConfig`.
pub struct JobConfigBuilder {
    job: JobConfig,
}

impl JobConfigBuilder {
    pub fn new(kind: JobKind, name: &str) -> Self {
        Self {
            job: JobConfig {
                name: name.to_string(),
                kind: Some(kind),
                from: None,
                dependencies: vec![],
                properties: BTreeMap::new(),
            },
        }
    }

    /// `command` job running `cmd`.
    pub fn command(name: &str, cmd: &str) -> Self {
        Self::new(JobKind::Command, name).property("command", cmd)
    }

    /// Copy of the job at `path`.
    pub fn copy_of(path: &str, name: &str) -> Self {
        Self {
            job: JobConfig {
                name: name.to_string(),
                kind: None,
                from: Some(path.to_string()),
                dependencies: vec![],
                properties: BTreeMap::new(),
            },
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.job.dependencies.push(dep.to_string());
        self
    }

    pub fn property(mut self, key: &str, value: &str) -> Self {
        self.job
            .properties
            .insert(key.to_string(), PropertyValue::from(value));
        self
    }

    pub fn build(self) -> JobConfig {
        self.job
    }
}

/// `PropertiesConfig` with the given key/value pairs.
pub fn property_file(name: &str, pairs: &[(&str, &str)]) -> PropertiesConfig {
    PropertiesConfig {
        name: name.to_string(),
        from: None,
        properties: pairs
            .iter()
            .map(|(k, v)| (k.to_string(), PropertyValue::from(*v)))
            .collect(),
    }
}

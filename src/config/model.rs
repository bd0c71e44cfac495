// src/config/model.rs

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::types::JobKind;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [config]
/// build_dir = "azkaban"
/// prefix = "etl"
///
/// [[job]]
/// name = "shared"
/// type = "command"
/// properties = { command = "echo shared" }
///
/// [[workflow]]
/// name = "daily"
/// executes = ["report"]
///
///   [[workflow.job]]
///   name = "report"
///   type = "pig"
///   dependencies = ["shared"]
///   properties = { "pig.script" = "report.pig" }
/// ```
///
/// Arrays of tables keep declaration order, which decides emission order
/// for the `default` workflow and the order workflows are built in.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    /// Global jobs, declared in the `default` workflow.
    #[serde(default)]
    pub job: Vec<JobConfig>,

    /// Global property files.
    #[serde(default)]
    pub properties: Vec<PropertiesConfig>,

    #[serde(default)]
    pub workflow: Vec<WorkflowConfig>,
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub job: Vec<JobConfig>,
    pub properties: Vec<PropertiesConfig>,
    pub workflow: Vec<WorkflowConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            config: raw.config,
            job: raw.job,
            properties: raw.properties,
            workflow: raw.workflow,
        }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Output directory, relative to the config file's directory.
    #[serde(default = "default_build_dir")]
    pub build_dir: String,

    /// Remove stale generated files from `build_dir` before emitting.
    #[serde(default)]
    pub clean: bool,

    /// Parent name every workflow is emitted under (`<prefix>-<workflow>`).
    #[serde(default)]
    pub prefix: Option<String>,
}

fn default_build_dir() -> String {
    "azkaban".to_string()
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            build_dir: default_build_dir(),
            clean: false,
            prefix: None,
        }
    }
}

/// `[[job]]` / `[[workflow.job]]`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobConfig {
    pub name: String,

    /// Job type; required unless `from` is given.
    #[serde(default, rename = "type")]
    pub kind: Option<JobKind>,

    /// Lookup path of an existing job to copy (`add_job`).
    #[serde(default)]
    pub from: Option<String>,

    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

/// `[[properties]]` / `[[workflow.properties]]`.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertiesConfig {
    pub name: String,

    /// Lookup path of an existing property file to copy.
    #[serde(default)]
    pub from: Option<String>,

    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

/// `[[workflow]]`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowConfig {
    pub name: String,

    /// Name of an earlier workflow to clone.
    #[serde(default)]
    pub from: Option<String>,

    #[serde(default)]
    pub executes: Vec<String>,

    /// Deprecated alias of `executes`.
    #[serde(default)]
    pub depends: Vec<String>,

    #[serde(default)]
    pub job: Vec<JobConfig>,

    #[serde(default)]
    pub properties: Vec<PropertiesConfig>,
}

/// A scalar property value. Everything ends up as a string in the
/// generated files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => f.write_str(s),
            PropertyValue::Integer(i) => write!(f, "{i}"),
            // `{:?}` keeps the decimal point of whole floats (`2.0`, not `2`).
            PropertyValue::Float(x) => write!(f, "{x:?}"),
            PropertyValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

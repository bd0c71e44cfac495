use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Index of a scope in a [`crate::scope::ScopeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(pub(crate) usize);

/// Index of a job in the project's job arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(pub(crate) usize);

/// Index of a property bag in the project's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertiesId(pub(crate) usize);

/// Index of a workflow in the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkflowId(pub(crate) usize);

/// Name of the reserved workflow that holds globally declared jobs.
pub const DEFAULT_WORKFLOW: &str = "default";

/// The job types a workflow can contain.
///
/// Each variant maps to the `type=` value Azkaban expects in a `.job` file.
/// `Launch` is synthetic: it is created once per workflow and never declared
/// from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum JobKind {
    /// Untyped job; `type=` is left to the job's own properties.
    Azkaban,
    Command,
    HadoopJava,
    Hive,
    Java,
    JavaProcess,
    KafkaPush,
    NoOp,
    Pig,
    VoldemortBuildPush,
    Launch,
}

impl JobKind {
    /// Every kind that may appear as `type = "..."` in a config file.
    pub const DECLARABLE: [JobKind; 10] = [
        JobKind::Azkaban,
        JobKind::Command,
        JobKind::HadoopJava,
        JobKind::Hive,
        JobKind::Java,
        JobKind::JavaProcess,
        JobKind::KafkaPush,
        JobKind::NoOp,
        JobKind::Pig,
        JobKind::VoldemortBuildPush,
    ];

    /// Value of the `type=` line in the generated job file.
    pub fn azkaban_type(self) -> Option<&'static str> {
        match self {
            JobKind::Azkaban => None,
            JobKind::Command => Some("command"),
            JobKind::HadoopJava => Some("hadoopJava"),
            JobKind::Hive => Some("hive"),
            JobKind::Java => Some("java"),
            JobKind::JavaProcess => Some("javaprocess"),
            JobKind::KafkaPush => Some("KafkaPushJob"),
            JobKind::NoOp | JobKind::Launch => Some("noop"),
            JobKind::Pig => Some("pig"),
            JobKind::VoldemortBuildPush => Some("VoldemortBuildandPush"),
        }
    }

    /// Name used in configuration files.
    pub fn config_name(self) -> &'static str {
        match self {
            JobKind::Azkaban => "azkaban",
            JobKind::Command => "command",
            JobKind::HadoopJava => "hadoopJava",
            JobKind::Hive => "hive",
            JobKind::Java => "java",
            JobKind::JavaProcess => "javaProcess",
            JobKind::KafkaPush => "kafkaPush",
            JobKind::NoOp => "noOp",
            JobKind::Pig => "pig",
            JobKind::VoldemortBuildPush => "voldemortBuildPush",
            JobKind::Launch => "launch",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_name())
    }
}

impl FromStr for JobKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', '-'], "");
        JobKind::DECLARABLE
            .into_iter()
            .find(|kind| kind.config_name().to_lowercase() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = JobKind::DECLARABLE
                    .iter()
                    .map(|k| k.config_name())
                    .collect();
                format!("invalid job type: {s} (expected one of: {})", known.join(", "))
            })
    }
}

impl TryFrom<String> for JobKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// src/job/mod.rs

//! Jobs and property bags.
//!
//! - [`factory`] holds the abstract factory the project builds entities with.
//! - [`properties`] is the flat property-bag entity.
//!
//! A [`Job`] keeps the names it depends on as declared. The ids those names
//! resolve to are filled in by the workflow when it computes its closure, and
//! are dropped whenever a job is cloned.

pub mod factory;
pub mod properties;

use std::collections::BTreeMap;

use crate::types::{JobId, JobKind};

pub use factory::{DefaultJobFactory, JobFactory};
pub use properties::Properties;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    name: String,
    kind: JobKind,
    properties: BTreeMap<String, String>,
    /// Declared dependency names, duplicate-free, in order of first mention.
    dependency_names: Vec<String>,
    /// Ids the declared names resolved to on the last closure computation.
    resolved: Vec<JobId>,
}

impl Job {
    pub fn new(kind: JobKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            properties: BTreeMap::new(),
            dependency_names: Vec::new(),
            resolved: Vec::new(),
        }
    }

    /// The synthetic terminal job of a workflow.
    pub fn launch(name: impl Into<String>) -> Self {
        Self::new(JobKind::Launch, name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn kind(&self) -> JobKind {
        self.kind
    }

    pub fn is_launch(&self) -> bool {
        self.kind == JobKind::Launch
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Add dependency names. Names already declared are skipped.
    pub fn depends<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        union_into(&mut self.dependency_names, names);
        self
    }

    pub fn dependency_names(&self) -> &[String] {
        &self.dependency_names
    }

    pub fn resolved_dependencies(&self) -> &[JobId] {
        &self.resolved
    }

    pub(crate) fn set_resolved(&mut self, resolved: Vec<JobId>) {
        self.resolved = resolved;
    }

    /// Copy of this job with no resolved dependencies.
    pub fn clone_unresolved(&self) -> Job {
        Job {
            resolved: Vec::new(),
            ..self.clone()
        }
    }

    /// File stem for this job when emitted under `prefix`.
    pub fn build_name(&self, prefix: Option<&str>) -> String {
        prefixed(prefix, &self.name)
    }
}

/// `prefix-name`, or just `name` without a prefix.
pub fn prefixed(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(p) if !p.is_empty() => format!("{p}-{name}"),
        _ => name.to_string(),
    }
}

/// Append `names` to `target`, skipping ones already present.
pub(crate) fn union_into<I, S>(target: &mut Vec<String>, names: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for name in names {
        let name = name.into();
        if !target.contains(&name) {
            target.push(name);
        }
    }
}

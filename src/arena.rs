// src/arena.rs

//! Storage shared by every workflow of a project.
//!
//! Workflows refer to jobs, property bags and scopes by id; the arena owns
//! them. Keeping resolved dependencies as [`JobId`]s instead of references
//! is what lets a workflow be cloned by copying names.

use crate::job::{Job, Properties};
use crate::scope::ScopeTable;
use crate::types::{JobId, PropertiesId};

#[derive(Debug, Clone, Default)]
pub struct Arena {
    pub scopes: ScopeTable,
    jobs: Vec<Job>,
    properties: Vec<Properties>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_job(&mut self, job: Job) -> JobId {
        let id = JobId(self.jobs.len());
        self.jobs.push(job);
        id
    }

    pub fn job(&self, id: JobId) -> &Job {
        &self.jobs[id.0]
    }

    pub fn job_mut(&mut self, id: JobId) -> &mut Job {
        &mut self.jobs[id.0]
    }

    pub fn add_properties(&mut self, properties: Properties) -> PropertiesId {
        let id = PropertiesId(self.properties.len());
        self.properties.push(properties);
        id
    }

    pub fn properties(&self, id: PropertiesId) -> &Properties {
        &self.properties[id.0]
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }
}

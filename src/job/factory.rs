// src/job/factory.rs

//! Abstract factory for jobs and property bags.
//!
//! The project only talks to [`JobFactory`], so tests can substitute a
//! factory that tags or counts what it creates.

use std::fmt::Debug;

use crate::job::{Job, Properties};
use crate::types::JobKind;

pub trait JobFactory: Debug {
    fn make_job(&self, kind: JobKind, name: &str) -> Job;

    fn make_launch_job(&self, name: &str) -> Job {
        Job::launch(name)
    }

    fn make_properties(&self, name: &str) -> Properties;
}

/// Factory used in production: plain entities, no defaults.
#[derive(Debug, Clone, Default)]
pub struct DefaultJobFactory;

impl JobFactory for DefaultJobFactory {
    fn make_job(&self, kind: JobKind, name: &str) -> Job {
        Job::new(kind, name)
    }

    fn make_properties(&self, name: &str) -> Properties {
        Properties::new(name)
    }
}

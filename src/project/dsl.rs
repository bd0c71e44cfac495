// src/project/dsl.rs

use crate::errors::{JobflowError, Result};
use crate::job::{Job, Properties};
use crate::project::{Project, Ref, ScopeView};
use crate::scope::Binding;
use crate::types::{JobId, JobKind, PropertiesId, ScopeId, WorkflowId};

/// Declaration surface for one workflow.
///
/// Every job or property bag is built by the project's factory, handed to
/// the caller's configuration closure together with a [`ScopeView`] of this
/// workflow, and only then registered and bound by name.
pub struct WorkflowBuilder<'p> {
    project: &'p mut Project,
    id: WorkflowId,
}

macro_rules! typed_job {
    ($(#[$doc:meta])* $method:ident => $kind:expr) => {
        $(#[$doc])*
        pub fn $method<F>(&mut self, name: &str, configure: F) -> JobId
        where
            F: FnOnce(&mut Job, &ScopeView<'_>),
        {
            self.job($kind, name, configure)
        }
    };
}

impl<'p> WorkflowBuilder<'p> {
    pub(crate) fn new(project: &'p mut Project, id: WorkflowId) -> Self {
        Self { project, id }
    }

    pub fn id(&self) -> WorkflowId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.project.get_workflow(self.id).name()
    }

    fn scope(&self) -> ScopeId {
        self.project.get_workflow(self.id).scope()
    }

    pub fn view(&self) -> ScopeView<'_> {
        self.project.view(self.scope())
    }

    /// Resolve `path` from this workflow's scope; `None` when malformed or
    /// unbound.
    pub fn lookup_ref(&self, path: &str) -> Option<Ref<'_>> {
        self.view().lookup_ref(path)
    }

    /// Declare a job of `kind`.
    pub fn job<F>(&mut self, kind: JobKind, name: &str, configure: F) -> JobId
    where
        F: FnOnce(&mut Job, &ScopeView<'_>),
    {
        let mut job = self.project.factory.make_job(kind, name);
        configure(&mut job, &self.view());
        self.register_job(job)
    }

    typed_job!(azkaban_job => JobKind::Azkaban);
    typed_job!(command_job => JobKind::Command);
    typed_job!(hadoop_java_job => JobKind::HadoopJava);
    typed_job!(hive_job => JobKind::Hive);
    typed_job!(java_job => JobKind::Java);
    typed_job!(java_process_job => JobKind::JavaProcess);
    typed_job!(kafka_push_job => JobKind::KafkaPush);
    typed_job!(no_op_job => JobKind::NoOp);
    typed_job!(pig_job => JobKind::Pig);
    typed_job!(voldemort_build_push_job => JobKind::VoldemortBuildPush);

    /// Declare a property bag.
    pub fn property_file<F>(&mut self, name: &str, configure: F) -> PropertiesId
    where
        F: FnOnce(&mut Properties, &ScopeView<'_>),
    {
        let mut properties = self.project.factory.make_properties(name);
        configure(&mut properties, &self.view());
        self.register_properties(properties)
    }

    /// Copy the job at `path` into this workflow, optionally renamed, then
    /// configure the copy.
    pub fn add_job<F>(&mut self, path: &str, rename: Option<&str>, configure: F) -> Result<JobId>
    where
        F: FnOnce(&mut Job, &ScopeView<'_>),
    {
        let source = self
            .project
            .arena
            .scopes
            .lookup(self.scope(), path)
            .and_then(Binding::as_job)
            .ok_or_else(|| self.not_found("job", path))?;

        let mut job = self.project.arena.job(source).clone_unresolved();
        if let Some(name) = rename {
            job.rename(name);
        }
        configure(&mut job, &self.view());
        Ok(self.register_job(job))
    }

    /// Copy the property bag at `path` into this workflow, optionally
    /// renamed, then configure the copy.
    pub fn add_property_file<F>(
        &mut self,
        path: &str,
        rename: Option<&str>,
        configure: F,
    ) -> Result<PropertiesId>
    where
        F: FnOnce(&mut Properties, &ScopeView<'_>),
    {
        let source = self
            .project
            .arena
            .scopes
            .lookup(self.scope(), path)
            .and_then(Binding::as_properties)
            .ok_or_else(|| self.not_found("property file", path))?;

        let mut properties = self.project.arena.properties(source).clone();
        if let Some(name) = rename {
            properties.rename(name);
        }
        configure(&mut properties, &self.view());
        Ok(self.register_properties(properties))
    }

    /// Add launch targets for this workflow.
    pub fn executes<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let project = &mut *self.project;
        project.workflows[self.id.0].executes(&mut project.arena, names);
    }

    /// Deprecated spelling of [`WorkflowBuilder::executes`].
    pub fn depends<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let project = &mut *self.project;
        project.workflows[self.id.0].depends(&mut project.arena, names);
    }

    fn register_job(&mut self, job: Job) -> JobId {
        let project = &mut *self.project;
        project.workflows[self.id.0].register_job(&mut project.arena, job)
    }

    fn register_properties(&mut self, properties: Properties) -> PropertiesId {
        let project = &mut *self.project;
        project.workflows[self.id.0].register_properties(&mut project.arena, properties)
    }

    fn not_found(&self, what: &str, path: &str) -> JobflowError {
        JobflowError::EntityNotFound(format!(
            "{what} '{path}' (referenced from workflow '{}')",
            self.name()
        ))
    }
}

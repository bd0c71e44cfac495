// src/workflow/build.rs

use tracing::info;

use crate::arena::Arena;
use crate::build::Emitter;
use crate::errors::{JobflowError, Result};
use crate::job::prefixed;
use crate::types::JobId;
use crate::workflow::Workflow;

impl Workflow {
    /// Prefix the jobs of this workflow are emitted under.
    pub fn child_prefix(&self, parent_name: Option<&str>) -> String {
        prefixed(parent_name, self.name())
    }

    /// Emit this workflow.
    ///
    /// The `default` workflow is handed to [`Workflow::build_default`].
    /// Any other workflow emits its dependency closure in discovery order,
    /// then every registered property bag, all under
    /// [`Workflow::child_prefix`]. The launch job's file is named after the
    /// prefix itself so the scheduler sees a flow named like the workflow.
    pub fn build(
        &self,
        arena: &mut Arena,
        emitter: &mut Emitter<'_>,
        parent_name: Option<&str>,
    ) -> Result<()> {
        if self.is_default() {
            return self.build_default(arena, emitter);
        }

        let job_list = self.build_job_list(arena)?;
        let prefix = self.child_prefix(parent_name);

        for id in &job_list {
            let job = arena.job(*id);
            let build_name = if *id == self.launch_job() {
                prefix.clone()
            } else {
                job.build_name(Some(&prefix))
            };
            let dependencies = dependency_build_names(arena, job.resolved_dependencies(), Some(&prefix));
            emitter.emit_job(&build_name, job, &dependencies)?;
        }

        for id in self.properties() {
            let properties = arena.properties(*id);
            emitter.emit_properties(&properties.build_name(Some(&prefix)), properties)?;
        }

        info!(
            workflow = %self.name(),
            prefix = %prefix,
            jobs = job_list.len(),
            properties = self.properties().len(),
            "built workflow"
        );
        Ok(())
    }

    /// Emit every declared job and property bag of the `default` workflow
    /// without a prefix and without a launch job.
    ///
    /// Dependency names are still resolved first; an unresolved one fails
    /// the build before anything is written.
    pub fn build_default(&self, arena: &mut Arena, emitter: &mut Emitter<'_>) -> Result<()> {
        if !self.is_default() {
            return Err(JobflowError::NotDefaultWorkflow(self.name().to_string()));
        }

        for id in self.jobs() {
            let resolved = self.resolve_dependencies(arena, *id)?;
            arena.job_mut(*id).set_resolved(resolved);
        }

        for id in self.jobs() {
            let job = arena.job(*id);
            let dependencies = dependency_build_names(arena, job.resolved_dependencies(), None);
            emitter.emit_job(&job.build_name(None), job, &dependencies)?;
        }

        for id in self.properties() {
            let properties = arena.properties(*id);
            emitter.emit_properties(&properties.build_name(None), properties)?;
        }

        info!(
            jobs = self.jobs().len(),
            properties = self.properties().len(),
            "built default workflow"
        );
        Ok(())
    }
}

fn dependency_build_names(arena: &Arena, deps: &[JobId], prefix: Option<&str>) -> Vec<String> {
    deps.iter()
        .map(|dep| arena.job(*dep).build_name(prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::arena::Arena;
    use crate::build::Emitter;
    use crate::errors::JobflowError;
    use crate::fs::FileSystem;
    use crate::fs::mock::MockFileSystem;
    use crate::job::{Job, Properties};
    use crate::types::DEFAULT_WORKFLOW;
    use crate::workflow::Workflow;
    use crate::workflow::test_support::*;

    #[test]
    fn emits_closure_and_properties_under_child_prefix() {
        let fs = MockFileSystem::new();
        let mut emitter = Emitter::new(&fs, "out");
        let mut arena = Arena::new();
        let mut wf = workflow_in(&mut arena, "daily");
        wf.register_job(&mut arena, command("prep", &[]));
        wf.register_job(&mut arena, command("report", &["prep"]));
        wf.register_job(&mut arena, command("orphan", &[]));
        let mut props = Properties::new("common");
        props.set("user.to.proxy", "etl");
        wf.register_properties(&mut arena, props);
        wf.executes(&mut arena, ["report"]);

        wf.build(&mut arena, &mut emitter, Some("etl")).unwrap();

        assert_eq!(
            fs.file_names_in("out"),
            vec![
                "etl-daily-common.properties",
                "etl-daily-prep.job",
                "etl-daily-report.job",
                "etl-daily.job",
            ]
        );
        let launch = fs.read_to_string(Path::new("out/etl-daily.job")).unwrap();
        assert!(launch.contains("type=noop\n"));
        assert!(launch.contains("dependencies=etl-daily-report\n"));
        let report = fs.read_to_string(Path::new("out/etl-daily-report.job")).unwrap();
        assert!(report.contains("dependencies=etl-daily-prep\n"));

        let written: Vec<String> = emitter
            .written()
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect();
        assert_eq!(
            written,
            vec![
                "etl-daily.job",
                "etl-daily-report.job",
                "etl-daily-prep.job",
                "etl-daily-common.properties",
            ]
        );
    }

    #[test]
    fn without_parent_the_prefix_is_the_workflow_name() {
        let mut arena = Arena::new();
        let wf = workflow_in(&mut arena, "hourly");
        assert_eq!(wf.child_prefix(None), "hourly");
        assert_eq!(wf.child_prefix(Some("")), "hourly");
        assert_eq!(wf.child_prefix(Some("p")), "p-hourly");
    }

    #[test]
    fn default_workflow_emits_everything_flat() {
        let fs = MockFileSystem::new();
        let mut emitter = Emitter::new(&fs, "out");
        let mut arena = Arena::new();
        let scope = arena.scopes.create_root(DEFAULT_WORKFLOW);
        let launch = arena.add_job(Job::launch(DEFAULT_WORKFLOW));
        let mut wf = Workflow::new(DEFAULT_WORKFLOW, scope, launch);
        wf.register_job(&mut arena, command("a", &[]));
        wf.register_job(&mut arena, command("b", &["a"]));
        wf.register_properties(&mut arena, Properties::new("common"));

        wf.build(&mut arena, &mut emitter, Some("ignored")).unwrap();

        assert_eq!(
            fs.file_names_in("out"),
            vec!["a.job", "b.job", "common.properties"]
        );
        let b = fs.read_to_string(Path::new("out/b.job")).unwrap();
        assert!(b.contains("dependencies=a\n"));
    }

    #[test]
    fn default_workflow_still_validates_dependencies() {
        let fs = MockFileSystem::new();
        let mut emitter = Emitter::new(&fs, "out");
        let mut arena = Arena::new();
        let scope = arena.scopes.create_root(DEFAULT_WORKFLOW);
        let launch = arena.add_job(Job::launch(DEFAULT_WORKFLOW));
        let mut wf = Workflow::new(DEFAULT_WORKFLOW, scope, launch);
        wf.register_job(&mut arena, command("a", &[]));
        wf.register_job(&mut arena, command("b", &["missing"]));

        let err = wf.build_default(&mut arena, &mut emitter).unwrap_err();
        assert!(err.to_string().contains("missing"));
        assert!(fs.files().is_empty());
    }

    #[test]
    fn build_default_rejects_other_workflows() {
        let fs = MockFileSystem::new();
        let mut emitter = Emitter::new(&fs, "out");
        let mut arena = Arena::new();
        let wf = workflow_in(&mut arena, "daily");

        match wf.build_default(&mut arena, &mut emitter) {
            Err(JobflowError::NotDefaultWorkflow(name)) => assert_eq!(name, "daily"),
            other => panic!("expected NotDefaultWorkflow, got {other:?}"),
        }
    }
}

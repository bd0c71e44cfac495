// tests/fs_abstraction.rs
mod common;
use crate::common::builders::{
    ConfigFileBuilder, JobConfigBuilder, WorkflowConfigBuilder, property_file,
};
use crate::common::init_tracing;

use std::path::Path;

use jobflow::build::Emitter;
use jobflow::fs::FileSystem;
use jobflow::fs::mock::MockFileSystem;
use jobflow::types::JobKind;

#[test]
fn test_builder_config_emits_into_mock_fs() {
    init_tracing();

    let cfg = ConfigFileBuilder::new()
        .prefix("nightly")
        .with_job(JobConfigBuilder::command("warmup", "echo warm").build())
        .with_properties(property_file("env", &[("queue", "etl")]))
        .with_workflow(
            WorkflowConfigBuilder::new("ingest")
                .job(JobConfigBuilder::new(JobKind::HadoopJava, "load").after("warmup").build())
                .job(JobConfigBuilder::new(JobKind::KafkaPush, "push").after("load").build())
                .properties(property_file("ingest", &[("topic", "events")]))
                .executes("push")
                .build(),
        )
        .with_workflow(
            WorkflowConfigBuilder::new("reingest")
                .from("ingest")
                .job(JobConfigBuilder::copy_of("ingest.load", "load").build())
                .build(),
        )
        .build();

    let mut project = cfg.to_project().unwrap();
    let fs = MockFileSystem::new();
    fs.add_file(
        "out/stale.job",
        "# This file generated by jobflow. Do not edit by hand.\ntype=noop\n",
    );
    fs.add_file("out/handwritten.properties", "azkaban.url=https://prod\n");
    fs.add_file("out/README", "keep");

    let mut emitter = Emitter::new(&fs, "out");
    assert_eq!(emitter.clean().unwrap(), 1);
    project
        .build(&mut emitter, cfg.config.prefix.as_deref(), &[])
        .unwrap();

    assert_eq!(
        fs.file_names_in("out"),
        vec![
            "README",
            "env.properties",
            "handwritten.properties",
            "nightly-ingest-ingest.properties",
            "nightly-ingest-load.job",
            "nightly-ingest-push.job",
            "nightly-ingest-warmup.job",
            "nightly-ingest.job",
            "nightly-reingest-load.job",
            "nightly-reingest-push.job",
            "nightly-reingest-warmup.job",
            "nightly-reingest.job",
            "warmup.job",
        ]
    );

    let push = fs
        .read_to_string(Path::new("out/nightly-ingest-push.job"))
        .unwrap();
    assert!(push.starts_with("# This file generated by jobflow. Do not edit by hand.\n"));
    assert!(push.contains("type=KafkaPushJob\ndependencies=nightly-ingest-load\n"));
    assert_eq!(emitter.written().len(), 11);
}

#[test]
fn test_invalid_builder_config_is_rejected() {
    let raw = ConfigFileBuilder::new()
        .build_dir("")
        .raw();
    assert!(jobflow::config::ConfigFile::try_from(raw).is_err());
}

// src/build/mod.rs

//! Emitting generated files.
//!
//! - [`format`] renders jobs and property bags into Azkaban's `key=value`
//!   file format.
//! - [`emitter`] writes the rendered files under an output directory through
//!   a [`crate::fs::FileSystem`].
//!
//! Which entities get emitted, in what order and under which prefix is
//! decided by [`crate::workflow::Workflow::build`].

pub mod emitter;
pub mod format;

pub use emitter::{Emitter, JOB_EXTENSION, PROPERTIES_EXTENSION};
pub use format::{render_job, render_properties};

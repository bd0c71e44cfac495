// src/build/emitter.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::build::format::{GENERATED_HEADER, render_job, render_properties};
use crate::errors::{JobflowError, Result};
use crate::fs::FileSystem;
use crate::job::{Job, Properties};

pub const JOB_EXTENSION: &str = "job";
pub const PROPERTIES_EXTENSION: &str = "properties";

/// Writes rendered entities into one output directory.
///
/// Keeps the list of written paths so callers can report on them, and
/// refuses to write the same path twice: two entities sharing a build name
/// would otherwise silently replace one another.
#[derive(Debug)]
pub struct Emitter<'a> {
    fs: &'a dyn FileSystem,
    dir: PathBuf,
    written: Vec<PathBuf>,
    owners: HashMap<PathBuf, String>,
}

impl<'a> Emitter<'a> {
    pub fn new(fs: &'a dyn FileSystem, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dir: dir.into(),
            written: Vec::new(),
            owners: HashMap::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Write `<build_name>.job`.
    pub fn emit_job(
        &mut self,
        build_name: &str,
        job: &Job,
        dependencies: &[String],
    ) -> Result<PathBuf> {
        let path = self.dir.join(format!("{build_name}.{JOB_EXTENSION}"));
        let owner = if job.is_launch() {
            format!("launch job of workflow '{}'", job.name())
        } else {
            format!("job '{}'", job.name())
        };
        self.claim(&path, owner)?;
        self.fs
            .write(&path, render_job(job, dependencies).as_bytes())?;
        debug!(job = %job.name(), path = ?path, "emitted job file");
        self.written.push(path.clone());
        Ok(path)
    }

    /// Write `<build_name>.properties`.
    pub fn emit_properties(&mut self, build_name: &str, properties: &Properties) -> Result<PathBuf> {
        let path = self.dir.join(format!("{build_name}.{PROPERTIES_EXTENSION}"));
        self.claim(&path, format!("property file '{}'", properties.name()))?;
        self.fs
            .write(&path, render_properties(properties).as_bytes())?;
        debug!(properties = %properties.name(), path = ?path, "emitted properties file");
        self.written.push(path.clone());
        Ok(path)
    }

    fn claim(&mut self, path: &Path, owner: String) -> Result<()> {
        if let Some(previous) = self.owners.get(path) {
            return Err(JobflowError::ConfigError(format!(
                "{owner} and {previous} both build to {}",
                path.display()
            )));
        }
        self.owners.insert(path.to_path_buf(), owner);
        Ok(())
    }

    /// Remove previously generated `.job` / `.properties` files from the
    /// output directory. A file counts as generated only when its first
    /// line is [`GENERATED_HEADER`]; hand-written files, other files and
    /// subdirectories are left alone.
    ///
    /// Returns the number of files removed.
    pub fn clean(&self) -> Result<usize> {
        if !self.fs.exists(&self.dir) {
            return Ok(0);
        }

        let mut removed = 0;
        for path in self.fs.read_dir(&self.dir)? {
            if self.fs.is_file(&path) && self.is_generated(&path) {
                self.fs.remove_file(&path)?;
                removed += 1;
            }
        }

        info!(dir = ?self.dir, removed, "cleaned output directory");
        Ok(removed)
    }

    fn is_generated(&self, path: &Path) -> bool {
        let extension_matches = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some(JOB_EXTENSION) | Some(PROPERTIES_EXTENSION)
        );
        // Unreadable files are not ours to delete.
        extension_matches
            && self
                .fs
                .read_to_string(path)
                .map(|contents| contents.lines().next() == Some(GENERATED_HEADER))
                .unwrap_or(false)
    }
}

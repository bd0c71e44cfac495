// src/fs/mod.rs

//! Filesystem seam used by the emitter.
//!
//! [`RealFileSystem`] wraps `std::fs`; [`mock::MockFileSystem`] keeps
//! everything in memory so build output can be asserted on directly.

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod mock;

pub trait FileSystem: Debug {
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write `contents` to `path`, creating parent directories as needed.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;

    fn create_dir_all(&self, path: &Path) -> Result<()>;

    fn remove_file(&self, path: &Path) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Full paths of the entries directly inside `path`.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;
}

#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("reading file {:?}", path))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.create_dir_all(parent)?;
            }
        }
        fs::write(path, contents).with_context(|| format!("writing file {:?}", path))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).with_context(|| format!("creating dir {:?}", path))
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).with_context(|| format!("removing file {:?}", path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).with_context(|| format!("reading dir {:?}", path))? {
            entries.push(entry?.path());
        }
        Ok(entries)
    }
}

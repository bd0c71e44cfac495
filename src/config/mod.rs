// src/config/mod.rs

//! Configuration loading and validation for jobflow.
//!
//! - `model.rs`: the TOML-backed data model.
//! - `loader.rs`: reading a config file from disk.
//! - `validate.rs`: checks that need only the file itself.
//! - `apply.rs`: declaring a validated config on a [`crate::project::Project`].

pub mod apply;
pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    DEFAULT_CONFIG_FILE, config_root_dir, load_and_validate, load_from_path, load_from_str,
};
pub use model::{
    ConfigFile, ConfigSection, JobConfig, PropertiesConfig, PropertyValue, RawConfigFile,
    WorkflowConfig,
};
pub use validate::validate_raw_config;

#![allow(dead_code)]

pub use jobflow_test_utils::{builders, init_tracing, write_config};

use jobflow::cli::CliArgs;

/// CLI args pointing at `config`, everything else defaulted.
pub fn args_for(config: &std::path::Path) -> CliArgs {
    CliArgs {
        config: config.display().to_string(),
        output_dir: None,
        workflows: vec![],
        clean: false,
        log_level: None,
        dry_run: false,
    }
}

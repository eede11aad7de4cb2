//
//  powertoys-client
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O
//!
//! Low-level helpers used by [`Config`](super::Config) to read and write
//! `config.toml`. Write operations create missing parent directories.

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the contents of a configuration file.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be opened, or is not
/// valid UTF-8. The error names the offending path.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

/// Writes content to a configuration file, creating parent directories.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use powertoys_client::config::write_config_file;
///
/// write_config_file(Path::new("/tmp/powertoys/config.toml"), "[client]\napi_version = 2\n")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}

/// Checks if a configuration file exists.
pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}

use std::path::{Path, PathBuf};

use addrex_clang::{ClangDriver, CleanupOptions};
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::io::read_file;

pub const CONFIG_FILE: &str = "addrex.toml";

/// Contents of `addrex.toml`. Every table and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AddrexConfig {
    pub module: ModuleConfig,
    pub clang: ClangConfig,
    pub naming: NamingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleConfig {
    /// Python module name
    pub name: Option<String>,
    /// Headers declaring the targets, relative to the config file
    pub headers: Vec<PathBuf>,
    /// Implementation files linked into the library by `gen --build`
    pub sources: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClangConfig {
    pub exe: Option<String>,
    pub dump_flags: Option<String>,
    pub build_flags: Option<String>,
    pub extra_flags: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    /// Fail instead of skipping declarations that cannot be named
    pub strict: bool,
    pub system_prefixes: Option<Vec<String>>,
}

impl AddrexConfig {
    pub fn parse(source: &str, path: &Path) -> Result<Self, CliError> {
        toml::from_str(source).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `path` and makes the listed files relative to its directory.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let mut config = Self::parse(&read_file(path)?, path)?;
        if let Some(dir) = path.parent() {
            config.module.headers = rebase(dir, config.module.headers);
            config.module.sources = rebase(dir, config.module.sources);
        }
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn driver(&self) -> ClangDriver {
        let mut driver = ClangDriver::default();
        let clang = &self.clang;
        if let Some(exe) = &clang.exe {
            driver.exe = exe.clone();
        }
        if let Some(flags) = &clang.dump_flags {
            driver.dump_flags = flags.clone();
        }
        if let Some(flags) = &clang.build_flags {
            driver.build_flags = flags.clone();
        }
        if let Some(flags) = &clang.extra_flags {
            driver.extra_flags = flags.clone();
        }
        driver
    }

    pub fn cleanup_options(&self) -> CleanupOptions {
        match &self.naming.system_prefixes {
            Some(prefixes) => CleanupOptions {
                system_prefixes: prefixes.clone(),
            },
            None => CleanupOptions::default(),
        }
    }
}

fn rebase(dir: &Path, paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths
        .into_iter()
        .map(|p| if p.is_absolute() { p } else { dir.join(p) })
        .collect()
}

/// Searches `start_path` and its ancestors for `addrex.toml`.
pub fn find_config(start_path: &Path) -> Option<PathBuf> {
    let mut current = if start_path.is_dir() {
        start_path.to_path_buf()
    } else {
        start_path.parent().map_or_else(|| start_path.to_path_buf(), Path::to_path_buf)
    };

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.is_file() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Configuration found from `start_path`, or the defaults if there is none.
pub fn load_config(start_path: &Path) -> Result<AddrexConfig, CliError> {
    match find_config(start_path) {
        Some(path) => AddrexConfig::load(&path),
        None => {
            log::debug!("No {} found above {}", CONFIG_FILE, start_path.display());
            Ok(AddrexConfig::default())
        }
    }
}

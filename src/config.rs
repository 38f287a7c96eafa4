// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layered settings: built-in defaults, then the TOML config file, then environment and flags.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use serde::Deserialize;

use crate::preview::strategy::syntax::DEFAULT_THEME;
use crate::preview::DEFAULT_CACHE_CAPACITY;

pub const CONFIG_DIR_NAME: &str = "seer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config file {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
}

/// Command-line arguments accepted by the `seer` binary.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(name = "seer", version, about = "Terminal file browser with rich previews")]
pub struct Cli {
    /// Directory to open (default: current directory)
    #[arg(value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Configuration file (default: <config dir>/seer/config.toml)
    #[arg(short, long, value_name = "FILE", env = "SEER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show dot-files initially
    #[arg(long = "hidden", env = "SEER_SHOW_HIDDEN", action = ArgAction::SetTrue)]
    pub show_hidden: bool,

    /// Syntax-highlighting theme
    #[arg(long = "theme", value_name = "NAME", env = "SEER_THEME")]
    pub syntax_theme: Option<String>,

    /// Write logs to this file (filter via SEER_LOG)
    #[arg(long, value_name = "FILE", env = "SEER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// The on-disk TOML layer. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    pub show_hidden: Option<bool>,
    pub syntax_theme: Option<String>,
    pub log_file: Option<PathBuf>,
    pub cache_capacity: Option<usize>,
}

impl FileConfig {
    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Reads `path`; a missing file is an error only when `required`.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(path, &text),
            Err(err) if err.kind() == io::ErrorKind::NotFound && !required => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path: path.to_path_buf(), source }),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: PathBuf,
    pub show_hidden: bool,
    pub syntax_theme: String,
    pub log_file: Option<PathBuf>,
    pub cache_capacity: usize,
}

impl Settings {
    /// Loads the config file named by `cli` (or the default one) and merges all layers.
    pub fn load(cli: Cli) -> Result<Self, ConfigError> {
        let file = match (&cli.config, default_config_path()) {
            (Some(path), _) => FileConfig::load(path, true)?,
            (None, Some(path)) => FileConfig::load(&path, false)?,
            (None, None) => FileConfig::default(),
        };
        let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
        let settings = Self::merge(cli, file, &cwd);
        if !settings.root.is_dir() {
            return Err(ConfigError::NotADirectory { path: settings.root });
        }
        Ok(settings)
    }

    /// Later layers win: defaults, then `file`, then `cli`. Relative roots resolve against `cwd`.
    pub fn merge(cli: Cli, file: FileConfig, cwd: &Path) -> Self {
        let root = cli.root.or(file.root).unwrap_or_else(|| cwd.to_path_buf());
        let root = if root.is_absolute() { root } else { cwd.join(root) };

        Self {
            root,
            show_hidden: cli.show_hidden || file.show_hidden.unwrap_or(false),
            syntax_theme: cli
                .syntax_theme
                .or(file.syntax_theme)
                .unwrap_or_else(|| DEFAULT_THEME.to_owned()),
            log_file: cli.log_file.or(file.log_file),
            cache_capacity: file.cache_capacity.unwrap_or(DEFAULT_CACHE_CAPACITY).max(1),
        }
    }
}

// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module resolves the folder holding the console's configuration files
//! and loads the utility's own settings file.
//!
//! The configuration folder is `<DEV_CONFIG_PATH>/` when that variable is set,
//! and `<working directory>/webapps/config/` otherwise. The lookup is done once
//! by [`ConfigEnv::from_process`]; [`resolve_config_path`] itself reads
//! nothing from the process.

use std::{ffi::OsString, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

const CONFIG_NAME: &str = "console-util";

/// Environment variable overriding the configuration folder.
pub const DEV_CONFIG_PATH: &str = "DEV_CONFIG_PATH";

/// The two inputs of the configuration folder lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigEnv {
    pub override_path: Option<PathBuf>,
    pub working_dir: PathBuf,
}

impl ConfigEnv {
    /// Builds the lookup inputs from a raw override value, which need not be
    /// valid UTF-8.
    pub fn new(override_path: Option<OsString>, working_dir: PathBuf) -> Self {
        Self {
            override_path: override_path.map(PathBuf::from),
            working_dir,
        }
    }

    /// Reads `DEV_CONFIG_PATH` and the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn from_process() -> Result<Self> {
        Ok(Self::new(
            std::env::var_os(DEV_CONFIG_PATH),
            std::env::current_dir()?,
        ))
    }

    /// Uses `path` as the override unless one is already set.
    pub fn or_override(mut self, path: Option<String>) -> Self {
        if self.override_path.is_none() {
            self.override_path = path.map(PathBuf::from);
        }
        self
    }
}

/// Returns the configuration folder, always with a trailing `/`.
///
/// The folder is not checked for existence.
pub fn resolve_config_path(env: &ConfigEnv) -> String {
    match &env.override_path {
        Some(path) => format!("{}/", path.display()),
        None => format!("{}/webapps/config/", env.working_dir.display()),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub version: u32,
    pub dev_config_path: Option<String>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            dev_config_path: None,
            log_filter: "info".to_string(),
        }
    }
}

/// Loads the settings file, creating it with defaults on first use.
///
/// A file that cannot be read or parsed yields the defaults.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

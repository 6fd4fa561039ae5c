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

//! # Numeration check.
//!
//! Prints whether a numeration code is within the segment limit, after
//! logging the configuration folder the console would use.
//!
//! ```text
//! console-util [NUMERATION]
//! ```
//!
//! Without an argument the code `123.123.123.123.123` is checked. Logging goes
//! to stderr and is filtered by `RUST_LOG`, falling back to the `log_filter`
//! setting of the configuration file.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use console_util::{
    config::{self, ConfigEnv, resolve_config_path},
    validation::is_numeration_within_limit,
};

const DEFAULT_NUMERATION: &str = "123.123.123.123.123";

fn main() -> Result<()> {
    let cfg = config::load_config();
    init_logging(&cfg.log_filter);

    let env = ConfigEnv::from_process()
        .context("Failed to locate the configuration folder")?
        .or_override(cfg.dev_config_path);
    tracing::info!(path = %resolve_config_path(&env), "Configuration folder");

    let numeration = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_NUMERATION.to_string());
    println!("result: {}", is_numeration_within_limit(&numeration));

    Ok(())
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

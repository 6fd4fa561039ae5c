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

//! Diagnostic output.
//!
//! Functions that report recoverable problems (unparseable dates) or trace
//! their progress (component lookups) take a [`Diagnostics`] sink rather
//! than writing to a global logger, so callers decide where the lines end up.

/// A sink for diagnostic lines.
pub trait Diagnostics: Send + Sync {
    fn debug(&self, message: &str);

    fn error(&self, message: &str);
}

/// Forwards diagnostics to `tracing` under the `console_util` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "console_util", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "console_util", "{}", message);
    }
}

/// Discards every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {
    fn debug(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

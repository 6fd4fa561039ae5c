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

//! # Console utilities.
//!
//! Stateless helpers backing the web console's forms and widget trees.
//!
//! * [`validation`]: emails, CPF numbers and numeration codes.
//! * [`util`]: currency and byte size formatting, date intervals.
//! * [`tree`]: expanding, flattening and pruning widget trees, and finding
//!   components by id.
//! * [`config`]: locating the configuration folder.
//!
//! Functions that log take a [`Diagnostics`] sink; [`TracingDiagnostics`]
//! forwards to `tracing`.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod tree;
pub mod util;
pub mod validation;

pub use diagnostics::{Diagnostics, NoDiagnostics, TracingDiagnostics};
pub use error::{Error, Result};

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

//! Error types.
//!
//! Pattern mismatches (emails, CPFs, numerations) are reported as plain
//! `false` by the validation functions and never show up here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid file size: {0}")]
    InvalidFileSize(u64),

    #[error("Invalid date '{input}', expected dd/mm/yyyy")]
    DateFormat { input: String },

    #[error("Invalid date '{input}', expected dd/mm/yyyy: {source}")]
    DateParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Unable to read the working directory: {0}")]
    WorkingDir(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

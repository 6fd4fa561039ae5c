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

//! String and identity validation.
//!
//! All checks here answer with a plain `bool`: a value that does not match
//! is simply invalid, it is never an error.
//!
//! # Sub-modules
//!
//! * [`cpf`]: Brazilian taxpayer number (CPF) mask removal and checksum
//!   validation.

pub mod cpf;

use std::sync::LazyLock;

use regex::Regex;

pub use cpf::{is_valid_cpf, remove_cpf_mask};

const EMAIL_PATTERN: &str =
    r"^[_A-Za-z0-9\-+]+(\.[_A-Za-z0-9\-]+)*@[A-Za-z0-9\-]+(\.[A-Za-z0-9]+)*(\.[A-Za-z]{2,})$";

const NUMERATION_PATTERN: &str = r"^[0-9]+(\.[0-9]+)*$";

const MAX_NUMERATION_SEGMENTS: usize = 4;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

static NUMERATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(NUMERATION_PATTERN).expect("numeration pattern is a valid regex")
});

/// Returns `true` if the string is present and has at least one character.
pub fn is_non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}

/// Checks an email address against the `local-part@domain.tld` grammar.
///
/// The local part allows letters, digits, `_`, `-` and `+` in its first
/// segment and letters, digits, `_` and `-` in further dot-separated
/// segments. The domain is made of letters, digits and hyphens, and must end
/// with a top level domain of at least two letters.
///
/// # Examples
///
/// ```
/// use console_util::validation::is_valid_email;
///
/// assert!(is_valid_email("a@b.com"));
/// assert!(!is_valid_email("not-an-email"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Returns the part of an email address before the first `@`.
///
/// Returns `None` when there is no `@` at all, or when the string is made
/// only of `@` characters and so has no token to return.
pub fn extract_local_part(email: &str) -> Option<&str> {
    if email.chars().all(|c| c == '@') {
        return None;
    }
    email.split_once('@').map(|(local, _)| local)
}

/// Checks that a numeration is a dot separated sequence of digit groups,
/// such as `123.45.6`.
pub fn is_valid_numeration(numeration: &str) -> bool {
    !numeration.is_empty() && NUMERATION_REGEX.is_match(numeration)
}

/// Checks that a numeration has between one and four segments.
///
/// Only the segment count is checked, not the content of each segment. Empty
/// trailing segments (`"12.3."`) are not counted.
pub fn is_numeration_within_limit(numeration: &str) -> bool {
    if numeration.is_empty() {
        return false;
    }

    let mut segments: Vec<&str> = numeration.split('.').collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }

    (1..=MAX_NUMERATION_SEGMENTS).contains(&segments.len())
}

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

use crate::error::{Error, Result};

const K: u64 = 1024;
const M: u64 = K * K;
const G: u64 = M * K;
const T: u64 = G * K;

/// Dividers and labels, largest first.
const BYTE_UNITS: [(u64, &str); 5] = [(T, "TB"), (G, "GB"), (M, "MB"), (K, "KB"), (1, "B")];

/// Formats an amount as Brazilian reais, e.g. `R$ 1.234,56`.
///
/// The symbol is followed by a non-breaking space. Cents are rounded half to
/// even on the exact value of the `f64` and negative amounts carry a leading
/// `-`. Infinities print as `R$ ∞` and NaN prints as `NaN`, without a symbol.
pub fn format_currency_brl(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}R$\u{a0}∞", sign);
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let is_zero = whole.bytes().all(|b| b == b'0') && cents.bytes().all(|b| b == b'0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    format!("{}R$\u{a0}{},{}", sign, group_thousands(whole, '.'), cents)
}

/// Formats a size in bytes using the largest unit it reaches.
///
/// Units are binary (1 KB = 1024 B). The value keeps at most one fractional
/// digit and the integer part is grouped with commas.
///
/// # Errors
///
/// Returns [`Error::InvalidFileSize`] for a size of zero.
///
/// # Examples
///
/// ```
/// use console_util::util::format::format_byte_size;
///
/// assert_eq!(format_byte_size(1023).unwrap(), "1,023 B");
/// assert_eq!(format_byte_size(1536).unwrap(), "1.5 KB");
/// ```
pub fn format_byte_size(value: u64) -> Result<String> {
    let (divider, unit) = BYTE_UNITS
        .into_iter()
        .find(|&(divider, _)| value >= divider)
        .ok_or(Error::InvalidFileSize(value))?;

    let scaled = value as f64 / divider as f64;
    Ok(format!("{} {}", format_one_decimal(scaled), unit))
}

/// Rounds half to even on the first decimal and drops a zero fraction.
fn format_one_decimal(value: f64) -> String {
    let fixed = format!("{:.1}", value);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));
    let whole = group_thousands(whole, ',');
    match fraction {
        "0" => whole,
        fraction => format!("{}.{}", whole, fraction),
    }
}

/// Inserts `separator` every three digits of an unsigned digit string.
fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

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

//! CPF (Cadastro de Pessoas Físicas) validation.
//!
//! A CPF is eleven digits. The last two are check digits computed with a
//! modulo 11 weighted sum over the first nine and first ten digits.

const CPF_LEN: usize = 11;

/// Strips the `000.000.000-00` mask from a CPF.
pub fn remove_cpf_mask(cpf: &str) -> String {
    cpf.chars().filter(|c| !matches!(c, '.' | '-')).collect()
}

/// Validates an unmasked CPF.
///
/// Anything that is not exactly eleven ASCII digits is rejected, as are the
/// ten sequences of a single repeated digit (`00000000000` to
/// `99999999999`), which pass the checksum but are never issued.
///
/// # Examples
///
/// ```
/// use console_util::validation::is_valid_cpf;
///
/// assert!(is_valid_cpf("52998224725"));
/// assert!(!is_valid_cpf("52998224724"));
/// assert!(!is_valid_cpf("11111111111"));
/// ```
pub fn is_valid_cpf(cpf: &str) -> bool {
    if cpf.len() != CPF_LEN || !cpf.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let mut digits = [0u32; CPF_LEN];
    for (digit, byte) in digits.iter_mut().zip(cpf.bytes()) {
        *digit = u32::from(byte - b'0');
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Computes the check digit following `digits`.
///
/// Weights run from `digits.len() + 1` down to 2. A remainder of 10 or 11
/// maps to 0.
fn check_digit(digits: &[u32]) -> u32 {
    let first_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=first_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match 11 - sum % 11 {
        10 | 11 => 0,
        r => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digits_of_known_cpf() {
        let digits = [5, 2, 9, 9, 8, 2, 2, 4, 7, 2];
        assert_eq!(check_digit(&digits[..9]), 2);
        assert_eq!(check_digit(&digits), 5);
    }

    #[test]
    fn test_check_digit_maps_ten_and_eleven_to_zero() {
        assert_eq!(check_digit(&[1, 0, 0, 0, 0, 0, 0, 0, 0]), 1);
        // sum 0 gives 11
        assert_eq!(check_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 0]), 0);
        // sum 12 gives 10
        assert_eq!(check_digit(&[1, 0, 0, 0, 0, 0, 0, 0, 1]), 0);
    }

    #[test]
    fn test_valid_cpfs() {
        assert!(is_valid_cpf("52998224725"));
        assert!(is_valid_cpf("11144477735"));
        assert!(is_valid_cpf("12345678909"));
    }

    #[test]
    fn test_repeated_digits_are_rejected() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            assert!(!is_valid_cpf(&cpf), "{} should be rejected", cpf);
        }
    }

    #[test]
    fn test_wrong_checksums_are_rejected() {
        assert!(!is_valid_cpf("52998224735"));
        assert!(!is_valid_cpf("52998224726"));
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("5299822472"));
        assert!(!is_valid_cpf("529982247250"));
        assert!(!is_valid_cpf("529.982.247-25"));
        assert!(!is_valid_cpf("5299822472a"));
        assert!(!is_valid_cpf("５2998224725"));
    }

    #[test]
    fn test_remove_cpf_mask() {
        assert_eq!(remove_cpf_mask("529.982.247-25"), "52998224725");
        assert_eq!(remove_cpf_mask("52998224725"), "52998224725");
        assert!(is_valid_cpf(&remove_cpf_mask("529.982.247-25")));
    }
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Lenient OS version parsing.
//!
//! Version strings come straight from the platform and are not guaranteed
//! to be well formed (`"14"`, `"17.2.1"`, `"13 QPR1"`, `""`). Both parsers
//! read the longest numeric prefix and ignore whatever follows it; a
//! string with no numeric prefix yields `None`.

/// Parses the leading decimal integer of `s`.
///
/// Leading whitespace and a single `+`/`-` sign are accepted.
///
/// ```
/// use spec_classifier::version::parse_leading_int;
///
/// assert_eq!(parse_leading_int("14"), Some(14));
/// assert_eq!(parse_leading_int("13.1"), Some(13));
/// assert_eq!(parse_leading_int("beta"), None);
/// ```
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = split_sign(s);
    let digits = digit_run(rest);
    if digits == 0 {
        return None;
    }
    // Saturate rather than fail on absurdly long digit runs.
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses the leading decimal number of `s`, including an optional
/// fractional part and exponent.
///
/// ```
/// use spec_classifier::version::parse_leading_float;
///
/// assert_eq!(parse_leading_float("17.2"), Some(17.2));
/// assert_eq!(parse_leading_float("16.0.1"), Some(16.0));
/// assert_eq!(parse_leading_float(""), None);
/// ```
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (_, unsigned) = split_sign(s);
    let sign_len = s.len() - unsigned.len();

    let int_digits = digit_run(unsigned);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if unsigned[end..].starts_with('.') {
        frac_digits = digit_run(&unsigned[end + 1..]);
        // A bare "." is only part of the number if digits surround it.
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    let exp = &unsigned[end..];
    if exp.starts_with(['e', 'E']) {
        let (_, exp_unsigned) = split_sign(&exp[1..]);
        let exp_digits = digit_run(exp_unsigned);
        if exp_digits > 0 {
            end += exp.len() - exp_unsigned.len() + exp_digits;
        }
    }

    s[..sign_len + end].parse::<f64>().ok()
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

/// Length in bytes of the ASCII digit run at the start of `s`.
fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

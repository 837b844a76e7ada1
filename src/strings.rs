//! String Helpers
//!
//! Small allocation-returning helpers over `&str`. Case conversion is ASCII
//! only; everything else is UTF-8 aware.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// How many matches [`replace`] rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceMode {
    /// Only the leftmost match.
    First,
    /// Every non-overlapping match, scanning left to right.
    All,
}

/// Splits `input` on every `delimiter`.
///
/// Empty tokens are kept, so `"a,,b"` yields three pieces and a trailing
/// delimiter yields a trailing empty piece. An empty input yields no pieces
/// at all.
///
/// # Examples
///
/// ```
/// use utils_rs::strings::split;
///
/// assert_eq!(split("a,,b,", ','), ["a", "", "b", ""]);
/// assert!(split("", ',').is_empty());
/// ```
pub fn split(input: &str, delimiter: char) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    input.split(delimiter).map(str::to_string).collect()
}

/// Concatenates `parts`, placing `delimiter` between neighbours.
pub fn join<S: AsRef<str>>(parts: &[S], delimiter: &str) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        out.push_str(part.as_ref());
    }
    out
}

/// Removes leading and trailing whitespace.
pub fn trim(s: &str) -> String {
    s.trim().to_string()
}

/// Lowercases ASCII letters, leaving other characters untouched.
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Uppercases ASCII letters, leaving other characters untouched.
pub fn to_upper(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Returns true if `s` begins with `prefix`. An empty prefix always matches.
pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

/// Returns true if `s` ends with `suffix`. An empty suffix always matches.
pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

/// Replaces occurrences of `from` with `to`.
///
/// Text produced by a replacement is never rescanned. An empty `from`
/// returns `s` unchanged.
///
/// # Examples
///
/// ```
/// use utils_rs::strings::{replace, ReplaceMode};
///
/// assert_eq!(replace("a-b-c", "-", "+", ReplaceMode::First), "a+b-c");
/// assert_eq!(replace("a-b-c", "-", "+", ReplaceMode::All), "a+b+c");
/// assert_eq!(replace("aaa", "a", "aa", ReplaceMode::All), "aaaaaa");
/// ```
pub fn replace(s: &str, from: &str, to: &str, mode: ReplaceMode) -> String {
    if from.is_empty() {
        return s.to_string();
    }
    match mode {
        ReplaceMode::First => s.replacen(from, to, 1),
        ReplaceMode::All => s.replace(from, to),
    }
}

/// Parses a decimal `i32`, ignoring surrounding whitespace.
///
/// Only digits and a leading sign are accepted. Out of range values yield
/// `None`.
pub fn to_int(s: &str) -> Option<i32> {
    s.trim().parse().ok()
}

/// Parses an `f64`, ignoring surrounding whitespace.
///
/// Accepts digits with at most one decimal point and at most one exponent
/// marker (`e` or `E`) preceded by a digit. A sign may appear first or
/// directly after the exponent marker. Words such as `inf` or `NaN` are
/// rejected.
///
/// # Examples
///
/// ```
/// use utils_rs::strings::to_double;
///
/// assert_eq!(to_double(" -1.5e3 "), Some(-1500.0));
/// assert_eq!(to_double(".5"), Some(0.5));
/// assert_eq!(to_double("1.2.3"), None);
/// assert_eq!(to_double("inf"), None);
/// ```
pub fn to_double(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if !is_decimal_literal(trimmed) {
        return None;
    }
    trimmed.parse().ok()
}

fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut has_digit = false;
    let mut has_dot = false;
    let mut has_exp = false;

    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'0'..=b'9' => has_digit = true,
            b'.' if !has_dot => has_dot = true,
            b'e' | b'E' if !has_exp && has_digit => has_exp = true,
            b'+' | b'-' if i == 0 || matches!(bytes[i - 1], b'e' | b'E') => {}
            _ => return false,
        }
    }
    has_digit
}

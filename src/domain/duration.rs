// SPDX-License-Identifier: MIT OR Apache-2.0

//! Textual durations.
//!
//! A duration is written as one or more `<number><unit>` groups, such as
//! `300ms`, `1.5h` or `2h45m`. Recognised units are `ns`, `us` (or `µs`),
//! `ms`, `s`, `m` and `h`. A bare `0` is accepted without a unit, and a
//! leading `-` is only accepted when the total is zero.

use std::time::Duration;
use thiserror::Error;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Reasons a duration string can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationParseError {
    /// The input was empty.
    #[error("empty duration")]
    Empty,
    /// A number was not followed by a unit.
    #[error("missing unit in duration")]
    MissingUnit,
    /// The unit is not one of the recognised units.
    #[error("unknown unit '{0}' in duration")]
    UnknownUnit(String),
    /// A group did not start with a valid number.
    #[error("invalid number '{0}' in duration")]
    InvalidNumber(String),
    /// Negative durations cannot be represented.
    #[error("negative durations are not supported")]
    Negative,
    /// The total does not fit in a [`Duration`].
    #[error("duration out of range")]
    Overflow,
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3_600 * NANOS_PER_SEC),
        _ => None,
    }
}

/// Parses a duration such as `1h30m` or `250ms`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tomlcfg::domain::duration::parse_duration;
///
/// assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
/// assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
/// assert!(parse_duration("10").is_err());
/// ```
pub fn parse_duration(text: &str) -> Result<Duration, DurationParseError> {
    if let Some(rest) = text.strip_prefix('-') {
        // A negated zero such as `-0s` is still zero.
        let magnitude = parse_unsigned(rest)?;
        if magnitude.is_zero() {
            return Ok(Duration::ZERO);
        }
        return Err(DurationParseError::Negative);
    }
    parse_unsigned(text.strip_prefix('+').unwrap_or(text))
}

fn parse_unsigned(mut rest: &str) -> Result<Duration, DurationParseError> {
    if rest.is_empty() {
        return Err(DurationParseError::Empty);
    }
    if rest == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or(DurationParseError::MissingUnit)?;
        let (number, tail) = rest.split_at(number_end);

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);

        let scale = unit_nanos(unit).ok_or_else(|| DurationParseError::UnknownUnit(unit.to_string()))?;
        total = total
            .checked_add(group_nanos(number, scale)?)
            .ok_or(DurationParseError::Overflow)?;
        rest = next;
    }

    let secs = u64::try_from(total / NANOS_PER_SEC).map_err(|_| DurationParseError::Overflow)?;
    // The remainder is always below one second.
    let nanos = (total % NANOS_PER_SEC) as u32;
    Ok(Duration::new(secs, nanos))
}

fn group_nanos(number: &str, scale: u128) -> Result<u128, DurationParseError> {
    let invalid = || DurationParseError::InvalidNumber(number.to_string());

    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
        return Err(invalid());
    }

    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| DurationParseError::Overflow)?
    };
    let mut nanos = whole.checked_mul(scale).ok_or(DurationParseError::Overflow)?;

    // Digits past nanosecond precision of the largest unit cannot matter.
    let mut numerator: u128 = 0;
    let mut denominator: u128 = 1;
    for digit in fraction.bytes().take(18) {
        numerator = numerator * 10 + u128::from(digit - b'0');
        denominator *= 10;
    }
    nanos = nanos
        .checked_add(numerator * scale / denominator)
        .ok_or(DurationParseError::Overflow)?;
    Ok(nanos)
}

/// Formats a duration in the syntax accepted by [`parse_duration`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tomlcfg::domain::duration::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(5400)), "1h30m0s");
/// assert_eq!(format_duration(Duration::from_millis(300)), "300ms");
/// assert_eq!(format_duration(Duration::ZERO), "0s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{}ns", nanos);
    }
    if nanos < 1_000_000 {
        return format!("{}µs", decimal(nanos / 1_000, nanos % 1_000, 3));
    }
    if nanos < NANOS_PER_SEC {
        return format!("{}ms", decimal(nanos / 1_000_000, nanos % 1_000_000, 6));
    }

    let secs = duration.as_secs();
    let hours = secs / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = decimal(
        u128::from(secs % 60),
        u128::from(duration.subsec_nanos()),
        9,
    );

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    out.push_str(&format!("{}s", seconds));
    out
}

fn decimal(whole: u128, remainder: u128, width: usize) -> String {
    if remainder == 0 {
        return whole.to_string();
    }
    let digits = format!("{:0width$}", remainder, width = width);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

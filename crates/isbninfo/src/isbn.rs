//! Normalizing and checksum validation of SBN, ISBN-10 and ISBN-13 numbers.

use std::{fmt, str::FromStr};

use log::trace;

use crate::{Error, ErrorKind};

/// Removes every character from `raw` that is not a decimal digit.
///
/// No length constraint is applied, so the result may be empty.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Checks the checksum of a digit string as an SBN (9), ISBN-10 (10) or ISBN-13 (13) number.
///
/// An SBN is checked as the ISBN-10 it becomes when prefixed with `0`. Any other length, or any
/// character that is not a decimal digit, is invalid.
#[must_use]
pub fn validate(digits: &str) -> bool {
    let Some(mut values) = digit_values(digits) else {
        return false;
    };

    if values.len() == 9 {
        values.insert(0, 0);
    }

    match values.len() {
        10 => isbn10_checksum(&values) % 11 == 0,
        13 => isbn13_checksum(&values) % 10 == 0,
        _ => false,
    }
}

fn digit_values(digits: &str) -> Option<Vec<u32>> {
    digits.chars().map(|c| c.to_digit(10)).collect()
}

// Sum of the running sums, equivalent to weighting the digits 10 down to 1.
fn isbn10_checksum(values: &[u32]) -> u32 {
    values
        .iter()
        .scan(0, |running, d| {
            *running += d;
            Some(*running)
        })
        .sum()
}

fn isbn13_checksum(values: &[u32]) -> u32 {
    values
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum()
}

/// A validated ISBN-10 or ISBN-13 number, holding only its digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Isbn(String);

impl Isbn {
    /// Normalizes and validates `raw` as an ISBN-10 or ISBN-13 number.
    ///
    /// # Errors
    ///
    /// An [`ErrorKind::Invalid`] error is returned when the digits of `raw` are not exactly 10
    /// or 13 long or when the checksum does not hold.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let digits = normalize(raw);
        trace!("Normalized '{raw}' to '{digits}'");

        if (digits.len() == 10 || digits.len() == 13) && validate(&digits) {
            Ok(Self(digits))
        } else {
            Err(Error::new(
                ErrorKind::Invalid,
                format!("'{raw}' is not a valid SBN, ISBN-10 or ISBN-13 number"),
            ))
        }
    }

    /// The digits of the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Isbn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

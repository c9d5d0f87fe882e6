//! PESEL parsing: century-encoded birth date and weighted check digit.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PESEL_LEN: usize = 11;
const WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeselError {
    #[error("PESEL must consist of exactly 11 digits")]
    Format,
    #[error("month field {raw:02} does not encode any century")]
    Month { raw: u32 },
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    Date { year: i32, month: u32, day: u32 },
    #[error("check digit mismatch: expected {expected}, found {found}")]
    Checksum { expected: u32, found: u32 },
}

/// Century selected by the month field's offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Century {
    C1800,
    C1900,
    C2000,
    C2100,
    C2200,
}

impl Century {
    /// Split a raw month field into its century and calendar month.
    #[must_use]
    pub const fn decode(raw_month: u32) -> Option<(Century, u32)> {
        match raw_month {
            1..=12 => Some((Century::C1900, raw_month)),
            21..=32 => Some((Century::C2000, raw_month - 20)),
            41..=52 => Some((Century::C2100, raw_month - 40)),
            61..=72 => Some((Century::C2200, raw_month - 60)),
            81..=92 => Some((Century::C1800, raw_month - 80)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn base_year(self) -> i32 {
        match self {
            Century::C1800 => 1800,
            Century::C1900 => 1900,
            Century::C2000 => 2000,
            Century::C2100 => 2100,
            Century::C2200 => 2200,
        }
    }
}

/// An 11-digit PESEL whose birth date and check digit have been verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pesel {
    raw: String,
    birth_date: NaiveDate,
    century: Century,
}

impl Pesel {
    pub fn parse(input: &str) -> Result<Self, PeselError> {
        if input.len() != PESEL_LEN || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PeselError::Format);
        }
        let digits: Vec<u32> = input.bytes().map(|b| u32::from(b - b'0')).collect();
        let pair = |i: usize| digits[i] * 10 + digits[i + 1];

        let raw_month = pair(2);
        let (century, month) =
            Century::decode(raw_month).ok_or(PeselError::Month { raw: raw_month })?;
        let year = century.base_year() + pair(0) as i32;
        let day = pair(4);
        let birth_date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or(PeselError::Date { year, month, day })?;

        let expected = check_digit(&digits[..10]);
        let found = digits[10];
        if expected != found {
            return Err(PeselError::Checksum { expected, found });
        }

        Ok(Self {
            raw: input.to_string(),
            birth_date,
            century,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    #[must_use]
    pub fn century(&self) -> Century {
        self.century
    }

    #[must_use]
    pub fn birth_year(&self) -> i32 {
        self.birth_date.year()
    }
}

fn check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(WEIGHTS).map(|(d, w)| d * w).sum();
    (10 - sum % 10) % 10
}

impl TryFrom<String> for Pesel {
    type Error = PeselError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Pesel {
    type Error = PeselError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Pesel> for String {
    fn from(value: Pesel) -> Self {
        value.raw
    }
}

impl FromStr for Pesel {
    type Err = PeselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pesel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

//! Surname field rules: Latin letters plus the Polish diacritic set.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Minimum surname length, counted in characters.
pub const NAME_MIN_CHARS: usize = 3;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-zĄąĆćĘęŁłŃńÓóŚśŹźŻż][A-Za-zĄąĆćĘęŁłŃńÓóŚśŹźŻż\s\-']+$")
        .expect("surname pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("surname must have at least {min} characters (got {len})", min = NAME_MIN_CHARS)]
    TooShort { len: usize },
    #[error("surname may contain only letters, spaces, hyphens and apostrophes")]
    Characters,
}

/// Check a surname as entered; callers trim before calling.
pub fn check_name(input: &str) -> Result<(), NameError> {
    let len = input.chars().count();
    if len < NAME_MIN_CHARS {
        return Err(NameError::TooShort { len });
    }
    if !NAME_PATTERN.is_match(input) {
        return Err(NameError::Characters);
    }
    Ok(())
}

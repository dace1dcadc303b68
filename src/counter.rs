use std::{fmt::Display, str::FromStr};

/// The like count shown on the page.
///
/// Parsed the way `parseInt(text, 10)` parses: leading whitespace and a sign
/// are accepted, then the longest run of digits. Anything without digits is
/// [`LikeCount::NaN`], which stays `NaN` through arithmetic and is displayed
/// as `NaN`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum LikeCount {
    Number(i64),
    NaN,
}

impl LikeCount {
    pub fn parse(text: &str) -> Self {
        let text = text.trim_start();

        let sign_len = match text.as_bytes().first() {
            Some(b'-' | b'+') => 1,
            _ => 0,
        };

        let digits = &text[sign_len..];
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());

        if end == 0 {
            return Self::NaN;
        }

        // values past i64 are treated as malformed
        match text[..sign_len + end].parse::<i64>() {
            Ok(value) => Self::Number(value),
            Err(_) => Self::NaN,
        }
    }

    pub fn value(self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(n),
            Self::NaN => None,
        }
    }

    pub fn is_nan(self) -> bool {
        self == Self::NaN
    }

    pub fn incremented(self) -> Self {
        self.map(|n| n.checked_add(1))
    }

    pub fn decremented(self) -> Self {
        self.map(|n| n.checked_sub(1))
    }

    fn map(self, f: impl FnOnce(i64) -> Option<i64>) -> Self {
        match self {
            Self::Number(n) => f(n).map_or(Self::NaN, Self::Number),
            Self::NaN => Self::NaN,
        }
    }
}

impl From<i64> for LikeCount {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl FromStr for LikeCount {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for LikeCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::NaN => f.write_str("NaN"),
        }
    }
}

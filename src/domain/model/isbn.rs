use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

/// `DDD-DDDDDDDDDD` 全体一致。
static STRICT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{10}$").expect("valid strict isbn regex"));

/// 文字列中のどこかに `DDD-DDDDDDDDDD` を含めば一致。
static CONTAINS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{3}-[0-9]{10}").expect("valid contains isbn regex"));

/// ISBN書式チェックの一致方式。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IsbnMatch {
    /// 文字列全体が書式に一致する必要がある。
    #[default]
    Strict,
    /// 部分一致で可（前後に余分な文字があっても通る）。旧来の挙動。
    Contains,
}

impl IsbnMatch {
    pub fn matches(self, s: &str) -> bool {
        match self {
            Self::Strict => STRICT_PATTERN.is_match(s),
            Self::Contains => CONTAINS_PATTERN.is_match(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown isbn match mode: {0:?} (expected `strict` or `contains`)")]
pub struct UnknownIsbnMatch(pub String);

impl FromStr for IsbnMatch {
    type Err = UnknownIsbnMatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "contains" => Ok(Self::Contains),
            _ => Err(UnknownIsbnMatch(s.to_string())),
        }
    }
}

impl fmt::Display for IsbnMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Contains => write!(f, "contains"),
        }
    }
}

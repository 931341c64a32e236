use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// The `-source` level a Java compiler was invoked with.
///
/// Both the legacy `1.x` spelling and the modern `x` spelling are accepted;
/// `1.7` and `7` are the same version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct SourceVersion {
    release: u32,
}

impl SourceVersion {
    /// Oldest release that supports annotation processing.
    pub const MINIMUM: Self = Self { release: 6 };

    pub fn new(release: u32) -> Result<Self, ParseSourceVersionError> {
        if release < Self::MINIMUM.release {
            return Err(ParseSourceVersionError::Unsupported(release));
        }
        Ok(Self { release })
    }

    pub fn release(&self) -> u32 {
        self.release
    }
}

impl Default for SourceVersion {
    fn default() -> Self {
        Self::MINIMUM
    }
}

impl fmt::Display for SourceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.release)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSourceVersionError {
    #[error("invalid source version '{0}', expected e.g. '1.7' or '8'")]
    Invalid(String),
    #[error("source version {0} predates annotation processing (minimum is 6)")]
    Unsupported(u32),
}

impl FromStr for SourceVersion {
    type Err = ParseSourceVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseSourceVersionError::Invalid(s.to_string());
        let digits = match s.split_once('.') {
            Some(("1", minor)) => minor,
            Some(_) => return Err(invalid()),
            None => s,
        };
        let release = digits.parse::<u32>().map_err(|_| invalid())?;
        Self::new(release)
    }
}

impl TryFrom<String> for SourceVersion {
    type Error = ParseSourceVersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for SourceVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

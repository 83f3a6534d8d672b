use regex::bytes::{Regex, RegexBuilder};

use crate::errors::*;
use crate::read::*;

/// A compiled regex pattern that is matched against the raw bytes of a read string.
///
/// Matching is always case-insensitive and only reports the leftmost match.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .unicode(false)
            .build()
            .map_err(|e| Error::ParsePattern {
                pattern: pattern.to_owned(),
                source: Box::new(e),
            })?;

        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Find the first match of the pattern in `string`, which is the `str_type` string of a read.
    pub fn find(&self, str_type: StrType, string: &[u8]) -> Option<Mapping> {
        self.regex
            .find(string)
            .map(|m| Mapping::new(str_type, m.start(), m.len()))
    }
}

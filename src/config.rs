use std::ops::Range;

use crate::errors::*;
use crate::read::*;

/// How a selected read is trimmed around the match in its sequence.
///
/// With `match_edge` set, the boundary is moved to the far edge of the match so the
/// matched bases themselves are also removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrimMode {
    #[default]
    None,
    /// Keep the sequence after the match.
    Before { match_edge: bool },
    /// Keep the sequence before the match.
    After { match_edge: bool },
}

impl TrimMode {
    pub fn from_flags(trim_before: bool, trim_after: bool, trim_match: bool) -> Result<Self> {
        match (trim_before, trim_after) {
            (true, true) => Err(Error::InvalidConfig("Specify -b or -a, not both.")),
            (true, false) => Ok(TrimMode::Before {
                match_edge: trim_match,
            }),
            (false, true) => Ok(TrimMode::After {
                match_edge: trim_match,
            }),
            (false, false) => Ok(TrimMode::None),
        }
    }

    pub fn is_none(&self) -> bool {
        *self == TrimMode::None
    }

    /// The range of a sequence of length `len` to keep, given the match `mapping` in it.
    ///
    /// Returns `None` if the read should not be trimmed.
    pub fn keep_range(&self, mapping: &Mapping, len: usize) -> Option<Range<usize>> {
        match *self {
            TrimMode::None => None,
            TrimMode::Before { match_edge } => {
                let cut = if match_edge { mapping.end() } else { mapping.start };
                Some(cut..len)
            }
            TrimMode::After { match_edge } => {
                let cut = if match_edge { mapping.start } else { mapping.end() };
                Some(0..cut)
            }
        }
    }
}

/// Settings for a single run, fixed once constructed.
///
/// Where mismatching reads go is not part of the config: [`grep()`](crate::grep::grep)
/// takes the mismatch sink directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    str_type: StrType,
    invert: bool,
    count: bool,
    trim_mode: TrimMode,
}

impl Config {
    pub fn new(
        str_type: StrType,
        invert: bool,
        count: bool,
        trim_mode: TrimMode,
    ) -> Result<Self> {
        if !trim_mode.is_none() {
            if str_type == StrType::Name {
                return Err(Error::InvalidConfig("Makes no sense to trim IDs."));
            }
            if invert {
                return Err(Error::InvalidConfig(
                    "Cannot trim reads selected by an inverted match.",
                ));
            }
        }

        Ok(Self {
            str_type,
            invert,
            count,
            trim_mode,
        })
    }

    /// Which string of each read the pattern is matched against.
    pub fn str_type(&self) -> StrType {
        self.str_type
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn count(&self) -> bool {
        self.count
    }

    pub fn trim_mode(&self) -> TrimMode {
        self.trim_mode
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            str_type: StrType::Seq,
            invert: false,
            count: false,
            trim_mode: TrimMode::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(start: usize, len: usize) -> Mapping {
        Mapping::new(StrType::Seq, start, len)
    }

    #[test]
    fn trim_after() {
        let m = seq(2, 3);
        assert_eq!(
            TrimMode::After { match_edge: false }.keep_range(&m, 8),
            Some(0..5)
        );
        assert_eq!(
            TrimMode::After { match_edge: true }.keep_range(&m, 8),
            Some(0..2)
        );
    }

    #[test]
    fn trim_before() {
        let m = seq(2, 3);
        assert_eq!(
            TrimMode::Before { match_edge: false }.keep_range(&m, 8),
            Some(2..8)
        );
        assert_eq!(
            TrimMode::Before { match_edge: true }.keep_range(&m, 8),
            Some(5..8)
        );
    }

    #[test]
    fn no_trim() {
        assert_eq!(TrimMode::None.keep_range(&seq(2, 3), 8), None);
    }

    #[test]
    fn zero_width_match() {
        for start in [0, 3, 8] {
            let m = seq(start, 0);
            for match_edge in [false, true] {
                assert_eq!(
                    TrimMode::After { match_edge }.keep_range(&m, 8),
                    Some(0..start)
                );
                assert_eq!(
                    TrimMode::Before { match_edge }.keep_range(&m, 8),
                    Some(start..8)
                );
            }
        }
    }

    #[test]
    fn full_length_match() {
        let m = seq(0, 8);
        assert_eq!(
            TrimMode::After { match_edge: true }.keep_range(&m, 8),
            Some(0..0)
        );
        assert_eq!(
            TrimMode::Before { match_edge: true }.keep_range(&m, 8),
            Some(8..8)
        );
        // without the match edge the whole match is kept
        assert_eq!(
            TrimMode::After { match_edge: false }.keep_range(&m, 8),
            Some(0..8)
        );
        assert_eq!(
            TrimMode::Before { match_edge: false }.keep_range(&m, 8),
            Some(0..8)
        );
    }

    #[test]
    fn trim_flags() {
        assert_eq!(
            TrimMode::from_flags(false, false, true).unwrap(),
            TrimMode::None
        );
        assert_eq!(
            TrimMode::from_flags(true, false, true).unwrap(),
            TrimMode::Before { match_edge: true }
        );
        assert_eq!(
            TrimMode::from_flags(false, true, false).unwrap(),
            TrimMode::After { match_edge: false }
        );
        assert!(matches!(
            TrimMode::from_flags(true, true, false),
            Err(Error::InvalidConfig("Specify -b or -a, not both."))
        ));
    }

    #[test]
    fn reject_trimming_names() {
        let res = Config::new(
            StrType::Name,
            false,
            false,
            TrimMode::After { match_edge: false },
        );
        assert!(matches!(
            res,
            Err(Error::InvalidConfig("Makes no sense to trim IDs."))
        ));
    }

    #[test]
    fn reject_trimming_inverted() {
        let res = Config::new(
            StrType::Seq,
            true,
            false,
            TrimMode::Before { match_edge: true },
        );
        assert!(matches!(res, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn accept_untrimmed_name_match() {
        let config = Config::new(StrType::Name, true, true, TrimMode::None).unwrap();
        assert_eq!(config.str_type(), StrType::Name);
        assert!(config.invert());
        assert!(config.count());
    }
}

use log::trace;

use crate::graph::*;
use crate::patterns::*;

pub struct MatchRegexNode {
    str_type: StrType,
    pattern: Pattern,
    invert: bool,
}

impl MatchRegexNode {
    const NAME: &'static str = "MatchRegexNode";

    /// Match a regex pattern against the `str_type` string of each read and mark the read as
    /// selected if it matches.
    ///
    /// With `invert`, reads are selected when the pattern does not match instead. The
    /// match location is recorded on the read whenever there is one.
    pub fn new(str_type: StrType, pattern: Pattern, invert: bool) -> Self {
        Self {
            str_type,
            pattern,
            invert,
        }
    }
}

impl GraphNode for MatchRegexNode {
    fn run(&self, read: Option<Read>) -> Result<(Option<Read>, bool)> {
        let Some(mut read) = read else { panic!("Expected some read!") };

        let mapping = self.pattern.find(self.str_type, read.string(self.str_type));
        let selected = mapping.is_some() != self.invert;
        read.set_match(mapping, selected);

        trace!("{}", read);

        Ok((Some(read), false))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

use crate::config::TrimMode;
use crate::graph::*;

pub struct TrimNode {
    trim_mode: TrimMode,
}

impl TrimNode {
    const NAME: &'static str = "TrimNode";

    /// Trim the sequence and quality of each read around its match.
    ///
    /// The trimmed read is a new read with the same name; reads without a match in their
    /// sequence pass through unchanged.
    pub fn new(trim_mode: TrimMode) -> Self {
        Self { trim_mode }
    }
}

impl GraphNode for TrimNode {
    fn run(&self, read: Option<Read>) -> Result<(Option<Read>, bool)> {
        let Some(read) = read else { panic!("Expected some read!") };

        let range = read
            .mapping()
            .filter(|m| m.str_type == StrType::Seq)
            .and_then(|m| self.trim_mode.keep_range(&m, read.seq().len()));

        match range {
            Some(range) => Ok((Some(read.slice(range)), false)),
            None => Ok((Some(read), false)),
        }
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

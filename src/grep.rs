use log::info;

use crate::config::*;
use crate::errors::*;
use crate::fastq::*;
use crate::graph::*;
use crate::patterns::*;

/// What happened during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Reads read across all inputs.
    pub reads: usize,
    /// Reads that were selected by the pattern.
    pub selected: usize,
    /// Reads that were not selected.
    pub rejected: usize,
    /// Inputs that could not be opened.
    pub skipped_inputs: usize,
}

/// Filter the reads of every input, in order, by matching `pattern` against them.
///
/// Selected reads are trimmed and written to `output`, or only counted if the config asks
/// for a count. Reads that are not selected go to `mismatches` when it is given.
pub fn grep<'a>(
    config: &Config,
    pattern: &Pattern,
    inputs: impl IntoIterator<Item = Input<'a>>,
    output: Sink<'a>,
    mismatches: Option<Sink<'a>>,
) -> Result<Summary> {
    let mut graph = Graph::new();

    let input = graph.add(InputFastqNode::new(inputs));
    graph.add(MatchRegexNode::new(
        config.str_type(),
        pattern.clone(),
        config.invert(),
    ));
    let retain = graph.add(RetainNode::new(mismatches));

    if config.count() {
        graph.add(CountNode::new(output));
    } else {
        graph.add(TrimNode::new(config.trim_mode()));
        graph.add(OutputFastqNode::new(output));
    }

    graph.run()?;

    let summary = Summary {
        reads: input.reads(),
        selected: retain.retained(),
        rejected: retain.rejected(),
        skipped_inputs: input.skipped(),
    };

    info!(
        "Selected {} and rejected {} of {} reads matching \"{}\" ({} inputs skipped)",
        summary.selected,
        summary.rejected,
        summary.reads,
        pattern.as_str(),
        summary.skipped_inputs
    );

    Ok(summary)
}

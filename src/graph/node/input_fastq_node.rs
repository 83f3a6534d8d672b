use log::{debug, error, warn};

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::fastq::*;
use crate::graph::*;

pub struct InputFastqNode<'reader> {
    inputs: Mutex<VecDeque<Input<'reader>>>,
    reader: Mutex<Option<FastqReader<'reader>>>,
    reads: AtomicUsize,
    skipped: AtomicUsize,
}

impl<'reader> InputFastqNode<'reader> {
    const NAME: &'static str = "InputFastqNode";

    /// Stream reads created from the fastq records of each input, one input after another.
    ///
    /// Inputs that cannot be opened are reported and skipped.
    pub fn new(inputs: impl IntoIterator<Item = Input<'reader>>) -> Self {
        Self {
            inputs: Mutex::new(inputs.into_iter().collect()),
            reader: Mutex::new(None),
            reads: AtomicUsize::new(0),
            skipped: AtomicUsize::new(0),
        }
    }

    /// Total number of reads produced so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// Number of inputs that could not be opened.
    pub fn skipped(&self) -> usize {
        self.skipped.load(Ordering::Relaxed)
    }
}

impl<'reader> GraphNode for InputFastqNode<'reader> {
    fn run(&self, read: Option<Read>) -> Result<(Option<Read>, bool)> {
        assert!(read.is_none(), "Expected no input reads for {}", Self::NAME);

        let mut reader = self.reader.lock().unwrap();

        loop {
            if let Some(r) = reader.as_mut() {
                match r.next() {
                    Some(Ok(read)) => {
                        self.reads.fetch_add(1, Ordering::Relaxed);
                        return Ok((Some(read), false));
                    }
                    // the reader ends its stream after a bad record
                    Some(Err(e)) => {
                        error!("{e}");
                        continue;
                    }
                    None => debug!("Read {} records from {}", r.records_read(), r.origin()),
                }
            }

            *reader = None;

            let Some(input) = self.inputs.lock().unwrap().pop_front() else {
                return Ok((None, true));
            };

            match FastqReader::open(&input) {
                Ok(r) => *reader = Some(r),
                Err(e) => {
                    warn!("Skipping input: {e}");
                    self.skipped.fetch_add(1, Ordering::Relaxed);
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::fastq::*;
use crate::graph::*;

pub struct CountNode<'w> {
    count: AtomicUsize,
    sink: Mutex<Sink<'w>>,
}

impl<'w> CountNode<'w> {
    const NAME: &'static str = "CountNode";

    /// Count the reads that reach this node and consume them.
    ///
    /// The final count is written to the sink as a single line when the graph finishes.
    pub fn new(sink: Sink<'w>) -> Self {
        Self {
            count: AtomicUsize::new(0),
            sink: Mutex::new(sink),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

impl<'w> GraphNode for CountNode<'w> {
    fn run(&self, read: Option<Read>) -> Result<(Option<Read>, bool)> {
        let Some(_) = read else { panic!("Expected some read!") };

        self.count.fetch_add(1, Ordering::Relaxed);

        Ok((None, false))
    }

    fn finish(&self) -> Result<()> {
        let mut sink = self.sink.lock().unwrap();
        sink.write_count(self.count())?;
        sink.finish()
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

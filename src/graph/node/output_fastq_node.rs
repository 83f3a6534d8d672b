use std::sync::Mutex;

use crate::fastq::*;
use crate::graph::*;

pub struct OutputFastqNode<'w> {
    sink: Mutex<Sink<'w>>,
}

impl<'w> OutputFastqNode<'w> {
    const NAME: &'static str = "OutputFastqNode";

    /// Write each read as a fastq record to the sink.
    pub fn new(sink: Sink<'w>) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }
}

impl<'w> GraphNode for OutputFastqNode<'w> {
    fn run(&self, read: Option<Read>) -> Result<(Option<Read>, bool)> {
        let Some(read) = read else { panic!("Expected some read!") };

        self.sink.lock().unwrap().write_read(&read)?;

        Ok((Some(read), false))
    }

    fn finish(&self) -> Result<()> {
        self.sink.lock().unwrap().finish()
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

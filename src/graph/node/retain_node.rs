use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::fastq::*;
use crate::graph::*;

pub struct RetainNode<'w> {
    mismatches: Option<Mutex<Sink<'w>>>,
    retained: AtomicUsize,
    rejected: AtomicUsize,
}

impl<'w> RetainNode<'w> {
    const NAME: &'static str = "RetainNode";

    /// Retain only the selected reads and discard the rest.
    ///
    /// If a mismatch sink is given, discarded reads are written to it unmodified.
    pub fn new(mismatches: Option<Sink<'w>>) -> Self {
        Self {
            mismatches: mismatches.map(Mutex::new),
            retained: AtomicUsize::new(0),
            rejected: AtomicUsize::new(0),
        }
    }

    pub fn retained(&self) -> usize {
        self.retained.load(Ordering::Relaxed)
    }

    pub fn rejected(&self) -> usize {
        self.rejected.load(Ordering::Relaxed)
    }
}

impl<'w> GraphNode for RetainNode<'w> {
    fn run(&self, read: Option<Read>) -> Result<(Option<Read>, bool)> {
        let Some(read) = read else { panic!("Expected some read!") };

        if read.is_selected() {
            self.retained.fetch_add(1, Ordering::Relaxed);
            return Ok((Some(read), false));
        }

        self.rejected.fetch_add(1, Ordering::Relaxed);

        if let Some(mismatches) = &self.mismatches {
            mismatches.lock().unwrap().write_read(&read)?;
        }

        Ok((None, false))
    }

    fn finish(&self) -> Result<()> {
        match &self.mismatches {
            Some(mismatches) => mismatches.lock().unwrap().finish(),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn read(name: &[u8], selected: bool) -> Read {
        let mut read = Read::from_fastq(name, b"ACGT", b"IIII", Arc::new(Origin::Bytes), 0);
        read.set_match(None, selected);
        read
    }

    #[test]
    fn route_rejected_reads() {
        let mut out = Vec::new();
        {
            let node = RetainNode::new(Some(Sink::new("mismatches", &mut out)));

            assert!(node.run(Some(read(b"a", true))).unwrap().0.is_some());
            assert!(node.run(Some(read(b"b", false))).unwrap().0.is_none());
            node.finish().unwrap();

            assert_eq!(node.retained(), 1);
            assert_eq!(node.rejected(), 1);
        }
        assert_eq!(out, b"@b\nACGT\n+\nIIII\n");
    }

    #[test]
    fn discard_without_sink() {
        let node = RetainNode::new(None);

        assert!(node.run(Some(read(b"b", false))).unwrap().0.is_none());
        node.finish().unwrap();
        assert_eq!(node.rejected(), 1);
    }
}

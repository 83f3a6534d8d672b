use std::sync::Arc;

pub(crate) use crate::errors::*;
pub(crate) use crate::read::*;

pub mod node;
pub use node::*;

/// Computation graph of read operations, where each operation is a node.
///
/// Reads flow through the nodes one at a time, in input order.
pub struct Graph<'g> {
    nodes: Vec<Arc<dyn GraphNode + 'g>>,
}

pub trait GraphNode: Send + Sync {
    /// Process a read, returning the read for the next node (or `None` if it was consumed)
    /// and whether the graph is done executing.
    fn run(&self, read: Option<Read>) -> Result<(Option<Read>, bool)>;

    /// Called once after all reads have been processed.
    fn finish(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str;
}

impl<'g> Graph<'g> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a read operation node to the graph and return the node.
    pub fn add<G: GraphNode + 'g>(&mut self, node: G) -> Arc<G> {
        let a = Arc::new(node);
        let b = Arc::clone(&a);
        self.nodes.push(a);
        b
    }

    /// Run a graph until all reads are processed, then finish every node in order.
    pub fn run(&self) -> Result<()> {
        loop {
            let (_, done) = self.run_one(None)?;
            if done {
                break;
            }
        }

        self.nodes.iter().try_for_each(|node| node.finish())
    }

    /// Run a single read through the graph.
    ///
    /// Returns an additional boolean indicating whether the graph is done executing.
    pub fn run_one(&self, mut curr: Option<Read>) -> Result<(Option<Read>, bool)> {
        for node in &self.nodes {
            let (c, done) = node.run(curr)?;
            curr = c;

            if done {
                return Ok((curr, done));
            }
            if curr.is_none() {
                break;
            }
        }

        Ok((curr, false))
    }
}

impl<'g> Default for Graph<'g> {
    fn default() -> Self {
        Self::new()
    }
}

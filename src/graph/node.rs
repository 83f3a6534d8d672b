//! Graph nodes that process reads.

pub mod input_fastq_node;
pub use input_fastq_node::*;

pub mod match_regex_node;
pub use match_regex_node::*;

pub mod retain_node;
pub use retain_node::*;

pub mod count_node;
pub use count_node::*;

pub mod trim_node;
pub use trim_node::*;

pub mod output_fastq_node;
pub use output_fastq_node::*;

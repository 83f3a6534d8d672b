//! Rust library and command line tool for searching fastq files.
//!
//! # Overview
//! fqgrep selects, counts, or trims fastq records whose name or sequence matches a regex,
//! without ever breaking the four line record structure.
//!
//! Here's an example fastq record:
//! ```text
//! @read1
//! ACGTACGT
//! +
//! ABCDEFGH
//! ```
//! The first, second, and fourth lines are the name, sequence, and quality scores, respectively.
//!
//! ## Matching
//! A [`Pattern`] is a case-insensitive regex that is matched against the raw bytes of either
//! the name or the sequence of each read. Only the first match in a read is considered.
//! A read is *selected* when the pattern matches, or when it does not match if the match is
//! inverted.
//!
//! ## Trimming
//! Selected reads can be trimmed around their match with a [`TrimMode`]:
//! * `Before`: drop the sequence before the match and keep the rest
//! * `After`: drop the sequence after the match and keep the rest
//!
//! With `match_edge`, the matched bases are dropped too. The name of a trimmed read is never
//! changed and its quality scores are always trimmed along with the sequence.
//! For the record above and the pattern `ACGT`, trimming after the match gives `ACGT`,
//! and trimming after the match including the match edge gives an empty sequence.
//!
//! ## Running
//! [`grep()`] streams reads from a list of inputs through a small [`Graph`] of operations,
//! one read at a time and in input order:
//! ```text
//! InputFastqNode -> MatchRegexNode -> RetainNode -> TrimNode -> OutputFastqNode
//!                                                \-> CountNode
//! ```
//! Reads that are not selected can be routed to a separate mismatch [`Sink`].
//!
//! ```
//! use fqgrep::*;
//!
//! let mut out = Vec::new();
//! let config = Config::new(StrType::Seq, false, false, TrimMode::After { match_edge: false })?;
//! let pattern = Pattern::new("acgt")?;
//!
//! grep(
//!     &config,
//!     &pattern,
//!     [Input::Bytes(b"@read1\nACGTACGT\n+\nABCDEFGH\n")],
//!     Sink::new("output", &mut out),
//!     None,
//! )?;
//!
//! assert_eq!(out, b"@read1\nACGT\n+\nABCD\n");
//! # Ok::<(), fqgrep::errors::Error>(())
//! ```

pub mod config;
pub mod errors;
pub mod fastq;
pub mod graph;
pub mod grep;
pub mod patterns;
pub mod read;

// commonly used functions and types

pub use crate::config::*;
pub use crate::errors::{Error, Result};
pub use crate::fastq::*;
pub use crate::graph::{Graph, GraphNode};
pub use crate::grep::*;
pub use crate::patterns::*;
pub use crate::read::*;

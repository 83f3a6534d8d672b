use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::errors::utf8;
use crate::fastq::Origin;

/// The string of a fastq record that an operation looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrType {
    Name,
    Seq,
}

/// Half-open interval `[start, start + len)` in one string of a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    pub str_type: StrType,
    pub start: usize,
    pub len: usize,
}

impl Mapping {
    pub fn new(str_type: StrType, start: usize, len: usize) -> Self {
        Self {
            str_type,
            start,
            len,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A single fastq record along with where it came from and the outcome of matching it.
///
/// The quality string always has the same length as the sequence.
#[derive(Debug, Clone)]
pub struct Read {
    name: Vec<u8>,
    seq: Vec<u8>,
    qual: Vec<u8>,
    origin: Arc<Origin>,
    idx: usize,
    mapping: Option<Mapping>,
    selected: bool,
}

impl Read {
    pub fn from_fastq(
        name: &[u8],
        seq: &[u8],
        qual: &[u8],
        origin: Arc<Origin>,
        idx: usize,
    ) -> Self {
        Self {
            name: name.to_owned(),
            seq: seq.to_owned(),
            qual: qual.to_owned(),
            origin,
            idx,
            mapping: None,
            selected: false,
        }
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    pub fn qual(&self) -> &[u8] {
        &self.qual
    }

    pub fn string(&self, str_type: StrType) -> &[u8] {
        match str_type {
            StrType::Name => &self.name,
            StrType::Seq => &self.seq,
        }
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Index of the record within its input, starting at zero.
    pub fn idx(&self) -> usize {
        self.idx
    }

    /// Where the pattern matched, if it matched at all.
    pub fn mapping(&self) -> Option<Mapping> {
        self.mapping
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_match(&mut self, mapping: Option<Mapping>, selected: bool) {
        self.mapping = mapping;
        self.selected = selected;
    }

    /// Create a new read whose sequence and quality are restricted to `range`.
    ///
    /// The name is kept whole. The match mapping is dropped since its offsets
    /// no longer refer to the new sequence.
    pub fn slice(&self, range: Range<usize>) -> Self {
        Self {
            name: self.name.clone(),
            seq: self.seq[range.clone()].to_owned(),
            qual: self.qual[range].to_owned(),
            origin: Arc::clone(&self.origin),
            idx: self.idx,
            mapping: None,
            selected: self.selected,
        }
    }

    pub fn to_fastq(&self) -> (&[u8], &[u8], &[u8]) {
        (&self.name, &self.seq, &self.qual)
    }
}

fn fmt_mapping(f: &mut fmt::Formatter, mapping: &Mapping, str_len: usize) -> fmt::Result {
    if mapping.is_empty() {
        // zero-width match
        return writeln!(f, "      {: <1$}^", "", mapping.start);
    }

    let mut c = vec![b' '; str_len];
    c[mapping.start] = b'|';
    c[mapping.end() - 1] = b'|';
    if mapping.len > 2 {
        c[mapping.start + 1..mapping.end() - 1].fill(b'-');
    }
    writeln!(f, "      {}", utf8(&c).trim_end())
}

impl fmt::Display for Read {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "record {} in {}:", self.idx, self.origin)?;

        writeln!(f, "name: {}", utf8(&self.name))?;
        if let Some(m) = self.mapping.filter(|m| m.str_type == StrType::Name) {
            fmt_mapping(f, &m, self.name.len())?;
        }

        writeln!(f, "seq:  {}", utf8(&self.seq))?;
        if let Some(m) = self.mapping.filter(|m| m.str_type == StrType::Seq) {
            fmt_mapping(f, &m, self.seq.len())?;
        }

        writeln!(f, "qual: {}", utf8(&self.qual))?;
        write!(f, "selected: {}", self.selected)
    }
}

impl fmt::Display for StrType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StrType::Name => write!(f, "name"),
            StrType::Seq => write!(f, "seq"),
        }
    }
}

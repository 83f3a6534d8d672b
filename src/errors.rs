use thiserror;

use std::io;

use crate::fastq::Origin;

pub type Result<T> = std::result::Result<T, Error>;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error reading or writing \"{file}\": {source}")]
    FileIo { file: String, source: BoxError },

    #[error("Error reading or writing bytes: {0}")]
    BytesIo(BoxError),

    #[error("Error parsing record {idx} in {origin}: {source}")]
    ParseRecord {
        origin: Origin,
        idx: usize,
        source: BoxError,
    },

    #[error("Syntax error in pattern \"{pattern}\": {source}")]
    ParsePattern { pattern: String, source: BoxError },

    #[error("{0}")]
    InvalidConfig(&'static str),
}

impl Error {
    /// Whether writing failed because the reader on the other end went away.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Error::FileIo { source, .. } | Error::BytesIo(source) => source
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe),
            _ => false,
        }
    }
}

pub fn utf8(b: &[u8]) -> String {
    String::from_utf8_lossy(b).into_owned()
}

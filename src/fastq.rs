use needletail::errors::ParseErrorKind;
use needletail::{parse_fastx_file, parse_fastx_reader, FastxReader};

use flate2::{write::GzEncoder, Compression};

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::errors::*;
use crate::read::*;

/// Where a read came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    File(String),
    Stdin,
    Bytes,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Origin::File(file) => write!(f, "\"{}\"", file),
            Origin::Stdin => write!(f, "standard input"),
            Origin::Bytes => write!(f, "bytes"),
        }
    }
}

/// A source of fastq records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    File(PathBuf),
    Stdin,
    Bytes(&'a [u8]),
}

impl Input<'static> {
    /// Interpret a command line argument, where `-` means standard input.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Input::Stdin
        } else {
            Input::File(PathBuf::from(arg))
        }
    }
}

impl<'a> Input<'a> {
    pub fn origin(&self) -> Origin {
        match self {
            Input::File(path) => Origin::File(path.display().to_string()),
            Input::Stdin => Origin::Stdin,
            Input::Bytes(_) => Origin::Bytes,
        }
    }
}

/// Stream reads from the fastq records of one input.
///
/// Compressed inputs are detected and decompressed automatically. The stream
/// ends after the first record that cannot be parsed.
pub struct FastqReader<'a> {
    reader: Option<Box<dyn FastxReader + 'a>>,
    origin: Arc<Origin>,
    idx: usize,
}

impl<'a> FastqReader<'a> {
    pub fn open(input: &Input<'a>) -> Result<Self> {
        let parsed = match input {
            Input::File(path) => {
                parse_fastx_file(path).map(|r| r as Box<dyn FastxReader + 'a>)
            }
            Input::Stdin => parse_fastx_reader(io::stdin()),
            Input::Bytes(bytes) => parse_fastx_reader(*bytes),
        };

        let reader = match parsed {
            Ok(reader) => Some(reader),
            // an empty input simply has no records
            Err(e) if matches!(e.kind, ParseErrorKind::EmptyFile) => None,
            Err(e) => {
                return Err(match input {
                    Input::File(path) => Error::FileIo {
                        file: path.display().to_string(),
                        source: Box::new(e),
                    },
                    _ => Error::BytesIo(Box::new(e)),
                })
            }
        };

        Ok(Self {
            reader,
            origin: Arc::new(input.origin()),
            idx: 0,
        })
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Number of records read so far.
    pub fn records_read(&self) -> usize {
        self.idx
    }
}

impl<'a> Iterator for FastqReader<'a> {
    type Item = Result<Read>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;
        let idx = self.idx;

        let res = match reader.next()? {
            Ok(record) => match record.qual() {
                Some(qual) => Ok(Read::from_fastq(
                    record.id(),
                    &record.seq(),
                    qual,
                    Arc::clone(&self.origin),
                    idx,
                )),
                None => Err(Error::ParseRecord {
                    origin: (*self.origin).clone(),
                    idx,
                    source: "record has no quality scores".into(),
                }),
            },
            Err(e) => Err(Error::ParseRecord {
                origin: (*self.origin).clone(),
                idx,
                source: Box::new(e),
            }),
        };

        if res.is_ok() {
            self.idx += 1;
        } else {
            self.reader = None;
        }

        Some(res)
    }
}

pub fn write_fastq_record<W: Write + ?Sized>(
    writer: &mut W,
    record: (&[u8], &[u8], &[u8]),
) -> io::Result<()> {
    writer.write_all(b"@")?;
    writer.write_all(record.0)?;
    writer.write_all(b"\n")?;
    writer.write_all(record.1)?;
    writer.write_all(b"\n+\n")?;
    writer.write_all(record.2)?;
    writer.write_all(b"\n")
}

enum Writer<'a> {
    Plain(Box<dyn Write + Send + 'a>),
    Gzip(BufWriter<GzEncoder<Box<dyn Write + Send + 'a>>>),
}

impl<'a> Write for Writer<'a> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Writer::Plain(w) => w.write(buf),
            Writer::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Writer::Plain(w) => w.flush(),
            Writer::Gzip(w) => w.flush(),
        }
    }
}

/// A named output that fastq records or counts are written to.
///
/// [`Sink::finish`] must be called once everything is written, otherwise a compressed
/// stream is only completed on drop and any error doing so is lost.
pub struct Sink<'a> {
    name: String,
    writer: Writer<'a>,
}

impl<'a> Sink<'a> {
    pub fn new(name: impl Into<String>, writer: impl Write + Send + 'a) -> Self {
        Self {
            name: name.into(),
            writer: Writer::Plain(Box::new(writer)),
        }
    }

    /// A sink that gzip-compresses everything written to it.
    pub fn gzip(name: impl Into<String>, writer: impl Write + Send + 'a) -> Self {
        let writer = Box::new(writer) as Box<dyn Write + Send + 'a>;
        Self {
            name: name.into(),
            writer: Writer::Gzip(BufWriter::new(GzEncoder::new(
                writer,
                Compression::default(),
            ))),
        }
    }

    pub fn write_read(&mut self, read: &Read) -> Result<()> {
        write_fastq_record(&mut self.writer, read.to_fastq()).map_err(|e| self.io_error(e))
    }

    pub fn write_count(&mut self, count: usize) -> Result<()> {
        writeln!(self.writer, "{}", count).map_err(|e| self.io_error(e))
    }

    /// Flush everything written so far and write the trailer of a compressed stream.
    pub fn finish(&mut self) -> Result<()> {
        let res = self.writer.flush().and_then(|_| match &mut self.writer {
            Writer::Plain(_) => Ok(()),
            Writer::Gzip(w) => {
                let gz = w.get_mut();
                gz.try_finish()?;
                gz.get_mut().flush()
            }
        });
        res.map_err(|e| self.io_error(e))
    }

    fn io_error(&self, e: io::Error) -> Error {
        Error::FileIo {
            file: self.name.clone(),
            source: Box::new(e),
        }
    }
}

impl Sink<'static> {
    pub fn stdout() -> Self {
        Self::new("standard output", BufWriter::new(io::stdout()))
    }

    /// Create (or truncate) a file to write to, gzip-compressing it if the path ends with `.gz`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::create(path).map_err(|e| Error::FileIo {
            file: name.clone(),
            source: Box::new(e),
        })?;

        if name.ends_with(".gz") {
            Ok(Self::gzip(name, file))
        } else {
            Ok(Self::new(name, BufWriter::new(file)))
        }
    }
}

//! Records file I/O
//!
//! Sequential reads of complete records and single-record appends.

use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read, Write};
use std::path::Path;

use super::codec::{decode, encode, RECORD_SIZE};
use super::treasure::Treasure;

/// Streams records from a records file in append order
///
/// Iteration stops at end of file or at a trailing partial record; read
/// errors are yielded once and end the iteration.
pub struct RecordReader<R> {
    inner: R,
    buf: [u8; RECORD_SIZE],
    done: bool,
}

impl RecordReader<BufReader<File>> {
    /// Open a records file for reading
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> RecordReader<R> {
    /// Wrap any reader positioned at a record boundary
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: [0u8; RECORD_SIZE],
            done: false,
        }
    }

    /// Count complete records, stopping quietly at the first read problem
    pub fn count_complete(self) -> usize {
        self.map_while(|record| record.ok()).count()
    }

    /// Next complete record exactly as stored, without decoding it
    ///
    /// Same end-of-file and error rules as the iterator.
    pub fn next_raw(&mut self) -> Option<io::Result<&[u8; RECORD_SIZE]>> {
        if self.done {
            return None;
        }

        match self.inner.read_exact(&mut self.buf) {
            Ok(()) => Some(Ok(&self.buf)),
            // Clean end of file or a truncated trailing record
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = io::Result<Treasure>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_raw()? {
            Ok(raw) => decode(raw).map(Ok),
            Err(e) => Some(Err(e)),
        }
    }
}

/// Write one full record; a short write surfaces as an error
pub fn append_record<W: Write>(writer: &mut W, treasure: &Treasure) -> io::Result<()> {
    let bytes = encode(treasure);
    writer.write_all(&bytes)?;
    writer.flush()
}

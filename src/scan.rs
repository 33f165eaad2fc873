//! Single-pass FASTA record scanning.
//!
//! [`Scanner`] assembles records line by line: a line starting with `>`
//! finalizes the record in progress and opens a new one, any other non-empty
//! line extends the sequence, end of input finalizes the last record.
//! Sequence lines seen before the first header have no record to attach to
//! and are discarded. Blank lines neither extend nor finalize a record.

use crate::record::FastaRecord;
use std::io;
use std::io::BufRead;
use std::mem;

/// How the scanner treats sequence lines.
///
/// The default accepts any non-empty line as sequence data. With
/// `reject_embedded_space` set, a sequence line containing a space discards
/// the whole record in progress, silently. Malformed data is never surfaced
/// as an error.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanPolicy
{
    /// Discard the record in progress when a sequence line contains a space.
    pub reject_embedded_space: bool,
}

/// A single forward pass over a FASTA stream, yielding records lazily.
///
/// Implements `Iterator` with `io::Result<FastaRecord>` items; only I/O
/// errors from the underlying reader are ever returned as `Err`.
///
/// # Example
///
/// ```
/// use fastakit::Scanner;
/// use std::io::Cursor;
///
/// let records: Vec<_> = Scanner::new(Cursor::new(">a\nAC\nGT\n>b\nTT\n"))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].id(), "a");
/// assert_eq!(records[0].seq(), b"ACGT");
/// assert_eq!(records[1].id(), "b");
/// ```
pub struct Scanner<R: BufRead>
{
    reader: R,
    policy: ScanPolicy,
    line: Vec<u8>,
    record: FastaRecord,
    in_record: bool,
    rejected: bool,
}

impl<R: BufRead> Scanner<R>
{
    pub fn new(reader: R) -> Self
    {
        Self::with_policy(reader, ScanPolicy::default())
    }

    pub fn with_policy(reader: R, policy: ScanPolicy) -> Self
    {
        Scanner {
            reader,
            policy,
            line: Vec::new(),
            record: FastaRecord::default(),
            in_record: false,
            rejected: false,
        }
    }

    /// Finalize the record in progress and start a new one for `id`.
    /// Returns the finished record unless there was none or it was rejected.
    fn start_record(&mut self, id: String) -> Option<FastaRecord>
    {
        let finished = if self.in_record && !self.rejected
        {
            Some(mem::take(&mut self.record))
        }
        else
        {
            None
        };
        self.record.id = id;
        self.record.seq.clear();
        self.in_record = true;
        self.rejected = false;
        finished
    }

    fn push_seq_line(&mut self)
    {
        if self.policy.reject_embedded_space && memchr::memchr(b' ', &self.line).is_some()
        {
            self.rejected = true;
            self.record.seq.clear();
            return;
        }
        if !self.record.seq.is_empty()
        {
            self.record.seq.push(b'\n');
        }
        self.record.seq.extend_from_slice(&self.line);
    }
}

impl<R: BufRead> Iterator for Scanner<R>
{
    type Item = io::Result<FastaRecord>;

    fn next(&mut self) -> Option<io::Result<FastaRecord>>
    {
        loop
        {
            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line)
            {
                Err(e) => return Some(Err(e)),
                Ok(0) =>
                {
                    if self.in_record && !self.rejected
                    {
                        self.in_record = false;
                        return Some(Ok(mem::take(&mut self.record)));
                    }
                    return None;
                }
                Ok(_some) =>
                {
                    rstrip_newline(&mut self.line);
                    if self.line.first() == Some(&b'>')
                    {
                        let id = String::from_utf8_lossy(&self.line[1..]).into_owned();
                        if let Some(record) = self.start_record(id)
                        {
                            return Some(Ok(record));
                        }
                    }
                    else if !self.line.is_empty() && self.in_record && !self.rejected
                    {
                        self.push_seq_line();
                    }
                    // blank lines and pre-header content fall through
                }
            }
        }
    }
}

fn rstrip_newline(line: &mut Vec<u8>)
{
    while matches!(line.last(), Some(&b'\n') | Some(&b'\r'))
    {
        line.truncate(line.len() - 1);
    }
}

/// Run `f` on every record of the stream.
pub fn scan_for_each<R, F>(reader: R, mut f: F) -> io::Result<()>
where
    R: BufRead,
    F: FnMut(&FastaRecord),
{
    for result in Scanner::new(reader)
    {
        f(&result?);
    }
    Ok(())
}

/// Count records without assembling them.
///
/// Scans buffered chunks for lines whose first byte is `>`, so the cost is
/// one newline search per chunk rather than per-record allocation.
pub fn count_records<R: BufRead>(mut reader: R) -> io::Result<usize>
{
    let mut count = 0;
    let mut at_line_start = true;
    loop
    {
        let buf = reader.fill_buf()?;
        if buf.is_empty()
        {
            return Ok(count);
        }
        if at_line_start && buf[0] == b'>'
        {
            count += 1;
        }
        for line_end in memchr::memchr_iter(b'\n', buf)
        {
            if buf.get(line_end + 1) == Some(&b'>')
            {
                count += 1;
            }
        }
        // a header at a chunk boundary is picked up on the next fill
        at_line_start = buf.last() == Some(&b'\n');
        let used = buf.len();
        reader.consume(used);
    }
}

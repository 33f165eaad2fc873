//! The FASTA record type.

/// One FASTA record: an identifier and its sequence.
///
/// The sequence is stored as read, with the original line breaks still in
/// place. The accessors flatten or measure it on demand, so a consumer that
/// only needs lengths never pays for a flattened copy.
///
/// # Example
///
/// ```
/// use fastakit::Scanner;
/// use std::io::Cursor;
///
/// let mut scanner = Scanner::new(Cursor::new(">chr1 test\nACGT\nACGT\n"));
/// let record = scanner.next().unwrap().unwrap();
/// assert_eq!(record.id(), "chr1 test");
/// assert_eq!(record.seq_raw(), b"ACGT\nACGT");
/// assert_eq!(record.seq(), b"ACGTACGT");
/// assert_eq!(record.seq_len(), 8);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FastaRecord
{
    pub(crate) id: String,
    pub(crate) seq: Vec<u8>,
}

impl FastaRecord
{
    /// The identifier: everything after `>` on the header line.
    /// May be empty for a bare `>` header.
    pub fn id(&self) -> &str
    {
        &self.id
    }

    /// The sequence bytes as read, line breaks included.
    pub fn seq_raw(&self) -> &[u8]
    {
        &self.seq
    }

    /// The sequence with line breaks removed.
    pub fn seq(&self) -> Vec<u8>
    {
        let mut seq = Vec::with_capacity(self.seq.len());
        let mut line_start = 0;
        for line_end in memchr::memchr_iter(b'\n', &self.seq)
        {
            seq.extend_from_slice(&self.seq[line_start..line_end]);
            line_start = line_end + 1;
        }
        seq.extend_from_slice(&self.seq[line_start..]);
        seq
    }

    /// Number of sequence bytes, line breaks excluded.
    pub fn seq_len(&self) -> usize
    {
        self.seq.len() - memchr::memchr_iter(b'\n', &self.seq).count()
    }

    /// The original sequence lines, borrowed from the raw buffer.
    pub fn lines(&self) -> Vec<&[u8]>
    {
        let mut lines = Vec::new();
        let mut line_start = 0;
        for line_end in memchr::memchr_iter(b'\n', &self.seq)
        {
            lines.push(&self.seq[line_start..line_end]);
            line_start = line_end + 1;
        }
        if line_start < self.seq.len()
        {
            lines.push(&self.seq[line_start..]);
        }
        lines
    }
}

#[cfg(test)]
mod tests
{
    use super::FastaRecord;

    fn record(id: &str, raw: &[u8]) -> FastaRecord
    {
        FastaRecord {
            id: id.to_string(),
            seq: raw.to_vec(),
        }
    }

    #[test]
    fn seq_flattens_line_breaks()
    {
        let r = record("a", b"TAGC\nTTTT");
        assert_eq!(r.seq(), b"TAGCTTTT");
        assert_eq!(r.seq_raw(), b"TAGC\nTTTT");
        assert_eq!(r.seq_len(), 8);
    }

    #[test]
    fn single_line_seq()
    {
        let r = record("a", b"AGTC");
        assert_eq!(r.seq(), b"AGTC");
        assert_eq!(r.seq_len(), 4);
        assert_eq!(r.lines(), vec![&b"AGTC"[..]]);
    }

    #[test]
    fn empty_seq()
    {
        let r = record("a", b"");
        assert_eq!(r.seq(), b"");
        assert_eq!(r.seq_len(), 0);
        assert!(r.lines().is_empty());
    }

    #[test]
    fn lines_borrow_original_splits()
    {
        let r = record("a", b"AC\nGT\nT");
        assert_eq!(r.lines(), vec![&b"AC"[..], &b"GT"[..], &b"T"[..]]);
    }

    #[test]
    fn resplit_preserves_flat_seq()
    {
        // The same sequence split at different points flattens identically.
        let flat = b"ACGTACGTAC".to_vec();
        for split in 1..flat.len()
        {
            let mut raw = flat[..split].to_vec();
            raw.push(b'\n');
            raw.extend_from_slice(&flat[split..]);
            let r = record("a", &raw);
            assert_eq!(r.seq(), flat);
            assert_eq!(r.seq_len(), flat.len());
        }
    }
}

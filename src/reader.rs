//! Opening FASTA input files.

use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

/// Open a FASTA file for scanning.
///
/// Files ending in `.gz` are decompressed on the fly; everything else is
/// read as plain text.
pub fn open(path: &Path) -> io::Result<Box<dyn BufRead>>
{
    let file = File::open(path)?;
    let is_gzip = path.extension().map(|e| e == "gz").unwrap_or(false);
    if is_gzip
    {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    }
    else
    {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests
{
    use super::open;
    use crate::Scanner;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::fs;
    use std::io::Write;

    #[test]
    fn open_plain_file()
    {
        let path = std::env::temp_dir().join("fastakit_reader_plain.fasta");
        fs::write(&path, ">a\nACGT\n").unwrap();

        let records: Vec<_> = Scanner::new(open(&path).unwrap())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "a");
        assert_eq!(records[0].seq(), b"ACGT");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn open_gzip_file()
    {
        let path = std::env::temp_dir().join("fastakit_reader_gz.fasta.gz");
        let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b">a\nAC\nGT\n>b\nTT\n").unwrap();
        encoder.finish().unwrap();

        let records: Vec<_> = Scanner::new(open(&path).unwrap())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].seq(), b"ACGT");
        assert_eq!(records[1].id(), "b");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn open_missing_file_is_an_error()
    {
        let path = std::env::temp_dir().join("fastakit_reader_missing.fasta");
        assert!(open(&path).is_err());
    }
}

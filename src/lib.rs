//! fastakit reads FASTA files record by record.
//!
//! The one reusable piece is [`Scanner`], a single forward pass that turns a
//! stream of text lines into a stream of [`FastaRecord`]s. The command line
//! tools shipped under `src/bin/` (counting, size filtering, flattening,
//! header listing) are thin read-only consumers of that scan.

pub mod reader;
pub mod record;
pub mod scan;

pub use record::FastaRecord;
pub use scan::{count_records, scan_for_each, ScanPolicy, Scanner};

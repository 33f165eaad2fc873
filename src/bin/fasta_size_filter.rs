use fastakit::record::FastaRecord;
use fastakit::{reader, ScanPolicy, Scanner};
use std::env::args;
use std::io;
use std::io::Write;
use std::path::Path;
use std::process::exit;

fn usage() -> !
{
    eprintln!(" ======= FASTA Size Filter =======");
    eprintln!();
    eprintln!(" Usage: fasta_size_filter 600 input.fasta > output.filtered.fasta");
    eprintln!();
    eprintln!("   size cut-off   (Required)");
    eprintln!("   input filename (Required)");
    exit(1);
}

/// Inclusive bound: a record passes when its sequence reaches the cutoff.
fn passes(record: &FastaRecord, cutoff: usize) -> bool
{
    record.seq_len() >= cutoff
}

fn main()
{
    let argv: Vec<String> = args().skip(1).collect();
    if argv.len() != 2 || argv.iter().any(|a| a == "-h" || a == "--help")
    {
        usage();
    }
    let cutoff: usize = match argv[0].parse()
    {
        Ok(cutoff) => cutoff,
        Err(_) => usage(),
    };
    let infile = &argv[1];

    eprintln!(" Working on: {}", infile);
    eprintln!(" Will toss all sequences less than: {}", cutoff);

    let input = match reader::open(Path::new(infile))
    {
        Ok(input) => input,
        Err(e) =>
        {
            eprintln!("Error opening '{}': {}. Bailing out.", infile, e);
            exit(1);
        }
    };

    if let Err(e) = filter(input, cutoff)
    {
        eprintln!("Error reading '{}': {}", infile, e);
        exit(1);
    }
}

fn filter(input: Box<dyn io::BufRead>, cutoff: usize) -> io::Result<()>
{
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    // sequence lines with embedded spaces are invalid, drop those records
    let policy = ScanPolicy {
        reject_embedded_space: true,
    };
    for result in Scanner::with_policy(input, policy)
    {
        let record = result?;
        if passes(&record, cutoff)
        {
            out.write_all(b">")?;
            out.write_all(record.id().as_bytes())?;
            out.write_all(b"\n")?;
            out.write_all(&record.seq())?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()
}

use fastakit::{reader, Scanner};
use std::env::args;
use std::io;
use std::io::Write;
use std::path::Path;
use std::process::exit;

fn usage() -> !
{
    eprintln!("USAGE");
    eprintln!("  flatten_fasta input.fasta > flat.fasta");
    eprintln!();
    eprintln!("DESCRIPTION");
    eprintln!("   Flattens a FASTA file, i.e. removes the line breaks from the");
    eprintln!("   sequence data so every record takes exactly two lines.");
    exit(1);
}

fn main() -> io::Result<()>
{
    let argv: Vec<String> = args().skip(1).collect();
    if argv.len() != 1 || argv[0] == "-h" || argv[0] == "--help"
    {
        usage();
    }

    let input = match reader::open(Path::new(&argv[0]))
    {
        Ok(input) => input,
        Err(e) =>
        {
            eprintln!("Error opening '{}': {}. Bailing out.", argv[0], e);
            exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for result in Scanner::new(input)
    {
        let record = result?;
        out.write_all(b">")?;
        out.write_all(record.id().as_bytes())?;
        out.write_all(b"\n")?;
        out.write_all(&record.seq())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

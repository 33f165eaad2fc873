use fastakit::{reader, scan_for_each};
use std::env::args;
use std::io;
use std::path::Path;
use std::process::exit;

fn main() -> io::Result<()>
{
    let files: Vec<String> = args().skip(1).collect();
    if files.is_empty() || files.iter().any(|a| a == "-h" || a == "--help")
    {
        eprintln!(" Usage: fasta_headers input.fasta [more.fasta ...]");
        exit(1);
    }

    for filename in files
    {
        let input = match reader::open(Path::new(&filename))
        {
            Ok(input) => input,
            Err(e) =>
            {
                eprintln!("Error opening '{}': {}. Bailing out.", filename, e);
                exit(1);
            }
        };
        scan_for_each(input, |record| {
            println!("{}", record.id());
        })?;
    }
    Ok(())
}

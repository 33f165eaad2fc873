use fastakit::{count_records, reader};
use std::env::args;
use std::path::Path;
use std::process::exit;

fn usage() -> !
{
    eprintln!(" ======= FASTA Count =======");
    eprintln!();
    eprintln!(" Usage: fasta_count input.fasta [more.fasta ...]");
    eprintln!();
    eprintln!("   Counts the sequence records in each FASTA file given.");
    eprintln!("   Gzip compressed input (.gz) is read transparently.");
    exit(1);
}

fn main()
{
    let files: Vec<String> = args().skip(1).collect();
    if files.is_empty() || files.iter().any(|a| a == "-h" || a == "--help")
    {
        usage();
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
        match count_records(input)
        {
            Ok(seqs) => println!(" There are {} sequences in: {}", seqs, filename),
            Err(e) =>
            {
                eprintln!("Error reading '{}': {}", filename, e);
                exit(1);
            }
        }
    }
}

use clap::Parser;
use classical_ciphers::frequency::{frequency_table, letter_frequencies};
use classical_ciphers::{io, Language};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the letter frequency program.
#[derive(Parser, Debug)]
struct Cli {
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    #[arg(short, long, help = "Alphabet: es (27 letters with Ñ) or en (26 letters)")]
    lang: Language,

    #[arg(short, long, help = "Path to the output file (prints to stdout when omitted)")]
    output: Option<String>,
}

/// Main entry point for the letter frequency program.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let content: String = io::read_text(&cli.file)?;
    let language = cli.lang;

    if let Some(top) = letter_frequencies(&content, language).first() {
        println!("Most frequent letter: {} ({} occurrences)", top.letter, top.count);
    }

    let table = frequency_table(&content, language);

    match &cli.output {
        Some(path) => {
            io::write_text(&table, path)?;
            println!("Frequency table saved to: {}", path);
        }
        None => print!("{}", table),
    }

    Ok(())
}

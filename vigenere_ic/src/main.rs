use clap::Parser;
use classical_ciphers::vigenere::{coincidence_table, index_of_coincidence};
use classical_ciphers::{io, Language};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the coincidence index program.
#[derive(Parser, Debug)]
#[command(
    name = "vigenere_ic",
    about = "Index of coincidence of a text and of random Vigenère keys"
)]
struct Cli {
    /// Path to a text whose index of coincidence is printed
    #[arg(short, long)]
    file: Option<String>,

    /// Alphabet for the text and the keys: es or en
    #[arg(short, long)]
    lang: Language,

    /// Key lengths (rows of the table), comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [5, 10, 20, 50, 100])]
    lengths: Vec<usize>,

    /// Number of distinct letters per key (columns of the table), comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [1, 2, 5, 10, 15, 26])]
    distinct: Vec<usize>,

    /// Seed for the key generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the output file for the table (prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let language = cli.lang;

    if let Some(path) = &cli.file {
        let content = io::read_text(path)?;
        println!("Index of coincidence: {:.5}", index_of_coincidence(&content, language));
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let table = coincidence_table(&cli.lengths, &cli.distinct, language, &mut rng)?;

    match &cli.output {
        Some(path) => {
            io::write_text(&table, path)?;
            println!("Table saved to: {}", path);
        }
        None => println!("{}", table),
    }

    Ok(())
}

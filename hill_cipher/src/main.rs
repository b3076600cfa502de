use clap::{Parser, ValueEnum};
use classical_ciphers::{io, HillCipher, KeyMatrix, Language};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the Hill cipher program.
#[derive(Parser, Debug)]
#[command(
    name = "hill_cipher",
    about = "Hill cipher encryption/decryption",
    long_about = "
Encrypts or decrypts a text with the Hill cipher.

KEY FORMAT:
Rows separated by ';', entries by spaces or commas, e.g. \"3 3; 2 5\".

ALPHABETS:
- en: A=0..Z=25, modulus 26, any n x n key, padding with A
- es: A=0..N=13, Ñ=14, O=15..Z=26, modulus 27, 2x2 key only, padding with X
"
)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long)]
    file: String,

    /// Key matrix, e.g. "3 3; 2 5"
    #[arg(short, long, allow_hyphen_values = true)]
    key: KeyMatrix,

    /// Alphabet of the numeric codec: es or en
    #[arg(short, long)]
    lang: Language,

    /// Path to the output file (prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, value_enum)]
    mode: OperationMode,
}

#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    Encrypt,
    Decrypt,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let content: String = io::read_text(&cli.file)?;
    let cipher = HillCipher::from_matrix(cli.key.clone(), cli.lang)?;

    let result = match cli.mode {
        OperationMode::Encrypt => cipher.encrypt(&content),
        OperationMode::Decrypt => cipher.decrypt(&content)?,
    };

    match &cli.output {
        Some(path) => {
            io::write_text(&result, path)?;
            println!("Operation completed successfully! Output saved to: {}", path);
        }
        None => println!("{}", result),
    }

    Ok(())
}

use clap::{Parser, ValueEnum};
use classical_ciphers::{io, PlayfairCipher};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the Playfair cipher program.
#[derive(Parser, Debug)]
#[command(
    name = "playfair",
    about = "Playfair cipher with a fixed 5x5 square",
    long_about = "
Encrypts or decrypts a text with the Playfair cipher.

The square has no W; W is written as X before encryption.
A filler X separates doubled letters inside a pair and pads an odd tail.

SQUARE:
E A J S Z
L C K T I
D M U B F
N V R G P
X O H Q Y
"
)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long)]
    file: String,

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
    let cipher = PlayfairCipher::new();

    let result = match cli.mode {
        OperationMode::Encrypt => cipher.encrypt(&content)?,
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

use clap::{Parser, ValueEnum};
use classical_ciphers::{io, Language, VigenereCipher};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher")]
    key: String,

    /// Alphabet used for both text and key
    #[arg(short, long, help = "Alphabet: es (27 letters with Ñ) or en (26 letters)")]
    lang: Language,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Main entry point for the Vigenère cipher program.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments
    let cli: Cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    // Read input file content
    let content: String = io::read_text(&cli.file)?;
    let cipher = VigenereCipher::new(&cli.key, cli.lang)?;

    // Process based on selected mode
    let result = match cli.mode {
        OperationMode::Encrypt => {
            println!("Encrypting with key: {}", cipher.key());
            cipher.encrypt(&content)
        }
        OperationMode::Decrypt => {
            println!("Decrypting with key: {}", cipher.key());
            cipher.decrypt(&content)
        }
    };

    // Write result to output file
    io::write_text(&result, &cli.output)?;

    println!("Operation completed successfully! Output saved to: {}", cli.output);
    Ok(())
}

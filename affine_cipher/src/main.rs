use clap::{Parser, ValueEnum};
use classical_ciphers::{affine, io, Language};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the affine cipher program.
#[derive(Parser, Debug)]
struct Cli {
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    #[arg(short = 'a', long, allow_negative_numbers = true, help = "Multiplier a of the key (must be coprime with the alphabet size to decrypt)")]
    a: Option<i64>,

    #[arg(short = 'b', long, allow_negative_numbers = true, help = "Shift b of the key")]
    b: Option<i64>,

    #[arg(short, long, help = "Alphabet: es (27 letters with Ñ) or en (26 letters)")]
    lang: Language,

    #[arg(short, long, help = "Path to the output file (prints to stdout when omitted)")]
    output: Option<String>,

    #[arg(short, long, value_enum, help = "Mode of operation (encrypt/decrypt/brute-force)")]
    mode: OperationMode,
}

#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    Encrypt,
    Decrypt,
    BruteForce,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let content: String = io::read_text(&cli.file)?;
    let language = cli.lang;

    let result = match cli.mode {
        OperationMode::Encrypt => {
            let (a, b) = key(&cli)?;
            affine::encrypt(&content, a, b, language)
        }
        OperationMode::Decrypt => {
            let (a, b) = key(&cli)?;
            affine::decrypt(&content, a, b, language)?
        }
        OperationMode::BruteForce => affine::brute_force_report(&content, language),
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

/// Both key parts are required outside brute-force mode.
fn key(cli: &Cli) -> Result<(i64, i64), Box<dyn std::error::Error>> {
    match (cli.a, cli.b) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err("both -a and -b are required to encrypt or decrypt".into()),
    }
}

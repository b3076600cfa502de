use std::collections::HashMap;

use clap::{Parser, ValueEnum};
use classical_ciphers::monoalphabetic::{decrypt_with_partial_mapping, generate_key};
use classical_ciphers::{io, MonoalphabeticCipher};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the monoalphabetic substitution program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file (not needed for keygen)
    #[arg(short, long)]
    file: Option<String>,

    /// 26-letter permutation of A-Z (encrypt/decrypt)
    #[arg(short, long)]
    key: Option<String>,

    /// Partial mapping for partial decryption, e.g. "Q=E,W=T"
    #[arg(short, long, value_delimiter = ',')]
    partial: Vec<String>,

    /// Path to the output file (prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Mode of operation
    #[arg(short, long, value_enum)]
    mode: OperationMode,
}

#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Print a random key
    Keygen,
    Encrypt,
    Decrypt,
    /// Decrypt with a partial mapping, unknown letters become '_'
    Partial,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let result = match cli.mode {
        OperationMode::Keygen => generate_key(&mut rand::thread_rng()),
        OperationMode::Encrypt => cipher(&cli)?.encrypt(&input(&cli)?),
        OperationMode::Decrypt => cipher(&cli)?.decrypt(&input(&cli)?),
        OperationMode::Partial => {
            decrypt_with_partial_mapping(&input(&cli)?, &parse_mapping(&cli.partial)?)
        }
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

fn input(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let path = cli.file.as_ref().ok_or("--file is required for this mode")?;
    Ok(io::read_text(path)?)
}

fn cipher(cli: &Cli) -> Result<MonoalphabeticCipher, Box<dyn std::error::Error>> {
    let key = cli.key.as_ref().ok_or("--key is required for this mode")?;
    Ok(MonoalphabeticCipher::new(key)?)
}

/// Parses `CIPHER=PLAIN` pairs into an uppercase mapping.
fn parse_mapping(pairs: &[String]) -> Result<HashMap<char, char>, Box<dyn std::error::Error>> {
    let mut mapping = HashMap::new();

    for pair in pairs {
        let letters: Vec<char> = pair
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect();

        match letters.as_slice() {
            [cipher, '=', plain] => {
                mapping.insert(*cipher, *plain);
            }
            _ => return Err(format!("invalid mapping '{}', expected CIPHER=PLAIN", pair).into()),
        }
    }

    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mapping() {
        let mapping = parse_mapping(&["q=e".to_string(), " W = T ".to_string()]).unwrap();
        assert_eq!(mapping.get(&'Q'), Some(&'E'));
        assert_eq!(mapping.get(&'W'), Some(&'T'));
    }

    #[test]
    fn test_parse_mapping_rejects_garbage() {
        assert!(parse_mapping(&["QE".to_string()]).is_err());
    }
}

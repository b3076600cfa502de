//! Error types for cipher operations

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Invalid affine key: {a} has no multiplicative inverse mod {modulus}")]
    InvalidKey { a: i64, modulus: i64 },

    #[error("Singular key matrix: determinant {determinant} is not invertible mod {modulus}")]
    SingularMatrix { determinant: i64, modulus: i64 },

    #[error("Invalid key shape: expected {expected}, got {rows} rows with {columns} columns")]
    InvalidKeyShape {
        expected: String,
        rows: usize,
        columns: usize,
    },

    #[error("Invalid text length {length} (must be a multiple of {block_size})")]
    InvalidBlockLength { length: usize, block_size: usize },

    #[error("Key is empty after normalization")]
    EmptyKey,

    #[error("Invalid substitution key: {0}")]
    InvalidPermutation(String),

    #[error("Symbol '{0}' is not part of the cipher alphabet")]
    UnknownSymbol(char),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Cannot parse key matrix: {0}")]
    MatrixParse(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        let err = CipherError::InvalidKey { a: 13, modulus: 26 };
        assert_eq!(
            err.to_string(),
            "Invalid affine key: 13 has no multiplicative inverse mod 26"
        );
    }

    #[test]
    fn test_display_singular_matrix() {
        let err = CipherError::SingularMatrix { determinant: 4, modulus: 26 };
        assert_eq!(
            err.to_string(),
            "Singular key matrix: determinant 4 is not invertible mod 26"
        );
    }

    #[test]
    fn test_display_file_not_found() {
        let err = CipherError::FileNotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "File not found: missing.txt");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CipherError = io.into();
        assert!(matches!(err, CipherError::Io(_)));
    }
}

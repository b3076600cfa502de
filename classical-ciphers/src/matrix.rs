//! Square integer matrices and their inverses modulo n
//!
//! Everything uses exact integer arithmetic. [`KeyMatrix::determinant`] and
//! [`KeyMatrix::adjugate`] expand by cofactors (closed form for 2×2);
//! [`KeyMatrix::inverse_mod`] row-reduces mod n, which stays cheap for large
//! keys and matches `det⁻¹ · adj(M) mod n`.

use std::fmt;
use std::str::FromStr;

use crate::arithmetic::mod_inverse;
use crate::error::{CipherError, Result};

/// Square matrix of integers, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    size: usize,
    entries: Vec<i64>,
}

impl KeyMatrix {
    /// Builds a matrix from its rows; fails with `InvalidKeyShape` unless
    /// the rows form a non-empty square.
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        let size = rows.len();
        let columns = rows.first().map_or(0, Vec::len);

        if size == 0 || rows.iter().any(|row| row.len() != size) {
            return Err(CipherError::InvalidKeyShape {
                expected: "a non-empty square matrix".to_string(),
                rows: size,
                columns,
            });
        }

        Ok(Self {
            size,
            entries: rows.into_iter().flatten().collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, column: usize) -> i64 {
        self.entries[row * self.size + column]
    }

    pub fn rows(&self) -> Vec<Vec<i64>> {
        self.entries.chunks(self.size).map(<[i64]>::to_vec).collect()
    }

    fn from_fn(size: usize, f: impl Fn(usize, usize) -> i64) -> Self {
        let entries = (0..size * size).map(|i| f(i / size, i % size)).collect();
        Self { size, entries }
    }

    /// Every entry reduced into `[0, modulus)`
    pub fn reduce(&self, modulus: i64) -> Self {
        Self {
            size: self.size,
            entries: self.entries.iter().map(|e| e.rem_euclid(modulus)).collect(),
        }
    }

    /// Matrix without `row` and `column`
    fn minor(&self, row: usize, column: usize) -> Self {
        let size = self.size - 1;
        Self::from_fn(size, |r, c| {
            let source_row = if r < row { r } else { r + 1 };
            let source_column = if c < column { c } else { c + 1 };
            self.get(source_row, source_column)
        })
    }

    /// Exact determinant
    pub fn determinant(&self) -> i64 {
        match self.size {
            1 => self.get(0, 0),
            2 => self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0),
            _ => (0..self.size)
                .map(|column| self.get(0, column) * self.cofactor(0, column))
                .sum(),
        }
    }

    fn cofactor(&self, row: usize, column: usize) -> i64 {
        let sign = if (row + column) % 2 == 0 { 1 } else { -1 };
        sign * self.minor(row, column).determinant()
    }

    /// Transpose of the cofactor matrix
    pub fn adjugate(&self) -> Self {
        match self.size {
            1 => Self::from_fn(1, |_, _| 1),
            2 => {
                let (a, b, c, d) = (self.get(0, 0), self.get(0, 1), self.get(1, 0), self.get(1, 1));
                Self {
                    size: 2,
                    entries: vec![d, -b, -c, a],
                }
            }
            _ => Self::from_fn(self.size, |r, c| self.cofactor(c, r)),
        }
    }

    /// Upper-triangular form of `self mod modulus`, by Euclid row steps.
    ///
    /// Returns `(upper, transform, sign)` with `transform · self ≡ upper` and
    /// `det(transform) = sign`. Only row swaps and "subtract a multiple of
    /// another row" are used, so no division is needed for composite moduli.
    fn triangularize(&self, modulus: i64) -> (Vec<Vec<i64>>, Vec<Vec<i64>>, i64) {
        let mut upper = self.reduce(modulus).rows();
        let mut transform = Self::identity(self.size).rows();
        let mut sign = 1;

        for pivot in 0..self.size {
            for row in pivot + 1..self.size {
                while upper[row][pivot] != 0 {
                    let q = upper[pivot][pivot] / upper[row][pivot];
                    for k in 0..self.size {
                        upper[pivot][k] = (upper[pivot][k] - q * upper[row][k]).rem_euclid(modulus);
                        transform[pivot][k] =
                            (transform[pivot][k] - q * transform[row][k]).rem_euclid(modulus);
                    }
                    upper.swap(pivot, row);
                    transform.swap(pivot, row);
                    sign = -sign;
                }
            }
        }

        (upper, transform, sign)
    }

    /// Determinant reduced into `[0, modulus)`, without the exact expansion
    pub fn determinant_mod(&self, modulus: i64) -> i64 {
        let (upper, _, sign) = self.triangularize(modulus);
        diagonal_product(&upper, sign, modulus)
    }

    /// Inverse modulo `modulus`, every entry in `[0, modulus)`
    ///
    /// Equal to `det⁻¹ · adj(M) mod modulus`. Fails with `SingularMatrix`
    /// when `det mod modulus` has no inverse.
    pub fn inverse_mod(&self, modulus: i64) -> Result<Self> {
        let (upper, transform, sign) = self.triangularize(modulus);
        let determinant = diagonal_product(&upper, sign, modulus);

        if mod_inverse(determinant, modulus).is_none() {
            return Err(CipherError::SingularMatrix { determinant, modulus });
        }

        // det is a unit, so every diagonal entry is one too
        let mut inverse = vec![vec![0; self.size]; self.size];
        for i in (0..self.size).rev() {
            let pivot_inv = mod_inverse(upper[i][i], modulus)
                .ok_or(CipherError::SingularMatrix { determinant, modulus })?;

            for c in 0..self.size {
                let known: i64 = (i + 1..self.size)
                    .map(|j| upper[i][j] * inverse[j][c] % modulus)
                    .sum();
                let rhs = (transform[i][c] - known).rem_euclid(modulus);
                inverse[i][c] = (pivot_inv * rhs).rem_euclid(modulus);
            }
        }

        Self::new(inverse)
    }

    /// `self · vector mod modulus`, treating `vector` as a column
    ///
    /// Operands are reduced first, so arbitrarily large entries are safe.
    pub fn mul_vector_mod(&self, vector: &[i64], modulus: i64) -> Vec<i64> {
        self.entries
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .zip(vector)
                    .fold(0, |acc, (m, v)| {
                        (acc + m.rem_euclid(modulus) * v.rem_euclid(modulus)).rem_euclid(modulus)
                    })
            })
            .collect()
    }

    /// `self · other mod modulus`
    pub fn mul_mod(&self, other: &KeyMatrix, modulus: i64) -> Self {
        Self::from_fn(self.size, |r, c| {
            (0..self.size).fold(0, |acc, k| {
                let product = self.get(r, k).rem_euclid(modulus) * other.get(k, c).rem_euclid(modulus);
                (acc + product).rem_euclid(modulus)
            })
        })
    }

    pub fn identity(size: usize) -> Self {
        Self::from_fn(size, |r, c| i64::from(r == c))
    }
}

fn diagonal_product(upper: &[Vec<i64>], sign: i64, modulus: i64) -> i64 {
    upper
        .iter()
        .enumerate()
        .fold(sign.rem_euclid(modulus), |det, (i, row)| (det * row[i]).rem_euclid(modulus))
}

impl fmt::Display for KeyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(i64::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect();
        write!(f, "{}", rows.join("; "))
    }
}

/// Parses `"3 3; 2 5"` or `"3,3;2,5"`: rows split by `;`, entries by commas or whitespace.
impl FromStr for KeyMatrix {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .split(';')
            .filter(|row| !row.trim().is_empty())
            .map(|row| {
                row.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|entry| !entry.is_empty())
                    .map(|entry| {
                        entry
                            .parse::<i64>()
                            .map_err(|e| CipherError::MatrixParse(format!("'{}': {}", entry, e)))
                    })
                    .collect::<Result<Vec<i64>>>()
            })
            .collect::<Result<Vec<Vec<i64>>>>()?;

        KeyMatrix::new(rows)
    }
}

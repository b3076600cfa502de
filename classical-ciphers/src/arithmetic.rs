//! Modular arithmetic over machine integers

/// Greatest common divisor (iterative Euclid), always non-negative.
///
/// `gcd(a, 0) == |a|`.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a.abs()
}

/// Extended euclidean algorithm
///
/// Returns `(g, x, y)` such that `a*x + b*y = g`. For `a == 0` the result
/// is `(b, 0, 1)`.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if a == 0 {
        return (b, 0, 1);
    }

    let (g, x1, y1) = extended_gcd(b.rem_euclid(a), a);

    // x = y1 - (b / a) * x1, with floored division to match rem_euclid
    let quotient = (b - b.rem_euclid(a)) / a;
    (g, y1 - quotient * x1, x1)
}

/// Multiplicative inverse of `a` modulo `m`
///
/// `a` is reduced into `[0, m)` first, so negative values are accepted.
/// Returns `None` when `gcd(a, m) != 1` or `m < 2`. The result lies in `[0, m)`.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    if m < 2 {
        return None;
    }

    let (g, x, _) = extended_gcd(a.rem_euclid(m), m);

    if g != 1 {
        return None;
    }

    Some(x.rem_euclid(m))
}

/// Number of integers in `[1, n)` coprime with `n` (Euler's totient for n > 1).
pub fn totient(n: i64) -> usize {
    (1..n).filter(|&a| gcd(a, n) == 1).count()
}

//! Predicate-based dot-index selection: primes, parity, divisibility,
//! Fibonacci, and figurate-number membership over a contiguous index
//! range.

/// A named predicate over a 1-based dot index, usable with
/// [`matching_indices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Indices that are prime.
    Prime,
    /// Even indices.
    Even,
    /// Odd indices.
    Odd,
    /// Indices divisible by `n`.
    DivisibleBy(u64),
    /// Indices not divisible by `n`.
    NotDivisibleBy(u64),
    /// Indices that are Fibonacci numbers not exceeding `max`.
    FibonacciUpTo(u64),
    /// Triangular-number indices.
    Triangular,
    /// Square-number indices.
    Square,
    /// Pentagonal-number indices.
    Pentagonal,
}

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

fn fibonacci_set_up_to(max: u64) -> std::collections::BTreeSet<u64> {
    let mut set = std::collections::BTreeSet::new();
    let (mut a, mut b) = (0u64, 1u64);
    set.insert(a);
    while b <= max {
        set.insert(b);
        let next = a + b;
        a = b;
        b = next;
    }
    set
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    reason = "dot indices stay well within f64's exact integer range"
)]
fn is_triangular(n: u64) -> bool {
    // n = m(m+1)/2  <=>  8n+1 is a perfect square.
    let discriminant = 8 * n + 1;
    let root = (discriminant as f64).sqrt().round() as u64;
    root * root == discriminant
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    reason = "dot indices stay well within f64's exact integer range"
)]
fn is_square(n: u64) -> bool {
    let root = (n as f64).sqrt().round() as u64;
    root * root == n
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    reason = "dot indices stay well within f64's exact integer range"
)]
fn is_pentagonal(n: u64) -> bool {
    // n = m(3m-1)/2  <=>  (sqrt(24n+1)+1)/6 is a positive integer.
    let discriminant = 24 * n + 1;
    let sqrt = (discriminant as f64).sqrt();
    let root = sqrt.round();
    let discriminant_f = discriminant as f64;
    if (root * root - discriminant_f).abs() > 0.5 {
        return false;
    }
    let m_numerator = root as u64 + 1;
    m_numerator % 6 == 0
}

impl Pattern {
    fn matches(self, n: u64) -> bool {
        match self {
            Self::Prime => is_prime(n),
            Self::Even => n % 2 == 0,
            Self::Odd => n % 2 == 1,
            Self::DivisibleBy(d) => d != 0 && n % d == 0,
            Self::NotDivisibleBy(d) => d == 0 || n % d != 0,
            Self::FibonacciUpTo(max) => n <= max && fibonacci_set_up_to(max).contains(&n),
            Self::Triangular => is_triangular(n),
            Self::Square => is_square(n),
            Self::Pentagonal => is_pentagonal(n),
        }
    }
}

/// The dot indices in `1..=count` that satisfy `pattern`.
#[must_use]
pub fn matching_indices(pattern: Pattern, count: usize) -> Vec<usize> {
    (1..=count)
        .filter(|&i| pattern.matches(u64::try_from(i).unwrap_or(u64::MAX)))
        .collect()
}

//! Three ways to compute `1 + 2 + ... + n`.
//!
//! All variants return 0 for `n <= 0` and agree for every input they can
//! evaluate. The result is widened to `i128` so the closed form never
//! overflows for an `i64` input.

/// Sums by walking the range once. O(n) time, O(1) space.
pub fn sum_to_n_iterative(n: i64) -> i128 {
    let mut sum: i128 = 0;
    for i in 1..=n {
        sum += i128::from(i);
    }
    sum
}

/// Gauss's closed form `n * (n + 1) / 2`. O(1).
pub fn sum_to_n_formula(n: i64) -> i128 {
    if n <= 0 {
        return 0;
    }
    let n = i128::from(n);
    n * (n + 1) / 2
}

/// Sums by recursing on `n - 1`. O(n) time and O(n) stack depth, so large
/// inputs will exhaust the stack.
pub fn sum_to_n_recursive(n: i64) -> i128 {
    if n <= 0 {
        return 0;
    }
    i128::from(n) + sum_to_n_recursive(n - 1)
}

use num_bigint::BigUint;

/// `n!` computed iteratively; never overflows.
pub fn factorial(n: u32) -> BigUint {
    (2..=n).fold(BigUint::from(1u32), |acc, k| acc * k)
}

/// `n!` computed by direct recursion. Stack depth grows with `n`.
pub fn factorial_recursive(n: u32) -> BigUint {
    match n {
        0 | 1 => BigUint::from(1u32),
        _ => factorial_recursive(n - 1) * n,
    }
}

/// `n!` as a `u64`, or `None` once it no longer fits (n > 20).
pub fn checked_factorial(n: u32) -> Option<u64> {
    (2..=u64::from(n)).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

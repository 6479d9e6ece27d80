//! Naive recursive Fibonacci.

/// Compute the `n`th Fibonacci number by direct recursion.
///
/// Runs in exponential time; that blowup is what the benchmark measures.
/// The result overflows `u64` past `n = 93`, far beyond anything this
/// recursion finishes in practice.
pub fn fibonacci(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}

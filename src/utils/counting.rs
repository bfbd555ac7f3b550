use log::debug;

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Number of distinct full groupings of an expression with `operators` binary operators.
///
/// Returns `None` when the count overflows `u128`.
pub fn catalan(operators: usize) -> Option<u128> {
    let mut count: u128 = 1;
    for k in 0..operators {
        // C(k+1) = C(k) * 2(2k+1) / (k+2); the divisor is cancelled before multiplying
        let k = k as u128;
        let divisor = k + 2;
        let common = gcd(count, divisor);
        let factor = 2 * (2 * k + 1) / (divisor / common);
        count = (count / common).checked_mul(factor)?;
    }
    debug!("Catalan number for {} operators: {}", operators, count);
    Some(count)
}

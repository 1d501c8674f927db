//! Integer exercises: primality, GCD/LCM, swap.

/// Trial division by odd integers up to the integer square root.
pub fn is_prime(n: i32) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    // divisor <= n / divisor is divisor <= floor(sqrt(n)) without overflow
    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Primes in the inclusive range `start..=end`; empty when `start > end`.
pub fn primes_in_range(start: i32, end: i32) -> Vec<i32> {
    (start..=end).filter(|&n| is_prime(n)).collect()
}

/// Euclid's algorithm on magnitudes. The result is never negative;
/// `gcd(0, 0) == 0` and `gcd(i32::MIN, 0) == 2^31`.
pub fn gcd(a: i32, b: i32) -> i64 {
    i64::from(euclid(a.unsigned_abs(), b.unsigned_abs()))
}

fn euclid(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `|a * b| / gcd(a, b)`, multiplied in 64 bits so no `i32` pair overflows.
/// Zero when either input is zero.
pub fn lcm(a: i32, b: i32) -> i64 {
    let (a, b) = (a.unsigned_abs(), b.unsigned_abs());
    if a == 0 || b == 0 {
        return 0;
    }
    let product = u64::from(a) * u64::from(b) / u64::from(euclid(a, b));
    // |a|, |b| <= 2^31, so the product is at most 2^62
    i64::try_from(product).unwrap_or(i64::MAX)
}

/// Exchanges two integers through mutable references.
pub fn swap(a: &mut i32, b: &mut i32) {
    let temp = *a;
    *a = *b;
    *b = temp;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_small_numbers_when_testing_primality_then_matches_known_primes() {
        let primes: Vec<i32> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(!is_prime(-7));
        assert!(!is_prime(1));
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(is_prime(i32::MAX));
    }

    #[test]
    fn given_range_when_listing_primes_then_bounds_are_inclusive() {
        assert_eq!(primes_in_range(10, 23), vec![11, 13, 17, 19, 23]);
        assert!(primes_in_range(20, 10).is_empty());
    }

    #[test]
    fn given_pairs_when_computing_gcd_then_uses_euclid() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(18, 48), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(-12, 8), 4);
    }

    #[test]
    fn given_most_negative_input_when_computing_gcd_then_no_overflow() {
        assert_eq!(gcd(i32::MIN, 0), 1 << 31);
        assert_eq!(gcd(i32::MIN, -1), 1);
        assert_eq!(gcd(i32::MIN, i32::MIN), 1 << 31);
        assert_eq!(lcm(i32::MIN, -1), 1 << 31);
        assert_eq!(lcm(i32::MIN, i32::MAX), (1 << 31) * i64::from(i32::MAX));
    }

    #[test]
    fn given_pairs_when_computing_lcm_then_widens_before_multiplying() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(21, 6), 42);
        assert_eq!(lcm(0, 5), 0);
        assert_eq!(lcm(i32::MAX, i32::MAX - 1), i64::from(i32::MAX) * i64::from(i32::MAX - 1));
    }

    #[test]
    fn given_two_values_when_swapping_then_exchanged() {
        let (mut a, mut b) = (3, -8);
        swap(&mut a, &mut b);
        assert_eq!((a, b), (-8, 3));
    }
}

//! Pure algorithm exercises over primitives and the domain containers.

pub mod brackets;
pub mod frequency;
pub mod number;
pub mod search;
pub mod sort;
pub mod text;

pub use brackets::are_parentheses_balanced;
pub use frequency::frequencies;
pub use number::{gcd, is_prime, lcm, primes_in_range, swap};
pub use search::{binary_search_iterative, binary_search_recursive};
pub use sort::bubble_sort;
pub use text::is_palindrome;

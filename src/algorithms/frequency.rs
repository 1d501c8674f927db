use itertools::Itertools;

/// Each distinct value with its number of occurrences, in order of first
/// appearance.
pub fn frequencies(values: &[i32]) -> Vec<(i32, usize)> {
    let counts = values.iter().counts();
    values
        .iter()
        .unique()
        .map(|value| (*value, counts[value]))
        .collect()
}

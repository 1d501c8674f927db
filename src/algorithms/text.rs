/// Palindrome check that ignores spaces and letter case.
///
/// Only the space character is dropped; other punctuation counts.
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: Vec<char> = text
        .chars()
        .filter(|&c| c != ' ')
        .flat_map(char::to_lowercase)
        .collect();

    let (mut left, mut right) = (0, cleaned.len());
    while left + 1 < right {
        right -= 1;
        if cleaned[left] != cleaned[right] {
            return false;
        }
        left += 1;
    }
    true
}

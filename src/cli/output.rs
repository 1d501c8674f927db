//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use itertools::Itertools;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print failure status (red X)
pub fn failure(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✗".red(), msg);
}

/// Print labelled value (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Space-separated values, or "(none)".
pub fn values(values: &[i32]) -> String {
    if values.is_empty() {
        return "(none)".to_string();
    }
    values.iter().join(" ")
}

/// "found at index N" / "not found"
pub fn position(found: Option<usize>) -> String {
    match found {
        Some(index) => format!("found at index {index}"),
        None => "not found".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_values_when_formatting_then_space_separated() {
        assert_eq!(values(&[1, -2, 3]), "1 -2 3");
        assert_eq!(values(&[]), "(none)");
    }

    #[test]
    fn given_search_result_when_formatting_then_describes_position() {
        assert_eq!(position(Some(3)), "found at index 3");
        assert_eq!(position(None), "not found");
    }
}

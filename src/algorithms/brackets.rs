use tracing::trace;

use crate::domain::Stack;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bracket {
    Round,
    Curly,
    Square,
}

impl Bracket {
    fn opening(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Self::Round),
            '{' => Some(Self::Curly),
            '[' => Some(Self::Square),
            _ => None,
        }
    }

    fn closing(ch: char) -> Option<Self> {
        match ch {
            ')' => Some(Self::Round),
            '}' => Some(Self::Curly),
            ']' => Some(Self::Square),
            _ => None,
        }
    }

    // stack slots hold i32
    fn code(self) -> i32 {
        self as i32
    }
}

/// Checks that every `(`, `{` and `[` is closed by its own kind, innermost
/// first. Other characters are ignored; the empty string is balanced.
pub fn are_parentheses_balanced(expr: &str) -> bool {
    // one slot per char: pushes can never overflow
    let mut openers = Stack::with_capacity(expr.chars().count());

    for ch in expr.chars() {
        if let Some(open) = Bracket::opening(ch) {
            if openers.push(open.code()).is_err() {
                return false;
            }
        } else if let Some(close) = Bracket::closing(ch) {
            match openers.pop() {
                Ok(code) if code == close.code() => {}
                Ok(_) | Err(_) => {
                    trace!(%ch, "unmatched closing bracket");
                    return false;
                }
            }
        }
    }

    openers.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("{[()]}", true)]
    #[case("", true)]
    #[case("()[]{}", true)]
    #[case("a * (b + [c - d]) / {e}", true)]
    #[case("{[(])}", false)]
    #[case("((", false)]
    #[case("())", false)]
    #[case(")(", false)]
    #[case("]", false)]
    fn given_expression_when_checking_brackets_then_matches_pairs(
        #[case] expr: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(are_parentheses_balanced(expr), expected, "expr: {expr:?}");
    }
}

//! Interactive numbered menu over any reader/writer pair.
//!
//! Input is consumed token by token, so `48 18` on one line and `48\n18` on
//! two lines are read the same way. End of input leaves the menu.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::services::ExerciseService;

/// Upper bound for "number of elements" prompts.
pub const MAX_ELEMENTS: i32 = 1000;

const MENU: &str = "\
========================================
Intermediate Problems - Solution Demo
========================================
1.  Prime Numbers in Range
2.  GCD and LCM
8.  Binary Search
9.  Bubble Sort
15. Palindrome String
18. Swap Using Pointers
20. Frequency of Elements
0.  Exit
========================================";

/// Run the menu until `0` or end of input.
#[instrument(skip_all)]
pub fn run_menu<R: BufRead, W: Write>(
    input: R,
    output: W,
    exercises: &ExerciseService,
) -> io::Result<()> {
    let mut session = Session::new(input, output);
    writeln!(session.output, "Intermediate C Programming Solutions")?;
    writeln!(session.output, "Demonstrating various problem solutions")?;

    loop {
        writeln!(session.output, "\n{MENU}")?;
        let Some(choice) = session.next_token("Enter your choice: ")? else {
            debug!("input closed, leaving menu");
            return Ok(());
        };
        debug!(%choice, "menu choice");

        let finished = match choice.parse::<i32>() {
            Ok(1) => session.primes(exercises)?,
            Ok(2) => session.gcd_lcm(exercises)?,
            Ok(8) => session.binary_search(exercises)?,
            Ok(9) => session.bubble_sort(exercises)?,
            Ok(15) => session.palindrome(exercises)?,
            Ok(18) => session.swap(exercises)?,
            Ok(20) => session.frequency(exercises)?,
            Ok(0) => {
                writeln!(session.output, "\nThank you for using the solution demo!")?;
                return Ok(());
            }
            _ => {
                writeln!(session.output, "\nInvalid choice! Please try again.")?;
                Step::Done
            }
        };
        if finished == Step::Eof {
            return Ok(());
        }
    }
}

/// Whether an exercise ran to completion or hit end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Done,
    Eof,
}

struct Session<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Next whitespace-separated token; `None` at end of input.
    fn next_token(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.pending.is_empty() {
            self.prompt(prompt)?;
        }
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Next integer, re-prompting on anything that does not parse.
    fn next_int(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        let mut prompt = prompt;
        loop {
            let Some(token) = self.next_token(prompt)? else {
                return Ok(None);
            };
            match token.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    writeln!(self.output, "'{token}' is not an integer")?;
                    self.pending.clear();
                    prompt = "Try again: ";
                }
            }
        }
    }

    /// Rest of the current line, or the next full line when nothing is pending.
    fn next_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !self.pending.is_empty() {
            return Ok(Some(self.pending.drain(..).join(" ")));
        }
        self.prompt(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Element count followed by that many integers.
    fn next_values(&mut self, label: &str) -> io::Result<Option<Vec<i32>>> {
        let Some(count) = self.next_int("Enter number of elements: ")? else {
            return Ok(None);
        };
        if !(1..=MAX_ELEMENTS).contains(&count) {
            writeln!(
                self.output,
                "Number of elements must be between 1 and {MAX_ELEMENTS}"
            )?;
            return Ok(Some(Vec::new()));
        }
        let mut values = Vec::with_capacity(count as usize);
        let prompt = format!("Enter {count} {label}integers:\n");
        for i in 0..count {
            let prompt = if i == 0 { prompt.as_str() } else { "" };
            match self.next_int(prompt)? {
                Some(value) => values.push(value),
                None => return Ok(None),
            }
        }
        Ok(Some(values))
    }

    fn primes(&mut self, exercises: &ExerciseService) -> io::Result<Step> {
        writeln!(self.output, "\n=== Solution 1: Prime Numbers in Range ===")?;
        let Some(start) = self.next_int("Enter start of range: ")? else {
            return Ok(Step::Eof);
        };
        let Some(end) = self.next_int("Enter end of range: ")? else {
            return Ok(Step::Eof);
        };
        let report = exercises.primes(start, end);
        writeln!(self.output, "Prime numbers between {start} and {end}:")?;
        writeln!(self.output, "{}", report.primes.iter().join(" "))?;
        writeln!(self.output, "Total primes found: {}", report.primes.len())?;
        Ok(Step::Done)
    }

    fn gcd_lcm(&mut self, exercises: &ExerciseService) -> io::Result<Step> {
        writeln!(self.output, "\n=== Solution 2: GCD and LCM ===")?;
        let Some(a) = self.next_int("Enter two numbers: ")? else {
            return Ok(Step::Eof);
        };
        let Some(b) = self.next_int("")? else {
            return Ok(Step::Eof);
        };
        let report = exercises.gcd_lcm(a, b);
        writeln!(self.output, "GCD: {}", report.gcd)?;
        writeln!(self.output, "LCM: {}", report.lcm)?;
        Ok(Step::Done)
    }

    fn binary_search(&mut self, exercises: &ExerciseService) -> io::Result<Step> {
        writeln!(self.output, "\n=== Solution 8: Binary Search ===")?;
        let Some(values) = self.next_values("sorted ")? else {
            return Ok(Step::Eof);
        };
        if values.is_empty() {
            return Ok(Step::Done);
        }
        let Some(target) = self.next_int("Enter number to search: ")? else {
            return Ok(Step::Eof);
        };
        match exercises.binary_search(&values, target) {
            Ok(report) => {
                writeln!(self.output, "Iterative search: {}", describe(report.iterative))?;
                writeln!(self.output, "Recursive search: {}", describe(report.recursive))?;
            }
            Err(e) => writeln!(self.output, "error: {e}")?,
        }
        Ok(Step::Done)
    }

    fn bubble_sort(&mut self, exercises: &ExerciseService) -> io::Result<Step> {
        writeln!(self.output, "\n=== Solution 9: Bubble Sort ===")?;
        let Some(values) = self.next_values("")? else {
            return Ok(Step::Eof);
        };
        if values.is_empty() {
            return Ok(Step::Done);
        }
        let report = exercises.bubble_sort(&values);
        writeln!(self.output, "Original array: {}", report.original.iter().join(" "))?;
        writeln!(self.output, "Sorted array: {}", report.sorted.iter().join(" "))?;
        Ok(Step::Done)
    }

    fn palindrome(&mut self, exercises: &ExerciseService) -> io::Result<Step> {
        writeln!(self.output, "\n=== Solution 15: Palindrome String ===")?;
        let Some(text) = self.next_line("Enter a string: ")? else {
            return Ok(Step::Eof);
        };
        let report = exercises.palindrome(&text);
        let verdict = if report.is_palindrome {
            "a Palindrome"
        } else {
            "Not a Palindrome"
        };
        writeln!(self.output, "'{}' is {verdict}", report.text)?;
        Ok(Step::Done)
    }

    fn swap(&mut self, exercises: &ExerciseService) -> io::Result<Step> {
        writeln!(self.output, "\n=== Solution 18: Swap Using Pointers ===")?;
        let Some(a) = self.next_int("Enter two numbers: ")? else {
            return Ok(Step::Eof);
        };
        let Some(b) = self.next_int("")? else {
            return Ok(Step::Eof);
        };
        let report = exercises.swap(a, b);
        let (a, b) = report.before;
        writeln!(self.output, "Before swap: a = {a}, b = {b}")?;
        let (a, b) = report.after;
        writeln!(self.output, "After swap: a = {a}, b = {b}")?;
        Ok(Step::Done)
    }

    fn frequency(&mut self, exercises: &ExerciseService) -> io::Result<Step> {
        writeln!(self.output, "\n=== Solution 20: Frequency of Elements ===")?;
        let Some(values) = self.next_values("")? else {
            return Ok(Step::Eof);
        };
        if values.is_empty() {
            return Ok(Step::Done);
        }
        writeln!(self.output, "\nElement Frequency:")?;
        for (value, count) in exercises.frequency(&values).counts {
            writeln!(self.output, "{value}: {count}")?;
        }
        Ok(Step::Done)
    }
}

fn describe(found: Option<usize>) -> String {
    match found {
        Some(index) => format!("Found at index {index}"),
        None => "Not found".to_string(),
    }
}

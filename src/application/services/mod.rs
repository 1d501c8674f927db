//! Application services
//!
//! Concrete services that compose the containers and algorithms into
//! reports. Services never print; the CLI renders their reports.

mod demo;
mod exercise;

pub use demo::{
    sample_tree, DemoService, LinkedListReport, QueueReport, StackReport, TreeReport,
    BRACKET_SAMPLES,
};
pub use exercise::{
    ExerciseService, FrequencyReport, GcdLcmReport, PalindromeReport, PrimeReport, SearchReport,
    SortReport, SwapReport,
};

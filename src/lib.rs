//! Classic data structures and algorithm drills.
//!
//! Layout, leaf to root:
//! - [`domain`]: containers (linked list, arena chain, stack, queue, binary tree)
//! - [`algorithms`]: free functions over integers, slices and text
//! - [`application`]: demo and exercise services producing plain reports
//! - [`cli`]: clap front end, colored output and the numbered menu

pub mod algorithms;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

//! Command dispatch: parse results in, core calls, rendered reports out.

use std::env;
use std::io;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::algorithms::are_parentheses_balanced;
use crate::application::services::{
    DemoService, ExerciseService, LinkedListReport, QueueReport, StackReport, TreeReport,
};
use crate::cli::args::{Cli, Commands, ConfigCommands, DemoKind};
use crate::cli::menu::run_menu;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let exercises = ExerciseService::new();
    match &cli.command {
        Some(Commands::Primes { start, end }) => cmd_primes(&exercises, *start, *end),
        Some(Commands::Gcd { a, b }) => cmd_gcd(&exercises, *a, *b),
        Some(Commands::Search { target, values }) => cmd_search(&exercises, *target, values),
        Some(Commands::Sort { values }) => cmd_sort(&exercises, values),
        Some(Commands::Palindrome { text }) => cmd_palindrome(&exercises, &text.join(" ")),
        Some(Commands::Balanced { expr }) => cmd_balanced(expr),
        Some(Commands::Swap { a, b }) => cmd_swap(&exercises, *a, *b),
        Some(Commands::Frequency { values }) => cmd_frequency(&exercises, values),
        Some(Commands::Demo { kind }) => cmd_demo(cli, *kind),
        Some(Commands::Menu) => cmd_menu(&exercises),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::InvalidArgs(
            "no command given (see --help)".to_string(),
        )),
    }
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir
        .clone()
        .or_else(|| env::current_dir().ok())
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(config_dir(cli).as_deref())?;
    debug!(?settings, "settings loaded");
    Ok(settings)
}

#[instrument(skip(exercises))]
fn cmd_primes(exercises: &ExerciseService, start: i32, end: i32) -> CliResult<()> {
    let report = exercises.primes(start, end);
    output::action(
        &format!("Primes between {} and {}", report.start, report.end),
        &output::values(&report.primes),
    );
    output::detail(&format!("total primes found: {}", report.primes.len()));
    Ok(())
}

#[instrument(skip(exercises))]
fn cmd_gcd(exercises: &ExerciseService, a: i32, b: i32) -> CliResult<()> {
    let report = exercises.gcd_lcm(a, b);
    output::action("GCD", &report.gcd);
    output::action("LCM", &report.lcm);
    Ok(())
}

#[instrument(skip(exercises))]
fn cmd_search(exercises: &ExerciseService, target: i32, values: &[i32]) -> CliResult<()> {
    let report = exercises.binary_search(values, target)?;
    output::action("Iterative search", &output::position(report.iterative));
    output::action("Recursive search", &output::position(report.recursive));
    Ok(())
}

#[instrument(skip(exercises))]
fn cmd_sort(exercises: &ExerciseService, values: &[i32]) -> CliResult<()> {
    let report = exercises.bubble_sort(values);
    output::action("Original array", &output::values(&report.original));
    output::action("Sorted array", &output::values(&report.sorted));
    output::detail(&format!("passes: {}", report.passes));
    Ok(())
}

#[instrument(skip(exercises))]
fn cmd_palindrome(exercises: &ExerciseService, text: &str) -> CliResult<()> {
    let report = exercises.palindrome(text);
    if report.is_palindrome {
        output::success(&format!("'{}' is a palindrome", report.text));
    } else {
        output::failure(&format!("'{}' is not a palindrome", report.text));
    }
    Ok(())
}

#[instrument]
fn cmd_balanced(expr: &str) -> CliResult<()> {
    if are_parentheses_balanced(expr) {
        output::success(&format!("{expr} -> balanced"));
    } else {
        output::failure(&format!("{expr} -> not balanced"));
    }
    Ok(())
}

#[instrument(skip(exercises))]
fn cmd_swap(exercises: &ExerciseService, a: i32, b: i32) -> CliResult<()> {
    let report = exercises.swap(a, b);
    output::action(
        "Before swap",
        &format!("a = {}, b = {}", report.before.0, report.before.1),
    );
    output::action(
        "After swap",
        &format!("a = {}, b = {}", report.after.0, report.after.1),
    );
    Ok(())
}

#[instrument(skip(exercises))]
fn cmd_frequency(exercises: &ExerciseService, values: &[i32]) -> CliResult<()> {
    let report = exercises.frequency(values);
    output::header("Element frequency");
    for (value, count) in report.counts {
        output::detail(&format!("{value}: {count}"));
    }
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_demo(cli: &Cli, kind: DemoKind) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let demos = DemoService::new(&settings);

    if matches!(kind, DemoKind::List | DemoKind::All) {
        print_linked_list(&demos.linked_list()?);
    }
    if matches!(kind, DemoKind::Stack | DemoKind::All) {
        print_stack(&demos.stack()?);
    }
    if matches!(kind, DemoKind::Queue | DemoKind::All) {
        print_queue(&demos.queue()?);
    }
    if matches!(kind, DemoKind::Tree | DemoKind::All) {
        print_tree(&demos.binary_tree());
    }
    Ok(())
}

fn print_linked_list(report: &LinkedListReport) {
    output::header("=== Linked List Demo ===");
    output::action("After insertions", &output::values(&report.after_inserts));
    output::action(
        &format!("Searching for {}", report.search_target),
        &output::position(report.search_position),
    );
    output::action("Middle element", &report.middle);
    output::action("After reversing", &output::values(&report.reversed));
    output::action(
        "Reversed back (recursive)",
        &output::values(&report.reversed_back),
    );
    output::action(
        &format!("After deleting {}", report.deleted),
        &output::values(&report.after_delete),
    );
    output::action("Cycle in list", &report.has_cycle);
    output::action("Cycle after rewiring tail to head", &report.rewired_has_cycle);
}

fn print_stack(report: &StackReport) {
    output::header("=== Stack Demo ===");
    output::action("Stack (top to bottom)", &output::values(&report.after_pushes));
    output::action("Top element", &report.top);
    output::action("Popped", &report.popped);
    output::action("Stack (top to bottom)", &output::values(&report.after_pop));
    output::header("--- Balanced Parentheses Check ---");
    for (expr, balanced) in &report.bracket_checks {
        if *balanced {
            output::success(&format!("{expr} -> balanced"));
        } else {
            output::failure(&format!("{expr} -> not balanced"));
        }
    }
}

fn print_queue(report: &QueueReport) {
    output::header("=== Queue Demo ===");
    output::action("Queue (front to rear)", &output::values(&report.after_enqueues));
    output::action("Front element", &report.front);
    for value in &report.dequeued {
        output::action("Dequeued", value);
    }
    output::action("Queue (front to rear)", &output::values(&report.after_dequeues));
}

fn print_tree(report: &TreeReport) {
    output::header("=== Binary Tree Demo ===");
    output::info(report.rendered.trim_end());
    output::action("Inorder traversal", &output::values(&report.in_order));
    output::action("Preorder traversal", &output::values(&report.pre_order));
    output::action("Postorder traversal", &output::values(&report.post_order));
    output::action("Level order traversal", &output::values(&report.level_order));
    output::action("Height", &report.height);
    output::detail(&format!("released {} nodes", report.released));
}

#[instrument(skip(exercises))]
fn cmd_menu(exercises: &ExerciseService) -> CliResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(stdin.lock(), stdout.lock(), exercises)
        .map_err(|e| CliError::io("menu session", e))
}

#[instrument(skip(cli))]
fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("Global", &path.display()),
                None => output::action("Global", &"(no home directory)"),
            }
            if let Some(dir) = config_dir(cli) {
                output::action("Local", &local_config_path(&dir).display());
            }
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| {
                CliError::InvalidArgs("cannot determine config directory".to_string())
            })?;
            Settings::write_template(&path, *force)?;
            output::success(&format!("created {}", path.display()));
        }
    }
    Ok(())
}

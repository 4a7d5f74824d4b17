//! iolift CLI
//!
//! Migrates `System.out.println(` to `IO.println(` in live Java code.

use std::path::Path;

use iolift::commands::{normalize_notebooks, region_listing, rewrite_java, rewrite_notebooks};
use iolift::config::{parse_run_args, ParsedArgs, RunConfig};
use iolift::report::BatchReport;

type BatchCommand = fn(&str, &RunConfig) -> BatchReport;

fn main() {
    iolift::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "rewrite" => run_batch_command("rewrite", &args[2..], rewrite_java),
        "notebook" => run_batch_command("notebook", &args[2..], rewrite_notebooks),
        "normalize" => run_batch_command("normalize", &args[2..], normalize_notebooks),
        "regions" => {
            if args.len() < 3 {
                eprintln!("Usage: iolift regions <file.java>");
                std::process::exit(1);
            }
            match region_listing(Path::new(&args[2])) {
                Ok(listing) => print!("{listing}"),
                Err(e) => {
                    eprintln!("error: {}: {e}", args[2]);
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("iolift {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Parse arguments, run `batch` over each target, print the summaries, and
/// exit with status 1 if any unit failed.
fn run_batch_command(name: &str, args: &[String], batch: BatchCommand) {
    let (config, paths) = match parse_run_args(args) {
        Ok(ParsedArgs::Run { config, paths }) => (config, paths),
        Ok(ParsedArgs::Help) => {
            print_batch_help(name);
            return;
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Run 'iolift {name} --help' for usage");
            std::process::exit(1);
        }
    };

    let mut failed = false;
    for (i, path) in paths.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let report = batch(path, &config);
        print!("{report}");
        failed |= report.has_errors();
    }

    if failed {
        std::process::exit(1);
    }
}

fn print_batch_help(name: &str) {
    let (what, ext) = match name {
        "rewrite" => ("Rewrite System.out.println( to IO.println( in Java files", "java"),
        "notebook" => (
            "Rewrite System.out.println( to IO.println( in notebook code cells",
            "ijnb",
        ),
        _ => (
            "Give notebook code cells an execution_count and an outputs array",
            "ijnb",
        ),
    };
    println!("{what}");
    println!();
    println!("Usage: iolift {name} [options] [paths...]");
    println!();
    println!("Arguments:");
    println!("  paths        .{ext} files or directories (default: .)");
    println!();
    println!("Options:");
    println!("  --check      Report what would change without writing (alias: --dry-run)");
    if name == "rewrite" {
        println!("  --diff       Show a line diff instead of writing");
    } else {
        println!("  --diff       Show a line diff instead of writing (approximate when the");
        println!("               notebook was not already 2-space indented JSON)");
    }
    println!("  --no-ignore  Ignore .ioliftignore files");
    println!("  --help       Show this help message");
    println!();
    println!("Ignore files:");
    println!("  A .ioliftignore file at a directory target excludes matching paths.");
    println!("  Patterns support * (single directory) and ** (any directories).");
    println!("  Always skipped: .git, node_modules, .vscode, out, build, target");
    if name == "rewrite" {
        println!();
        println!("Files named IO.java are never rewritten. Each directory with a");
        println!("rewritten file gets an IO.java helper if it has none.");
    }
}

fn print_usage() {
    println!("iolift - migrate System.out.println to IO.println");
    println!();
    println!("Usage: iolift <command> [options]");
    println!();
    println!("Commands:");
    println!("  rewrite [paths...]     Rewrite .java files (default: .)");
    println!("  notebook [paths...]    Rewrite code cells of .ijnb notebooks");
    println!("  normalize [paths...]   Fill in execution_count/outputs of notebook code cells");
    println!("  regions <file>         Show how a file is split into code, comments and literals");
    println!("  help                   Show this help message");
    println!("  version                Show version information");
    println!();
    println!("Run 'iolift <command> --help' for command options.");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=iolift=debug) for trace output on stderr.");
}

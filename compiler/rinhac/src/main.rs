//! Rinha CLI
//!
//! Runs programs given as JSON ASTs.

use std::path::Path;

use rinhac::{init_tracing, run_path, RunOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: rinha run <file.json> [--max-depth=N] [--print-result]");
                std::process::exit(1);
            }

            let mut options = RunOptions::default();
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if let Some(depth) = arg.strip_prefix("--max-depth=") {
                    match depth.parse() {
                        Ok(depth) => options.max_depth = Some(depth),
                        Err(_) => {
                            eprintln!("error: invalid value for --max-depth: '{depth}'");
                            std::process::exit(1);
                        }
                    }
                } else if arg == "--print-result" {
                    options.print_result = true;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    std::process::exit(1);
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: rinha run <file.json> [--max-depth=N] [--print-result]");
                std::process::exit(1);
            };

            run(path, &options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Rinha {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a file path, try to run it
            if Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            {
                run(command, &RunOptions::default());
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn run(path: &str, options: &RunOptions) {
    if let Err(err) = run_path(Path::new(path), options) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Rinha interpreter");
    println!();
    println!("Usage: rinha <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.json>      Evaluate a program given as a JSON AST");
    println!("  <file.json>          Same as `run <file.json>`");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --max-depth=N        Fail once closure calls nest deeper than N");
    println!("  --print-result       Print the program's final value");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=rinha_eval=debug) to enable logging on stderr.");
}

//! tpy CLI
//!
//! Runs program trees stored as JSON.

use tpyc::commands::{parse_run_options, run_file};

fn main() {
    tpyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => {
            let (options, positional) = match parse_run_options(&args[2..]) {
                Ok(parsed) => parsed,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    print_run_usage();
                    std::process::exit(1);
                }
            };

            let Some(path) = positional.first() else {
                eprintln!("error: missing program path");
                print_run_usage();
                std::process::exit(1);
            };

            run_file(path, &options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("tpy {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_run_usage() {
    eprintln!("Usage: tpy run <program.json | -> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --recursion-limit=<n>       Maximum nested calls (default: 1000)");
    eprintln!("  --no-call-result-binding    Don't bind call results to the function's name");
}

fn print_usage() {
    println!("tpy - tree-walking evaluator for tpy programs");
    println!();
    println!("Usage: tpy <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <program.json>   Evaluate a program tree ('-' reads stdin)");
    println!("  help                 Show this message");
    println!("  version              Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=tpy_eval=trace) to trace evaluation.");
}

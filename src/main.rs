use std::{
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use llp::{calculate, config::config::Config, render_error, Calculation};

/// llp parses and evaluates one line of signed integer arithmetic
/// (`+ - * /`, negation and parentheses) and prints its infix and postfix forms.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum number of tokens, pending operators or operands for one line.
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Longest accepted input line in bytes.
    #[arg(short, long)]
    max_line_length: Option<usize>,

    /// Expression to evaluate. Lines are read from stdin when omitted.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let config = Config::new(args.capacity, args.max_line_length);

    if let Some(expression) = args.expression {
        return exit_code(run_line(&expression, &config));
    }

    let mut all_ok = true;

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            }
        };

        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        all_ok &= run_line(line, &config);
    }

    exit_code(all_ok)
}

fn run_line(source: &str, config: &Config) -> bool {
    match calculate(source, config) {
        Ok(calculation) => {
            print_calculation(source, &calculation);
            true
        }
        Err(error) => {
            eprintln!("{}", render_error(&error, source));
            false
        }
    }
}

fn print_calculation(source: &str, calculation: &Calculation) {
    println!("{}", calculation.infix());
    println!();
    println!("{} = {}", source, calculation.value);
    println!("{} = {}", calculation.postfix(), calculation.value);
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

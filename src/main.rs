use anyhow::{Context, Result};
use clap::Parser;
use mathex::{host, tokenize, Program, Value};
use std::process;

/// exit code for a true formula
const TRUE: i32 = 0;
/// exit code for a false formula
const FALSE: i32 = 1;
/// exit code for an invalid formula or invalid arguments
const ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "mathex")]
#[command(about = "Check values against a rule formula")]
#[command(version)]
struct Cli {
    /// Print the tokens and the postfix program to stderr
    #[arg(short, long)]
    verbose: bool,

    /// The formula, using A, B, C, ... for the arguments
    expression: String,

    /// Values bound in order to A, B, C, ...
    #[arg(allow_negative_numbers = true)]
    arguments: Vec<String>,
}

/// Parse a command line argument as a number, keeping it as text otherwise
fn to_value(argument: &str) -> Value {
    argument
        .trim()
        .parse::<f64>()
        .map_or_else(|_| Value::from(argument), Value::from)
}

fn trace(expression: &str, count: usize) -> Result<()> {
    let tokens = tokenize(expression).context("tokenization failed")?;
    let tokens: Vec<_> = tokens.iter().map(ToString::to_string).collect();
    eprintln!("tokens: {}", tokens.join(", "));
    let program = Program::compile(expression, count).context("compilation failed")?;
    eprintln!("program: {}", program);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let values: Vec<Value> = cli.arguments.iter().map(|a| to_value(a)).collect();

    if cli.verbose {
        if let Err(e) = trace(&cli.expression, values.len()) {
            eprintln!("{:#}", e);
        }
    }

    let code = match host::evaluate(&cli.expression, &values) {
        (1, _) => {
            println!("{} : TRUE", cli.expression);
            TRUE
        }
        (0, _) => {
            println!("{} : FALSE", cli.expression);
            FALSE
        }
        (_, message) => {
            eprintln!(
                "{}",
                message.unwrap_or_else(|| "evaluation failed".to_string())
            );
            ERROR
        }
    };
    process::exit(code);
}

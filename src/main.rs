use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use exprcalc::{
    format_result, get_result,
    interpreter::{evaluator::core::Context, token::render_tokens},
};
use log::debug;

/// exprcalc evaluates a single arithmetic expression and prints the lexed
/// tokens followed by the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, override_usage = "exprcalc \"<expression>\"")]
struct Args {
    /// Defines a variable before evaluation, e.g. `-D x=5`. May be repeated.
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_definition)]
    defines: Vec<(String, f64)>,

    /// Removes a variable before evaluation, e.g. `-U e`. May be repeated.
    #[arg(short = 'U', long = "undefine", value_name = "NAME")]
    undefines: Vec<String>,

    /// The expression to evaluate. A leading `-` is part of the expression.
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

/// Parses a `NAME=VALUE` definition.
fn parse_definition(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s.split_once('=')
                         .ok_or_else(|| format!("expected NAME=VALUE, found '{s}'"))?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("variable names may only contain letters, found '{name}'"));
    }
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.to_string(), value))
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            print!("{}", e.render());
            return ExitCode::SUCCESS;
        },
        Err(e) => {
            eprintln!("{}", e.render());
            return ExitCode::FAILURE;
        },
    };

    let mut context = Context::new();
    for name in &args.undefines {
        context.unset_variable(name);
    }
    for (name, value) in args.defines {
        debug!("defining {name} = {value}");
        context.set_variable(name, value);
    }

    match get_result(&args.expression, &context) {
        Ok(evaluation) => {
            println!("{}", render_tokens(&evaluation.tokens));
            println!("{}", format_result(evaluation.result));
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

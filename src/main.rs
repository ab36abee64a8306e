use anyhow::Context;
use clap::Parser;
use formula_calc::logging::{self, LogLevel};
use formula_calc::variables::parse_assignment;
use formula_calc::{calculate, Session, Slider, Variables};

use std::io::Write;

/// Evaluates formulas with single-letter variables
#[derive(Parser, Debug)]
#[command(name = "formula_calc", version, about, long_about = None)]
struct Args {
    /// Formula to evaluate once; starts an interactive session when omitted
    #[arg(value_name = "FORMULA")]
    formula: Option<String>,

    /// Variable value, e.g. `--set a=5`
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_set)]
    assignments: Vec<(char, f64)>,

    /// Lowest slider value, not negative
    #[arg(long, default_value_t = 0.0)]
    min: f64,

    /// Highest slider value
    #[arg(long, default_value_t = 100.0)]
    max: f64,

    /// Slider granularity
    #[arg(long, default_value_t = 1.0)]
    step: f64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_set(text: &str) -> Result<(char, f64), String> {
    parse_assignment(text).map_err(|error| error.to_string())
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

fn show(session: &Session) {
    let variables: Vec<String> = session
        .variables()
        .iter()
        .map(|(name, value)| format!("{name} = {value}"))
        .collect();
    if !variables.is_empty() {
        println!("{}", variables.join(", "));
    }
}

fn repl(mut session: Session) -> anyhow::Result<()> {
    prompt()?;

    for line in std::io::stdin().lines() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            break;
        }

        let outcome = if line.contains('=') {
            parse_assignment(&line).and_then(|(name, value)| session.set_variable(name, value))
        } else {
            session.set_formula(&line).and_then(|result| result)
        };

        show(&session);
        match outcome {
            Ok(result) => println!("{result}"),
            Err(e) => println!("Error, {e}"),
        }

        prompt()?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(LogLevel::from_verbose(args.verbose));

    let slider = Slider::new(args.min, args.max, args.step).context("bad --min/--max/--step")?;

    match args.formula {
        Some(formula) => {
            let variables = slider.snap_all(args.assignments);
            let result = calculate(&formula, &variables)
                .with_context(|| format!("failed to evaluate '{formula}'"))?;
            println!("{result}");
            Ok(())
        },
        None => {
            let variables: Variables = args.assignments.into_iter().collect();
            repl(Session::with_variables(slider, variables))
        },
    }
}

mod cli;

use std::{process, time::Instant};

use anyhow::Context;
use clap::Parser as _;

use cli::{Cli, Command};
use reckon::{strip_whitespace, tokenize, Error, Limits, Parser};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let now = Instant::now();

    match run(&cli) {
        Ok(true) => (),
        Ok(false) => process::exit(1),
        Err(why) => {
            eprintln!("{why:?}");
            process::exit(1);
        }
    }

    log::debug!("finished in {:.2?}", now.elapsed());
}

/// Returns `Ok(false)` if an expression failed to evaluate.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let limits = cli.limits();

    match &cli.command {
        Command::Eval { expression } => Ok(eval_line(expression, &limits, false)),
        Command::File { file } => {
            let src = std::fs::read_to_string(file)
                .with_context(|| format!("failed to read {}", file.display()))?;

            let mut ok = true;
            for line in src.lines().map(str::trim).filter(|l| !l.is_empty()) {
                ok &= eval_line(line, &limits, true);
            }
            Ok(ok)
        }
        Command::Tokens { expression } => {
            let src = strip_whitespace(expression);
            match tokenize(&src) {
                Ok(tokens) => {
                    for token in tokens {
                        if let Some(kind) = token.kind() {
                            println!("{kind:?} {}", token.text());
                        }
                    }
                    Ok(true)
                }
                Err(why) => {
                    report(expression, &why);
                    Ok(false)
                }
            }
        }
        Command::Ast { expression } => {
            let src = strip_whitespace(expression);
            let ast = tokenize(&src).and_then(|tokens| {
                Parser::with_max_depth(&tokens, limits.max_depth).parse_complete()
            });
            match ast {
                Ok(ast) => {
                    println!("{ast:#?}");
                    Ok(true)
                }
                Err(why) => {
                    report(expression, &why);
                    Ok(false)
                }
            }
        }
    }
}

fn eval_line(expression: &str, limits: &Limits, echo: bool) -> bool {
    match reckon::evaluate_with(expression, limits) {
        Ok(value) if echo => {
            println!("{expression} = {value}");
            true
        }
        Ok(value) => {
            println!("{value}");
            true
        }
        Err(why) => {
            report(expression, &why);
            false
        }
    }
}

fn report(expression: &str, why: &Error) {
    log::warn!("`{expression}` failed: {why}");
    eprintln!("{expression}: {}: {why}", why.code());
}

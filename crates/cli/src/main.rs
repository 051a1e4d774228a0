mod batch;
mod command;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use log::info;
use quote_manager::{QuoteManager, QuoteManagerConfig};
use quoter_clock::SystemClock;

use crate::command::Command;

fn print_help() {
    eprintln!(
        r#"Quoter - live quote books with best-quote lookup and trade execution

USAGE:
    quoter [OPTIONS] <COMMAND> [ARGS]

COMMANDS:
    AddOrUpdateQuote <QUOTE_JSON>
    RemoveQuote <QUOTE_ID>
    RemoveAllQuotes <SYMBOL>
    GetBestQuoteWithAvailableVolume <SYMBOL>
    ExecuteTrade <SYMBOL> <VOLUME>
    batch                         Read one command per line from stdin

OPTIONS:
    --config <PATH>     Load price policy and seed quotes from a JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: warn)

EXAMPLES:
    quoter ExecuteTrade EURUSD 100 --config quotes.json

    quoter AddOrUpdateQuote '{{"Symbol":"EURUSD","Price":1.1,"AvailableVolume":100,"ExpirationDate":"2030-01-01T00:00:00Z"}}'
"#
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut config_path: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(ExitCode::SUCCESS);
            }
            "--config" | "-c" => {
                i += 1;
                let path = args.get(i).ok_or("--config requires a path argument")?;
                config_path = Some(path.clone());
            }
            _ => positional.push(args[i].clone()),
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            QuoteManagerConfig::from_file(&path)?
        }
        None => QuoteManagerConfig::default(),
    };
    let mut manager = QuoteManager::from_config(&config, Arc::new(SystemClock::new()))?;

    if positional.first().map(String::as_str) == Some("batch") {
        if positional.len() != 1 {
            return Err("batch takes no arguments".into());
        }
        let failures = batch::run_batch(
            &mut manager,
            io::stdin().lock(),
            io::stdout().lock(),
            io::stderr().lock(),
        )?;
        return Ok(if failures == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    if positional.is_empty() {
        print_help();
        return Ok(ExitCode::FAILURE);
    }

    let command = Command::parse(&positional)?;
    match command.execute(&mut manager).and_then(|outcome| outcome.render()) {
        Ok(Some(text)) => println!("{}", text),
        Ok(None) => {}
        Err(e) if e.is_not_found() => eprintln!("Error: {}", e),
        Err(e) => return Err(e.into()),
    }
    Ok(ExitCode::SUCCESS)
}

//! Text commands mapped onto quote manager calls

use quote_manager::{Clock, Quote, QuoteError, QuoteId, QuoteManager, TradeResult, Volume};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Missing arguments")]
    MissingArguments,

    #[error("'{0}' is not a recognized command")]
    UnknownCommand(String),

    #[error("{command} expects {expected} argument(s), got {got}")]
    WrongArgumentCount {
        command: String,
        expected: usize,
        got: usize,
    },

    #[error("Invalid quote: {0}")]
    InvalidQuote(String),

    #[error("Invalid quote id: {0}")]
    InvalidId(String),

    #[error("Invalid volume requested: {0}")]
    InvalidVolume(String),

    #[error(transparent)]
    Rejected(#[from] QuoteError),

    #[error("Quote {0} not found")]
    QuoteNotFound(QuoteId),

    #[error("Symbol {0} not found")]
    SymbolNotFound(String),

    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CommandError {
    /// Unknown quote or symbol, reported but not treated as a failure
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CommandError::QuoteNotFound(_) | CommandError::SymbolNotFound(_)
        )
    }
}

/// One call on the quote manager
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddOrUpdateQuote(Quote),
    RemoveQuote(QuoteId),
    RemoveAllQuotes(String),
    GetBestQuoteWithAvailableVolume(String),
    ExecuteTrade { symbol: String, volume: Volume },
}

/// What a command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Done,
    BestQuote(Option<Quote>),
    Trade(TradeResult),
}

impl Command {
    /// Parse `<COMMAND> [ARGS]` as split by the shell
    pub fn parse(args: &[String]) -> Result<Self, CommandError> {
        let (name, rest) = args.split_first().ok_or(CommandError::MissingArguments)?;
        let rest: Vec<&str> = rest.iter().map(String::as_str).collect();
        Self::from_parts(name, &rest)
    }

    /// Parse one line of batch input
    ///
    /// Everything after `AddOrUpdateQuote` is taken as the quote JSON, so it
    /// may contain spaces. Other commands split on whitespace.
    pub fn parse_line(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::MissingArguments);
        }
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let rest = rest.trim();

        let args: Vec<&str> = if name == "AddOrUpdateQuote" {
            if rest.is_empty() { vec![] } else { vec![rest] }
        } else {
            rest.split_whitespace().collect()
        };
        Self::from_parts(name, &args)
    }

    fn from_parts(name: &str, args: &[&str]) -> Result<Self, CommandError> {
        let expect = |expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(CommandError::WrongArgumentCount {
                    command: name.to_string(),
                    expected,
                    got: args.len(),
                })
            }
        };

        match name {
            "AddOrUpdateQuote" => {
                expect(1)?;
                let quote: Quote = serde_json::from_str(args[0])
                    .map_err(|e| CommandError::InvalidQuote(e.to_string()))?;
                Ok(Command::AddOrUpdateQuote(quote))
            }
            "RemoveQuote" => {
                expect(1)?;
                let id = Uuid::parse_str(args[0])
                    .map_err(|_| CommandError::InvalidId(args[0].to_string()))?;
                Ok(Command::RemoveQuote(id))
            }
            "RemoveAllQuotes" => {
                expect(1)?;
                Ok(Command::RemoveAllQuotes(args[0].to_string()))
            }
            "GetBestQuoteWithAvailableVolume" => {
                expect(1)?;
                Ok(Command::GetBestQuoteWithAvailableVolume(args[0].to_string()))
            }
            "ExecuteTrade" => {
                expect(2)?;
                let volume = args[1]
                    .parse::<Volume>()
                    .map_err(|_| CommandError::InvalidVolume(args[1].to_string()))?;
                Ok(Command::ExecuteTrade {
                    symbol: args[0].to_string(),
                    volume,
                })
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    /// Apply the command to the manager
    ///
    /// Removing an unknown quote or symbol comes back as an error so the
    /// caller can report it; the manager itself is left unchanged.
    pub fn execute<C: Clock>(self, manager: &mut QuoteManager<C>) -> Result<Outcome, CommandError> {
        match self {
            Command::AddOrUpdateQuote(quote) => {
                manager.add_or_update_quote(quote)?;
                Ok(Outcome::Done)
            }
            Command::RemoveQuote(id) => {
                if manager.remove_quote(&id) {
                    Ok(Outcome::Done)
                } else {
                    Err(CommandError::QuoteNotFound(id))
                }
            }
            Command::RemoveAllQuotes(symbol) => {
                if manager.remove_all_quotes(&symbol) {
                    Ok(Outcome::Done)
                } else {
                    Err(CommandError::SymbolNotFound(symbol))
                }
            }
            Command::GetBestQuoteWithAvailableVolume(symbol) => Ok(Outcome::BestQuote(
                manager.get_best_quote_with_available_volume(&symbol),
            )),
            Command::ExecuteTrade { symbol, volume } => {
                Ok(Outcome::Trade(manager.execute_trade(&symbol, volume)))
            }
        }
    }
}

impl Outcome {
    /// JSON line to print, if the command produces output
    pub fn render(&self) -> Result<Option<String>, CommandError> {
        match self {
            Outcome::Done => Ok(None),
            Outcome::BestQuote(quote) => Ok(Some(serde_json::to_string(quote)?)),
            Outcome::Trade(result) => Ok(Some(serde_json::to_string(result)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_add_quote() {
        let json = r#"{"Symbol":"EURUSD","Price":1.1,"AvailableVolume":10,"ExpirationDate":"2030-01-01T00:00:00Z"}"#;
        let command = Command::parse(&args(&["AddOrUpdateQuote", json])).unwrap();

        match command {
            Command::AddOrUpdateQuote(quote) => {
                assert_eq!(quote.symbol, "EURUSD");
                assert_eq!(quote.available_volume, 10);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Command::parse(&[]),
            Err(CommandError::MissingArguments)
        ));
        assert!(matches!(
            Command::parse(&args(&["Launch"])),
            Err(CommandError::UnknownCommand(_))
        ));
        assert!(matches!(
            Command::parse(&args(&["RemoveQuote", "not-a-uuid"])),
            Err(CommandError::InvalidId(_))
        ));
        assert!(matches!(
            Command::parse(&args(&["ExecuteTrade", "EURUSD", "-5"])),
            Err(CommandError::InvalidVolume(_))
        ));
        assert!(matches!(
            Command::parse(&args(&["ExecuteTrade", "EURUSD"])),
            Err(CommandError::WrongArgumentCount {
                expected: 2,
                got: 1,
                ..
            })
        ));
        assert!(matches!(
            Command::parse(&args(&["AddOrUpdateQuote", "{"])),
            Err(CommandError::InvalidQuote(_))
        ));
    }

    #[test]
    fn test_parse_line_keeps_json_spaces() {
        let line = r#"AddOrUpdateQuote { "Symbol": "EURUSD", "Price": 1.1, "AvailableVolume": 10, "ExpirationDate": "2030-01-01T00:00:00Z" }"#;
        assert!(matches!(
            Command::parse_line(line),
            Ok(Command::AddOrUpdateQuote(_))
        ));

        assert_eq!(
            Command::parse_line("  ExecuteTrade   EURUSD  25 ").unwrap(),
            Command::ExecuteTrade {
                symbol: "EURUSD".to_string(),
                volume: 25
            }
        );
    }

    #[test]
    fn test_execute_round_trip() {
        let mut manager = QuoteManager::new();
        let quote = Quote::new("EURUSD", 2.0, 10, Utc::now() + Duration::days(1));

        let outcome = Command::AddOrUpdateQuote(quote.clone())
            .execute(&mut manager)
            .unwrap();
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(outcome.render().unwrap(), None);

        let outcome = Command::GetBestQuoteWithAvailableVolume("EURUSD".to_string())
            .execute(&mut manager)
            .unwrap();
        assert_eq!(outcome, Outcome::BestQuote(Some(quote.clone())));

        let outcome = Command::ExecuteTrade {
            symbol: "EURUSD".to_string(),
            volume: 4,
        }
        .execute(&mut manager)
        .unwrap();
        let rendered = outcome.render().unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["VolumeExecuted"], 4);
        assert_eq!(value["VolumeWeightedAveragePrice"], 2.0);
    }

    #[test]
    fn test_missing_best_quote_renders_null() {
        let mut manager = QuoteManager::new();
        let outcome = Command::GetBestQuoteWithAvailableVolume("EURUSD".to_string())
            .execute(&mut manager)
            .unwrap();

        assert_eq!(outcome.render().unwrap(), Some("null".to_string()));
    }

    #[test]
    fn test_removing_unknown_targets_reports_not_found() {
        let mut manager = QuoteManager::new();

        assert!(matches!(
            Command::RemoveQuote(Uuid::new_v4()).execute(&mut manager),
            Err(CommandError::QuoteNotFound(_))
        ));
        assert!(matches!(
            Command::RemoveAllQuotes("EURUSD".to_string()).execute(&mut manager),
            Err(CommandError::SymbolNotFound(_))
        ));
    }
}

//! Batch mode: one command per input line against a single manager

use std::io::{self, BufRead, Write};

use log::warn;
use quote_manager::{Clock, QuoteManager};

use crate::command::Command;

/// Run every command in `input`, writing results to `output`
///
/// Blank lines and lines starting with `#` are skipped. A failing line is
/// reported on `errors` and the batch carries on. Returns the number of
/// failed lines; unknown quotes or symbols on removal do not count.
pub fn run_batch<C: Clock>(
    manager: &mut QuoteManager<C>,
    input: impl BufRead,
    mut output: impl Write,
    mut errors: impl Write,
) -> io::Result<usize> {
    let mut failures = 0;

    for (number, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let rendered = Command::parse_line(trimmed)
            .and_then(|command| command.execute(manager))
            .and_then(|outcome| outcome.render());

        match rendered {
            Ok(Some(text)) => writeln!(output, "{}", text)?,
            Ok(None) => {}
            Err(e) => {
                writeln!(errors, "Error: line {}: {}", number + 1, e)?;
                if !e.is_not_found() {
                    warn!("Batch line {} failed: {}", number + 1, e);
                    failures += 1;
                }
            }
        }
    }

    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> (String, String, usize) {
        let mut manager = QuoteManager::new();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let failures = run_batch(&mut manager, script.as_bytes(), &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            failures,
        )
    }

    #[test]
    fn test_batch_shares_state_between_lines() {
        let script = r#"
# seed the book
AddOrUpdateQuote {"Symbol": "EURUSD", "Price": 40.0, "AvailableVolume": 50, "ExpirationDate": "2999-01-01T00:00:00Z"}
AddOrUpdateQuote {"Symbol": "EURUSD", "Price": 60.0, "AvailableVolume": 50, "ExpirationDate": "2999-01-01T00:00:00Z"}
ExecuteTrade EURUSD 100
GetBestQuoteWithAvailableVolume EURUSD
"#;

        let (out, err, failures) = run(script);

        assert_eq!(failures, 0);
        assert!(err.is_empty());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let trade: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(trade["VolumeExecuted"], 100);
        assert_eq!(trade["VolumeWeightedAveragePrice"], 50.0);
        assert_eq!(lines[1], "null");
    }

    #[test]
    fn test_batch_reports_bad_lines_and_continues() {
        let script = "Bogus\nExecuteTrade EURUSD ten\nRemoveAllQuotes EURUSD\nExecuteTrade EURUSD 10\n";

        let (out, err, failures) = run(script);

        assert_eq!(failures, 2);
        assert!(err.contains("line 1"));
        assert!(err.contains("line 2"));
        assert!(err.contains("line 3: Symbol EURUSD not found"));
        assert_eq!(out.lines().count(), 1);
    }
}

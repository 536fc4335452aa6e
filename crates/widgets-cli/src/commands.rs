use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use widgets_core::{validate_token_list, validate_tokens, ValidationError};

use crate::args::{Cli, Commands};
use crate::exit_codes;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Commands::Validate { file, tokens } => validate_file(&file, tokens),
    }
}

fn validate_file(file: &Path, tokens: bool) -> anyhow::Result<i32> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let candidate: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    let outcome = if tokens {
        validate_tokens(&candidate).map(|tokens| {
            println!("OK: {} tokens", tokens.len());
        })
    } else {
        validate_token_list(&candidate).map(|list| {
            println!(
                "OK: {} v{} ({} tokens)",
                list.name,
                list.version,
                list.tokens.len()
            );
        })
    };

    match outcome {
        Ok(()) => Ok(exit_codes::OK),
        Err(e @ ValidationError::Rejected { .. }) => {
            eprintln!("{e}");
            Ok(exit_codes::VALIDATION_FAILED)
        }
        // Embedded schema defect: a build problem, not a bad input file.
        Err(e @ ValidationError::Schema { .. }) => Err(e.into()),
    }
}

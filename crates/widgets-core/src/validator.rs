//! Schema gate for externally supplied token metadata.
//!
//! Raw JSON handed to the widget (typically fetched from an
//! integrator-chosen URL) is untrusted until it has passed one of the two
//! embedded schemas. Validation is all-or-nothing per call: either the whole
//! document conforms and is re-typed, or it is rejected with the full set of
//! diagnostics and the caller decides the fallback (usually discarding the
//! document in favor of a built-in default set).

use std::sync::OnceLock;

use jsonschema::Draft;
use serde_json::Value;
use thiserror::Error;

use crate::model::{TokenInfo, TokenList};

/// Embedded schemas, fixed at build time.
///
/// NOTE: Use CARGO_MANIFEST_DIR to avoid fragile relative paths from src/.
const TOKEN_LIST_SCHEMA_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../schemas/tokenlist.schema.json"
));
const TOKENS_SCHEMA_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../schemas/tokens.schema.json"
));

/// Which embedded schema to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValidationSchema {
    List,
    Tokens,
}

impl ValidationSchema {
    fn file(self) -> &'static str {
        match self {
            ValidationSchema::List => "tokenlist.schema.json",
            ValidationSchema::Tokens => "tokens.schema.json",
        }
    }

    /// Stage name used as the error-message prefix. Downstream consumers
    /// parse these strings, so the wording is wire-stable.
    fn stage(self) -> &'static str {
        match self {
            ValidationSchema::List => "Token list",
            ValidationSchema::Tokens => "Tokens",
        }
    }
}

/// Errors produced by the validation gate.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The candidate does not conform to the target schema.
    ///
    /// `details` joins one `<instance path> <constraint message>` fragment
    /// per violation with `"; "`, or is the literal `unknown error` when no
    /// structured diagnostics are available. Recoverable: callers typically
    /// reject the document and fall back to a default set.
    #[error("{stage} failed validation: {details}")]
    Rejected {
        stage: &'static str,
        details: String,
    },

    /// An embedded schema failed to parse or compile. A build defect, never
    /// produced by external input; not retried.
    #[error("embedded schema {file} is invalid: {message}")]
    Schema {
        file: &'static str,
        message: String,
    },
}

impl ValidationError {
    /// Returns true if the candidate was rejected by the schema (as opposed
    /// to an internal schema defect).
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

static LIST_VALIDATOR: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();
static TOKENS_VALIDATOR: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

/// Compiles the selected schema on first use and memoizes the result for the
/// process lifetime. A compile failure is sticky and reported on every call.
/// Validators are stateless, so there is no teardown beyond process exit.
fn compiled_validator(
    schema: ValidationSchema,
) -> Result<&'static jsonschema::Validator, ValidationError> {
    let (cell, raw) = match schema {
        ValidationSchema::List => (&LIST_VALIDATOR, TOKEN_LIST_SCHEMA_JSON),
        ValidationSchema::Tokens => (&TOKENS_VALIDATOR, TOKENS_SCHEMA_JSON),
    };

    cell.get_or_init(|| {
        let parsed: Value = serde_json::from_str(raw)
            .map_err(|e| format!("failed to parse schema JSON: {e}"))?;

        // The published token-list schema declares draft-07.
        jsonschema::options()
            .with_draft(Draft::Draft7)
            .build(&parsed)
            .map_err(|e| format!("failed to compile schema: {e}"))
    })
    .as_ref()
    .map_err(|message| ValidationError::Schema {
        file: schema.file(),
        message: message.clone(),
    })
}

/// Joins every violation into one diagnostic string: the JSON-pointer path
/// of the offending field and the constraint message, space-separated (path
/// omitted at the document root), fragments joined with `"; "`.
fn collect_diagnostics(validator: &jsonschema::Validator, instance: &Value) -> String {
    let fragments: Vec<String> = validator
        .iter_errors(instance)
        .map(|error| {
            let path = error.instance_path().to_string();
            if path.is_empty() {
                error.to_string()
            } else {
                format!("{path} {error}")
            }
        })
        .collect();

    if fragments.is_empty() {
        "unknown error".to_string()
    } else {
        fragments.join("; ")
    }
}

fn validate(schema: ValidationSchema, candidate: &Value) -> Result<(), ValidationError> {
    let validator = compiled_validator(schema)?;
    if validator.is_valid(candidate) {
        return Ok(());
    }
    Err(ValidationError::Rejected {
        stage: schema.stage(),
        details: collect_diagnostics(validator, candidate),
    })
}

/// Re-types an already schema-valid document. The schema leaves a few
/// constraints to the typed model (e.g. `timestamp` parseability, since
/// draft-07 `format` is an annotation), so deserialization can still reject.
fn retype<T: serde::de::DeserializeOwned>(
    schema: ValidationSchema,
    candidate: &Value,
) -> Result<T, ValidationError> {
    serde_json::from_value(candidate.clone()).map_err(|e| ValidationError::Rejected {
        stage: schema.stage(),
        details: e.to_string(),
    })
}

/// Validates a candidate token list document.
///
/// On success the input is returned re-typed as [`TokenList`] with no
/// semantic transformation. On failure the error Display is
/// `Token list failed validation: <details>`.
pub fn validate_token_list(candidate: &Value) -> Result<TokenList, ValidationError> {
    validate(ValidationSchema::List, candidate)?;
    let list: TokenList = retype(ValidationSchema::List, candidate)?;
    tracing::debug!(name = %list.name, tokens = list.tokens.len(), "token list validated");
    Ok(list)
}

/// Validates a bare array of token descriptors.
///
/// The candidate is wrapped as `{"tokens": candidate}` and checked against
/// the tokens-root schema, so diagnostics carry `/tokens/<i>/...` paths. On
/// failure the error Display is `Tokens failed validation: <details>`.
pub fn validate_tokens(candidate: &Value) -> Result<Vec<TokenInfo>, ValidationError> {
    let wrapped = serde_json::json!({ "tokens": candidate });
    validate(ValidationSchema::Tokens, &wrapped)?;
    let tokens: Vec<TokenInfo> = retype(ValidationSchema::Tokens, candidate)?;
    tracing::debug!(tokens = tokens.len(), "token array validated");
    Ok(tokens)
}

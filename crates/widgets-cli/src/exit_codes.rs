//! Stable exit codes for scripting against the CLI.

/// The document conforms to the schema.
pub const OK: i32 = 0;
/// The document failed validation.
pub const VALIDATION_FAILED: i32 = 1;
/// Usage, IO, or internal schema error.
pub const CONFIG_ERROR: i32 = 2;

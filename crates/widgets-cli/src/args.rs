use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tokenlist", about = "Validate token-list documents against the widget schemas", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a token-list (or bare token-array) JSON file
    Validate {
        /// Path to the JSON document
        file: PathBuf,
        /// Treat the document as a bare array of tokens instead of a full list
        #[arg(long)]
        tokens: bool,
    },
}

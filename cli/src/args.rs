// src/args.rs
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mb64", author, version, about = "Keyed base64 encoder/decoder")]
pub struct Args {
    #[arg(value_enum)]
    pub command: Command,

    /// Inline content; read from --input or stdin when omitted.
    pub content: Option<String>,

    /// Encoding/decoding key; falls back to the MB_KEY environment variable.
    #[arg(short, long, env = "MB_KEY", hide_env_values = true)]
    pub key: String,

    /// Read the payload from a file instead of the argument or stdin.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the result to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Command {
    Encrypt,
    Decrypt,
}

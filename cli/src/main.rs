// src/main.rs
mod args;

use std::error::Error;
use std::io::{self, Read, Write};
use std::process;

use args::{Args, Command};
use clap::Parser;
use mb64_core::Coder;

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let content: Vec<u8> = if let Some(path) = &args.input {
        std::fs::read(path)?
    } else if let Some(inline) = &args.content {
        inline.clone().into_bytes()
    } else {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    };

    let mut coder = Coder::new();
    coder.set_encoding(&args.key)?;

    let result: Vec<u8> = match args.command {
        Command::Encrypt => coder.encode(&content)?.into_bytes(),
        Command::Decrypt => coder.decode(&String::from_utf8(content)?)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &result)?;
            eprintln!("Wrote output to {}", path.display());
        }
        None => {
            io::stdout().write_all(&result)?;
        }
    }

    Ok(())
}

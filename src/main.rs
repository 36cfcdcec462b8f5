use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cpp_embed::{EncodingOptions, Mode};

/// Embed the contents of a file in a C++11 header.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true)]
struct Args {
    /// Input file, or `-` to read from standard input.
    input: String,

    /// Name of the generated constant.
    identifier: String,

    /// Emit a fixed-size byte array instead of a string literal.
    #[arg(short = 'b', long = "binary-mode")]
    binary_mode: bool,

    /// Guard the header with #ifndef/#define/#endif instead of #pragma once.
    #[arg(long)]
    use_header_guard: bool,

    /// Write the header to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Display this help menu.
    #[arg(short, long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Failed to read {1}: {0}")]
    ReadInput(io::Error, String),

    #[error("Failed to write {}: {0}", .1.display())]
    WriteOutput(io::Error, PathBuf),

    #[error("{0}")]
    Options(#[from] cpp_embed::OptionsError),

    #[error("{0}")]
    Encode(#[from] cpp_embed::EncodeError),
}

fn main() -> ExitCode {
    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,

        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let bytes = read_input(&args.input)?;

    let mode = if args.binary_mode {
        Mode::Binary
    } else {
        Mode::Text
    };

    let options = EncodingOptions::new(&args.identifier, mode, args.use_header_guard)?;

    // The whole document is built in memory before the output sink is
    // touched, so a failure can never leave a partial header behind.
    let header = cpp_embed::render(&bytes, &options)?;

    match &args.output {
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(header.as_bytes())
                .map_err(|e| CliError::WriteOutput(e, "-".into()))?;
        }

        Some(path) => {
            fs::write(path, &header).map_err(|e| CliError::WriteOutput(e, path.clone()))?;
        }
    }

    Ok(())
}

/// Read the whole input, from a file or from standard input (`-`).
fn read_input(input: &str) -> Result<Vec<u8>, CliError> {
    if input == "-" {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map_err(|e| CliError::ReadInput(e, "standard input".into()))?;
        return Ok(bytes);
    }

    fs::read(input).map_err(|e| CliError::ReadInput(e, input.into()))
}

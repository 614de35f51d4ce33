use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use mips_rs::{assemble, Encoded, Overflow};

#[derive(Parser, Debug)]
#[command(author, version, about = "MIPS instruction <=> hex converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode `;`-separated assembly statements into hex words
    Encode {
        /// Source file path
        #[arg(value_name = "SRCFILE")]
        input: PathBuf,
        /// Where to save the output file
        #[arg(short, long, default_value = "a.txt")]
        output: PathBuf,
        /// Fail on field overflow instead of silently truncating
        #[arg(long)]
        strict: bool,
        /// Print each instruction with its bit-field breakdown
        #[arg(long)]
        verbose: bool,
        /// Verbose listing format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Decode hex words back into assembly
    Decode {
        /// Source file path
        #[arg(value_name = "SRCFILE")]
        input: PathBuf,
        /// Where to save the output file
        #[arg(short, long, default_value = "a.txt")]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, serde::Serialize)]
struct Listing<'a> {
    mode: Overflow,
    instructions: &'a [Encoded],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Encode { input, output, strict, verbose, format } => {
            let src = fs::read_to_string(&input)?;
            let mode = if strict { Overflow::Strict } else { Overflow::Truncate };
            let encoded = assemble(&src, mode)?;

            if verbose {
                match format {
                    OutputFormat::Text => {
                        for e in &encoded {
                            println!("[{:->30}] {}", e.asm, e.hex());
                            println!("\t\t{}", e.fields);
                        }
                    }
                    OutputFormat::Json => {
                        let listing = Listing { mode, instructions: &encoded };
                        println!("{}", serde_json::to_string_pretty(&listing)?);
                    }
                }
            }

            let mut text = String::new();
            for e in &encoded {
                writeln!(text, "{}", e.hex())?;
            }
            fs::write(&output, text)?;
        }
        Command::Decode { .. } => {
            bail!("hex -> instruction decoding is not implemented yet");
        }
    }
    Ok(())
}

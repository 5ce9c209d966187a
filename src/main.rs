use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use treebank_tokenizer::{Step, Tokenizer};

#[derive(Parser)]
#[command(name = "treebank-tokenize")]
#[command(author, version, about = "Penn Treebank style tokenizer for English text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// One token per line (default)
    #[value(name = "lines")]
    Lines,
    /// Tokens joined by a single space
    #[value(name = "space")]
    Space,
    /// JSON array of tokens
    #[value(name = "json")]
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a file, literal text, or stdin
    Tokenize {
        /// The file to tokenize (reads stdin when omitted)
        #[arg(conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Tokenize this text instead of a file
        #[arg(short, long)]
        text: Option<String>,

        /// How to print the tokens
        #[arg(short, long, value_enum, default_value = "lines")]
        format: OutputFormat,
    },

    /// Show the buffer after every rewrite step
    Trace {
        /// The file to trace (reads stdin when omitted)
        #[arg(conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Trace this text instead of a file
        #[arg(short, long)]
        text: Option<String>,

        /// Emit the trace as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the rewrite steps in the order they run
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger; the verbose flag overrides RUST_LOG
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Tokenize {
            input,
            text,
            format,
        } => tokenize(input, text, format),
        Commands::Trace { input, text, json } => trace(input, text, json),
        Commands::Rules => rules(),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Collect the raw input bytes from `--text`, a file, or stdin
fn read_input(input: Option<PathBuf>, text: Option<String>) -> Result<Vec<u8>> {
    if let Some(text) = text {
        return Ok(text.into_bytes());
    }

    match input {
        Some(path) => {
            log::debug!("Reading {:?}", path);
            fs::read(&path).with_context(|| format!("Failed to read input file: {:?}", path))
        }
        None => {
            log::debug!("Reading stdin");
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read stdin")?;
            Ok(bytes)
        }
    }
}

fn tokenize(input: Option<PathBuf>, text: Option<String>, format: OutputFormat) -> Result<()> {
    let bytes = read_input(input, text)?;
    let tokens = Tokenizer::new().tokenize_bytes(&bytes)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Lines => {
            for token in &tokens {
                writeln!(out, "{}", token)?;
            }
        }
        OutputFormat::Space => writeln!(out, "{}", tokens.join(" "))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&tokens)?)?,
    }

    Ok(())
}

fn trace(input: Option<PathBuf>, text: Option<String>, json: bool) -> Result<()> {
    let bytes = read_input(input, text)?;
    let text = std::str::from_utf8(&bytes)
        .map_err(|e| treebank_tokenizer::TokenizerError::invalid_utf8(e.valid_up_to()))?;
    let steps = Tokenizer::new().trace(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    println!("{}", "=== Input ===".blue().bold());
    println!("{:?}", text);
    for step in &steps {
        let header = format!("[{:>2}] {}", step.index, step.rule);
        if step.changed {
            println!("{}", header.cyan().bold());
            println!("{:?}", step.buffer);
        } else {
            println!("{} {}", header.dimmed(), "(unchanged)".dimmed());
        }
    }

    Ok(())
}

fn rules() -> Result<()> {
    let tokenizer = Tokenizer::new();
    for (i, step) in tokenizer.cascade().steps().iter().enumerate() {
        match step {
            Step::Rewrite(rule) => println!("{:>2}  {:<24} {}", i + 1, rule.name(), rule.pattern()),
            Step::Pad => println!("{:>2}  {:<24} (pad buffer with spaces)", i + 1, step.name()),
        }
    }
    Ok(())
}

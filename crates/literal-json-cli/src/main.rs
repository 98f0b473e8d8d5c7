//! `litjson` CLI — convert serialized literal expression ASTs into JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Babel AST on stdin, JSON on stdout
//! node -e 'console.log(JSON.stringify(require("@babel/parser").parseExpression(process.argv[1])))' \
//!   '{a: [1, "x"]}' | litjson convert
//!
//! # From file to file, pretty-printed
//! litjson convert -i node.json -o value.json --pretty
//!
//! # Cumulative escaping instead of the compatible default
//! litjson convert -i node.json --escape full
//!
//! # Only validate; exit status 2 when the node is not a pure literal
//! litjson check -i node.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use literal_json::{estree, ConvertError, ConvertOptions, EscapeMode, LiteralConverter};
use serde_json::Value;
use std::io::{self, Read};
use std::process;

/// Exit status for input that parsed but is not a convertible literal.
const EXIT_CONVERSION_FAILED: i32 = 2;

#[derive(Parser)]
#[command(
    name = "litjson",
    version,
    about = "Convert JavaScript literal expression ASTs (Babel/ESTree JSON) into JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an AST node to the JSON value it spells
    Convert {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// String escaping: "compat" or "full"
        #[arg(long, default_value_t = EscapeMode::Compat)]
        escape: EscapeMode,
    },
    /// Check that an AST node is a convertible literal
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// String escaping: "compat" or "full"
        #[arg(long, default_value_t = EscapeMode::Compat)]
        escape: EscapeMode,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Re-parse with --help to show usage (clap handles this)
            Cli::parse_from(["litjson", "--help"]);
            unreachable!();
        }
    };

    match command {
        Commands::Convert {
            input,
            output,
            pretty,
            escape,
        } => {
            let ast = read_input(input.as_deref())?;
            let value = exit_on_conversion_error(run_conversion(&ast, escape))?;
            let json = if pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Check { input, escape } => {
            let ast = read_input(input.as_deref())?;
            exit_on_conversion_error(run_conversion(&ast, escape))?;
            println!("ok");
        }
    }

    Ok(())
}

fn run_conversion(ast: &str, escape: EscapeMode) -> std::result::Result<Value, ConvertError> {
    let node = estree::from_str(ast)?;
    LiteralConverter::new(ConvertOptions::default().with_escape(escape)).convert(&node)
}

/// Conversion failures exit with status 2 and a one-line diagnostic; JSON
/// input errors are handed back to `anyhow` (status 1).
fn exit_on_conversion_error(result: std::result::Result<Value, ConvertError>) -> Result<Value> {
    match result {
        Ok(value) => Ok(value),
        Err(ConvertError::JsonParse(e)) => Err(e).context("Failed to parse AST JSON"),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(EXIT_CONVERSION_FAILED);
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

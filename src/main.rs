//! json-slice CLI.
//!
//! Parses one JSON object from a file (or stdin with `-`) and validates it,
//! dumps it, re-encodes it, or looks up a value by a case-insensitive key
//! path. Set `RUST_LOG=debug` to see parser events on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use json_slice::json::encode::serialize_number;
use json_slice::json::{encode_value, parse_with_limits};
use json_slice::{dump, encode, Limits, Lookup, Object, ParseError, Value, ValueType};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jsonslice")]
#[command(about = "Parse and inspect JSON objects", long_about = None)]
#[command(version)]
struct Cli {
    /// Maximum nesting depth (overrides --limits)
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// JSON file with parse limits
    #[arg(long, global = true)]
    limits: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the input parses
    Check {
        /// Input file, `-` for stdin
        file: PathBuf,
    },

    /// Print the diagnostic rendering of the input
    Dump {
        /// Input file, `-` for stdin
        file: PathBuf,
    },

    /// Print the input as compact JSON
    Encode {
        /// Input file, `-` for stdin
        file: PathBuf,
    },

    /// Print the value at a key path; keys match ignoring ASCII case
    Get {
        /// Input file, `-` for stdin
        file: PathBuf,

        /// Keys to follow through nested objects
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid limits file {path}: {source}")]
    Limits {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },

    #[error("key not found: {0}")]
    MissingKey(String),

    #[error("key {key} is {found}, expected object")]
    NotAnObject { key: String, found: ValueType },
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::MissingKey(_) | CliError::NotAnObject { .. } => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    let read_err = |source: io::Error| CliError::Read {
        path: path.display().to_string(),
        source,
    };
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(read_err)?;
        Ok(buf)
    } else {
        fs::read(path).map_err(read_err)
    }
}

fn load_limits(cli: &Cli) -> Result<Limits, CliError> {
    let mut limits = match &cli.limits {
        Some(path) => {
            let text = fs::read(path).map_err(|source| CliError::Read {
                path: path.display().to_string(),
                source,
            })?;
            serde_json::from_slice(&text).map_err(|source| CliError::Limits {
                path: path.display().to_string(),
                source,
            })?
        }
        None => Limits::standard(),
    };
    if let Some(depth) = cli.max_depth {
        limits = limits.with_max_nesting_depth(depth);
    }
    tracing::debug!(max_nesting_depth = limits.max_nesting_depth, "using limits");
    Ok(limits)
}

/// Follow `keys` from `root`; every key but the last must name an object.
fn lookup<'t, 'a>(root: &'t Object<'a>, keys: &[String]) -> Result<&'t Value<'a>, CliError> {
    let Some((last, parents)) = keys.split_last() else {
        return Err(CliError::MissingKey(String::new()));
    };

    let mut current = root;
    for key in parents {
        current = match current.find_key_with_value_type(key, ValueType::Object) {
            Lookup::Found(member) => match member.value() {
                Value::Object(obj) => obj,
                other => {
                    return Err(CliError::NotAnObject {
                        key: key.clone(),
                        found: other.value_type(),
                    })
                }
            },
            Lookup::WrongType { found, .. } => {
                return Err(CliError::NotAnObject {
                    key: key.clone(),
                    found,
                })
            }
            Lookup::Missing => return Err(CliError::MissingKey(key.clone())),
        };
    }

    current
        .find_key(last)
        .map(|member| member.value())
        .ok_or_else(|| CliError::MissingKey(last.clone()))
}

fn render_scalar(value: &Value<'_>) -> String {
    match value {
        Value::String(s) => s.unescape().into_owned(),
        Value::Number(n) => serialize_number(*n),
        other => encode_value(other),
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let limits = load_limits(cli)?;

    let file = match &cli.command {
        Commands::Check { file }
        | Commands::Dump { file }
        | Commands::Encode { file }
        | Commands::Get { file, .. } => file,
    };
    let input = read_input(file)?;
    let root = parse_with_limits(&input, limits).map_err(|source| CliError::Parse {
        path: file.display().to_string(),
        source,
    })?;

    match &cli.command {
        Commands::Check { .. } => println!("ok: {} members", root.len()),
        Commands::Dump { .. } => println!("{}", dump(&root)),
        Commands::Encode { .. } => println!("{}", encode(&root)),
        Commands::Get { keys, .. } => println!("{}", render_scalar(lookup(&root, keys)?)),
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

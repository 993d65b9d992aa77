//! The `filetree` command line tool.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use filetree_codec::{CodecError, FormatRegistry};
use filetree_core::{Document, Value};
use filetree_local::{LocalFs, MemoryFs, TreeError, TreeWriter};

/// filetree - Build directory trees from documents and read them back
#[derive(Parser, Debug)]
#[command(name = "filetree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log more. Repeat for more detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the files described by a JSON or YAML document
    Build {
        /// Document to build from; its extension picks the decoder
        input: PathBuf,
        /// Root directory of the tree
        dest: PathBuf,
        /// Overwrite existing files instead of merging into them
        #[arg(long)]
        no_merge: bool,
        /// List the files that would be written without touching the disk
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the document for a directory tree
    Read {
        source: PathBuf,
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Print the canonical form of a document
    Normalize {
        input: PathBuf,
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    fn token(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Could not read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not decode {}: {source}", path.display())]
    DecodeInput {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error("{} must contain an object, found {found}", path.display())]
    NotADocument { path: PathBuf, found: &'static str },

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Log level for a count of `-v` flags.
pub fn level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Install the logger. `RUST_LOG` takes precedence over the flag count.
pub fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .init();
}

/// Run a parsed command, printing results to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    match &cli.command {
        Command::Build {
            input,
            dest,
            no_merge,
            dry_run,
        } => {
            let doc = load_document(input)?;
            let canonical = filetree_local::normalize(&doc)?;

            if *dry_run {
                let mut writer = TreeWriter::new(MemoryFs::new()).merge_existing(!*no_merge);
                writer.write(&canonical, dest)?;
                for (path, _) in writer.filesystem().files() {
                    writeln!(out, "{}", path.display())?;
                }
            } else {
                TreeWriter::new(LocalFs)
                    .merge_existing(!*no_merge)
                    .write(&canonical, dest)?;
                log::info!("Built {} from {}", dest.display(), input.display());
            }
        }
        Command::Read { source, format } => {
            let doc = filetree_local::read_directory(source)?;
            print_document(out, doc, *format)?;
        }
        Command::Normalize { input, format } => {
            let doc = load_document(input)?;
            print_document(out, filetree_local::normalize(&doc)?, *format)?;
        }
    }
    Ok(())
}

/// Decode a document file with the codec for its extension.
fn load_document(path: &Path) -> Result<Document, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    log::debug!("Decoding {}...", path.display());
    let value = FormatRegistry::global()
        .resolve_name(&name)
        .decode(&text)
        .map_err(|source| CliError::DecodeInput {
            path: path.to_path_buf(),
            source,
        })?;

    match value {
        Value::Map(doc) => Ok(doc),
        other => Err(CliError::NotADocument {
            path: path.to_path_buf(),
            found: other.kind(),
        }),
    }
}

fn print_document(out: &mut impl Write, doc: Document, format: OutputFormat) -> Result<(), CliError> {
    let text = FormatRegistry::global().encode(&Value::Map(doc), format.token())?;
    if text.ends_with('\n') {
        write!(out, "{}", text)?;
    } else {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}

//! Lexicode - Main entrypoint.
//!
//! Loads configuration, initializes the logging system and runs one of the
//! prefix tree or Huffman codec commands.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lexicode_lib::config::{
    ConfigLoader, LexicodeConfig, LogConfig, DEFAULT_CONFIG_PATH, ENV_PREFIX,
};
use lexicode_lib::data_structures::{HuffmanCodec, PrefixTree};
use lexicode_lib::error::{
    report_error, set_error_reporter, ErrorContext, LexicodeError, LexicodeResult,
    TracingErrorReporter,
};

/// Words and text used by the `demo` command.
const DEMO_WORDS: [&str; 5] = ["apk", "app", "apple", "arp", "array"];
const DEMO_PREFIX: &str = "ap";
const DEMO_TEXT: &str = "abbdhabdbbbad";

/// Command line arguments for Lexicode.
#[derive(Parser, Debug)]
#[command(name = "lexicode", version, author, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Count prefix matches in a sample word set and round-trip a sample text
    Demo,

    /// Count the words that start with a prefix
    CountPrefix {
        /// Prefix to count
        prefix: String,

        /// Words to insert before counting
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Encode a text and print the bits and the code table
    Encode {
        /// Text to encode
        text: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to
/// standard error so command output stays on standard output.
fn init_logging(log: &LogConfig) -> LexicodeResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LexicodeError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn load_config(path: Option<PathBuf>) -> LexicodeResult<LexicodeConfig> {
    let config = match path {
        Some(path) => ConfigLoader::new(Some(path), ENV_PREFIX).load()?,
        None => ConfigLoader::new(Some(DEFAULT_CONFIG_PATH), ENV_PREFIX).load_or_default()?,
    };
    Ok(config)
}

fn run_demo(config: &LexicodeConfig) -> LexicodeResult<()> {
    let mut tree = PrefixTree::with_config(config.trie.clone());
    for word in DEMO_WORDS {
        tree.insert(word)?;
    }
    println!("The words in the trie are {DEMO_WORDS:?}");
    println!(
        "There are {} words with the prefix {DEMO_PREFIX}",
        tree.count_prefix(DEMO_PREFIX)
    );

    let mut codec = HuffmanCodec::with_config(config.codec.clone());
    println!("\nInitial String: {DEMO_TEXT}");
    let bits = codec.encode(DEMO_TEXT);
    println!("The encoded text is: {bits}");
    println!("The encoded text was decoded back to: {}", codec.decode(&bits)?);
    Ok(())
}

fn run(args: Args) -> LexicodeResult<()> {
    let config = load_config(args.config)?;

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo(&config),
        Command::CountPrefix { prefix, words } => {
            let mut tree = PrefixTree::with_config(config.trie);
            for word in &words {
                tree.insert(word)?;
            }
            println!("{}", tree.count_prefix(&prefix));
            Ok(())
        }
        Command::Encode { text } => {
            let mut codec = HuffmanCodec::with_config(config.codec);
            let bits = codec.encode(&text);
            println!("{bits}");
            for (c, code) in codec.code_table().iter() {
                println!("{c:?}\t{code}");
            }
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let toml = toml::to_string_pretty(&LexicodeConfig::default())
                .map_err(|e| LexicodeError::Custom(format!("Failed to serialize config: {e}")))?;

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    if let Err(error) = run(args) {
        report_error(ErrorContext::new(error, "lexicode"));
        process::exit(1);
    }
}

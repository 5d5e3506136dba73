//! Lanai - Main entrypoint.
//!
//! Loads configuration, initializes logging, builds the catalog index and
//! runs one CLI command against it.

use clap::{Parser, Subcommand};
use lanai_lib::autocomplete::{Autocomplete, SearchSession};
use lanai_lib::catalog::{Catalog, Product};
use lanai_lib::config::{self, ConfigLoader, LanaiConfig, LogConfig, ENV_PREFIX};
use lanai_lib::data_structures::TriePath;
use lanai_lib::error::{
    get_error_reporting, set_error_reporter, ErrorContext, LanaiError, LanaiResult,
    TracingErrorReporter,
};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[clap(name = "lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Catalog file to index instead of the configured one
    #[clap(long, value_parser)]
    catalog: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// List products whose names start with a prefix
    Suggest {
        /// Prefix to complete (defaults to the configured initial term)
        prefix: Option<String>,

        /// Print the matching products as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show the trie nodes matched by a prefix
    Path {
        /// Prefix to walk
        prefix: String,
    },

    /// Replay a prefix one character at a time, showing the path at each step
    Step {
        /// Prefix to replay
        prefix: String,
    },

    /// Print the whole trie, marking the path of an optional prefix
    Tree {
        /// Prefix whose path is marked
        prefix: Option<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },

    /// Write the built-in sample catalog to a file
    GenCatalog {
        /// Path to output catalog file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
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

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> LanaiResult<()> {
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            set_error_reporter(Arc::new(TracingErrorReporter));
            get_error_reporting().report(
                ErrorContext::new(e.into(), "config").with_details(format!("{:?}", args.config)),
            );
            process::exit(1);
        }
    };

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));
    config::init_global_config(config.clone());

    if let Err(e) = run(args, &config) {
        get_error_reporting().report(ErrorContext::new(e, "cli"));
        process::exit(1);
    }

    Ok(())
}

fn run(args: Args, config: &LanaiConfig) -> LanaiResult<()> {
    let command = args.command.unwrap_or(Command::Suggest {
        prefix: None,
        json: false,
    });

    match command {
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("configuration ok");
            Ok(())
        }
        Command::GenConfig { output } => {
            let toml = toml::to_string_pretty(&LanaiConfig::default())
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
            write_output(&output, &toml)?;
            info!("Default configuration written to {:?}", output);
            Ok(())
        }
        Command::GenCatalog { output } => {
            write_output(&output, &Catalog::sample().to_toml()?)?;
            info!("Sample catalog written to {:?}", output);
            Ok(())
        }
        command => {
            let catalog = load_catalog(args.catalog.as_deref(), config)?;
            let engine = Autocomplete::new(&catalog).with_limit(config.search.limit());
            info!(
                products = catalog.len(),
                nodes = engine.index().node_count(),
                "Index ready"
            );
            query(&engine, command, config)
        }
    }
}

fn query(engine: &Autocomplete, command: Command, config: &LanaiConfig) -> LanaiResult<()> {
    match command {
        Command::Suggest { prefix, json } => {
            let session =
                SearchSession::new(prefix.unwrap_or_else(|| config.search.initial_term.clone()));
            if json {
                let products: Vec<&Product> = engine.suggest(session.term());
                println!("{}", serde_json::to_string_pretty(&products)?);
                return Ok(());
            }

            let suggestions = engine.suggestions(&session);
            println!("{} match(es) for \"{}\"", suggestions.len(), session.term());
            for s in suggestions {
                println!(
                    "  [{}]{} {:<8} {}",
                    s.matched, s.rest, s.product.category, s.product.price
                );
            }
            Ok(())
        }
        Command::Path { prefix } => {
            let session = SearchSession::new(prefix);
            let path = engine.active_path(&session);
            println!("{}", render_path(&path));
            if !path.is_complete() {
                println!("matched {} of {} characters", path.depth(), session.match_len());
            }
            Ok(())
        }
        Command::Step { prefix } => {
            let mut session = SearchSession::new(prefix);
            for _ in 0..=session.match_len() {
                let step = session.advance();
                let path = engine.active_path(&session);
                println!("step {step:>2} \"{}\": {}", session.active_prefix(), render_path(&path));
            }
            Ok(())
        }
        Command::Tree { prefix } => {
            let session = SearchSession::new(prefix.unwrap_or_default());
            let path = engine.active_path(&session);
            for (depth, node) in engine.index().walk() {
                let marker = if path.contains(node) { '>' } else { ' ' };
                let label = node.character().map_or("ROOT".to_string(), String::from);
                match node.payload() {
                    Some(product) => println!(
                        "{marker} {:indent$}{label} = {}",
                        "",
                        product.name,
                        indent = depth * 2
                    ),
                    None => println!("{marker} {:indent$}{label}", "", indent = depth * 2),
                }
            }
            Ok(())
        }
        Command::Validate | Command::GenConfig { .. } | Command::GenCatalog { .. } => Ok(()),
    }
}

fn load_catalog(override_path: Option<&Path>, config: &LanaiConfig) -> LanaiResult<Catalog> {
    match override_path.or(config.catalog.path.as_deref()) {
        Some(path) => Ok(Catalog::load(path)?),
        None => Ok(Catalog::sample()),
    }
}

fn render_path(path: &TriePath<'_, Product>) -> String {
    path.iter()
        .map(|node| match node.character() {
            None => "ROOT".to_string(),
            Some(c) if node.is_terminal() => format!("{c}*"),
            Some(c) => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn write_output(output: &Path, contents: &str) -> LanaiResult<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).map_err(LanaiError::Io)?;
    }
    std::fs::write(output, contents).map_err(LanaiError::Io)?;
    Ok(())
}

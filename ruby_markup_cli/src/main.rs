//! # ruby-markup CLI
//!
//! Renders a JSON token dump as syntax-highlighted HTML.

use clap::{ArgAction, Parser};
use ruby_markup::config::compile_time::tokens::MAX_DUMP_SIZE;
use ruby_markup::config::runtime::LogLevel;
use ruby_markup::config::{ConfigError, RenderPreferences, RuntimeConfig};
use ruby_markup::logging::{
    self, codes, Code, LogFacadeLogger, Logger, LoggingService, StructuredLogger,
};
use ruby_markup::tokens::{read_tokens, read_tokens_from_file, TokenIoError};
use ruby_markup::{log_error, log_success, Renderer, Token, TokenStream};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(
    name = "ruby-markup",
    version,
    about = "Render a Ruby token dump as highlighted HTML"
)]
struct Cli {
    /// JSON token dump; `-` or nothing reads stdin
    input: Option<PathBuf>,

    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// CSS class prefix (default `ruby-`)
    #[arg(long)]
    prefix: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Wrap the output in `<pre class="ruby">`
    #[arg(long)]
    wrap: bool,

    /// Print the concatenated token text instead of HTML
    #[arg(long, conflicts_with_all = ["prefix", "wrap"])]
    text: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Tokens(#[from] TokenIoError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("Failed to write '{path}': {source}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl CliError {
    fn code(&self) -> Code {
        match self {
            CliError::Tokens(TokenIoError::Json(_)) => codes::input::INVALID_DUMP,
            CliError::Tokens(TokenIoError::Io { .. }) | CliError::Stdin(_) => {
                codes::input::DUMP_NOT_FOUND
            }
            CliError::Tokens(TokenIoError::TooLarge { .. }) => codes::input::DUMP_TOO_LARGE,
            CliError::Tokens(TokenIoError::TooManyTokens { .. }) => codes::input::TOO_MANY_TOKENS,
            CliError::Config(_) => codes::config::INVALID_CONFIG,
            CliError::Output { .. } => codes::output::WRITE_FAILED,
            CliError::Logging(_) => codes::system::INITIALIZATION_FAILURE,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if logging::is_initialized() {
                log_error!(err.code(), &err.to_string());
            } else {
                eprintln!("error: {}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => RuntimeConfig::load_from_file(path)?,
        None => RuntimeConfig::default(),
    };
    init_logging(&config, cli.verbose)?;

    let preferences = render_preferences(&config, cli)?;
    let tokens = load_tokens(cli.input.as_deref())?;
    log_success!(codes::success::DUMP_LOADED, "Loaded token dump",
        "slots" => tokens.len()
    );

    let output = render_output(tokens, &preferences, cli.text);
    write_output(cli.output.as_deref(), &output)
}

/// Route library events into `env_logger` (or JSON on stderr when structured
/// logging is configured)
fn init_logging(config: &RuntimeConfig, verbose: u8) -> Result<(), CliError> {
    let mut preferences = config.logging.clone();
    preferences.min_log_level = match verbose {
        0 => preferences.min_log_level,
        1 => preferences.min_log_level.max(LogLevel::Info),
        _ => LogLevel::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level_filter(preferences.min_log_level))
        .parse_env("RUST_LOG")
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;

    let min_level = preferences.min_log_level.to_events_log_level();
    let logger: Arc<dyn Logger> = if preferences.use_structured_logging {
        Arc::new(StructuredLogger::new(min_level))
    } else {
        Arc::new(LogFacadeLogger)
    };

    logging::config::init_runtime_preferences(preferences).map_err(CliError::Logging)?;
    logging::init_global_logging_with_service(Arc::new(LoggingService::new(logger, min_level)))
        .map_err(CliError::Logging)
}

fn level_filter(level: LogLevel) -> log::LevelFilter {
    match level {
        LogLevel::Error => log::LevelFilter::Error,
        LogLevel::Warning => log::LevelFilter::Warn,
        LogLevel::Info => log::LevelFilter::Info,
        LogLevel::Debug => log::LevelFilter::Debug,
    }
}

/// Command line flags take precedence over the configuration file
fn render_preferences(config: &RuntimeConfig, cli: &Cli) -> Result<RenderPreferences, CliError> {
    let mut preferences = config.render.clone();
    if let Some(prefix) = &cli.prefix {
        preferences.class_prefix = prefix.clone();
    }
    preferences.wrap_in_pre |= cli.wrap;
    preferences.validate()?;
    Ok(preferences)
}

fn load_tokens(input: Option<&Path>) -> Result<Vec<Option<Token>>, CliError> {
    match input {
        Some(path) if path != Path::new("-") => Ok(read_tokens_from_file(path)?),
        _ => {
            let mut json = String::new();
            // One byte past the limit so oversized input is still rejected
            io::stdin()
                .lock()
                .take(MAX_DUMP_SIZE + 1)
                .read_to_string(&mut json)
                .map_err(CliError::Stdin)?;
            Ok(read_tokens(&json)?)
        }
    }
}

fn render_output(tokens: Vec<Option<Token>>, preferences: &RenderPreferences, text: bool) -> String {
    if text {
        return TokenStream::from_tokens(tokens).tokens_to_s();
    }

    let renderer = Renderer::new(preferences.style_table());
    let (html, stats) = renderer.render_with_stats(&tokens);
    log_success!(codes::success::RENDERING_COMPLETE, "Rendered token dump",
        "styled" => stats.styled,
        "unstyled" => stats.unstyled,
        "skipped" => stats.skipped
    );

    if preferences.wrap_in_pre {
        format!("<pre class=\"ruby\">{}</pre>\n", html)
    } else {
        html
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), CliError> {
    match output {
        Some(path) => std::fs::write(path, content).map_err(|source| CliError::Output {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| CliError::Output {
                    path: "<stdout>".to_string(),
                    source,
                })
        }
    }
}

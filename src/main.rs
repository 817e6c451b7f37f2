// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use sctmark::ansi::ansi_to_markup;
use sctmark::app_config::{self, Config};
use sctmark::errors::AppError;
use sctmark::escape::escape_html;
use sctmark::render::{CloseMode, Renderer};
use sctmark::validation::MarkupValidator;

/// CLI Wrapper for CloseMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliCloseMode {
    Legacy,
    Balanced,
}

impl From<CliCloseMode> for CloseMode {
    fn from(cli_mode: CliCloseMode) -> Self {
        match cli_mode {
            CliCloseMode::Legacy => CloseMode::Legacy,
            CliCloseMode::Balanced => CloseMode::Balanced,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render markup to HTML (default command)
    Render(RenderArgs),

    /// Report problems in markup without rendering it
    Check {
        /// Input file, stdin when omitted or '-'
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Convert ANSI styling before checking
        #[arg(long)]
        ansi: bool,
    },

    /// Generate shell completions for sctmark
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input file, stdin when omitted or '-'
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// How closing tags are rendered
    #[arg(long, value_enum)]
    close_mode: Option<CliCloseMode>,

    /// Convert ANSI styling before rendering
    #[arg(long)]
    ansi: bool,
}

/// sctmark - render SCT tag markup to safe HTML
#[derive(Parser, Debug)]
#[command(name = "sctmark")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(about = "Render SCT tag markup to safe HTML")]
#[command(long_about = "sctmark escapes text and translates SCT tag commands into HTML.

EXAMPLES:
    echo '<SCT:BOLD>hi<!SCT:BOLD>' | sctmark       # Render stdin
    sctmark report.txt -o report.html              # Render a file
    sctmark render --close-mode balanced log.txt   # Only emit closes that match
    sctmark render --ansi build.log                # Convert terminal colors first
    sctmark check report.txt                       # Report markup problems
    sctmark completions bash > sctmark.bash        # Generate bash completions

CONFIGURATION:
    Settings are read from sctmark.json by default. You can specify a different
    file with --config. Command line flags override file values.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    render: RenderArgs,

    /// Configuration file path
    #[arg(short, long = "config", global = true, default_value = "sctmark.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Stderr logger with timestamps
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Start at info, the config may change the level once loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "sctmark", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load_or_default(&cli.config_path)
        .context(format!("Failed to load config file: {}", cli.config_path.display()))?;

    // The command line level wins over the config file
    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    match cli.command {
        Some(Commands::Render(args)) => run_render(args, config),
        Some(Commands::Check { input, ansi }) => run_check(input.as_deref(), ansi || config.render.convert_ansi),
        Some(Commands::Completions { .. }) => Ok(()),
        // Default behavior - top-level args render
        None => run_render(cli.render, config),
    }
}

/// Read the whole input, from a file or stdin
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .context(format!("Failed to read input file: {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn run_render(args: RenderArgs, mut config: Config) -> Result<()> {
    if let Some(mode) = args.close_mode {
        config.render.close_mode = mode.into();
    }
    if args.ansi {
        config.render.convert_ansi = true;
    }

    let mut text = read_input(args.input.as_deref())?;
    if config.render.convert_ansi {
        text = ansi_to_markup(&text);
    }

    debug!(
        "Rendering {} bytes with close mode {}",
        text.len(),
        config.render.close_mode
    );
    let renderer = Renderer::new(config.render.render_options());
    let html = renderer.render(&text);

    match args.output {
        Some(path) => {
            std::fs::write(&path, html)
                .context(format!("Failed to write output file: {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn run_check(input: Option<&Path>, convert_ansi: bool) -> Result<()> {
    let mut text = read_input(input)?;
    if convert_ansi {
        text = ansi_to_markup(&text);
    }

    let result = MarkupValidator::new().validate(&escape_html(&text));
    if result.passed {
        info!("No markup issues found");
        return Ok(());
    }

    for issue in &result.issues {
        println!("{}", issue);
    }

    Err(AppError::Markup {
        count: result.issues.len(),
    }
    .into())
}

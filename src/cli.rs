use std::io::{self, BufRead};

use twentyfour::game::{RandomDigits, Round};
use twentyfour::utils::parse_digits;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Twentyfour - Play one round of the 24 Game
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(
    about = "Deal four digits and check an expression that uses each of them once to make 24"
)]
#[command(version)]
pub struct CliArgs {
    /// Answer to check; read from stdin when omitted
    pub expression: Option<String>,

    /// Use these digits instead of dealing random ones (e.g. "8 4 7 4")
    #[arg(short, long)]
    pub digits: Option<String>,

    /// Seed for the digit generator
    #[arg(short, long, conflicts_with = "digits")]
    pub seed: Option<u64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub expression: Option<String>,
    pub digits: Option<[u8; 4]>,
    pub seed: Option<u64>,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let digits = args
        .digits
        .as_deref()
        .map(parse_digits)
        .transpose()
        .context("Invalid digit list")?;

    Ok(CliConfig {
        expression: args.expression,
        digits,
        seed: args.seed,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Deal the round described by the configuration
pub fn deal_round(config: &CliConfig) -> Result<Round> {
    let round = match (config.digits, config.seed) {
        (Some(digits), _) => Round::new(digits),
        (None, Some(seed)) => Round::generate(&mut RandomDigits::seeded(seed)),
        (None, None) => Round::generate(&mut RandomDigits::new()),
    };
    round.context("Failed to deal digits")
}

/// Run the main application logic, returning whether the answer made 24
pub fn run() -> Result<bool> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let round = deal_round(&config)?;
    info!("Dealt digits {:?}", round.digits());
    println!("{}", round.prompt());

    let answer = match config.expression {
        Some(expression) => expression,
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read expression from stdin")?;
            line
        }
    };

    let verdict = round.check(&answer);
    println!("{}", verdict.message());
    Ok(verdict.is_correct())
}

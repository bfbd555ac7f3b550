use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use groupings::{
    EvaluationStrategy, GroupingEvaluator, format_result_set, validate_expression,
};
use log::{info, warn};

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

/// How to walk the grouping tree
#[derive(Debug, Clone, ValueEnum)]
pub enum Strategy {
    Sequential,
    Parallel,
    Memoized,
}

impl Strategy {
    pub fn to_evaluation_strategy(&self) -> EvaluationStrategy {
        match self {
            Strategy::Sequential => EvaluationStrategy::Sequential,
            Strategy::Parallel => EvaluationStrategy::Parallel,
            Strategy::Memoized => EvaluationStrategy::Memoized,
        }
    }
}

/// Groupings - every value an expression takes under all possible parenthesizations
#[derive(Parser, Debug)]
#[command(name = "groupings")]
#[command(
    about = "Evaluate an arithmetic expression under every possible grouping of its operators"
)]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct CliArgs {
    /// Expression such as 2*3-4-5; several pieces are joined without spaces
    #[arg(required = true, num_args = 1..)]
    pub expression: Vec<String>,

    /// Evaluation strategy (default: sequential)
    #[arg(short, long, value_enum, default_value = "sequential")]
    pub strategy: Strategy,

    /// Print every grouping with its value instead of the bare result list
    #[arg(short, long)]
    pub groupings: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub expression: String,
    pub strategy: EvaluationStrategy,
    pub show_groupings: bool,
    pub log_level: LogLevel,
}

impl CliArgs {
    /// Join the expression pieces the way a shell splits `2 * 3 - 4`
    pub fn joined_expression(&self) -> String {
        self.expression.concat()
    }

    /// The expression is not validated here; that waits until logging is up
    pub fn into_config(self) -> CliConfig {
        CliConfig {
            expression: self.joined_expression(),
            strategy: self.strategy.to_evaluation_strategy(),
            show_groupings: self.groupings,
            log_level: self.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliArgs::parse().into_config()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    init_logging(&config.log_level)?;

    validate_expression(&config.expression)?;

    let evaluator = GroupingEvaluator::with_strategy(config.strategy);

    info!(
        "Evaluating every grouping of '{}' with the {} strategy",
        config.expression, config.strategy
    );

    if config.show_groupings {
        let groupings = evaluator
            .groupings(&config.expression)
            .with_context(|| format!("Failed to evaluate {}", config.expression))?;
        for grouping in &groupings {
            match grouping.evaluate() {
                Some(value) => println!("{} = {}", grouping, value),
                None => println!("{} = no result", grouping),
            }
        }
        return Ok(());
    }

    let results = evaluator
        .evaluate(&config.expression)
        .with_context(|| format!("Failed to evaluate {}", config.expression))?;

    if results.is_empty() {
        warn!("No grouping of '{}' has a result", config.expression);
    }
    println!("{}", format_result_set(&results));
    Ok(())
}

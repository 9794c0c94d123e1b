//! CLI entry point for the course grade calculator.
//!
//! Loads scores from a JSON file, applies the category weights and prints the
//! actual and optimistic course grade.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use course_grader::output::{log_pretty, write_json, write_text};
use course_grader::{CourseReport, GradeWeights, Grades};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "course_grader")]
#[command(about = "Compute an overall course grade from assignment scores", long_about = None)]
struct Cli {
    /// JSON file with scores for quiz_1, quiz_2, midterm, project and final
    #[arg(short, long, env = "GRADES_FILE", default_value = "grades.json")]
    grades: PathBuf,

    /// Optional JSON file overriding the default category weights
    #[arg(short, long, env = "GRADES_WEIGHTS_FILE")]
    weights: Option<PathBuf>,

    /// How to print the result
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Three human-readable summary lines
    Text,
    /// The full report as JSON
    Json,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _log_guard = init_logging();

    let cli = Cli::parse();

    let weights = match &cli.weights {
        Some(path) => GradeWeights::from_json_file(path)?,
        None => GradeWeights::default(),
    };
    debug!(total = weights.total(), "Using grade weights");

    let mut grades = Grades::new();
    grades.load_from_json(&cli.grades)?;

    let report = CourseReport::build(&grades, &weights);
    if report.is_complete() {
        info!(
            percentage = report.percentage,
            letter_grade = ?report.letter_grade,
            "Course grade calculated"
        );
    } else {
        info!(missing = ?report.missing, "Course grade incomplete");
    }
    log_pretty(&report);

    let mut stdout = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Text => write_text(&mut stdout, &report)?,
        OutputFormat::Json => write_json(&mut stdout, &report)?,
    }

    Ok(())
}

/// Logging setup: stderr layer, plus a JSON rolling log file when
/// `LOG_FILE_PATH` is set. The returned guard flushes the file on drop.
fn init_logging() -> Option<WorkerGuard> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", "warn"));

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let path = Path::new(&log_file_path);
            let log_dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let log_file_name = path
                .file_name()
                .unwrap_or(OsStr::new("course_grader.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(env_filter("RUST_LOG_JSON", "debug"));
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}

fn env_filter(var: &str, default: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(default))
}

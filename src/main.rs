use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use quizdocx::{
    ColorDepth, Config, ExportFormat, QuizDetails, QuizDocumentParser, QuizPayload,
    ansi::{AnsiOptions, export_to_ansi_with_options},
    export::{export_to_json, export_to_text},
    load_raw_text,
    quiz::{DiagnosticLevel, TracingSink, filter_valid},
};

#[derive(Parser)]
#[command(name = "quizdocx")]
#[command(about = "Extract multiple-choice quizzes from .docx documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the .docx or .txt quiz document
    #[arg(required_unless_present = "init_config")]
    file: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    /// Number of questions shown in previews
    #[arg(long)]
    limit: Option<usize>,

    /// Quiz title for the payload (defaults to the file name)
    #[arg(long)]
    title: Option<String>,

    /// Quiz description for the payload
    #[arg(long, default_value = "")]
    description: String,

    /// Course the quiz belongs to
    #[arg(long)]
    course_id: Option<String>,

    /// Keep incomplete questions in previews and JSON output (payloads are always strict)
    #[arg(long)]
    lenient: bool,

    /// Color depth for the ANSI preview
    #[arg(long, value_enum)]
    color_depth: Option<ColorDepth>,

    /// Print parser diagnostics to stderr
    #[arg(long)]
    diagnostics: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("quizdocx=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.init_config {
        match Config::init_default()? {
            Some(path) => println!("Wrote default config to {}", path.display()),
            None => bail!("Could not determine a config directory"),
        }
        return Ok(());
    }

    let Some(file_path) = cli.file.as_deref() else {
        bail!("No input file given");
    };

    let config = Config::load().unwrap_or_else(|err| {
        warn!("Ignoring unreadable config: {err}");
        Config::default()
    });

    let document = load_raw_text(file_path)
        .await
        .with_context(|| format!("Failed to read quiz from {}", file_path.display()))?;

    if document.is_blank() {
        bail!("No content found in {}", file_path.display());
    }

    let parser = QuizDocumentParser::new();
    let report = if cli.diagnostics {
        let (report, diagnostics) = parser.parse_with_diagnostics(&document.text);
        for diagnostic in diagnostics.at_least(DiagnosticLevel::Info) {
            eprintln!("{diagnostic}");
        }
        report
    } else {
        parser.parse_with_sink(&document.text, &mut TracingSink)
    };

    for outcome in report.outcomes.iter().filter(|outcome| outcome.is_skipped()) {
        debug!(block = outcome.block() + 1, "block produced no question");
    }

    if report.is_empty() {
        bail!(
            "No valid questions found in {}. Separate questions with blank lines and mark \
             options with A) to D)",
            file_path.display()
        );
    }

    info!(
        questions = report.questions.len(),
        skipped = report.skipped_count(),
        pass = ?report.pass,
        "parsed {}",
        document.title
    );

    let strict = config.output.strict && !cli.lenient;
    let format = cli.format.unwrap_or(config.output.format);
    let limit = cli.limit.unwrap_or(config.preview.limit);

    let questions = if strict && format != ExportFormat::Payload {
        let summary = filter_valid(report.questions);
        for (index, rejection) in &summary.rejected {
            warn!("Question {} dropped: {rejection}", index + 1);
        }
        if summary.accepted.is_empty() {
            bail!("No valid questions found in {}", file_path.display());
        }
        summary.accepted
    } else {
        report.questions
    };

    let output = match format {
        ExportFormat::Ansi => {
            let options = AnsiOptions {
                color_depth: cli.color_depth.unwrap_or(config.preview.color_depth),
                preview_limit: limit,
                ..AnsiOptions::default()
            };
            export_to_ansi_with_options(&questions, &options)?
        }
        ExportFormat::Text => export_to_text(&questions, limit)?,
        ExportFormat::Json => export_to_json(&questions, config.output.pretty)?,
        ExportFormat::Payload => {
            let details = QuizDetails {
                title: cli.title.unwrap_or_else(|| document.title.clone()),
                description: cli.description,
                course_id: cli.course_id,
            };
            let (payload, rejected) = QuizPayload::build(details, questions)?;
            for (index, rejection) in &rejected {
                warn!("Question {} dropped: {rejection}", index + 1);
            }
            payload.to_json(config.output.pretty)?
        }
    };

    println!("{output}");
    Ok(())
}

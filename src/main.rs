//! Maturity - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::Path;
use std::sync::Arc;

use maturity::{
    cli::{apply_answers, load_answers, Args, Commands, Config, OutputFormat},
    report::{ExportedReport, Report, ReportRenderer},
    repl::ReplSession,
    telemetry, AssessmentSession, Catalog,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve the active catalog: --catalog flag, then config, then built-in
fn load_catalog(args: &Args, config: &Config) -> Result<Arc<Catalog>> {
    let path = args.catalog.clone().or_else(|| config.catalog_path());
    match path {
        Some(path) => {
            let catalog = Catalog::load_from_file(&path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            Ok(Arc::new(catalog))
        }
        None => Ok(Catalog::builtin()),
    }
}

fn renderer(args: &Args, config: &Config) -> ReportRenderer {
    ReportRenderer::new(
        config.display.bar_width,
        config.display.color_output && !args.no_color,
    )
}

/// Run the interactive questionnaire
fn run_repl(args: &Args, config: &Config) -> Result<()> {
    let catalog = load_catalog(args, config)?;
    let mut repl_session =
        ReplSession::with_history(catalog, renderer(args, config), config.history_path())?
            .with_export_dir(config.state_dir().join("reports"));

    repl_session.show_welcome(VERSION);

    loop {
        match repl_session.read_input() {
            Ok(Some(input)) => {
                if input.is_empty() {
                    continue;
                }

                match repl_session.handle_input(&input) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(e) => repl_session.display().show_error(&format!("Error: {}", e)),
                }
            }
            Ok(None) => {
                // EOF (Ctrl-D) - exit gracefully
                break;
            }
            Err(e) => {
                if e.to_string().contains("Interrupted") {
                    println!("\nUse /exit to quit gracefully");
                    continue;
                } else {
                    return Err(e);
                }
            }
        }
    }

    if let Err(e) = repl_session.save() {
        tracing::warn!(error = %e, "failed to save history");
    }

    Ok(())
}

/// Build a report from an answers file
fn run_evaluate(
    args: &Args,
    config: &Config,
    answers: &Path,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let catalog = load_catalog(args, config)?;
    let entries = load_answers(answers)?;

    let mut session = AssessmentSession::new(catalog);
    apply_answers(&mut session, &entries)
        .with_context(|| format!("Invalid answers in {}", answers.display()))?;
    session.submit();

    let report = Report::build(&session);
    tracing::info!(
        answered = session.answered_count(),
        total = session.total_questions(),
        "evaluated answers file"
    );

    let text = match format {
        OutputFormat::Json => ExportedReport::new(report).to_json()?,
        OutputFormat::Text => renderer(args, config).render(&report),
    };

    match output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} Report written to {}", "✓".green(), path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}

fn show_catalog(args: &Args, config: &Config) -> Result<()> {
    let catalog = load_catalog(args, config)?;
    for (s, section) in catalog.iter().enumerate() {
        println!("\n{}", format!("{}. {}", s + 1, section.title).bold().cyan());
        for (q, question) in section.questions.iter().enumerate() {
            println!("  {}.{} {}", s + 1, q + 1, question.prompt);
            if let Some(gap) = &question.gap {
                println!("      {} {}", "gap:".dimmed(), gap.dimmed());
            }
        }
    }
    println!();
    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    let contents = config.to_toml_string()?;
    println!("{}", contents);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    let verbosity = args.verbosity(config.default_verbosity());
    telemetry::init(verbosity)?;

    if args.no_color || !config.display.color_output {
        colored::control::set_override(false);
    }

    match &args.command {
        Some(Commands::Start) => run_repl(&args, &config)?,
        Some(Commands::Evaluate { answers, format, output }) => {
            run_evaluate(&args, &config, answers, *format, output.as_deref())?
        }
        Some(Commands::Catalog) => show_catalog(&args, &config)?,
        Some(Commands::Config) => show_config(&config)?,
        None => {
            println!("Maturity v{} - Project Maturity Assessment", VERSION);
            println!("\nUsage:");
            println!("  maturity start                          Interactive questionnaire");
            println!("  maturity evaluate --answers <file>      Report from answers file");
            println!("  maturity catalog                        List questions");
            println!("  maturity config                         Show configuration");
            println!("\nExample:");
            println!("  maturity evaluate --answers answers.toml --format json");
            println!();
        }
    }

    Ok(())
}

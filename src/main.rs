use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use namesplit::cli::output::{self, OutputFormat, Report};
use namesplit::{Config, Importer, NameParser, ParsedRow};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(name = "namesplit")]
#[command(version, about = "Split homeowner names into titles, initials, first and last names", long_about = None)]
struct Cli {
    /// CSV files or directories to parse
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Output format (text, json, csv)
    #[arg(short = 'o', long, default_value = "text", global = true)]
    format: OutputFormat,

    /// CSV column holding the homeowner names
    #[arg(short, long, env = "NAMESPLIT_COLUMN")]
    column: Option<String>,

    /// Extra title to recognise (repeatable)
    #[arg(long = "title", value_name = "TITLE", global = true)]
    titles: Vec<String>,

    /// Extra connector word to recognise (repeatable)
    #[arg(long = "connector", value_name = "WORD", global = true)]
    connectors: Vec<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Show a progress bar while reading files
    #[arg(long)]
    progress: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse names given on the command line
    Parse {
        /// Homeowner strings, e.g. "Mr & Mrs Smith"
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Show the recognised titles and connectors
    Vocab,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "namesplit", &mut io::stdout());
        return Ok(());
    }

    init_logging(cli.verbose);

    let config = Config::load(
        cli.column.clone(),
        cli.titles.clone(),
        cli.connectors.clone(),
    )?;
    let parser = NameParser::new(config.vocabulary());
    let colored = !cli.no_color;

    if let Some(command) = cli.command {
        return handle_command(command, &parser, &cli.format, colored);
    }

    if cli.files.is_empty() {
        anyhow::bail!("No files specified. Use --help for usage information.");
    }

    let files = collect_inputs(&cli.files);

    let pb = if cli.progress {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")?,
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut reports = Vec::new();
    let mut failed = 0;

    for file_path in &files {
        pb.set_message(file_path.display().to_string());

        let importer = Importer::new(file_path).with_column(&config.column);
        match importer.run(&parser) {
            Ok(rows) => reports.push(Report {
                source: file_path.display().to_string(),
                rows,
            }),
            Err(e) => {
                pb.suspend(|| eprintln!("Error: {}", e));
                failed += 1;
            }
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    output::print_reports(&reports, colored, &cli.format)?;
    if cli.format == OutputFormat::Text {
        output::print_summary(&reports, failed, colored);
    }

    // Exit with appropriate code
    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn handle_command(
    command: Commands,
    parser: &NameParser,
    format: &OutputFormat,
    colored: bool,
) -> Result<()> {
    match command {
        Commands::Parse { names } => {
            let rows = names
                .iter()
                .enumerate()
                .map(|(index, name)| ParsedRow::new(index + 1, name, parser))
                .collect();
            let reports = [Report {
                source: "arguments".to_string(),
                rows,
            }];
            output::print_reports(&reports, colored, format)?;
        }
        Commands::Vocab => {
            output::print_vocabulary(parser.vocabulary(), colored);
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("namesplit={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Expand directories into the `.csv` files beneath them, sorted by path.
fn collect_inputs(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file() && is_csv(entry.path()))
                .map(|entry| entry.into_path())
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }

    files
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

use crate::{ParsedRow, PersonRecord, Vocabulary};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::io;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Parsed rows from one source: a file, or the command-line arguments.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: String,
    pub rows: Vec<ParsedRow>,
}

impl Report {
    pub fn people_count(&self) -> usize {
        self.rows.iter().map(|r| r.people.len()).sum()
    }
}

pub fn print_reports(reports: &[Report], colored_output: bool, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_reports(reports, colored_output);
            Ok(())
        }
        OutputFormat::Json => print_json_reports(reports),
        OutputFormat::Csv => write_csv_reports(reports, io::stdout().lock()),
    }
}

fn print_text_reports(reports: &[Report], colored_output: bool) {
    for report in reports {
        if colored_output {
            println!("\n{}", report.source.bold().underline());
        } else {
            println!("\n{}", report.source);
        }

        for row in &report.rows {
            let row_info = format!("{:>4}", row.row);
            if colored_output {
                println!("  {} {}", row_info.blue().bold(), row.homeowner.dimmed());
            } else {
                println!("  {} {}", row_info, row.homeowner);
            }

            for person in row.people.people() {
                if colored_output {
                    println!("       {} {}", "→".dimmed(), format_person(person, colored_output));
                } else {
                    println!("       → {}", format_person(person, colored_output));
                }
            }
        }
    }
}

fn format_person(person: &PersonRecord, colored: bool) -> String {
    let fields = [
        ("title", &person.title),
        ("initial", &person.initial),
        ("first", &person.first_name),
        ("last", &person.last_name),
    ];

    fields
        .iter()
        .map(|(label, value)| match (value.as_deref(), colored) {
            (Some(v), true) => format!("{}={}", label.dimmed(), v.green()),
            (Some(v), false) => format!("{}={}", label, v),
            (None, true) => format!("{}={}", label.dimmed(), "-".dimmed()),
            (None, false) => format!("{}=-", label),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_json_reports(reports: &[Report]) -> Result<()> {
    let json = serde_json::to_string_pretty(reports).context("Failed to serialize results")?;
    println!("{}", json);
    Ok(())
}

/// One line per person; `person` numbers people within a row from 1.
pub fn write_csv_reports<W: io::Write>(reports: &[Report], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record([
        "source",
        "row",
        "person",
        "title",
        "initial",
        "first_name",
        "last_name",
    ])?;

    for report in reports {
        for row in &report.rows {
            let row_number = row.row.to_string();
            for (index, person) in row.people.people().iter().enumerate() {
                let person_number = (index + 1).to_string();
                writer.write_record([
                    report.source.as_str(),
                    row_number.as_str(),
                    person_number.as_str(),
                    person.title.as_deref().unwrap_or_default(),
                    person.initial.as_deref().unwrap_or_default(),
                    person.first_name.as_deref().unwrap_or_default(),
                    person.last_name.as_deref().unwrap_or_default(),
                ])?;
            }
        }
    }

    writer.flush().context("Failed to write CSV output")?;
    Ok(())
}

pub fn print_summary(reports: &[Report], failed: usize, colored: bool) {
    let rows: usize = reports.iter().map(|r| r.rows.len()).sum();
    let people: usize = reports.iter().map(Report::people_count).sum();
    let people_word = if people == 1 { "person" } else { "people" };
    let row_word = if rows == 1 { "record" } else { "records" };
    let source_word = if reports.len() == 1 { "source" } else { "sources" };

    println!();
    if colored {
        println!(
            "{} {} {} parsed from {} {} in {} {}",
            "✓".green().bold(),
            people.to_string().green().bold(),
            people_word,
            rows,
            row_word,
            reports.len(),
            source_word
        );
    } else {
        println!(
            "✓ {} {} parsed from {} {} in {} {}",
            people,
            people_word,
            rows,
            row_word,
            reports.len(),
            source_word
        );
    }

    if failed > 0 {
        let file_word = if failed == 1 { "file" } else { "files" };
        if colored {
            println!("{} {} {} could not be read", "✗".red().bold(), failed.to_string().red().bold(), file_word);
        } else {
            println!("✗ {} {} could not be read", failed, file_word);
        }
    }
}

pub fn print_vocabulary(vocabulary: &Vocabulary, colored: bool) {
    let sections = [
        ("Titles", vocabulary.titles()),
        ("Connectors", vocabulary.connectors()),
    ];

    for (heading, words) in sections {
        if colored {
            println!("{}", format!("{}:", heading).bold());
        } else {
            println!("{}:", heading);
        }
        for word in words {
            if colored {
                println!("  {}", word.cyan());
            } else {
                println!("  {}", word);
            }
        }
    }
}

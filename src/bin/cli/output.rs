//! Output Formatting and Display Functions
//!
//! Colored text reports, the summary table and JSON output.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use harmonizer_rs::lang::python::AdapterStats;
use harmonizer_rs::{AnalysisReport, HarmonizerConfig, Severity, UnitReport};

#[derive(Tabled)]
struct SummaryRow {
    metric: String,
    value: String,
}

/// Print the human-readable report.
pub fn display_text_report(
    report: &AnalysisReport,
    stats: &AdapterStats,
    files: usize,
    show_all: bool,
) {
    println!("{}", "Harmonizer: intent vs. execution".bright_blue().bold());
    println!();

    let mut shown: Vec<&UnitReport> = if show_all {
        report.units.iter().collect()
    } else {
        report.disharmonious().collect()
    };
    shown.sort_by(|a, b| b.distance.total_cmp(&a.distance));

    if shown.is_empty() {
        println!("{}", "No disharmony found.".bright_green().bold());
        println!();
    }

    for unit in shown {
        display_unit(unit);
    }

    display_summary_table(report, stats, files);

    if stats.has_syntax_errors {
        println!(
            "{}",
            "Some files contain syntax errors; their results may be incomplete.".yellow()
        );
    }
}

fn display_unit(unit: &UnitReport) {
    let location = unit
        .location
        .as_ref()
        .map(|l| format!("{}:{}", l.file_path, l.line))
        .unwrap_or_default();

    println!(
        "{} {} {}",
        severity_badge(unit.severity),
        unit.qualified_name().bold(),
        location.dimmed()
    );
    println!(
        "    distance {:.2}  intent {}  execution {}",
        unit.distance, unit.intent.coordinate, unit.execution.coordinate
    );
    if unit.is_low_confidence() {
        println!("    {}", "low confidence: one side resolved no concepts".dimmed());
    }

    let trajectory = &unit.trajectory;
    if trajectory.from.is_some() || trajectory.to.is_some() {
        println!("    {} {}", trajectory.trajectory().cyan(), trajectory.interpretation);
        for recommendation in &trajectory.recommendations {
            println!("      - {}", recommendation);
        }
    }

    if !unit.naming_suggestions.is_empty() {
        let names: Vec<String> = unit
            .naming_suggestions
            .iter()
            .map(|s| format!("{} ({:.2})", s.name, s.similarity))
            .collect();
        println!("    {} {}", "try:".green(), names.join(", "));
    }
    println!();
}

fn severity_badge(severity: Severity) -> String {
    let label = format!("[{}]", severity.label().to_uppercase());
    match severity {
        Severity::Critical => label.red().bold().to_string(),
        Severity::Attention => label.yellow().bold().to_string(),
        Severity::Review => label.magenta().to_string(),
        Severity::Harmonious => label.green().to_string(),
        Severity::Excellent => label.bright_green().to_string(),
    }
}

fn display_summary_table(report: &AnalysisReport, stats: &AdapterStats, files: usize) {
    let summary = &report.summary;
    let worst = summary
        .worst_severity
        .map_or_else(|| "none".to_string(), |s| s.label().to_string());

    let mut rows = vec![
        SummaryRow {
            metric: "Files".to_string(),
            value: files.to_string(),
        },
        SummaryRow {
            metric: "Functions".to_string(),
            value: summary.total_units.to_string(),
        },
        SummaryRow {
            metric: "Disharmonious".to_string(),
            value: format!("{} (threshold {:.2})", summary.disharmonious, summary.threshold),
        },
        SummaryRow {
            metric: "Worst Severity".to_string(),
            value: worst,
        },
        SummaryRow {
            metric: "Mean Distance".to_string(),
            value: format!("{:.3}", summary.mean_distance),
        },
        SummaryRow {
            metric: "Max Distance".to_string(),
            value: format!("{:.3}", summary.max_distance),
        },
    ];

    for severity in Severity::ALL {
        rows.push(SummaryRow {
            metric: format!("  {}", severity.label()),
            value: summary.severity_counts.get(severity).to_string(),
        });
    }

    if summary.low_confidence > 0 {
        rows.push(SummaryRow {
            metric: "Low Confidence".to_string(),
            value: summary.low_confidence.to_string(),
        });
    }
    if stats.total_unrecognized() > 0 {
        rows.push(SummaryRow {
            metric: "Unmapped Syntax Nodes".to_string(),
            value: stats.total_unrecognized().to_string(),
        });
    }

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
    println!();
}

/// Print the report as JSON on stdout.
pub fn print_json_report(report: &AnalysisReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Print the settings a validated configuration resolves to.
pub fn display_config_summary(config: &HarmonizerConfig, lexicon_entries: usize) {
    let rows = vec![
        SummaryRow {
            metric: "threshold".to_string(),
            value: format!("{}", config.threshold),
        },
        SummaryRow {
            metric: "analysis.include_docs".to_string(),
            value: config.analysis.include_docs.to_string(),
        },
        SummaryRow {
            metric: "analysis.parallel".to_string(),
            value: config.analysis.parallel.to_string(),
        },
        SummaryRow {
            metric: "analysis.memoize".to_string(),
            value: config.analysis.memoize.to_string(),
        },
        SummaryRow {
            metric: "naming.enabled".to_string(),
            value: config.naming.enabled.to_string(),
        },
        SummaryRow {
            metric: "naming.top_n".to_string(),
            value: config.naming.top_n.to_string(),
        },
        SummaryRow {
            metric: "naming.extra_verbs".to_string(),
            value: config.naming.extra_verbs.len().to_string(),
        },
        SummaryRow {
            metric: "lexicon.files".to_string(),
            value: config.lexicon.files.len().to_string(),
        },
        SummaryRow {
            metric: "lexicon entries (merged)".to_string(),
            value: lexicon_entries.to_string(),
        },
    ];

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
}

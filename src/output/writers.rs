//! Display-surface writers for the assembled insight bundle.
//!
//! Writers render read-only values; every analytic decision has already
//! been made by the time an insight bundle reaches this module.

use colored::*;
use comfy_table::Table;
use std::io::Write;

use crate::core::FunnelInsights;
use crate::formatting::{format_number, format_percent, format_period};

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait InsightWriter {
    fn write_insights(&mut self, insights: &FunnelInsights) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> InsightWriter for JsonWriter<W> {
    fn write_insights(&mut self, insights: &FunnelInsights) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(insights)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> InsightWriter for MarkdownWriter<W> {
    fn write_insights(&mut self, insights: &FunnelInsights) -> anyhow::Result<()> {
        self.write_header(insights)?;
        self.write_summary(insights)?;
        self.write_stages(insights)?;
        self.write_drop_offs(insights)?;
        self.write_decline_reasons(insights)?;
        self.write_blockers(insights)?;
        self.write_action_items(insights)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, insights: &FunnelInsights) -> anyhow::Result<()> {
        writeln!(self.writer, "# Funnel Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Period: {}",
            format_period(insights.report.date_from, insights.report.date_to)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, insights: &FunnelInsights) -> anyhow::Result<()> {
        let report = &insights.report;

        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Total leads | {} |",
            format_number(report.total_leads as f64, 0)
        )?;
        writeln!(
            self.writer,
            "| Converted | {} |",
            format_number(report.converted_leads as f64, 0)
        )?;
        writeln!(
            self.writer,
            "| Declined | {} |",
            format_number(report.declined_leads as f64, 0)
        )?;
        writeln!(
            self.writer,
            "| Conversion rate | {} |",
            format_percent(report.conversion_rate, 1)
        )?;
        writeln!(self.writer)?;

        if !insights.reason_share_check.ok {
            writeln!(
                self.writer,
                "> Warning: decline reason shares are off 100% by {}.",
                format_percent(insights.reason_share_check.diff, 1)
            )?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_stages(&mut self, insights: &FunnelInsights) -> anyhow::Result<()> {
        writeln!(self.writer, "## Pipeline Stages")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Stage | Leads | Share of total |")?;
        writeln!(self.writer, "|-------|-------|----------------|")?;
        for stage in &insights.report.stages {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                stage.name,
                format_number(stage.count as f64, 0),
                format_percent(stage.percentage, 1)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_drop_offs(&mut self, insights: &FunnelInsights) -> anyhow::Result<()> {
        if insights.drop_offs.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Drop-Off Between Stages")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| From | To | Lost | Rate |")?;
        writeln!(self.writer, "|------|----|------|------|")?;
        for drop in &insights.drop_offs {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                drop.from,
                drop.to,
                drop.drop_count,
                format_percent(drop.drop_rate, 1)
            )?;
        }
        writeln!(self.writer)?;

        if let Some(largest) = &insights.largest_drop_off {
            writeln!(
                self.writer,
                "Largest drop-off: **{} → {}** ({} leads, {}).",
                largest.from,
                largest.to,
                largest.drop_count,
                format_percent(largest.drop_rate, 1)
            )?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_decline_reasons(&mut self, insights: &FunnelInsights) -> anyhow::Result<()> {
        if insights.report.declined_reasons.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Decline Reasons")?;
        writeln!(self.writer)?;
        for reason in &insights.report.declined_reasons {
            writeln!(
                self.writer,
                "- {} — {} ({})",
                reason.reason,
                format_number(reason.count as f64, 0),
                format_percent(reason.percentage, 1)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_blockers(&mut self, insights: &FunnelInsights) -> anyhow::Result<()> {
        if insights.blockers.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Detected Blockers")?;
        writeln!(self.writer)?;
        for blocker in &insights.blockers {
            writeln!(self.writer, "- {}", blocker.label())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_action_items(&mut self, insights: &FunnelInsights) -> anyhow::Result<()> {
        writeln!(self.writer, "## Recommended Actions")?;
        writeln!(self.writer)?;
        for (i, item) in insights.action_items.iter().enumerate() {
            writeln!(self.writer, "{}. {}", i + 1, item)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl InsightWriter for TerminalWriter {
    fn write_insights(&mut self, insights: &FunnelInsights) -> anyhow::Result<()> {
        print_header(insights);
        print_stage_table(insights);
        print_drop_offs(insights);
        print_blockers(insights);
        print_action_items(insights);
        Ok(())
    }
}

fn print_header(insights: &FunnelInsights) {
    let report = &insights.report;
    println!("{}", "Funnel Report".bold().blue());
    println!("{}", "=============".blue());
    println!(
        "Period: {}",
        format_period(report.date_from, report.date_to)
    );
    println!(
        "Leads: {}  Converted: {}  Declined: {}  Conversion: {}",
        format_number(report.total_leads as f64, 0),
        format_number(report.converted_leads as f64, 0),
        format_number(report.declined_leads as f64, 0),
        format_percent(report.conversion_rate, 1).green()
    );
    if !insights.reason_share_check.ok {
        println!(
            "{} decline reason shares are off 100% by {}",
            "warning:".yellow().bold(),
            format_percent(insights.reason_share_check.diff, 1)
        );
    }
    println!();
}

fn print_stage_table(insights: &FunnelInsights) {
    let mut table = Table::new();
    table.set_header(vec!["Stage", "Leads", "Share of total"]);
    for stage in &insights.report.stages {
        table.add_row(vec![
            stage.name.clone(),
            format_number(stage.count as f64, 0),
            format_percent(stage.percentage, 1),
        ]);
    }
    println!("{table}");
    println!();
}

fn print_drop_offs(insights: &FunnelInsights) {
    let Some(largest) = &insights.largest_drop_off else {
        return;
    };
    println!(
        "Largest drop-off: {} → {} ({} leads, {})",
        largest.from.yellow(),
        largest.to.yellow(),
        largest.drop_count.to_string().red(),
        format_percent(largest.drop_rate, 1).red()
    );
    println!();
}

fn print_blockers(insights: &FunnelInsights) {
    if insights.blockers.is_empty() {
        return;
    }
    println!("{}", "Blockers detected in notes:".bold());
    for blocker in &insights.blockers {
        println!("  - {}", blocker.label());
    }
    println!();
}

fn print_action_items(insights: &FunnelInsights) {
    println!("{}", "Recommended actions:".bold());
    for (i, item) in insights.action_items.iter().enumerate() {
        println!("  {}. {}", i + 1, item);
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn InsightWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

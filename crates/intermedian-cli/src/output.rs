//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use intermedian_domain::{Analysis, Interval, Outcome};
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a full analysis.
    pub fn format_analysis(&self, intervals: &[Interval], analysis: &Analysis) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_analysis_json(intervals, analysis),
            OutputFormat::Table => Ok(self.format_analysis_table(intervals, analysis)),
            OutputFormat::Quiet => Ok(self.format_analysis_quiet(analysis)),
        }
    }

    /// Format a partition with its frequencies.
    pub fn format_partition(&self, subintervals: &[Interval], frequencies: &[usize]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "subintervals": subintervals_json(subintervals, frequencies),
                "frequencies": frequencies,
            }))?),
            OutputFormat::Table => Ok(self.format_partition_table(subintervals, frequencies)),
            OutputFormat::Quiet => Ok(subintervals
                .iter()
                .zip(frequencies)
                .map(|(sub, freq)| format!("{}\t{}", sub, freq))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the result of a `calc` evaluation.
    pub fn format_outcome(&self, outcome: &Outcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = match outcome {
                    Outcome::Interval(interval) => interval_json(interval),
                    Outcome::Bool(b) => json!(b),
                    Outcome::Number(n) => json!(n),
                };
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table | OutputFormat::Quiet => Ok(outcome.to_string()),
        }
    }

    /// Format an analysis as JSON.
    fn format_analysis_json(&self, intervals: &[Interval], analysis: &Analysis) -> Result<String> {
        let document = json!({
            "intervals": intervals.iter().map(interval_json).collect::<Vec<_>>(),
            "subintervals": subintervals_json(&analysis.subintervals, &analysis.frequencies),
            "frequencies": analysis.frequencies,
            "frequencyMedian": interval_json(&analysis.frequency_median),
            "distanceMedian": interval_json(&analysis.distance_median),
            "distanceFrequencyMedian": interval_json(&analysis.distance_frequency_median),
        });

        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Format an analysis as tables.
    fn format_analysis_table(&self, intervals: &[Interval], analysis: &Analysis) -> String {
        let header = self.colorize(
            &format!(
                "{} intervals, {} subintervals",
                intervals.len(),
                analysis.subintervals.len()
            ),
            "cyan",
        );

        let mut builder = Builder::default();
        builder.push_record(["Median", "Criterion", "Min", "Max", "Mid", "Rad"]);
        let criteria = ["cumulative frequency", "distance to intervals", "weighted distance"];
        for ((label, median), criterion) in analysis.medians().into_iter().zip(criteria) {
            builder.push_record([
                label.to_string(),
                criterion.to_string(),
                median.min().to_string(),
                median.max().to_string(),
                median.mid().to_string(),
                median.rad().to_string(),
            ]);
        }

        format!(
            "{}\n{}\n{}",
            header,
            self.format_partition_table(&analysis.subintervals, &analysis.frequencies),
            styled(builder)
        )
    }

    /// Format a partition as a table.
    fn format_partition_table(&self, subintervals: &[Interval], frequencies: &[usize]) -> String {
        if subintervals.is_empty() {
            return self.colorize("No subintervals.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Min", "Max", "Mid", "Rad", "Frequency"]);
        for (idx, (sub, freq)) in subintervals.iter().zip(frequencies).enumerate() {
            builder.push_record([
                idx.to_string(),
                sub.min().to_string(),
                sub.max().to_string(),
                sub.mid().to_string(),
                sub.rad().to_string(),
                freq.to_string(),
            ]);
        }
        styled(builder)
    }

    /// Format an analysis in quiet mode (one median per line).
    fn format_analysis_quiet(&self, analysis: &Analysis) -> String {
        analysis
            .medians()
            .iter()
            .map(|(_, median)| median.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

/// JSON representation of an interval.
pub fn interval_json(interval: &Interval) -> Value {
    json!({
        "mid": interval.mid(),
        "rad": interval.rad(),
        "min": interval.min(),
        "max": interval.max(),
    })
}

fn subintervals_json(subintervals: &[Interval], frequencies: &[usize]) -> Vec<Value> {
    subintervals
        .iter()
        .zip(frequencies)
        .map(|(sub, freq)| {
            let mut value = interval_json(sub);
            value["frequency"] = json!(freq);
            value
        })
        .collect()
}

//! Presentation-ready views of an `AnalysisResult`.
//!
//! Shells render these however they like (terminal, web table, bar chart); the
//! numbers and their ordering are decided here so every shell shows the same thing.

use itertools::Itertools;
use serde::Serialize;
use std::fmt;

use crate::models::results::{AnalysisResult, RegionResult, ScoreTone};

/// One line of a per-region table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub indicator: String,
    pub previous: f64,
    pub forecast: f64,
    pub actual: f64,
    pub weight: f64,
    pub effect: &'static str,
    pub score: f64,
    pub tone: ScoreTone,
}

/// One bar of the horizontal indicator chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub indicator: String,
    pub score: f64,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub summary: Vec<String>,
    pub region1_title: String,
    pub region1_rows: Vec<TableRow>,
    pub region2_title: String,
    pub region2_rows: Vec<TableRow>,
    /// Both regions, ascending by score
    pub chart: Vec<ChartRow>,
}

impl AnalysisReport {
    pub fn new(result: &AnalysisResult) -> Self {
        Self {
            summary: summary_lines(result),
            region1_title: format!("Region 1 details: {}", result.region1.region_name),
            region1_rows: table_rows(&result.region1),
            region2_title: format!("Region 2 details: {}", result.region2.region_name),
            region2_rows: table_rows(&result.region2),
            chart: chart_rows(result),
        }
    }
}

pub fn summary_lines(result: &AnalysisResult) -> Vec<String> {
    vec![
        format!("Pair analysed: {}", result.pair_name),
        format!("Total score: {:.2}", result.total_score),
        format!("Statement sentiment: {}", result.sentiment.label),
        format!("Recommended decision: {}", result.decision),
        format!(
            "Estimated trend duration: {:.1} hours ({})",
            result.duration_hours, result.duration_label
        ),
    ]
}

pub fn table_rows(region: &RegionResult) -> Vec<TableRow> {
    region
        .indicator_scores
        .iter()
        .map(|s| TableRow {
            indicator: s.indicator.name.clone(),
            previous: s.observation.previous,
            forecast: s.observation.forecast,
            actual: s.observation.actual,
            weight: s.indicator.weight,
            effect: s.indicator.typical_effect.symbol(),
            score: s.value,
            tone: s.tone(),
        })
        .collect()
}

/// Bars for both regions, sorted by score. The sort is stable, so equal scores
/// keep catalog order with region 1 first.
pub fn chart_rows(result: &AnalysisResult) -> Vec<ChartRow> {
    [&result.region1, &result.region2]
        .into_iter()
        .flat_map(|region| {
            region.indicator_scores.iter().map(move |s| ChartRow {
                indicator: s.indicator.name.clone(),
                score: s.value,
                region: region.region_name.clone(),
            })
        })
        .sorted_by(|a, b| a.score.total_cmp(&b.score))
        .collect()
}

fn tone_marker(tone: ScoreTone) -> &'static str {
    match tone {
        ScoreTone::Positive => "🟢",
        ScoreTone::Negative => "🔴",
        ScoreTone::Zero => "  ",
    }
}

fn write_table(f: &mut fmt::Formatter<'_>, title: &str, rows: &[TableRow]) -> fmt::Result {
    writeln!(f, "### {}", title)?;
    writeln!(
        f,
        "{:<42} {:>10} {:>10} {:>10} {:>6} {:>3} {:>11}",
        "Indicator", "Previous", "Forecast", "Actual", "Weight", "", "Score"
    )?;
    for row in rows {
        writeln!(
            f,
            "{:<42} {:>10.2} {:>10.2} {:>10.2} {:>6.1} {:>3} {:>9.2} {}",
            row.indicator,
            row.previous,
            row.forecast,
            row.actual,
            row.weight,
            row.effect,
            row.score,
            tone_marker(row.tone)
        )?;
    }
    Ok(())
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Analysis result")?;
        for line in &self.summary {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        write_table(f, &self.region1_title, &self.region1_rows)?;
        writeln!(f)?;
        write_table(f, &self.region2_title, &self.region2_rows)?;
        writeln!(f)?;
        writeln!(f, "### Indicator impact by region")?;
        for row in self.chart.iter().filter(|row| row.score != 0.0) {
            writeln!(f, "{:>+9.2}  {:<42} [{}]", row.score, row.indicator, row.region)?;
        }
        Ok(())
    }
}

//! Bar charts of the top-ranked composite scores.
//!
//! Two renderings of the same chart: a fixed-width text chart for the
//! terminal and an SVG file drawn with `plotters`. Bars are labelled by
//! company name, highest score on top.

use crate::export::ExportError;
use fundamenta_scoring::{MAX_SCORE, MIN_SCORE, RankedEntry};
use plotters::prelude::*;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::info;

const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);

/// Options shared by both chart renderings.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Chart title
    pub title: String,
    /// Width of the longest text bar in characters
    pub text_width: usize,
    /// SVG width in pixels
    pub svg_width: u32,
    /// SVG height per bar in pixels
    pub svg_bar_height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Top stocks by fundamental score".to_string(),
            text_width: 40,
            svg_width: 1000,
            svg_bar_height: 48,
        }
    }
}

fn label(entry: &RankedEntry) -> String {
    let company = &entry.company;
    if company.name == company.symbol {
        company.symbol.clone()
    } else {
        format!("{} ({})", company.name, company.symbol)
    }
}

fn chart_error(e: impl Display) -> ExportError {
    ExportError::Chart(e.to_string())
}

/// Render a horizontal text bar chart.
pub fn render_text(entries: &[RankedEntry], options: &ChartOptions) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", options.title));
    output.push_str(&"=".repeat(options.text_width + 40));
    output.push('\n');

    if entries.is_empty() {
        output.push_str("(no companies ranked)\n");
        return output;
    }

    let labels: Vec<String> = entries.iter().map(label).collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0).min(32);

    for (entry, label) in entries.iter().zip(&labels) {
        let share = (entry.composite() - MIN_SCORE) / (MAX_SCORE - MIN_SCORE);
        let filled = (share * options.text_width as f64).round() as usize;
        let filled = filled.min(options.text_width);
        let label: String = label.chars().take(label_width).collect();
        output.push_str(&format!(
            "{:<width$} |{}{} {:.1}\n",
            label,
            "#".repeat(filled),
            " ".repeat(options.text_width - filled),
            entry.composite(),
            width = label_width
        ));
    }

    output
}

/// Render the chart as an SVG document.
pub fn render_svg(entries: &[RankedEntry], options: &ChartOptions) -> Result<String, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::Chart("no companies to plot".to_string()));
    }

    let n = entries.len();
    // Row 0 is the bottom of the plot, so rank 1 goes last.
    let labels: Vec<String> = entries.iter().rev().map(label).collect();
    let height = 160 + options.svg_bar_height * n as u32;

    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (options.svg_width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&options.title, ("sans-serif", 24).into_font())
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(260)
            .build_cartesian_2d(MIN_SCORE..MAX_SCORE + 1.0, (0..n).into_segmented())
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc("Score")
            .y_desc("Company")
            .y_labels(n)
            .y_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(
                Histogram::horizontal(&chart)
                    .style(BAR_COLOR.filled())
                    .margin(6)
                    .data(
                        entries
                            .iter()
                            .rev()
                            .enumerate()
                            .map(|(i, e)| (i, e.composite())),
                    ),
            )
            .map_err(chart_error)?;

        chart
            .draw_series(entries.iter().rev().enumerate().map(|(i, e)| {
                Text::new(
                    format!("{:.1}", e.composite()),
                    (e.composite() + 0.1, SegmentValue::CenterOf(i)),
                    ("sans-serif", 14).into_font(),
                )
            }))
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
    }

    Ok(svg)
}

/// Render the chart and write it to `path`.
pub fn write_svg(
    entries: &[RankedEntry],
    options: &ChartOptions,
    path: &Path,
) -> Result<(), ExportError> {
    let svg = render_svg(entries, options)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, svg)?;
    info!(path = %path.display(), bars = entries.len(), "chart saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundamenta_ratios::{RatioKind, RatioSet};
    use fundamenta_scoring::{RankedResult, Ranker, ScoredCompany, Scorer, ScoringConfig};

    fn ranked() -> RankedResult {
        let scorer = Scorer::new(ScoringConfig::default()).unwrap();
        let make = |symbol: &str, name: &str, pe: f64| {
            let ratios = RatioSet::empty().with(RatioKind::PriceEarnings, pe);
            ScoredCompany {
                symbol: symbol.to_string(),
                name: name.to_string(),
                sector: "Energy".to_string(),
                score: scorer.score(&ratios),
                ratios,
            }
        };
        Ranker::default().rank(vec![
            make("XOM", "Exxon Mobil", 9.0),
            make("CVX", "CVX", 40.0),
        ])
    }

    #[test]
    fn test_text_chart() {
        let result = ranked();
        let text = render_text(result.entries(), &ChartOptions::default());
        let lines: Vec<&str> = text.lines().filter(|l| l.contains('|')).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Exxon Mobil (XOM)"));
        assert!(lines[0].ends_with("6.0"));
        assert!(lines[1].starts_with("CVX "));
        // Longer bar for the higher score.
        let bar = |l: &str| l.matches('#').count();
        assert!(bar(lines[0]) > bar(lines[1]));
    }

    #[test]
    fn test_text_chart_empty() {
        let text = render_text(&[], &ChartOptions::default());
        assert!(text.contains("no companies ranked"));
    }

    #[test]
    fn test_svg_chart() {
        let result = ranked();
        let svg = render_svg(result.entries(), &ChartOptions::default()).unwrap();
        assert!(svg.contains("<svg"));
        // Text content sits on its own line after the opening tag.
        assert!(svg.lines().any(|l| l.trim() == "6.0"));
        assert!(svg.contains("Top stocks by fundamental score"));
    }

    #[test]
    fn test_svg_chart_requires_entries() {
        assert!(matches!(
            render_svg(&[], &ChartOptions::default()),
            Err(ExportError::Chart(_))
        ));
    }
}

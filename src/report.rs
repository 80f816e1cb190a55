//! Collection report assembly and rendering.
//!
//! Gathers every statistic into one owned, serializable structure and
//! renders it as human-readable text or JSON.

use crate::collection::CellCollection;
use crate::config::StatsConfig;
use crate::error::Result;
use crate::models::{Cell, PhoneDetails, YearCounts};
use crate::stats;
use colored::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Phone count and latest model for one OEM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OemSummary {
    pub oem: String,
    pub phone_count: usize,
    pub latest_model: String,
}

/// Every statistic computed over a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionReport {
    pub total_phones: usize,
    pub sample_key: String,
    pub sample: Option<Cell>,
    pub average_weight: f32,
    pub average_display_size: f32,
    pub unique_os_count: usize,
    pub one_sensor_count: usize,
    pub heaviest: Option<Cell>,
    pub lightest: Option<Cell>,
    pub average_weight_by_oem: BTreeMap<String, f32>,
    pub oem_with_highest_average_weight: Option<String>,
    pub year_counts: YearCounts,
    pub most_launches_in_2000s: Option<u32>,
    pub oems: Vec<OemSummary>,
    pub announced_released_different_years: Vec<PhoneDetails>,
}

impl CollectionReport {
    /// Compute all statistics for a collection
    pub fn build(cells: &CellCollection, config: &StatsConfig) -> Self {
        let sample = cells.get(&config.sample_key).cloned();
        if sample.is_none() {
            warn!("Sample phone '{}' not found in dataset", config.sample_key);
        }

        let extremes = stats::find_heaviest_and_lightest_phones(cells);
        let year_counts = stats::count_phones_by_year(cells);
        let most_launches_in_2000s = stats::find_most_launches_in_2000s(&year_counts);

        let latest = stats::find_latest_phone_by_oem(cells);
        let oems = stats::count_phones_by_oem(cells)
            .into_iter()
            .map(|(oem, phone_count)| {
                let latest_model = latest
                    .get(&oem)
                    .map(|cell| cell.model.clone())
                    .unwrap_or_default();
                OemSummary {
                    oem,
                    phone_count,
                    latest_model,
                }
            })
            .collect();

        let report = Self {
            total_phones: cells.len(),
            sample_key: config.sample_key.clone(),
            sample,
            average_weight: stats::average_weight(cells),
            average_display_size: stats::average_display_size(cells),
            unique_os_count: stats::count_unique_os(cells),
            one_sensor_count: stats::count_phones_with_one_sensor(cells),
            heaviest: extremes.heaviest.cloned(),
            lightest: extremes.lightest.cloned(),
            average_weight_by_oem: stats::average_weight_by_oem(cells),
            oem_with_highest_average_weight: stats::find_oem_with_highest_average_weight(cells),
            year_counts,
            most_launches_in_2000s,
            oems,
            announced_released_different_years:
                stats::find_phones_announced_and_released_different_years(cells),
        };

        debug!(
            "Built report for {} phones across {} OEMs",
            report.total_phones,
            report.oems.len()
        );
        report
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Human => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
        }
    }

    /// Render as pretty-printed JSON
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as human-readable text
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CollectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "Sample Cell Phone Output:".bright_green().bold())?;
        match &self.sample {
            Some(cell) => writeln!(f, "{}", cell)?,
            None => writeln!(f, "No phone found for '{}'", self.sample_key)?,
        }
        writeln!(f)?;

        writeln!(f, "{}", "Collection Statistics:".bright_green().bold())?;
        writeln!(f, "Total phones: {}", self.total_phones)?;
        writeln!(f, "Average cell weight: {:.2} g", self.average_weight)?;
        writeln!(f, "Average cell size: {:.2} in", self.average_display_size)?;
        writeln!(
            f,
            "Number of Unique Operating Systems: {}",
            self.unique_os_count
        )?;
        writeln!(
            f,
            "There are {} phones with only one feature sensor.",
            self.one_sensor_count
        )?;
        writeln!(f, "Heaviest Phone: {}", describe_weight(self.heaviest.as_ref()))?;
        writeln!(f, "Lightest Phone: {}", describe_weight(self.lightest.as_ref()))?;
        writeln!(f)?;

        writeln!(
            f,
            "The OEM with the highest average phone body weight is: {}",
            self.oem_with_highest_average_weight
                .as_deref()
                .unwrap_or("none")
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{}",
            "Number of cell announcements by year:".bright_green().bold()
        )?;
        for year in &self.year_counts.years {
            writeln!(f, "{}: {}", year, self.year_counts.count_for(*year))?;
        }
        match self.most_launches_in_2000s {
            Some(year) => writeln!(
                f,
                "The year with the most phone launches in the 2000s was {}.",
                year
            )?,
            None => writeln!(f, "No phones were announced in the 2000s.")?,
        }
        writeln!(f)?;

        writeln!(
            f,
            "{}",
            "Count of phones and the latest model by each OEM:"
                .bright_green()
                .bold()
        )?;
        writeln!(f, "{:<15} {:<10} {:<25}", "OEM", "Count", "Latest Model")?;
        for summary in &self.oems {
            writeln!(
                f,
                "{:<15} {:<10} {:<25}",
                summary.oem, summary.phone_count, summary.latest_model
            )?;
        }
        writeln!(f)?;

        if self.announced_released_different_years.is_empty() {
            writeln!(
                f,
                "No phones were announced and released in different years."
            )
        } else {
            writeln!(
                f,
                "{}",
                "The following phones were announced and released in different years:"
                    .bright_green()
                    .bold()
            )?;
            for phone in &self.announced_released_different_years {
                writeln!(f, "{}", phone)?;
            }
            Ok(())
        }
    }
}

fn describe_weight(cell: Option<&Cell>) -> String {
    match cell {
        Some(cell) => format!(
            "{}'s {}, {:.2} g",
            cell.oem,
            cell.model,
            cell.body_weight.unwrap_or(0.0)
        ),
        None => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::cell_from_fields;

    fn row<'a>(
        oem: &'a str,
        model: &'a str,
        announced: &'a str,
        status: &'a str,
        weight: &'a str,
        os: &'a str,
    ) -> [&'a str; 12] {
        [
            oem, model, announced, status, "-", weight, "Nano-SIM", "OLED", "6.1 inches", "-",
            "Accelerometer", os,
        ]
    }

    fn sample_collection() -> CellCollection {
        let rows = [
            row("Google", "Pixel 4 XL", "2019", "Available. Released 2019, October", "193 g", "Android 10"),
            row("Google", "Pixel 3", "2018", "Available. Released 2018, October", "148 g", "Android 9.0"),
            row("Apple", "iPhone 11", "2019", "Available. Released 2019, September", "194 g", "iOS 13"),
            row("Nokia", "N95", "2006", "Discontinued. Released 2007, March", "120 g", "Symbian"),
        ];
        rows.iter()
            .enumerate()
            .map(|(i, fields)| cell_from_fields(fields, i as u64 + 2).unwrap())
            .collect()
    }

    #[test]
    fn test_build_report() {
        let report = CollectionReport::build(&sample_collection(), &StatsConfig::default());

        assert_eq!(report.total_phones, 4);
        assert_eq!(report.sample.as_ref().unwrap().model, "Pixel 4 XL");
        assert_eq!(report.unique_os_count, 4);
        assert_eq!(report.one_sensor_count, 4);
        assert_eq!(report.heaviest.as_ref().unwrap().model, "iPhone 11");
        assert_eq!(report.lightest.as_ref().unwrap().model, "N95");
        assert_eq!(report.oem_with_highest_average_weight.as_deref(), Some("Apple"));
        assert_eq!(report.year_counts.years, vec![2006, 2018, 2019]);
        assert_eq!(report.most_launches_in_2000s, Some(2006));
        assert_eq!(
            report.oems,
            vec![
                OemSummary {
                    oem: "Apple".to_string(),
                    phone_count: 1,
                    latest_model: "iPhone 11".to_string()
                },
                OemSummary {
                    oem: "Google".to_string(),
                    phone_count: 2,
                    latest_model: "Pixel 4 XL".to_string()
                },
                OemSummary {
                    oem: "Nokia".to_string(),
                    phone_count: 1,
                    latest_model: "N95".to_string()
                },
            ]
        );
        assert_eq!(report.announced_released_different_years.len(), 1);
        assert_eq!(report.announced_released_different_years[0].model, "N95");
    }

    #[test]
    fn test_build_report_missing_sample() {
        let config = StatsConfig::default().with_sample_key("Sony-Xperia 1");
        let report = CollectionReport::build(&sample_collection(), &config);

        assert!(report.sample.is_none());
        assert!(report.render_text().contains("No phone found for 'Sony-Xperia 1'"));
    }

    #[test]
    fn test_build_report_empty_collection() {
        let report = CollectionReport::build(&CellCollection::new(), &StatsConfig::default());

        assert_eq!(report.total_phones, 0);
        assert_eq!(report.average_weight, 0.0);
        assert!(report.heaviest.is_none());
        assert!(report.oem_with_highest_average_weight.is_none());
        assert!(report.most_launches_in_2000s.is_none());

        let text = report.render_text();
        assert!(text.contains("Heaviest Phone: none"));
        assert!(text.contains("No phones were announced in the 2000s."));
        assert!(text.contains("No phones were announced and released in different years."));
    }

    #[test]
    fn test_render_text_matches_display() {
        let report = CollectionReport::build(&sample_collection(), &StatsConfig::default());
        assert_eq!(report.render_text(), format!("{}", report));
        assert!(report.to_string().ends_with("OEM: Nokia, Model: N95\n"));
    }

    #[test]
    fn test_render_text() {
        let report = CollectionReport::build(&sample_collection(), &StatsConfig::default());
        let text = report.render_text();

        assert!(text.contains("Model: Pixel 4 XL"));
        assert!(text.contains("Average cell weight: 163.75 g"));
        assert!(text.contains("Number of Unique Operating Systems: 4"));
        assert!(text.contains("Heaviest Phone: Apple's iPhone 11, 194.00 g"));
        assert!(text.contains("Lightest Phone: Nokia's N95, 120.00 g"));
        assert!(text.contains("2018: 1\n2019: 2\n"));
        assert!(text.contains("The year with the most phone launches in the 2000s was 2006."));
        assert!(text.contains("OEM: Nokia, Model: N95"));
    }

    #[test]
    fn test_render_json() {
        let report = CollectionReport::build(&sample_collection(), &StatsConfig::default());
        let json = report.render(OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_phones"], 4);
        assert_eq!(value["oem_with_highest_average_weight"], "Apple");
        assert_eq!(value["year_counts"]["years"], serde_json::json!([2006, 2018, 2019]));
    }
}

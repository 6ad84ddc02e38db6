//! Output formatting for route reports.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;

use cityroute_lib::RouteReport;

/// How reports are written to stdout and answer files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented `Label:value` answer format.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Render a report as a string, terminated by a newline.
    pub fn render(self, report: &RouteReport) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(report.render_text()),
            OutputFormat::Json => {
                let mut json = report.to_json().context("failed to serialise route report")?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    /// Render a report into `writer`.
    pub fn write_report<W: Write>(self, writer: &mut W, report: &RouteReport) -> Result<()> {
        writer
            .write_all(self.render(report)?.as_bytes())
            .context("failed to write route report")?;
        writer.flush().context("failed to flush route report")
    }
}

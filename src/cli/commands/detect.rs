//! The `runenv detect` command.
//!
//! Prints every classification at once, as aligned text or as JSON.

use std::io::Write;

use console::style;

use crate::cli::args::DetectArgs;
use crate::env::ReadEnv;
use crate::environment::{Classifier, EnvironmentReport};
use crate::error::Result;

use super::dispatcher::Command;

/// The detect command implementation.
pub struct DetectCommand<E> {
    classifier: Classifier<E>,
    args: DetectArgs,
}

impl<E: ReadEnv> DetectCommand<E> {
    /// Create a new detect command.
    pub fn new(classifier: Classifier<E>, args: DetectArgs) -> Self {
        Self { classifier, args }
    }
}

impl<E: ReadEnv> Command for DetectCommand<E> {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let report = self.classifier.report()?;
        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            writeln!(out, "{json}")?;
        } else {
            write_text(&report, out)?;
        }
        Ok(())
    }
}

fn write_text(report: &EnvironmentReport, out: &mut dyn Write) -> std::io::Result<()> {
    let version = if report.version.is_empty() {
        "(none)".to_string()
    } else {
        report.version.trim_end().to_string()
    };
    let rows = [
        ("version", version),
        ("service", report.service_name.clone()),
        ("platform", report.platform.to_string()),
        ("local", yes_no(report.local)),
        ("production", yes_no(report.production)),
        ("ci", yes_no(report.ci)),
        ("jenkins", yes_no(report.jenkins)),
        ("cloud run", yes_no(report.cloud_run)),
        ("azure function", yes_no(report.azure_function)),
        ("kubernetes", yes_no(report.kubernetes)),
    ];
    for (label, value) in rows {
        writeln!(out, "{} {}", style(format!("{label:<15}")).bold(), value)?;
    }
    Ok(())
}

fn yes_no(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}
